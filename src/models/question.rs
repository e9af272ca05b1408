use crate::error::BankError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Reddit 投票最少选项数
pub const MIN_POLL_OPTIONS: usize = 2;
/// Reddit 投票最多选项数
pub const MAX_POLL_OPTIONS: usize = 6;

/// 单道题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 题目编号，跨运行保持不变
    pub id: u32,
    /// 题干
    pub question: String,
    /// 投票选项（有序）
    pub options: Vec<String>,
    /// 正确选项索引（从0开始）
    pub answer_index: usize,
    /// 答案解析
    pub explanation: String,
}

impl Question {
    /// 正确选项文本
    ///
    /// 索引越界时返回错误，不会渲染出错误内容
    pub fn correct_option(&self) -> Result<&str, BankError> {
        self.options
            .get(self.answer_index)
            .map(String::as_str)
            .ok_or(BankError::AnswerOutOfRange {
                id: self.id,
                answer_index: self.answer_index,
                option_count: self.options.len(),
            })
    }

    /// 校验单道题目
    pub fn validate(&self, position: usize) -> Result<(), BankError> {
        if self.id == 0 {
            return Err(BankError::InvalidId { position });
        }
        if self.question.trim().is_empty() {
            return Err(BankError::EmptyQuestion { id: self.id });
        }
        let count = self.options.len();
        if !(MIN_POLL_OPTIONS..=MAX_POLL_OPTIONS).contains(&count) {
            return Err(BankError::OptionCount {
                id: self.id,
                count,
                min: MIN_POLL_OPTIONS,
                max: MAX_POLL_OPTIONS,
            });
        }
        if let Some(option) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(BankError::EmptyOption {
                id: self.id,
                option: option + 1,
            });
        }
        self.correct_option()?;
        Ok(())
    }
}

/// 题库：固定顺序、不可变
///
/// 反序列化同样经过 `QuestionBank::new` 校验
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Question>")]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl TryFrom<Vec<Question>> for QuestionBank {
    type Error = BankError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl QuestionBank {
    /// 构造并校验题库
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        let bank = Self { questions };
        bank.validate()?;
        Ok(bank)
    }

    /// 校验题库不变量：非空、ID唯一、每道题合法
    pub fn validate(&self) -> Result<(), BankError> {
        if self.questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::new();
        for (position, question) in self.questions.iter().enumerate() {
            question.validate(position)?;
            if !seen.insert(question.id) {
                return Err(BankError::DuplicateId { id: question.id });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 按位置取题，越界返回错误
    pub fn get(&self, index: usize) -> Result<&Question, BankError> {
        self.questions.get(index).ok_or(BankError::IndexOutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
