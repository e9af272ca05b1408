use crate::error::BankError;
use crate::models::question::{Question, QuestionBank};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 题库 TOML 文件结构
///
/// ```toml
/// [[questions]]
/// id = 1
/// question = "..."
/// options = ["a", "b", "c", "d"]
/// answer_index = 2
/// explanation = "..."
/// ```
#[derive(Debug, Deserialize)]
struct BankFile {
    questions: Vec<Question>,
}

/// 从 TOML 文本解析并校验题库
pub fn parse_question_bank(content: &str, path: &str) -> Result<QuestionBank, BankError> {
    let file: BankFile = toml::from_str(content).map_err(|source| BankError::TomlParseFailed {
        path: path.to_string(),
        source,
    })?;
    QuestionBank::new(file.questions)
}

/// 从 TOML 文件加载题库
pub async fn load_question_bank(path: &Path) -> Result<QuestionBank, BankError> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| BankError::ReadFailed {
            path: path_str.clone(),
            source,
        })?;

    let bank = parse_question_bank(&content, &path_str)?;
    tracing::info!("成功加载 {} 道题目: {}", bank.len(), path_str);
    Ok(bank)
}
