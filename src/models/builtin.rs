//! 内置题库
//!
//! 未配置 QUESTION_BANK_FILE 时使用

use crate::error::BankError;
use crate::models::question::{Question, QuestionBank};

struct BuiltinQuestion {
    id: u32,
    question: &'static str,
    options: [&'static str; 4],
    answer_index: usize,
    explanation: &'static str,
}

static BUILTIN_QUESTIONS: &[BuiltinQuestion] = &[
    BuiltinQuestion {
        id: 1,
        question: "What is the safest place to store your market login credentials?",
        options: [
            "In your browser's saved passwords",
            "In a plaintext notes file on your PC",
            "In an encrypted password manager with a strong master password",
            "Memorized but also reused on multiple sites",
        ],
        answer_index: 2,
        explanation: "Using a reputable encrypted password manager with a strong, unique master \
                      password greatly reduces risk compared to plaintext or browser storage.",
    },
    BuiltinQuestion {
        id: 2,
        question: "Which of the following is the BEST way to access onion services?",
        options: [
            "Normal Chrome/Firefox over a VPN",
            "Tor Browser over your home IP without any hardening",
            "Tor Browser from a hardened OS with good OPSEC",
            "Tor Browser inside normal Windows with all your personal stuff",
        ],
        answer_index: 2,
        explanation: "Using Tor Browser from a hardened, compartmentalized environment reduces \
                      cross-contamination and risk.",
    },
];

/// 构造内置题库（经过与外部题库相同的校验）
pub fn builtin_bank() -> Result<QuestionBank, BankError> {
    let questions = BUILTIN_QUESTIONS
        .iter()
        .map(|q| Question {
            id: q.id,
            question: q.question.to_string(),
            options: q.options.iter().map(|o| o.to_string()).collect(),
            answer_index: q.answer_index,
            explanation: q.explanation.to_string(),
        })
        .collect();
    QuestionBank::new(questions)
}
