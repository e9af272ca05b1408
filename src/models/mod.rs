pub mod builtin;
pub mod loaders;
pub mod question;

pub use builtin::builtin_bank;
pub use loaders::{load_question_bank, parse_question_bank};
pub use question::{Question, QuestionBank};
