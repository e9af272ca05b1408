pub mod daily_flow;

pub use daily_flow::{DailyQuestionFlow, RunOutcome};
