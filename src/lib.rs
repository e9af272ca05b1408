//! # Daily Question Bot
//!
//! 每天向 Reddit 版块发布一道投票题，并在正文中公布前一天的答案
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目与题库，内置题库或外部 TOML 题库，加载时即校验
//!
//! ### ② 业务能力层（Services）
//! - `rotation` - 计算下一道题的位置（纯函数）
//! - `StateStore` - 读写 state.json
//! - `post_formatter` - 渲染标题与正文（纯函数）
//!
//! ### ③ 客户端层（Clients）
//! - `RedditClient` - 认证并提交投票帖，实现 `PollPublisher`
//!
//! ### ④ 流程层（Workflow）
//! - `DailyQuestionFlow` - 读取状态 → 选题 → 渲染 → 发布 → 写回状态
//!
//! ### ⑤ 编排层（App）
//! - `App` - 校验配置、加载题库、组装依赖并运行一次
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{PollPublisher, PollRequest, RedditClient, SubmittedPost};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Question, QuestionBank};
pub use services::{format_post, next_index, PostContent, RotationState, StateStore};
pub use workflow::{DailyQuestionFlow, RunOutcome};
