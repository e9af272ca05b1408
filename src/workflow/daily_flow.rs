//! 每日发帖流程 - 流程层
//!
//! 流程顺序：
//! 1. 读取状态 → 计算今天的题目
//! 2. 渲染标题与正文
//! 3. 提交投票帖（dry-run 时跳过）
//! 4. 提交成功后写回状态
//!
//! 状态只在提交成功后推进，失败的运行会在下一次调度时从同一道题重试。

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::clients::{PollPublisher, PollRequest, SubmittedPost};
use crate::error::AppResult;
use crate::models::question::QuestionBank;
use crate::services::{format_post, next_index, RotationState, StateStore};
use crate::utils::logging::truncate_text;

/// 单次运行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// 今天发布的题目位置
    pub index: usize,
    /// 今天发布的题目编号
    pub question_id: u32,
    pub title: String,
    pub body: String,
    /// dry-run 时为 `None`
    pub submission: Option<SubmittedPost>,
    /// 状态文件是否已推进
    pub state_advanced: bool,
}

/// 每日发帖流程
///
/// 不持有网络资源，只依赖 `PollPublisher` 能力
pub struct DailyQuestionFlow<'a, P: PollPublisher + ?Sized> {
    bank: &'a QuestionBank,
    store: &'a StateStore,
    publisher: Option<&'a P>,
    subreddit: String,
    poll_duration_days: u32,
}

impl<'a, P: PollPublisher + ?Sized> DailyQuestionFlow<'a, P> {
    /// 创建新的流程
    ///
    /// `publisher` 为 `None` 表示 dry-run
    pub fn new(
        bank: &'a QuestionBank,
        store: &'a StateStore,
        publisher: Option<&'a P>,
        subreddit: impl Into<String>,
        poll_duration_days: u32,
    ) -> Self {
        Self {
            bank,
            store,
            publisher,
            subreddit: subreddit.into(),
            poll_duration_days,
        }
    }

    pub async fn run(&self, today: NaiveDate) -> AppResult<RunOutcome> {
        let last_index = self.last_index_in_range(self.store.load());
        let index = next_index(last_index, self.bank.len())?;

        let question = self.bank.get(index)?;
        let previous = match last_index {
            Some(last) => Some(self.bank.get(last)?),
            None => None,
        };

        info!(
            "🎯 选中题目 #{} (位置 {}/{}): {}",
            question.id,
            index + 1,
            self.bank.len(),
            truncate_text(&question.question, 60)
        );

        let post = format_post(previous, question, today)?;

        let Some(publisher) = self.publisher else {
            info!("🧪 dry-run 模式，不提交也不更新状态");
            info!("标题: {}", post.title);
            info!("正文:\n{}", post.body);
            return Ok(RunOutcome {
                index,
                question_id: question.id,
                title: post.title,
                body: post.body,
                submission: None,
                state_advanced: false,
            });
        };

        info!("📤 正在发布到 r/{}...", self.subreddit);

        let request = PollRequest {
            subreddit: self.subreddit.clone(),
            title: post.title.clone(),
            body: post.body.clone(),
            options: question.options.clone(),
            duration_days: self.poll_duration_days,
        };

        // 无重试：失败直接返回，状态保持不变
        let submission = publisher.submit_poll(&request).await?;

        info!(
            "✓ 发布成功: {} {}",
            submission.id,
            submission.url.as_deref().unwrap_or_default()
        );

        self.store.save(&RotationState::new(Some(index)))?;

        info!("✓ 状态已更新: last_question_index = {}", index);

        Ok(RunOutcome {
            index,
            question_id: question.id,
            title: post.title,
            body: post.body,
            submission: Some(submission),
            state_advanced: true,
        })
    }

    /// 超出当前题库范围的记录视为损坏状态
    fn last_index_in_range(&self, state: RotationState) -> Option<usize> {
        match state.last_question_index {
            Some(last) if last >= self.bank.len() => {
                warn!(
                    "⚠️ 状态中的位置 {} 超出题库范围 (共 {} 题)，按首次运行处理",
                    last,
                    self.bank.len()
                );
                None
            }
            other => other,
        }
    }
}
