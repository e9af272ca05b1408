use crate::clients::RedditClient;
use crate::config::Config;
use crate::models::{builtin_bank, load_question_bank, QuestionBank};
use crate::services::StateStore;
use crate::utils::logging::{log_run_complete, log_startup};
use crate::workflow::{DailyQuestionFlow, RunOutcome};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// 应用主结构
///
/// 初始化阶段完成配置与题库校验，确保数据错误在任何网络请求之前暴露
pub struct App {
    config: Config,
    bank: QuestionBank,
    store: StateStore,
    client: Option<RedditClient>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate().context("配置校验失败")?;

        log_startup(&config);

        let bank = load_bank(&config).await?;
        let store = StateStore::new(&config.state_file);

        let client = if config.dry_run {
            None
        } else {
            Some(RedditClient::new(&config).context("无法创建 Reddit 客户端")?)
        };

        Ok(Self {
            config,
            bank,
            store,
            client,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunOutcome> {
        let today = chrono::Utc::now().date_naive();

        let flow = DailyQuestionFlow::new(
            &self.bank,
            &self.store,
            self.client.as_ref(),
            self.config.subreddit_name.clone(),
            self.config.poll_duration_days,
        );

        let outcome = flow.run(today).await.context("每日发帖失败")?;

        log_run_complete(
            outcome.question_id,
            outcome.submission.as_ref().map(|s| s.id.as_str()),
        );

        Ok(outcome)
    }
}

/// 加载题库
async fn load_bank(config: &Config) -> Result<QuestionBank> {
    let bank = match &config.question_bank_file {
        Some(path) => {
            info!("📁 正在加载外部题库: {}", path);
            load_question_bank(Path::new(path)).await?
        }
        None => builtin_bank()?,
    };
    info!("✓ 题库共 {} 道题", bank.len());
    Ok(bank)
}
