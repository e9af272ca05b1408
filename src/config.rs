use crate::error::ConfigError;
use regex::Regex;

/// Reddit 投票允许的最短时长（天）
pub const MIN_POLL_DURATION_DAYS: u32 = 1;
/// Reddit 投票允许的最长时长（天）
pub const MAX_POLL_DURATION_DAYS: u32 = 7;

/// 程序配置
///
/// 进程启动时从环境变量构造一次，之后显式传递给各层
#[derive(Clone, Debug)]
pub struct Config {
    /// 目标版块名称（不带 r/ 前缀）
    pub subreddit_name: String,
    /// 投票持续天数
    pub poll_duration_days: u32,
    /// 状态文件路径
    pub state_file: String,
    /// 外部题库 TOML 文件，为空时使用内置题库
    pub question_bank_file: Option<String>,
    /// 只生成帖子内容，不提交也不推进状态
    pub dry_run: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- Reddit 配置 ---
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_username: String,
    pub reddit_password: String,
    pub reddit_user_agent: String,
    pub reddit_auth_url: String,
    pub reddit_api_base_url: String,
    /// HTTP 请求超时（秒）
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subreddit_name: "darknet_questions".to_string(),
            poll_duration_days: 1,
            state_file: "state.json".to_string(),
            question_bank_file: None,
            dry_run: false,
            verbose_logging: false,
            reddit_client_id: String::new(),
            reddit_client_secret: String::new(),
            reddit_username: String::new(),
            reddit_password: String::new(),
            reddit_user_agent: "darknet_questions_bot".to_string(),
            reddit_auth_url: "https://www.reddit.com/api/v1/access_token".to_string(),
            reddit_api_base_url: "https://oauth.reddit.com".to_string(),
            http_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意键值查找函数构造配置（便于测试）
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            subreddit_name: non_empty("SUBREDDIT_NAME").unwrap_or(default.subreddit_name),
            poll_duration_days: non_empty("POLL_DURATION_DAYS").and_then(|v| v.parse().ok()).unwrap_or(default.poll_duration_days),
            state_file: non_empty("STATE_FILE").unwrap_or(default.state_file),
            question_bank_file: non_empty("QUESTION_BANK_FILE"),
            dry_run: non_empty("DRY_RUN").and_then(|v| v.parse().ok()).unwrap_or(default.dry_run),
            verbose_logging: non_empty("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            reddit_client_id: lookup("REDDIT_CLIENT_ID").unwrap_or(default.reddit_client_id),
            reddit_client_secret: lookup("REDDIT_CLIENT_SECRET").unwrap_or(default.reddit_client_secret),
            reddit_username: lookup("REDDIT_USERNAME").unwrap_or(default.reddit_username),
            reddit_password: lookup("REDDIT_PASSWORD").unwrap_or(default.reddit_password),
            reddit_user_agent: non_empty("REDDIT_USER_AGENT").unwrap_or(default.reddit_user_agent),
            reddit_auth_url: non_empty("REDDIT_AUTH_URL").unwrap_or(default.reddit_auth_url),
            reddit_api_base_url: non_empty("REDDIT_API_BASE_URL").unwrap_or(default.reddit_api_base_url),
            http_timeout_secs: non_empty("HTTP_TIMEOUT_SECS").and_then(|v| v.parse().ok()).unwrap_or(default.http_timeout_secs),
        }
    }

    /// 校验配置
    ///
    /// dry-run 模式下不要求凭据
    pub fn validate(&self) -> Result<(), ConfigError> {
        let subreddit_ok = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_]{2,20}$")
            .map(|re| re.is_match(&self.subreddit_name))
            .unwrap_or(false);
        if !subreddit_ok {
            return Err(ConfigError::InvalidSubreddit(self.subreddit_name.clone()));
        }

        if !(MIN_POLL_DURATION_DAYS..=MAX_POLL_DURATION_DAYS).contains(&self.poll_duration_days) {
            return Err(ConfigError::PollDurationOutOfRange {
                days: self.poll_duration_days,
                min: MIN_POLL_DURATION_DAYS,
                max: MAX_POLL_DURATION_DAYS,
            });
        }

        if self.dry_run {
            return Ok(());
        }

        let credentials = [
            ("REDDIT_CLIENT_ID", &self.reddit_client_id),
            ("REDDIT_CLIENT_SECRET", &self.reddit_client_secret),
            ("REDDIT_USERNAME", &self.reddit_username),
            ("REDDIT_PASSWORD", &self.reddit_password),
        ];
        for (var_name, value) in credentials {
            if value.trim().is_empty() {
                return Err(ConfigError::EnvVarNotFound {
                    var_name: var_name.to_string(),
                });
            }
        }

        Ok(())
    }
}
