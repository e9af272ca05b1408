use thiserror::Error;

/// 单次发帖流程的错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题库数据错误
    #[error("题库错误: {0}")]
    Bank(#[from] BankError),
    /// 状态文件错误
    #[error("状态文件错误: {0}")]
    State(#[from] StateError),
    /// Reddit API 错误
    #[error("Reddit错误: {0}")]
    Reddit(#[from] RedditError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必填环境变量缺失
    #[error("环境变量 {var_name} 不存在或为空")]
    EnvVarNotFound { var_name: String },
    /// 版块名称不合法
    #[error("版块名称不合法: '{0}'")]
    InvalidSubreddit(String),
    /// 投票时长超出 Reddit 允许范围
    #[error("投票时长 {days} 天超出范围 [{min}, {max}]")]
    PollDurationOutOfRange { days: u32, min: u32, max: u32 },
}

/// 题库数据错误
///
/// 全部属于致命的配置错误，必须在任何网络请求之前被发现
#[derive(Debug, Error)]
pub enum BankError {
    /// 题库为空
    #[error("题库为空")]
    Empty,
    /// 题目ID重复
    #[error("题目ID重复: #{id}")]
    DuplicateId { id: u32 },
    /// 题目ID必须为正整数
    #[error("题目ID必须为正整数 (位置: {position})")]
    InvalidId { position: usize },
    /// 题干为空
    #[error("题目 #{id} 题干为空")]
    EmptyQuestion { id: u32 },
    /// 选项数量不符合投票要求
    #[error("题目 #{id} 有 {count} 个选项，投票要求 {min}-{max} 个")]
    OptionCount {
        id: u32,
        count: usize,
        min: usize,
        max: usize,
    },
    /// 选项文本为空
    #[error("题目 #{id} 第 {option} 个选项为空")]
    EmptyOption { id: u32, option: usize },
    /// 正确答案索引越界
    #[error("题目 #{id} 的答案索引 {answer_index} 超出选项范围 (共 {option_count} 个)")]
    AnswerOutOfRange {
        id: u32,
        answer_index: usize,
        option_count: usize,
    },
    /// 题库位置越界
    #[error("索引 {index} 超出题库范围 [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// 读取题库文件失败
    #[error("读取题库文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("题库文件解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 状态文件错误
///
/// 只有写入会失败；读取失败一律按首次运行处理
#[derive(Debug, Error)]
pub enum StateError {
    /// 写入状态文件失败
    #[error("写入状态文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 序列化失败
    #[error("状态序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reddit API 错误
#[derive(Debug, Error)]
pub enum RedditError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 认证失败
    #[error("认证失败: {0}")]
    Auth(String),
    /// 返回非成功状态码
    #[error("API返回错误状态 ({endpoint}): {status} {body}")]
    Http {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 帖子被拒绝
    #[error("帖子被拒绝: {0}")]
    Rejected(String),
    /// 响应缺少必要字段
    #[error("响应格式异常 ({endpoint}): {detail}")]
    MalformedResponse { endpoint: String, detail: String },
}

impl RedditError {
    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        RedditError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建响应格式异常错误
    pub fn malformed(endpoint: impl Into<String>, detail: impl Into<String>) -> Self {
        RedditError::MalformedResponse {
            endpoint: endpoint.into(),
            detail: detail.into(),
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
