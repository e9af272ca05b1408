/// Reddit API 客户端
///
/// 封装认证与投票帖提交，不做任何重试
use crate::config::Config;
use crate::error::RedditError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// 一次投票帖提交请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollRequest {
    pub subreddit: String,
    pub title: String,
    pub body: String,
    pub options: Vec<String>,
    pub duration_days: u32,
}

/// 提交成功后的帖子信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedPost {
    pub id: String,
    pub url: Option<String>,
}

/// 投票帖发布能力
#[async_trait]
pub trait PollPublisher: Send + Sync {
    async fn submit_poll(&self, request: &PollRequest) -> Result<SubmittedPost, RedditError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct SubmitPollBody<'a> {
    sr: &'a str,
    title: &'a str,
    text: &'a str,
    options: &'a [String],
    duration: u32,
    nsfw: bool,
    spoiler: bool,
    sendreplies: bool,
    validate_on_submit: bool,
}

/// Reddit 客户端
pub struct RedditClient {
    http: Client,
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
    auth_url: String,
    api_base_url: String,
}

impl RedditClient {
    /// 创建新的 Reddit 客户端
    pub fn new(config: &Config) -> Result<Self, RedditError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(config.reddit_user_agent.clone())
            .build()
            .map_err(|e| RedditError::request_failed("client", e))?;

        Ok(Self {
            http,
            client_id: config.reddit_client_id.clone(),
            client_secret: config.reddit_client_secret.clone(),
            username: config.reddit_username.clone(),
            password: config.reddit_password.clone(),
            auth_url: config.reddit_auth_url.clone(),
            api_base_url: config.reddit_api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 使用密码授权获取访问令牌
    pub async fn authenticate(&self) -> Result<String, RedditError> {
        debug!("正在获取 Reddit 访问令牌，用户: {}", self.username);

        let response = self
            .http
            .post(&self.auth_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| RedditError::request_failed(&self.auth_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RedditError::Auth(format!("HTTP {}: {}", status.as_u16(), body)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| RedditError::request_failed(&self.auth_url, e))?;

        parse_token(token)
    }

    /// 提交投票帖
    async fn submit_with_token(
        &self,
        token: &str,
        request: &PollRequest,
    ) -> Result<SubmittedPost, RedditError> {
        let endpoint = format!("{}/api/submit_poll_post", self.api_base_url);
        let payload = SubmitPollBody {
            sr: &request.subreddit,
            title: &request.title,
            text: &request.body,
            options: &request.options,
            duration: request.duration_days,
            nsfw: false,
            spoiler: false,
            sendreplies: true,
            validate_on_submit: true,
        };

        debug!("提交投票帖 Payload: {:?}", payload);

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(token)
            .query(&[("raw_json", "1")])
            .json(&payload)
            .send()
            .await
            .map_err(|e| RedditError::request_failed(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RedditError::Http {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let result: Value = response
            .json()
            .await
            .map_err(|e| RedditError::request_failed(&endpoint, e))?;

        debug!("提交结果: {}", result);

        parse_submit_response(&endpoint, &result)
    }
}

#[async_trait]
impl PollPublisher for RedditClient {
    async fn submit_poll(&self, request: &PollRequest) -> Result<SubmittedPost, RedditError> {
        let token = self.authenticate().await?;
        info!("✓ Reddit 认证成功");
        self.submit_with_token(&token, request).await
    }
}

fn parse_token(token: TokenResponse) -> Result<String, RedditError> {
    if let Some(error) = token.error {
        return Err(RedditError::Auth(error));
    }
    token
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| RedditError::Auth("响应中没有 access_token".to_string()))
}

/// 解析 `{"json": {"errors": [...], "data": {"id": ..., "url": ...}}}`
fn parse_submit_response(endpoint: &str, result: &Value) -> Result<SubmittedPost, RedditError> {
    let json = result
        .get("json")
        .ok_or_else(|| RedditError::malformed(endpoint, "缺少 json 字段"))?;

    if let Some(errors) = json.get("errors").and_then(|v| v.as_array()) {
        if !errors.is_empty() {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| match e.as_array() {
                    Some(parts) => parts
                        .iter()
                        .filter_map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(": "),
                    None => e.to_string(),
                })
                .collect();
            return Err(RedditError::Rejected(messages.join("; ")));
        }
    }

    let data = json
        .get("data")
        .ok_or_else(|| RedditError::malformed(endpoint, "缺少 data 字段"))?;

    let id = data
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| RedditError::malformed(endpoint, "缺少帖子 id"))?;

    Ok(SubmittedPost {
        id: id.to_string(),
        url: data.get("url").and_then(|v| v.as_str()).map(str::to_string),
    })
}
