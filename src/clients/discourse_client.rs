/// Discourse API 客户端
///
/// 封装所有与论坛 API 相关的调用逻辑，内部只持有一个共享的 `reqwest::Client`。
use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::models::ResolvedCredentials;
use crate::services::TopicPayload;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

/// 创建帖子（主题首帖）的接口
pub const CREATE_POST_ENDPOINT: &str = "posts.json";

/// Discourse API 客户端
#[derive(Debug, Clone)]
pub struct DiscourseClient {
    http: reqwest::Client,
    base_url: String,
}

impl DiscourseClient {
    /// 创建新的论坛客户端
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.discourse_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 创建主题
    ///
    /// # 参数
    /// - `payload`: 请求体
    /// - `credentials`: 本次请求使用的账号
    ///
    /// # 返回
    /// 返回论坛 API 的原始 JSON 响应
    pub async fn create_post(
        &self,
        payload: &TopicPayload,
        credentials: &ResolvedCredentials,
    ) -> SubmitResult<Value> {
        let endpoint = format!("{}/{}", self.base_url, CREATE_POST_ENDPOINT);

        debug!(
            "POST {} (用户: {}) Payload: {:?}",
            endpoint, credentials.username, payload
        );

        let response = self
            .http
            .post(&endpoint)
            .header("Api-Key", &credentials.api_key)
            .header("Api-Username", &credentials.username)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|source| SubmitError::RequestFailed {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::BadStatus {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let result: Value = response
            .json()
            .await
            .map_err(|source| SubmitError::JsonParseFailed {
                endpoint: endpoint.clone(),
                source,
            })?;

        debug!("创建主题结果: {}", result);

        Ok(result)
    }

    /// 从响应中提取帖子编号
    pub fn extract_post_number(result: &Value) -> Option<i64> {
        result.get("post_number").and_then(|v| v.as_i64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_trimmed() {
        let config = Config {
            discourse_url: "https://forum.example.com/".to_string(),
            ..Config::for_testing()
        };
        let client = DiscourseClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://forum.example.com");
    }

    #[test]
    fn test_extract_post_number() {
        assert_eq!(
            DiscourseClient::extract_post_number(&json!({"id": 10, "post_number": 1})),
            Some(1)
        );
        assert_eq!(DiscourseClient::extract_post_number(&json!({"id": 10})), None);
    }
}
