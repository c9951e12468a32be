//! 单个主题提交器 - 编排层
//!
//! 构建请求体 → 选择账号 → 调用论坛 API。
//! 所有错误都在这里被转换成 `SubmissionResult::Failed`，不会影响其他任务。

use crate::clients::DiscourseClient;
use crate::models::{ResolvedCredentials, TopicDescriptor};
use crate::services::build_payload;
use serde_json::Value;
use tracing::error;

/// 单个主题的提交结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// 创建成功，附带论坛返回的原始 JSON
    Created(Value),
    /// 创建失败，附带失败原因（仅用于日志）
    Failed(String),
}

impl SubmissionResult {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmissionResult::Created(_))
    }
}

/// 提交单个主题
pub async fn submit_topic(
    client: &DiscourseClient,
    topic: &TopicDescriptor,
    credentials: &ResolvedCredentials,
) -> SubmissionResult {
    let payload = build_payload(topic);

    match client.create_post(&payload, credentials).await {
        Ok(result) => SubmissionResult::Created(result),
        Err(e) => {
            error!("❌ 创建主题 '{}' 出错: {}", topic.display_title(), e);
            SubmissionResult::Failed(e.to_string())
        }
    }
}
