use super::parse_topic_values;
use crate::models::topic::TopicDescriptor;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// 从 JSON 文件读取主题数组
pub async fn read_json_topics(path: &Path) -> Result<Vec<TopicDescriptor>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取主题文件: {}", path.display()))?;

    let values: Vec<Value> = serde_json::from_str(&content)
        .with_context(|| format!("无法解析 JSON 主题文件: {}", path.display()))?;

    Ok(parse_topic_values(values, path))
}
