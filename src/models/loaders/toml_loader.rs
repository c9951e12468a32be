use super::parse_topic_values;
use crate::models::topic::TopicDescriptor;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// TOML 主题文件的顶层结构
#[derive(Debug, Deserialize)]
struct TopicFile {
    #[serde(default)]
    topics: Vec<Value>,
}

/// 从 TOML 文件读取主题
///
/// 文件格式为若干个 `[[topics]]` 表，字段与 JSON 格式一致。
pub async fn read_toml_topics(path: &Path) -> Result<Vec<TopicDescriptor>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", path.display()))?;

    let file: TopicFile = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", path.display()))?;

    Ok(parse_topic_values(file.topics, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::topic::ImagePosition;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_toml_topics() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[topics]]
title = "Weekly digest"
body = "Top posts [IMAGE]"
category = 7
image_url = "https://cdn.example.com/digest.png"
image_position = "inline"

[topics.formatting]
italic = true

[[topics]]
title = "Second"
"#
        )
        .unwrap();

        let topics = read_toml_topics(file.path()).await.unwrap();

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].category, Some(serde_json::json!(7)));
        assert_eq!(topics[0].image_position(), ImagePosition::Inline);
        assert!(topics[0].formatting.italic);
        assert_eq!(topics[1].body, "");
    }
}
