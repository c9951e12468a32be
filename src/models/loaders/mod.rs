mod json_loader;
mod toml_loader;

pub use json_loader::read_json_topics;
pub use toml_loader::read_toml_topics;

use crate::models::topic::TopicDescriptor;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{error, info, warn};

/// 加载主题列表
///
/// `.toml` 文件按 `[[topics]]` 解析，其余一律按 JSON 数组解析。
/// 任何读取或解析错误都只记录日志并返回空列表。
pub async fn load_topics(path: impl AsRef<Path>) -> Vec<TopicDescriptor> {
    let path = path.as_ref();
    let is_toml = path.extension().and_then(|s| s.to_str()) == Some("toml");

    let result = if is_toml {
        read_toml_topics(path).await
    } else {
        read_json_topics(path).await
    };

    match result {
        Ok(topics) => {
            info!("✓ 从 {} 加载了 {} 个主题", path.display(), topics.len());
            topics
        }
        Err(e) => {
            error!("加载主题文件失败: {:#}", e);
            Vec::new()
        }
    }
}

/// 逐个解析主题元素
///
/// 单个元素无法解析（例如不是对象）时只跳过该元素，不影响其他主题。
fn parse_topic_values(values: Vec<Value>, path: &Path) -> Vec<TopicDescriptor> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match TopicDescriptor::deserialize(value) {
            Ok(topic) => Some(topic),
            Err(e) => {
                warn!("跳过 {} 中第 {} 个主题: {}", path.display(), index + 1, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_missing_file_returns_empty() {
        let topics = load_topics("/definitely/not/here/topics.json").await;
        assert!(topics.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_returns_empty() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(load_topics(file.path()).await.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_on_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"[{{"title": "a"}}, {{"title": "b"}}]"#).unwrap();

        let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(toml, "[[topics]]\ntitle = \"c\"\n").unwrap();

        assert_eq!(load_topics(json.path()).await.len(), 2);
        let topics = load_topics(toml.path()).await;
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].display_title(), "c");
    }

    #[tokio::test]
    async fn test_wrongly_typed_elements_are_kept() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"title": "ok"}}, {{"title": "other", "external_id": 123}}, {{"title": "t3", "formatting": {{"bold": 1}}}}]"#
        )
        .unwrap();

        let topics = load_topics(file.path()).await;

        assert_eq!(topics.len(), 3);
        assert_eq!(topics[1].external_id, Some(serde_json::json!(123)));
        assert!(topics[2].formatting.bold);
    }

    #[tokio::test]
    async fn test_non_object_element_is_skipped() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"title": "a"}}, "stray", {{"title": "b"}}]"#).unwrap();

        let titles: Vec<_> = load_topics(file.path())
            .await
            .iter()
            .map(|t| t.display_title())
            .collect();

        assert_eq!(titles, vec!["a", "b"]);
    }
}
