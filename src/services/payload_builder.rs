//! 请求体构建 - 业务能力层
//!
//! 只负责把一个 `TopicDescriptor` 变成 `/posts.json` 的请求体，不做任何 I/O。

use serde::Serialize;
use serde_json::Value;

use crate::models::{Formatting, ImagePosition, TopicDescriptor};

/// 行内图片占位符
pub const IMAGE_PLACEHOLDER: &str = "[IMAGE]";

/// `/posts.json` 请求体
///
/// 值为 `None` 的字段不会被序列化。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<Value>,
}

/// 构建请求体
///
/// `image_url` 为空字符串时视为没有图片。
pub fn build_payload(topic: &TopicDescriptor) -> TopicPayload {
    let mut body = apply_formatting(&topic.body, &topic.formatting);

    if let Some(image_url) = topic.image_url.as_deref().filter(|url| !url.is_empty()) {
        body = insert_image(&body, image_url, topic.image_position());
    }

    TopicPayload {
        title: topic.title.clone(),
        raw: body,
        category: topic.category.clone(),
        embed_url: topic.embed_url.clone(),
        external_id: topic.external_id.clone(),
    }
}

/// 按 粗体 → 斜体 → 标题 的顺序包裹正文
///
/// 每一步都包裹上一步的结果，因此标题标记总在最外层。
pub fn apply_formatting(body: &str, formatting: &Formatting) -> String {
    let mut body = body.to_string();
    if formatting.bold {
        body = format!("**{body}**");
    }
    if formatting.italic {
        body = format!("*{body}*");
    }
    if formatting.header {
        body = format!("# {body}");
    }
    body
}

pub fn image_markdown(image_url: &str) -> String {
    format!("![Image]({image_url})")
}

/// 把图片插入正文
///
/// `Inline` 只替换第一个占位符，没有占位符时图片被丢弃。
pub fn insert_image(body: &str, image_url: &str, position: ImagePosition) -> String {
    let image = image_markdown(image_url);
    match position {
        ImagePosition::Start => format!("{image}\n\n{body}"),
        ImagePosition::End => format!("{body}\n\n{image}"),
        ImagePosition::Inline => body.replacen(IMAGE_PLACEHOLDER, &image, 1),
        ImagePosition::Other => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn topic(title: &str, body: &str) -> TopicDescriptor {
        TopicDescriptor::new(title, body)
    }

    #[test]
    fn test_minimal_payload() {
        let payload = build_payload(&topic("Hello", "World"));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value, json!({"title": "Hello", "raw": "World"}));
    }

    #[test]
    fn test_full_payload_has_no_extras() {
        let topic = TopicDescriptor {
            category: Some(json!(12)),
            image_url: Some("https://img.example.com/x.png".to_string()),
            image_position: Some(ImagePosition::Start),
            formatting: Formatting {
                bold: true,
                ..Default::default()
            },
            embed_url: Some(json!("https://blog.example.com/p/1")),
            external_id: Some(json!("ext-1")),
            ..topic("Full", "text")
        };

        let value = serde_json::to_value(build_payload(&topic)).unwrap();

        assert_eq!(
            value,
            json!({
                "title": "Full",
                "raw": "![Image](https://img.example.com/x.png)\n\n**text**",
                "category": 12,
                "embed_url": "https://blog.example.com/p/1",
                "external_id": "ext-1"
            })
        );
    }

    #[test]
    fn test_missing_title_is_omitted() {
        let topic = TopicDescriptor {
            body: "orphan".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(build_payload(&topic)).unwrap();
        assert_eq!(value, json!({"raw": "orphan"}));
    }

    #[test]
    fn test_non_string_fields_forwarded_unchanged() {
        let topic = TopicDescriptor {
            title: Some(json!(404)),
            external_id: Some(json!(123)),
            ..topic("ignored", "b")
        };
        let value = serde_json::to_value(build_payload(&topic)).unwrap();
        assert_eq!(value, json!({"title": 404, "raw": "b", "external_id": 123}));
    }

    #[test]
    fn test_empty_image_url_is_ignored() {
        for position in [ImagePosition::Start, ImagePosition::End, ImagePosition::Inline] {
            let topic = TopicDescriptor {
                image_url: Some(String::new()),
                image_position: Some(position),
                ..topic("t", "b [IMAGE]")
            };
            assert_eq!(build_payload(&topic).raw, "b [IMAGE]");
        }
    }

    #[test]
    fn test_formatting_order() {
        let all = Formatting {
            bold: true,
            italic: true,
            header: true,
        };
        assert_eq!(apply_formatting("X", &all), "# ***X***");

        let italic_header = Formatting {
            italic: true,
            header: true,
            ..Default::default()
        };
        assert_eq!(apply_formatting("X", &italic_header), "# *X*");
        assert_eq!(apply_formatting("X", &Formatting::default()), "X");
    }

    #[test]
    fn test_image_start_and_end() {
        let url = "https://img.example.com/a.png";
        assert_eq!(
            insert_image("body", url, ImagePosition::Start),
            "![Image](https://img.example.com/a.png)\n\nbody"
        );
        assert_eq!(
            insert_image("body", url, ImagePosition::End),
            "body\n\n![Image](https://img.example.com/a.png)"
        );
    }

    #[test]
    fn test_image_inline() {
        let url = "u.png";
        assert_eq!(
            insert_image("a [IMAGE] b [IMAGE]", url, ImagePosition::Inline),
            "a ![Image](u.png) b [IMAGE]"
        );
        assert_eq!(insert_image("no placeholder", url, ImagePosition::Inline), "no placeholder");
        assert_eq!(insert_image("body", url, ImagePosition::Other), "body");
    }

    #[test]
    fn test_default_position_is_end() {
        let topic = TopicDescriptor {
            image_url: Some("i.png".to_string()),
            ..topic("t", "b")
        };
        assert_eq!(build_payload(&topic).raw, "b\n\n![Image](i.png)");
    }

    #[test]
    fn test_formatting_applies_before_image() {
        let topic = TopicDescriptor {
            image_url: Some("i.png".to_string()),
            image_position: Some(ImagePosition::Inline),
            formatting: Formatting {
                header: true,
                ..Default::default()
            },
            ..topic("t", "[IMAGE] caption")
        };
        assert_eq!(build_payload(&topic).raw, "# ![Image](i.png) caption");
    }
}
