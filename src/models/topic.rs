use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 图片插入位置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    /// 放在正文开头
    Start,
    /// 放在正文末尾
    #[default]
    End,
    /// 替换正文中的 `[IMAGE]` 占位符
    Inline,
    /// 无法识别的位置，图片会被丢弃
    #[serde(other)]
    Other,
}

/// Markdown 格式选项
///
/// 每个开关按真值判断：`true`、非零数字、非空字符串都算开启。
/// `formatting` 不是对象时视为全部关闭。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatting {
    pub bold: bool,
    pub italic: bool,
    pub header: bool,
}

impl Formatting {
    pub fn from_value(value: &Value) -> Self {
        let flag = |key: &str| value.get(key).is_some_and(is_truthy);
        Self {
            bold: flag("bold"),
            italic: flag("italic"),
            header: flag("header"),
        }
    }
}

impl<'de> Deserialize<'de> for Formatting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_value(&Value::deserialize(deserializer)?))
    }
}

/// 待创建的主题
///
/// 这里不做字段校验：`title`、`category`、`embed_url`、`external_id`
/// 原样透传给论坛，类型不对或缺少标题等问题会在论坛 API 返回错误时暴露出来。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TopicDescriptor {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "text_or_default")]
    pub body: String,
    /// 分类，可能是数字 ID 也可能是字符串
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub image_url: Option<String>,
    /// 缺省或 `null` 时按 `End` 处理，非字符串按 `Other` 处理
    #[serde(default, deserialize_with = "lenient_position")]
    pub image_position: Option<ImagePosition>,
    #[serde(default)]
    pub formatting: Formatting,
    #[serde(default)]
    pub embed_url: Option<Value>,
    #[serde(default)]
    pub external_id: Option<Value>,
}

impl TopicDescriptor {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            body: body.into(),
            ..Default::default()
        }
    }

    /// 用于日志显示的标题
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "<无标题>".to_string(),
        }
    }

    pub fn image_position(&self) -> ImagePosition {
        self.image_position.unwrap_or_default()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// 字符串原样保留，数字转成文本，其他类型视为未设置
fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn lenient_position<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ImagePosition>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        value @ Value::String(_) => {
            Some(serde_json::from_value(value).unwrap_or(ImagePosition::Other))
        }
        _ => Some(ImagePosition::Other),
    })
}
