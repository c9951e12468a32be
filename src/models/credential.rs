/// 账号凭据
///
/// 任一字段缺失时，提交时会回退到默认账号的对应字段。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialPair {
    pub api_key: Option<String>,
    pub username: Option<String>,
}

impl CredentialPair {
    pub fn new(api_key: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            username: Some(username.into()),
        }
    }

    /// 两个字段都未设置
    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.username.is_none()
    }
}

/// 实际用于请求头的凭据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub api_key: String,
    pub username: String,
}
