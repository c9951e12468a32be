//! 凭据轮换 - 业务能力层

use crate::models::{CredentialPair, ResolvedCredentials};

/// 按 `index mod len` 轮换账号
///
/// 账号列表为空时所有主题都使用默认账号；
/// 某个账号缺少 key 或用户名时，缺失的字段用默认账号补齐。
#[derive(Debug, Clone)]
pub struct CredentialRotation {
    users: Vec<CredentialPair>,
    default: CredentialPair,
}

impl CredentialRotation {
    pub fn new(users: Vec<CredentialPair>, default: CredentialPair) -> Self {
        Self { users, default }
    }

    /// 第 `index` 个主题分配到的账号（未补齐）
    pub fn assigned(&self, index: usize) -> Option<&CredentialPair> {
        if self.users.is_empty() {
            None
        } else {
            self.users.get(index % self.users.len())
        }
    }

    /// 第 `index` 个主题实际使用的凭据
    pub fn resolve(&self, index: usize) -> ResolvedCredentials {
        let assigned = self.assigned(index);

        ResolvedCredentials {
            api_key: assigned
                .and_then(|pair| pair.api_key.clone())
                .or_else(|| self.default.api_key.clone())
                .unwrap_or_default(),
            username: assigned
                .and_then(|pair| pair.username.clone())
                .or_else(|| self.default.username.clone())
                .unwrap_or_default(),
        }
    }
}
