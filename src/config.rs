//! 程序配置
//!
//! 所有配置只在进程入口读取一次，之后以 `&Config` 的形式向下传递。

use std::time::Duration;

use crate::error::ConfigError;
use crate::models::CredentialPair;

/// 轮换账号槽位数量（USER1 ~ USER9）
pub const MAX_USER_SLOTS: usize = 9;

/// 默认日志文件
pub const DEFAULT_LOG_FILE: &str = "discourse_topics.log";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 论坛地址（不带末尾的 `/`）
    pub discourse_url: String,
    /// 默认 API Key
    pub api_key: String,
    /// 默认 API 用户名
    pub api_username: String,
    /// 轮换使用的账号槽位，始终按 USER1 ~ USER9 的顺序保留全部槽位，
    /// 未设置的字段在提交时回退到默认账号
    pub users: Vec<CredentialPair>,
    /// 主题来源文件
    pub topics_file: String,
    /// 输出日志文件
    pub log_file: String,
    /// 单个请求的超时时间
    pub request_timeout: Duration,
    /// 最大重试次数（当前未使用）
    pub retry_limit: u32,
    /// 请求间隔（当前未使用）
    pub rate_limit_delay: Duration,
    /// 同时发出的请求上限，`None` 表示不限制
    pub max_concurrent_topics: Option<usize>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 调用前应先执行 `dotenvy::dotenv()`，以便 `.env` 中的值生效。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源加载配置
    ///
    /// `lookup` 返回 `None` 或空字符串均视为未设置。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let discourse_url = get("DISCOURSE_URL")
            .ok_or_else(|| ConfigError::EnvVarNotFound("DISCOURSE_URL".to_string()))?
            .trim_end_matches('/')
            .to_string();

        let users = (1..=MAX_USER_SLOTS)
            .map(|n| CredentialPair {
                api_key: get(&format!("USER{n}_API_KEY")),
                username: get(&format!("USER{n}_USERNAME")),
            })
            .collect();

        let max_concurrent_topics = match get("MAX_CONCURRENT_TOPICS") {
            Some(v) => Some(parse_value::<usize>("MAX_CONCURRENT_TOPICS", &v)?).filter(|n| *n > 0),
            None => None,
        };

        Ok(Self {
            discourse_url,
            api_key: get("API_KEY").unwrap_or_default(),
            api_username: get("API_USERNAME").unwrap_or_default(),
            users,
            topics_file: get("TOPICS_FILE").unwrap_or_else(|| "topics.json".to_string()),
            log_file: Self::log_file_from_lookup(&get),
            request_timeout: Duration::from_secs(parse_or(&get, "REQUEST_TIMEOUT_SECS", 10)?),
            retry_limit: parse_or(&get, "RETRY_LIMIT", 3)?,
            rate_limit_delay: Duration::from_secs(parse_or(&get, "RATE_LIMIT_DELAY_SECS", 1)?),
            max_concurrent_topics,
        })
    }

    /// 只读取日志文件路径
    ///
    /// 日志需要在完整配置加载之前初始化，这样配置错误也能写入日志文件。
    pub fn log_file_from_env() -> String {
        Self::log_file_from_lookup(|name| std::env::var(name).ok())
    }

    pub fn log_file_from_lookup<F>(lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("LOG_FILE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
    }

    /// 默认账号
    pub fn default_credentials(&self) -> CredentialPair {
        CredentialPair::new(&self.api_key, &self.api_username)
    }

    /// 测试用配置
    pub fn for_testing() -> Self {
        Self {
            discourse_url: "http://127.0.0.1:4200".to_string(),
            api_key: "default-key".to_string(),
            api_username: "system".to_string(),
            users: Vec::new(),
            topics_file: "topics.json".to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            request_timeout: Duration::from_secs(10),
            retry_limit: 3,
            rate_limit_delay: Duration::from_secs(1),
            max_concurrent_topics: None,
        }
    }
}

fn parse_or<T, G>(get: &G, name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(v) => parse_value(name, &v),
        None => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvVarParseFailed {
            var_name: name.to_string(),
            value: value.to_string(),
            expected_type: std::any::type_name::<T>().to_string(),
        })
}
