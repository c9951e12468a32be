use thiserror::Error;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必需的环境变量不存在
    #[error("环境变量 {0} 不存在")]
    EnvVarNotFound(String),
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// 单个主题提交错误
///
/// 只在单个任务内部使用，最终折叠为 `SubmissionResult::Failed`，不会向上传播。
#[derive(Debug, Error)]
pub enum SubmitError {
    /// 网络请求失败（连接失败、超时等）
    #[error("请求 {endpoint} 失败: {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务端返回非 2xx 状态码
    #[error("{endpoint} 返回错误状态 {status}: {body}")]
    BadStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 响应体不是合法 JSON
    #[error("无法解析 {endpoint} 的响应: {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// 提交结果类型
pub type SubmitResult<T> = Result<T, SubmitError>;
