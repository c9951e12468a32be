//! # Discourse Topic Submit
//!
//! 从文件读取主题列表，通过 Discourse API 批量创建主题，并在多个账号之间轮换
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `TopicDescriptor`、`CredentialPair` 以及 JSON / TOML 加载器
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数能力，只处理单个主题
//! - `payload_builder` - Markdown 格式化 + 图片插入 + 请求体构建
//! - `CredentialRotation` - 按 `index mod len` 轮换账号
//!
//! ### ③ 客户端层（Clients）
//! - `DiscourseClient` - 唯一持有 `reqwest::Client` 的地方
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_submitter` - 并发提交全部主题并汇报结果
//! - `orchestrator/topic_submitter` - 提交单个主题，错误在此收敛

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::DiscourseClient;
pub use config::Config;
pub use error::{ConfigError, SubmitError};
pub use models::{load_topics, CredentialPair, TopicDescriptor};
pub use orchestrator::{App, ReportLine, SubmissionResult};
