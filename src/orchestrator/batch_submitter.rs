//! 批量主题提交器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量主题的加载、并发提交和结果汇报。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：记录启动信息、创建共享的 `DiscourseClient`
//! 2. **批量加载**：读取主题文件（`Vec<TopicDescriptor>`）
//! 3. **并发提交**：所有主题同时发出请求，默认不限制并发数
//! 4. **结果汇报**：按原始顺序逐条输出成功/失败日志
//!
//! ## 设计特点
//!
//! - 所有请求在同一个任务里通过 `join_all` 并发等待，共享一个连接池
//! - 单个主题失败不会取消其他请求
//! - 配置了 `max_concurrent_topics` 时用 Semaphore 限制同时在途的请求数

use crate::clients::DiscourseClient;
use crate::config::Config;
use crate::models::{load_topics, TopicDescriptor};
use crate::orchestrator::topic_submitter::{submit_topic, SubmissionResult};
use crate::services::CredentialRotation;
use crate::utils::logging;
use anyhow::{Context, Result};
use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    client: DiscourseClient,
    rotation: CredentialRotation,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let client = DiscourseClient::new(&config).context("无法创建 HTTP 客户端")?;
        let rotation = CredentialRotation::new(config.users.clone(), config.default_credentials());

        Ok(Self {
            config,
            client,
            rotation,
        })
    }

    /// 运行应用主逻辑
    ///
    /// 主题文件为空或无法读取时直接返回，不发出任何请求。
    pub async fn run(&self) -> Vec<ReportLine> {
        let topics = load_topics(&self.config.topics_file).await;

        if topics.is_empty() {
            error!("没有需要处理的主题，请检查主题文件: {}", self.config.topics_file);
            return Vec::new();
        }

        let configured = self.config.users.iter().filter(|pair| !pair.is_empty()).count();
        logging::log_topics_loaded(topics.len(), configured, self.config.max_concurrent_topics);

        let results = submit_topics(
            &self.client,
            &topics,
            &self.rotation,
            self.config.max_concurrent_topics,
        )
        .await;

        report_results(&topics, &results)
    }
}

/// 并发提交所有主题
///
/// 返回值与 `topics` 一一对应：`results[i]` 是 `topics[i]` 的结果。
pub async fn submit_topics(
    client: &DiscourseClient,
    topics: &[TopicDescriptor],
    rotation: &CredentialRotation,
    max_concurrent: Option<usize>,
) -> Vec<SubmissionResult> {
    let semaphore = max_concurrent.map(Semaphore::new);
    let semaphore = semaphore.as_ref();
    let total = topics.len();

    let tasks = topics.iter().enumerate().map(move |(index, topic)| {
        let credentials = rotation.resolve(index);
        info!(
            "[{}/{}] 📤 提交主题 '{}' (用户: {})",
            index + 1,
            total,
            topic.display_title(),
            credentials.username
        );

        async move {
            let _permit = match semaphore {
                Some(s) => s.acquire().await.ok(),
                None => None,
            };
            submit_topic(client, topic, &credentials).await
        }
    });

    join_all(tasks).await
}

/// 单个主题的汇报行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Created {
        title: String,
        post_number: Option<i64>,
    },
    Failed {
        title: String,
    },
}

/// 按原始顺序输出每个主题的结果
pub fn report_results(topics: &[TopicDescriptor], results: &[SubmissionResult]) -> Vec<ReportLine> {
    topics
        .iter()
        .zip(results)
        .map(|(topic, result)| {
            let title = topic.display_title();
            match result {
                SubmissionResult::Created(response) => {
                    let post_number = DiscourseClient::extract_post_number(response);
                    match post_number {
                        Some(id) => info!("✓ 已创建主题 '{}'，ID: {}", title, id),
                        None => info!("✓ 已创建主题 '{}'，响应中没有 post_number", title),
                    }
                    ReportLine::Created { title, post_number }
                }
                SubmissionResult::Failed(_) => {
                    error!("❌ 创建主题 '{}' 失败", title);
                    ReportLine::Failed { title }
                }
            }
        })
        .collect()
}
