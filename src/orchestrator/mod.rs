//! 编排层（Orchestration Layer）
//!
//! ```text
//! batch_submitter (处理 Vec<TopicDescriptor>，并发 + 汇报)
//!     ↓
//! topic_submitter (处理单个主题，错误在此收敛)
//!     ↓
//! services (payload 构建 / 凭据轮换) + clients (DiscourseClient)
//! ```

pub mod batch_submitter;
pub mod topic_submitter;

pub use batch_submitter::{report_results, submit_topics, App, ReportLine};
pub use topic_submitter::{submit_topic, SubmissionResult};
