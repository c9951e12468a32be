pub mod credential;
pub mod loaders;
pub mod topic;

pub use credential::{CredentialPair, ResolvedCredentials};
pub use loaders::{load_topics, read_json_topics, read_toml_topics};
pub use topic::{Formatting, ImagePosition, TopicDescriptor};
