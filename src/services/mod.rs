pub mod credential_rotation;
pub mod payload_builder;

pub use credential_rotation::CredentialRotation;
pub use payload_builder::{build_payload, TopicPayload};
