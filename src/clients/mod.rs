pub mod discourse_client;

pub use discourse_client::DiscourseClient;
