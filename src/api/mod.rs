pub mod activity;
pub mod client;
pub mod project;
pub mod types;

pub use activity::ActivityClient;
pub use client::{ApiClient, RequestFailure};
pub use project::ProjectClient;
pub use types::*;
