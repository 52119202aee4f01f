pub mod api;
pub mod config;
pub mod router;

pub mod test_helpers;

pub use api::{ActivityClient, ApiClient, ProjectClient, RequestFailure};
pub use config::ApiConfig;
pub use router::Navigator;
