use serde::{Deserialize, Serialize};

/// Environment variable holding the remote API base address.
pub const API_URL_ENV: &str = "PROJECT_MANAGER_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Base address of the remote project manager service.
///
/// Resolved once at startup and injected into each client at construction;
/// nothing re-reads the environment after that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Reads `PROJECT_MANAGER_API_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.base_url, "http://api.example.com");
    }

    #[test]
    fn test_env_resolution_with_default() {
        // Set and clear in one test to avoid racing parallel env readers
        std::env::set_var(API_URL_ENV, "http://staging.example.com:9090/");
        let config = ApiConfig::from_env();
        assert_eq!(config.base_url, "http://staging.example.com:9090");

        std::env::remove_var(API_URL_ENV);
        let config = ApiConfig::from_env();
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
