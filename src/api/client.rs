use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;

/// Transport error, non-success response or undecodable body from the
/// remote service, surfaced verbatim. Nothing is retried or classified
/// further here; what to do with a failure is the caller's decision.
#[derive(Debug, Error)]
#[error("request failed: {0}")]
pub struct RequestFailure(#[from] reqwest::Error);

impl RequestFailure {
    /// Underlying transport detail.
    pub fn detail(&self) -> &reqwest::Error {
        &self.0
    }
}

/// Low-level HTTP client shared by the resource clients.
///
/// Resource paths are concatenated onto the configured base address as-is;
/// identifiers and status tokens are not percent-encoded here beyond what
/// reqwest's URL parser applies by default.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestFailure> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;
        Ok(response.error_for_status()?.json::<T>().await?)
    }

    pub async fn patch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestFailure> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.patch(&url).send().await?;
        Ok(response.error_for_status()?.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ApiConfig::new(server.uri()))
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/all"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).get_json::<Value>("/project/all").await;
        assert!(result.unwrap_err().detail().is_status());
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/all"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).get_json::<Value>("/project/all").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_connection_error_is_a_failure() {
        // Use a port that's guaranteed not to be listening
        let client = ApiClient::new(&ApiConfig::new("http://127.0.0.1:59999"));
        let result = client.get_json::<Value>("/project/all").await;

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("request failed"));
    }
}
