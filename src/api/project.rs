use super::client::{ApiClient, RequestFailure};
use super::types::{PageRecord, Project};
use crate::config::ApiConfig;

/// REST client for the Project resource.
#[derive(Clone)]
pub struct ProjectClient {
    api: ApiClient,
}

impl ProjectClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    /// Shares an existing transport with another client.
    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get(&self, id: &str) -> Result<Project, RequestFailure> {
        self.api.get_json(&format!("/project/id/{}", id)).await
    }

    pub async fn list_all(&self) -> Result<Vec<Project>, RequestFailure> {
        let page: PageRecord<Project> = self.api.get_json("/project/all").await?;
        Ok(page.item_list)
    }

    /// Server-side status filter; no local filtering happens here.
    pub async fn list_by_status(&self, status: &str) -> Result<Vec<Project>, RequestFailure> {
        let page: PageRecord<Project> = self
            .api
            .get_json(&format!("/project/all/status/{}", status))
            .await?;
        Ok(page.item_list)
    }

    /// Asks the service to move the project to `status`. The token is passed
    /// through unvalidated and unencoded; the service alone accepts or
    /// rejects the transition.
    pub async fn change_status(&self, id: &str, status: &str) -> Result<Project, RequestFailure> {
        self.api
            .patch_json(&format!("/project/{}/status/{}", id, status))
            .await
    }
}
