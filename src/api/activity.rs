use super::client::{ApiClient, RequestFailure};
use super::types::{Activity, PageRecord};
use crate::config::ApiConfig;

/// REST client for the Activity resource. Activities are always scoped to a
/// parent project when listed.
#[derive(Clone)]
pub struct ActivityClient {
    api: ApiClient,
}

impl ActivityClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    /// Shares an existing transport with another client.
    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get(&self, id: &str) -> Result<Activity, RequestFailure> {
        self.api.get_json(&format!("/activity/id/{}", id)).await
    }

    /// Activities belonging to the given project, filtered server-side.
    pub async fn list_by_project(&self, project_id: &str) -> Result<Vec<Activity>, RequestFailure> {
        let page: PageRecord<Activity> = self
            .api
            .get_json(&format!("/activity/all/{}", project_id))
            .await?;
        Ok(page.item_list)
    }

    pub async fn list_by_project_and_status(
        &self,
        project_id: &str,
        status: &str,
    ) -> Result<Vec<Activity>, RequestFailure> {
        let page: PageRecord<Activity> = self
            .api
            .get_json(&format!("/activity/all/{}/{}", project_id, status))
            .await?;
        Ok(page.item_list)
    }

    /// Asks the service to move the activity to `status`. The token is
    /// passed through unvalidated and unencoded; the service alone accepts
    /// or rejects the transition.
    pub async fn change_status(&self, id: &str, status: &str) -> Result<Activity, RequestFailure> {
        self.api
            .patch_json(&format!("/activity/{}/status/{}", id, status))
            .await
    }
}
