//! Application listing and management calls.

use std::time::Duration;

use super::types::{DeleteResponse, DeploymentRecord, DeploymentsListResponse, UpdateDeploymentRequest};
use super::ApiClient;
use crate::error::SkiffResult;

const LIST_TIMEOUT: Duration = Duration::from_secs(10);
const UPDATE_TIMEOUT: Duration = Duration::from_secs(30);

impl ApiClient {
    /// Lists every deployed application.
    pub fn list_apps(&self) -> SkiffResult<DeploymentsListResponse> {
        let req = self.http.get(self.url("/deployments"));
        self.send(req, LIST_TIMEOUT)
    }

    /// Deletes an application by alias.
    pub fn delete_app(&self, alias: &str) -> SkiffResult<DeleteResponse> {
        let req = self.http.delete(self.url(&format!("/deployments/{alias}")));
        self.send(req, LIST_TIMEOUT)
    }

    /// Updates an existing deployment (env vars, replicas, sizing, port).
    pub fn update_app(
        &self,
        alias: &str,
        update: &UpdateDeploymentRequest,
    ) -> SkiffResult<DeploymentRecord> {
        let req = self
            .http
            .put(self.url(&format!("/deployments/{alias}")))
            .json(update);
        self.send(req, UPDATE_TIMEOUT)
    }
}
