//! Secrets calls. Secrets are global unless scoped to a deployment alias.

use std::time::Duration;

use super::types::{DeleteResponse, SecretCreateResponse, SecretResponse, SecretsListResponse};
use super::ApiClient;
use crate::error::SkiffResult;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the optional `?deployment=` query; an empty scope means global.
fn scope_query(deployment: &str) -> Vec<(&'static str, String)> {
    if deployment.is_empty() {
        Vec::new()
    } else {
        vec![("deployment", deployment.to_string())]
    }
}

impl ApiClient {
    /// Lists secrets, globally or for one deployment.
    pub fn list_secrets(&self, deployment: &str) -> SkiffResult<SecretsListResponse> {
        let req = self
            .http
            .get(self.url("/secrets"))
            .query(&scope_query(deployment));
        self.send(req, REQUEST_TIMEOUT)
    }

    /// Creates or updates a secret. An empty `deployment_alias` makes the
    /// secret global; the field is then omitted from the body.
    pub fn create_secret(
        &self,
        name: &str,
        value: &str,
        deployment_alias: &str,
    ) -> SkiffResult<SecretCreateResponse> {
        let mut payload = serde_json::json!({ "name": name, "value": value });
        if !deployment_alias.is_empty() {
            payload["deployment_alias"] = serde_json::Value::from(deployment_alias);
        }

        let req = self.http.post(self.url("/secrets")).json(&payload);
        self.send(req, REQUEST_TIMEOUT)
    }

    /// Fetches a secret, including its value.
    pub fn get_secret(&self, name: &str, deployment: &str) -> SkiffResult<SecretResponse> {
        let req = self
            .http
            .get(self.url(&format!("/secrets/{name}")))
            .query(&scope_query(deployment));
        self.send(req, REQUEST_TIMEOUT)
    }

    /// Deletes a secret by name.
    pub fn delete_secret(&self, name: &str, deployment: &str) -> SkiffResult<DeleteResponse> {
        let req = self
            .http
            .delete(self.url(&format!("/secrets/{name}")))
            .query(&scope_query(deployment));
        self.send(req, REQUEST_TIMEOUT)
    }
}
