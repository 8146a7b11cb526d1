//! Wire types for the skiff.app platform API.
//!
//! Request/response shapes mirror the platform handlers; deserialization is
//! tolerant of fields the server omits, strict about the ones it promises.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// Deployments
// ----------------------------------------------------------------------------

/// Successful response to a deployment upload.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployResponse {
    pub status: String,
    pub deployment: DeploymentRecord,
}

/// The platform's authoritative description of one deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentRecord {
    pub id: String,
    pub alias: String,
    pub url: String,
    pub status: DeploymentStatus,
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub project_path: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deployed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub health_check: Option<HealthCheck>,
}

/// Lifecycle status of a deployment. The state machine is server-owned;
/// the client only observes and displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    Received,
    Extracting,
    Validating,
    Building,
    Starting,
    HealthCheck,
    Running,
    Unhealthy,
    Deleting,
    Deleted,
    Failed,
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeploymentStatus::Received => "received",
            DeploymentStatus::Extracting => "extracting",
            DeploymentStatus::Validating => "validating",
            DeploymentStatus::Building => "building",
            DeploymentStatus::Starting => "starting",
            DeploymentStatus::HealthCheck => "health_check",
            DeploymentStatus::Running => "running",
            DeploymentStatus::Unhealthy => "unhealthy",
            DeploymentStatus::Deleting => "deleting",
            DeploymentStatus::Deleted => "deleted",
            DeploymentStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Latest health-check snapshot for a running deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub checked_at: DateTime<Utc>,
    pub response_time_ms: i64,
    #[serde(default)]
    pub failure_count: Option<u32>,
    #[serde(default)]
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentsListResponse {
    pub deployments: Vec<DeploymentRecord>,
    pub total: u64,
}

/// Body for `PUT /deployments/{alias}`. Absent fields are omitted entirely
/// so the platform cannot mistake "unset" for "explicitly cleared".
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDeploymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl UpdateDeploymentRequest {
    /// True when no field is set; such a request would be a no-op and is
    /// rejected client-side.
    pub fn is_empty(&self) -> bool {
        self.environment_variables.is_none()
            && self.replicas.is_none()
            && self.cpu.is_none()
            && self.memory.is_none()
            && self.port.is_none()
    }
}

/// Generic `{status, message}` acknowledgement (deletes).
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
    pub message: String,
}

// ----------------------------------------------------------------------------
// Databases
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct DatabasesListResponse {
    pub databases: Vec<String>,
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseCreateResponse {
    pub status: String,
    pub message: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseRestoreResponse {
    pub status: String,
    pub message: String,
    pub database: String,
}

// ----------------------------------------------------------------------------
// Secrets
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SecretsListResponse {
    pub secrets: Vec<SecretListItem>,
    pub total: u64,
}

/// A secret in a listing; values are never returned by list calls.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretListItem {
    pub name: String,
    #[serde(default)]
    pub deployment_alias: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A full secret, including its value when fetched individually.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretResponse {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub deployment_alias: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecretCreateResponse {
    pub status: String,
    pub message: String,
    pub secret: SecretResponse,
}

// ----------------------------------------------------------------------------
// Structured errors
// ----------------------------------------------------------------------------

/// Envelope for every error body the platform sends.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: ApiError,
}

/// Structured platform error: machine code, human message, optional
/// field-level validation detail and support correlation handles.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Vec<ValidationDetail>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

/// One field-level validation problem.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationDetail {
    pub field: String,
    pub error: String,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl fmt::Display for ApiError {
    /// Renders `code: message`, then one indented line per validation
    /// detail in received order, with the suggestion appended when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        for detail in &self.details {
            write!(f, "\n  {}: {}", detail.field, detail.error)?;
            if let Some(suggestion) = &detail.suggestion {
                write!(f, " ({suggestion})")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_record_with_health_check_round_trips() {
        let body = r#"{
            "id": "d1",
            "alias": "app1",
            "url": "https://app1.example",
            "status": "running",
            "health_check": {
                "status": "healthy",
                "checked_at": "2025-11-02T08:30:00Z",
                "response_time_ms": 42
            }
        }"#;

        let record: DeploymentRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.status, DeploymentStatus::Running);
        let health = record.health_check.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.response_time_ms, 42);
        assert_eq!(health.checked_at.to_rfc3339(), "2025-11-02T08:30:00+00:00");
    }

    #[test]
    fn status_decodes_snake_case_variants() {
        let status: DeploymentStatus = serde_json::from_str("\"health_check\"").unwrap();
        assert_eq!(status, DeploymentStatus::HealthCheck);
        assert_eq!(status.to_string(), "health_check");
    }

    #[test]
    fn api_error_renders_details_in_received_order() {
        let body = r#"{
            "code": "VALIDATION_FAILED",
            "message": "invalid request",
            "details": [
                {"field": "port", "error": "out of range", "suggestion": "use 1-65535"},
                {"field": "memory", "error": "unparseable quantity"}
            ]
        }"#;

        let err: ApiError = serde_json::from_str(body).unwrap();
        let rendered = err.to_string();
        assert_eq!(
            rendered,
            "VALIDATION_FAILED: invalid request\n  port: out of range (use 1-65535)\n  memory: unparseable quantity"
        );
        let port_pos = rendered.find("port:").unwrap();
        let memory_pos = rendered.find("memory:").unwrap();
        assert!(port_pos < memory_pos);
    }

    #[test]
    fn update_request_omits_absent_fields() {
        let req = UpdateDeploymentRequest {
            cpu: Some("500m".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"cpu":"500m"}"#);
        assert!(!req.is_empty());
        assert!(UpdateDeploymentRequest::default().is_empty());
    }
}
