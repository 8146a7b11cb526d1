//! Apps and secrets calls share the deploy pipeline's request/error shape.

use httpmock::prelude::*;
use serde_json::json;

use skiff::api::types::UpdateDeploymentRequest;
use skiff::{ApiClient, DeploymentStatus};

#[test]
fn list_apps_decodes_records_with_health_checks() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/deployments")
            .header("authorization", "Bearer ak_test");
        then.status(200).json_body(json!({
            "total": 1,
            "deployments": [{
                "id": "d9",
                "alias": "api",
                "url": "https://api.example",
                "status": "running",
                "deployed_at": "2025-10-30T12:00:00Z",
                "health_check": {
                    "status": "healthy",
                    "checked_at": "2025-10-30T12:05:00Z",
                    "response_time_ms": 17
                }
            }]
        }));
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();
    let apps = client.list_apps().unwrap();
    assert_eq!(apps.total, 1);

    let record = &apps.deployments[0];
    assert_eq!(record.status, DeploymentStatus::Running);
    let health = record.health_check.as_ref().unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.response_time_ms, 17);
    assert_eq!(
        health.checked_at.to_rfc3339(),
        "2025-10-30T12:05:00+00:00"
    );
}

#[test]
fn update_app_sends_only_the_given_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/deployments/api")
            .json_body(json!({"replicas": 3, "port": 8080}));
        then.status(200).json_body(json!({
            "id": "d9",
            "alias": "api",
            "url": "https://api.example",
            "status": "running"
        }));
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();
    let update = UpdateDeploymentRequest {
        replicas: Some(3),
        port: Some(8080),
        ..Default::default()
    };
    let record = client.update_app("api", &update).unwrap();
    mock.assert();
    assert_eq!(record.alias, "api");
}

#[test]
fn delete_app_conflict_carries_the_server_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/deployments/api");
        then.status(409).json_body(json!({
            "status": "error",
            "error": {"code": "ALIAS_IN_USE", "message": "deployment is rolling out"}
        }));
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();
    let err = client.delete_app("api").unwrap_err();
    assert_eq!(err.to_string(), "ALIAS_IN_USE: deployment is rolling out");
}

#[test]
fn secrets_scope_query_is_present_only_when_scoped() {
    let server = MockServer::start();
    let scoped = server.mock(|when, then| {
        when.method(GET)
            .path("/secrets")
            .query_param("deployment", "api");
        then.status(200).json_body(json!({
            "total": 1,
            "secrets": [{
                "name": "API_KEY",
                "deployment_alias": "api",
                "created_at": "2025-10-01T00:00:00Z",
                "updated_at": "2025-10-02T00:00:00Z"
            }]
        }));
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();
    let list = client.list_secrets("api").unwrap();
    scoped.assert();
    assert_eq!(list.secrets[0].deployment_alias, "api");
}

#[test]
fn secret_get_returns_the_value() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/secrets/API_KEY");
        then.status(200).json_body(json!({
            "name": "API_KEY",
            "value": "hunter2",
            "deployment_alias": "",
            "created_at": "2025-10-01T00:00:00Z",
            "updated_at": "2025-10-02T00:00:00Z"
        }));
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();
    let secret = client.get_secret("API_KEY", "").unwrap();
    assert_eq!(secret.value, "hunter2");
}

#[test]
fn secret_create_omits_the_alias_when_global() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/secrets")
            .json_body(json!({"name": "API_KEY", "value": "hunter2"}));
        then.status(201).json_body(json!({
            "status": "created",
            "message": "secret stored",
            "secret": {
                "name": "API_KEY",
                "deployment_alias": "",
                "created_at": "2025-10-01T00:00:00Z",
                "updated_at": "2025-10-01T00:00:00Z"
            }
        }));
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();
    let response = client.create_secret("API_KEY", "hunter2", "").unwrap();
    mock.assert();
    assert_eq!(response.secret.name, "API_KEY");
}
