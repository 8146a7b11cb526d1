//! Database dump/restore: the smaller instances of the transfer shape.

use std::fs;

use httpmock::prelude::*;
use serde_json::json;

use skiff::{ApiClient, SkiffError};

#[test]
fn dump_streams_the_binary_body_to_the_writer() {
    let server = MockServer::start();
    let payload: Vec<u8> = (0u16..2048).map(|i| (i % 251) as u8).collect();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/databases/orders/dump")
            .header("authorization", "Bearer ak_test");
        then.status(200)
            .header("content-type", "application/octet-stream")
            .body(payload.clone());
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();
    let mut out = Vec::new();
    client.dump_database("orders", &mut out).unwrap();
    mock.assert();
    assert_eq!(out, payload);
}

#[test]
fn dump_failure_reports_the_structured_error_and_writes_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/databases/missing/dump");
        then.status(404).json_body(json!({
            "status": "error",
            "error": {"code": "NOT_FOUND", "message": "no such database"}
        }));
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();
    let mut out = Vec::new();
    let err = client.dump_database("missing", &mut out).unwrap_err();
    assert_eq!(err.to_string(), "NOT_FOUND: no such database");
    assert!(out.is_empty());
}

#[test]
fn restore_uploads_a_single_multipart_part_named_dump() {
    let dir = tempfile::tempdir().unwrap();
    let dump_path = dir.path().join("orders.dump");
    fs::write(&dump_path, b"PGDMP custom format bytes").unwrap();

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/databases/orders/restore")
            .header("authorization", "Bearer ak_test")
            .body_contains("name=\"dump\"")
            .body_contains("PGDMP custom format bytes");
        then.status(200).json_body(json!({
            "status": "ok",
            "message": "restore started",
            "database": "orders"
        }));
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();
    let response = client.restore_database("orders", &dump_path).unwrap();
    mock.assert();
    assert_eq!(response.database, "orders");
}

#[test]
fn restore_with_missing_file_fails_before_any_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/databases/orders/restore");
        then.status(200);
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();
    let err = client
        .restore_database("orders", std::path::Path::new("/no/such/file.dump"))
        .unwrap_err();
    assert!(matches!(err, SkiffError::Io(_)));
    assert_eq!(mock.hits(), 0);
}

#[test]
fn database_crud_round_trips() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/databases");
        then.status(200)
            .json_body(json!({"databases": ["orders", "users"], "total": 2}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/databases")
            .json_body(json!({"name": "metrics"}));
        then.status(201).json_body(json!({
            "status": "created",
            "message": "database created",
            "database": "metrics"
        }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/databases/users");
        then.status(200)
            .json_body(json!({"status": "ok", "message": "database deleted"}));
    });

    let client = ApiClient::new(&server.base_url(), "ak_test").unwrap();

    let list = client.list_databases().unwrap();
    assert_eq!(list.total, 2);
    assert_eq!(list.databases, vec!["orders", "users"]);

    let created = client.create_database("metrics").unwrap();
    assert_eq!(created.database, "metrics");

    let deleted = client.delete_database("users").unwrap();
    assert_eq!(deleted.message, "database deleted");
}
