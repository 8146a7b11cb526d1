//! Deployment upload: the multipart leg of the pipeline.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};

use super::types::DeployResponse;
use super::ApiClient;
use crate::error::SkiffResult;

/// Uploads block until the platform finishes its synchronous build cycle,
/// so the timeout is measured in minutes, not seconds.
const DEPLOY_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Filename the platform expects for the archive part.
const ARCHIVE_FILE_NAME: &str = "app.tar.gz";

/// Scalar metadata accompanying an archive upload. Every optional field is
/// omitted from the form entirely when absent.
#[derive(Debug, Clone, Default)]
pub struct DeployFields {
    pub app_name: String,
    pub force: bool,
    pub env: Vec<String>,
    pub cpu: Option<String>,
    pub memory: Option<String>,
    pub port: Option<String>,
}

impl ApiClient {
    /// POSTs the archive and its metadata to `/deployments` as one
    /// multipart form and interprets the platform's response.
    pub fn deploy(&self, archive: Vec<u8>, fields: &DeployFields) -> SkiffResult<DeployResponse> {
        let part = Part::bytes(archive).file_name(ARCHIVE_FILE_NAME);
        let mut form = Form::new().part("archive", part);

        if fields.force {
            form = form.text("force", "true");
        }
        if !fields.app_name.is_empty() {
            form = form.text("app_name", fields.app_name.clone());
        }
        if let Some(env_json) = env_pairs_to_json(&fields.env) {
            form = form.text("env_vars", env_json);
        }
        if let Some(cpu) = &fields.cpu {
            form = form.text("cpu", cpu.clone());
        }
        if let Some(memory) = &fields.memory {
            form = form.text("memory", memory.clone());
        }
        if let Some(port) = &fields.port {
            form = form.text("port", port.clone());
        }

        let req = self.http.post(self.url("/deployments")).multipart(form);
        self.send(req, DEPLOY_TIMEOUT)
    }
}

/// Collects Docker-style `KEY=VALUE` pairs into a map.
///
/// Splits on the first `=` so values may contain `=`; pairs without a key
/// are dropped; on duplicate keys the last occurrence wins. Returns `None`
/// when nothing usable remains, so callers omit the field rather than send
/// it empty.
pub fn env_pairs_to_map(pairs: &[String]) -> Option<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                map.insert(key.to_string(), value.to_string());
            }
            _ => {}
        }
    }
    if map.is_empty() {
        return None;
    }
    Some(map)
}

/// Serializes `KEY=VALUE` pairs as one JSON object string for the
/// `env_vars` form field.
pub fn env_pairs_to_json(pairs: &[String]) -> Option<String> {
    // A string map cannot fail to serialize.
    env_pairs_to_map(pairs).map(|map| serde_json::to_string(&map).expect("string map serializes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn env_pairs_serialize_as_a_single_json_object() {
        let json = env_pairs_to_json(&pairs(&["NODE_ENV=production", "LOG_LEVEL=info"])).unwrap();
        assert_eq!(json, r#"{"LOG_LEVEL":"info","NODE_ENV":"production"}"#);
    }

    #[test]
    fn env_values_may_contain_equals_signs() {
        let json = env_pairs_to_json(&pairs(&["DSN=postgres://u:p@host/db?sslmode=require"])).unwrap();
        assert_eq!(
            json,
            r#"{"DSN":"postgres://u:p@host/db?sslmode=require"}"#
        );
    }

    #[test]
    fn last_duplicate_key_wins() {
        let json = env_pairs_to_json(&pairs(&["A=1", "A=2"])).unwrap();
        assert_eq!(json, r#"{"A":"2"}"#);
    }

    #[test]
    fn malformed_pairs_are_dropped() {
        assert_eq!(env_pairs_to_json(&pairs(&["=value", "no-equals"])), None);
        assert_eq!(env_pairs_to_json(&[]), None);
    }
}
