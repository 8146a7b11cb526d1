//! The deployment pipeline.
//!
//! Sequential stages, no internal parallelism: resolve the project path,
//! build the filtered archive, enforce the size ceiling, upload, interpret.
//! Every stage either returns its result or a terminating error; nothing
//! continues past a failed stage.

use std::fs;
use std::path::PathBuf;

use crate::api::deploy::DeployFields;
use crate::api::types::DeployResponse;
use crate::api::ApiClient;
use crate::archive;
use crate::error::{SkiffError, SkiffResult};

/// Options for one deployment invocation. Constructed once, immutable
/// thereafter.
#[derive(Debug, Clone)]
pub struct DeployOptions {
    pub api_url: String,
    pub api_token: String,
    pub path: PathBuf,
    pub force: bool,
    /// Docker-style `KEY=VALUE` pairs, in flag order.
    pub env: Vec<String>,
    pub cpu: Option<String>,
    pub memory: Option<String>,
    pub port: Option<String>,
}

/// Runs the full pipeline and returns the platform's deployment record.
///
/// The app name is derived from the resolved directory's base name; it is
/// never supplied separately.
pub fn run(opts: &DeployOptions) -> SkiffResult<DeployResponse> {
    let root = fs::canonicalize(&opts.path).map_err(|_| SkiffError::DirectoryNotFound {
        path: opts.path.clone(),
    })?;
    if !root.is_dir() {
        return Err(SkiffError::DirectoryNotFound { path: root });
    }

    let archive = archive::build(&root)?;
    archive::enforce_size_limit(archive.len() as u64)?;

    let app_name = root
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| SkiffError::AppName { path: root.clone() })?;

    let client = ApiClient::new(&opts.api_url, &opts.api_token)?;
    client.deploy(
        archive,
        &DeployFields {
            app_name,
            force: opts.force,
            env: opts.env.clone(),
            cpu: opts.cpu.clone(),
            memory: opts.memory.clone(),
            port: opts.port.clone(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_fails_before_any_other_work() {
        let opts = DeployOptions {
            api_url: "http://127.0.0.1:1".to_string(),
            api_token: "ak_test".to_string(),
            path: PathBuf::from("/definitely/not/here"),
            force: false,
            env: Vec::new(),
            cpu: None,
            memory: None,
            port: None,
        };
        let err = run(&opts).unwrap_err();
        assert!(matches!(err, SkiffError::DirectoryNotFound { .. }));
    }
}
