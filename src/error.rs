//! Error types for Skiff
//!
//! Uses `thiserror` for library errors; the binary layer wraps these
//! with `anyhow` context.

use std::path::PathBuf;
use thiserror::Error;

use crate::api::types::ApiError;

/// Result type alias for Skiff operations
pub type SkiffResult<T> = Result<T, SkiffError>;

/// Main error type for Skiff operations
#[derive(Error, Debug)]
pub enum SkiffError {
    /// IO error during traversal, archiving, or local file handling
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Project directory missing or not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// App name cannot be derived from the resolved project path
    #[error("cannot derive app name from path: {path}")]
    AppName { path: PathBuf },

    /// Compressed archive exceeds the upload ceiling
    #[error(
        "archive size ({} MiB) exceeds the {} MiB limit",
        .size / (1024 * 1024),
        .limit / (1024 * 1024)
    )]
    ArchiveTooLarge { size: u64, limit: u64 },

    /// Uncompressed project content exceeds the packaging ceiling
    #[error(
        "project content ({} MiB) exceeds the {} MiB limit",
        .size / (1024 * 1024),
        .limit / (1024 * 1024)
    )]
    SourceTooLarge { size: u64, limit: u64 },

    /// Connection failure, timeout, or other transport-level failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be parsed as the expected JSON shape
    #[error("failed to parse API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Non-success status whose body is not a structured error; the raw
    /// status and body are surfaced verbatim, never a synthesized reason
    #[error("API request failed with status {status}: {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// Structured error returned by the platform
    #[error("{0}")]
    Api(ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_too_large_reports_sizes_in_mib() {
        let err = SkiffError::ArchiveTooLarge {
            size: 52 * 1024 * 1024,
            limit: 50 * 1024 * 1024,
        };
        assert_eq!(
            err.to_string(),
            "archive size (52 MiB) exceeds the 50 MiB limit"
        );
    }

    #[test]
    fn unexpected_response_keeps_raw_body() {
        let err = SkiffError::UnexpectedResponse {
            status: 502,
            body: "<html>bad gateway</html>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed with status 502: <html>bad gateway</html>"
        );
    }

    #[test]
    fn directory_not_found_display() {
        let err = SkiffError::DirectoryNotFound {
            path: PathBuf::from("/tmp/missing"),
        };
        assert_eq!(err.to_string(), "directory not found: /tmp/missing");
    }
}
