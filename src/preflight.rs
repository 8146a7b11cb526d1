//! Prerequisite checks for project scaffolding.

use std::path::Path;
use std::process::Command;

/// Returns the installed Go version string (e.g. `go1.23.4`), if any.
pub fn go_version() -> Option<String> {
    let output = Command::new("go").arg("version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    // "go version go1.23.4 linux/amd64"
    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_go_version(&stdout)
}

pub(crate) fn parse_go_version(output: &str) -> Option<String> {
    output.split_whitespace().nth(2).map(str::to_string)
}

/// True if `git` is on the PATH.
pub fn has_git() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// True if `npm` is on the PATH.
pub fn has_npm() -> bool {
    Command::new("npm")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// True if `name` already exists as a directory.
pub fn directory_exists(name: &str) -> bool {
    Path::new(name).is_dir()
}

/// Token format advisory. Empty tokens are allowed (with a warning at the
/// prompt); non-empty tokens are expected to start with `ak_`.
pub fn validate_token(token: &str) -> bool {
    token.is_empty() || token.starts_with("ak_")
}
