//! Fixed exclusion policy for project archives.
//!
//! The rule set is deliberately not user-configurable: it exists to keep
//! version-control metadata, dependency caches, private keys, and
//! platform-native executables out of uploads.

use std::path::Path;

/// Path names excluded by exact final-segment or leading-prefix match.
const EXCLUDED_NAMES: &[&str] = &[
    ".git",
    "node_modules",
    ".env.production",
    ".env.prod",
    "id_rsa",
    "id_ed25519",
    "id_ecdsa",
    "id_dsa",
    "credentials.json",
    "service-account.json",
];

/// File extensions excluded case-insensitively (no leading dot).
const EXCLUDED_EXTENSIONS: &[&str] = &[
    "pem", "key", "exe", "dll", "so", "dylib", "bat", "cmd", "com", "msi", "scr", "pif",
];

/// Decides whether a root-relative path is excluded from the archive.
///
/// A match on a directory means the whole subtree is pruned by the caller;
/// a match on a file skips only that entry. The distinction lives in the
/// traversal, not here: the predicate is the same for both.
pub fn is_excluded(rel_path: &Path) -> bool {
    let Some(name) = rel_path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    if EXCLUDED_NAMES.contains(&name) {
        return true;
    }

    // A rule also matches when the relative path starts under it. The
    // top-down walk prunes matched directories before descending, so this
    // arm only fires for callers testing a deep path directly.
    let leading = rel_path
        .components()
        .next()
        .and_then(|c| c.as_os_str().to_str());
    if matches!(leading, Some(s) if EXCLUDED_NAMES.contains(&s)) {
        return true;
    }

    match rel_path.extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let ext = ext.to_ascii_lowercase();
            EXCLUDED_EXTENSIONS.iter().any(|e| *e == ext)
        }
        None => false,
    }
}
