//! Project archive construction.
//!
//! Walks the project tree depth-first, applies the exclusion policy, and
//! writes a gzip-compressed tar stream entirely in memory. Size ceilings
//! are enforced before any network use ever happens.

pub mod filter;

use std::fs::{self, File};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{SkiffError, SkiffResult};

/// Ceiling on the compressed archive, checked after the build completes.
pub const MAX_ARCHIVE_BYTES: u64 = 50 * 1024 * 1024;

/// Ceiling on uncompressed file content, accumulated during the walk so a
/// runaway tree fails before it is fully read into the encoder.
pub const MAX_SOURCE_BYTES: u64 = 200 * 1024 * 1024;

/// Builds a gzip-compressed tar archive of the tree rooted at `root`.
///
/// Entries carry root-relative paths (the root itself is never an entry);
/// directory order is sorted by file name, so a given tree always produces
/// the same bytes. Symbolic links are stored as link records carrying the
/// target, never the dereferenced content. Any traversal error aborts the
/// whole build; a partial archive is never returned.
pub fn build(root: &Path) -> SkiffResult<Vec<u8>> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.follow_symlinks(false);

    let mut source_bytes: u64 = 0;
    append_dir_entries(&mut builder, root, root, &mut source_bytes)?;

    let encoder = builder.into_inner()?;
    Ok(encoder.finish()?)
}

/// Rejects archives over [`MAX_ARCHIVE_BYTES`]. Must run strictly before
/// any network call.
pub fn enforce_size_limit(size: u64) -> SkiffResult<()> {
    if size > MAX_ARCHIVE_BYTES {
        return Err(SkiffError::ArchiveTooLarge {
            size,
            limit: MAX_ARCHIVE_BYTES,
        });
    }
    Ok(())
}

fn append_dir_entries(
    builder: &mut tar::Builder<GzEncoder<Vec<u8>>>,
    root: &Path,
    dir: &Path,
    source_bytes: &mut u64,
) -> SkiffResult<()> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let meta = fs::symlink_metadata(&path)?;
        let rel = path
            .strip_prefix(root)
            .expect("walked path is always under the root");

        // Matched directories are pruned here, before any descent.
        if filter::is_excluded(rel) {
            continue;
        }

        let file_type = meta.file_type();
        if file_type.is_dir() {
            builder.append_dir(rel, &path)?;
            append_dir_entries(builder, root, &path, source_bytes)?;
        } else if file_type.is_symlink() {
            let target = fs::read_link(&path)?;
            let mut header = tar::Header::new_gnu();
            header.set_metadata(&meta);
            builder.append_link(&mut header, rel, &target)?;
        } else {
            *source_bytes += meta.len();
            if *source_bytes > MAX_SOURCE_BYTES {
                return Err(SkiffError::SourceTooLarge {
                    size: *source_bytes,
                    limit: MAX_SOURCE_BYTES,
                });
            }
            let mut file = File::open(&path)?;
            let mut header = tar::Header::new_gnu();
            header.set_metadata(&meta);
            builder.append_data(&mut header, rel, &mut file)?;
        }
    }

    Ok(())
}
