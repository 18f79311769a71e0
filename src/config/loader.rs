//! Document path resolution and whole-file persistence.

use super::document::ConfigDocument;
use super::error::{StoreError, StoreResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Document location used when nothing else is configured.
pub const DEFAULT_DOCUMENT_PATH: &str = "config/environment.json";

/// Environment variable for an explicit document path.
pub const DOCUMENT_PATH_ENV: &str = "ENV_RESOLVER_DOCUMENT";

/// Resolve the document path.
///
/// Resolution priority (highest to lowest):
/// 1. `explicit` (e.g. a `--document` flag)
/// 2. `ENV_RESOLVER_DOCUMENT` environment variable
/// 3. `config/environment.json` relative to the working directory
///
/// Unlike config file discovery, the path does not need to exist yet;
/// the resolver creates the document on open.
pub fn resolve_document_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    match std::env::var(DOCUMENT_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DOCUMENT_PATH),
    }
}

/// Write an empty document at `path` unless a file is already there.
///
/// Returns `true` if the document was created.
pub fn ensure_document(path: &Path) -> StoreResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    write_document(&ConfigDocument::new(), path)?;
    Ok(true)
}

/// Read and parse the whole document.
pub fn read_document(path: &Path) -> StoreResult<ConfigDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    ConfigDocument::parse(&content, path)
}

/// Replace the document at `path` with `document`.
///
/// The new content is written to a temporary file in the same directory and
/// renamed over the target, so readers see either the old or the new file.
///
/// An existing document keeps its permissions. A new one gets the same
/// permissions a plain file create would give it (0666 less the umask).
pub fn write_document(document: &ConfigDocument, path: &Path) -> StoreResult<()> {
    let write_err = |e: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let existing = match std::fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(write_err(e)),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if existing.is_none() {
            // open(2) applies the umask to this mode
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
    }

    let content = document.to_json_string()?;
    let mut tmp = builder.tempfile_in(parent).map_err(write_err)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
