//! Encrypted file suffix helpers.
//!
//! Suffixes are matched against the final path component only, ignoring
//! ASCII case.

use std::env;
use std::path::{Path, PathBuf};

use crate::core::constants::{ENCRYPTED_SUFFIXES, GPG_SUFFIX};
use crate::error::{Error, Result};

fn ends_with_ignore_case(name: &[u8], suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

/// Remove one recognized encrypted suffix (`.gpg`, `.asc`, `.pgp`).
///
/// A file named exactly like a suffix (a dotfile such as `.gpg`) is
/// returned unchanged.
pub fn strip_encrypted_suffix(path: &Path) -> PathBuf {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return path.to_path_buf();
    };

    ENCRYPTED_SUFFIXES
        .iter()
        .find(|suffix| name.len() > suffix.len() && ends_with_ignore_case(name.as_bytes(), suffix))
        .map(|suffix| path.with_file_name(&name[..name.len() - suffix.len()]))
        .unwrap_or_else(|| path.to_path_buf())
}

/// Append `.gpg` unless the path already ends with it.
pub fn add_encrypted_suffix(path: &Path) -> PathBuf {
    if ends_with_ignore_case(path.as_os_str().as_encoded_bytes(), GPG_SUFFIX) {
        return path.to_path_buf();
    }
    let mut raw = path.as_os_str().to_owned();
    raw.push(GPG_SUFFIX);
    PathBuf::from(raw)
}

/// Resolve a relative path against the current working directory.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|e| Error::io("failed to get working directory", e))?;
    Ok(cwd.join(path))
}
