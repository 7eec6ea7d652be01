//! Source archive lookup
//!
//! Finds `<name>-<version>*.tar.<gz|xz|bz2|...>` in the source directory.

use regex::Regex;
use std::path::{Path, PathBuf};

use crate::error::ArchiveError;

/// Glob-style pattern shown in diagnostics
pub fn archive_pattern(name: &str, version: &str) -> String {
    format!("{name}-{version}*.tar.*")
}

/// Compression suffixes `tar` can unpack on its own
const COMPRESSED_EXTENSIONS: &str = "gz|xz|bz2|zst|lz|lzma|Z";

fn archive_regex(name: &str, version: &str) -> Regex {
    let pattern = format!(
        r"^{}-{}.*\.tar\.({COMPRESSED_EXTENSIONS})$",
        regex::escape(name),
        regex::escape(version)
    );
    Regex::new(&pattern).expect("Invalid archive pattern")
}

/// Locate the source archive for `name` and `version` in `dir`.
///
/// Returns the first match in lexical order, as an absolute path so it
/// stays valid from any working directory.
pub fn locate_archive(dir: &Path, name: &str, version: &str) -> Result<PathBuf, ArchiveError> {
    let re = archive_regex(name, version);
    let dir = &std::path::absolute(dir).map_err(|e| ArchiveError::Io {
        dir: dir.to_path_buf(),
        error: e.to_string(),
    })?;

    let entries = std::fs::read_dir(dir).map_err(|e| ArchiveError::Io {
        dir: dir.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut matches: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .filter(|entry| entry.file_name().to_str().is_some_and(|n| re.is_match(n)))
        .map(|entry| entry.path())
        .collect();
    matches.sort();

    let archive = matches
        .into_iter()
        .next()
        .ok_or_else(|| ArchiveError::NotFound {
            pattern: archive_pattern(name, version),
            dir: dir.to_path_buf(),
        })?;

    tracing::debug!("Found archive {}", archive.display());
    Ok(archive)
}
