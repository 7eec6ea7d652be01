//! Post-install alias links

use std::io::ErrorKind;
use std::path::Path;

use crate::error::LinkError;

/// Result of a link request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The symlink was created
    Created,
    /// Something named `alias` already existed and was left alone
    AlreadyPresent,
}

/// Create the symlink `dir/alias -> target`.
///
/// An existing `alias` counts as success. Any other failure is an error.
pub fn link_alias(dir: &Path, alias: &str, target: &str) -> Result<LinkOutcome, LinkError> {
    let link = dir.join(alias);

    match symlink(target, &link) {
        Ok(()) => {
            tracing::info!("Linked {} -> {target}", link.display());
            Ok(LinkOutcome::Created)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!("{} already exists, leaving it", link.display());
            Ok(LinkOutcome::AlreadyPresent)
        }
        Err(e) => Err(LinkError::Create {
            alias: alias.to_string(),
            target: target.to_string(),
            dir: dir.to_path_buf(),
            error: e.to_string(),
        }),
    }
}

#[cfg(unix)]
fn symlink(target: &str, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &str, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_relative_link() {
        let dir = TempDir::new().unwrap();

        let outcome = link_alias(dir.path(), "cc", "clang").unwrap();

        assert_eq!(outcome, LinkOutcome::Created);
        let target = std::fs::read_link(dir.path().join("cc")).unwrap();
        assert_eq!(target, Path::new("clang"));
    }

    #[test]
    fn test_second_link_is_already_present() {
        let dir = TempDir::new().unwrap();

        assert_eq!(
            link_alias(dir.path(), "pkg-config", "pkgconf").unwrap(),
            LinkOutcome::Created
        );
        assert_eq!(
            link_alias(dir.path(), "pkg-config", "pkgconf").unwrap(),
            LinkOutcome::AlreadyPresent
        );
    }

    #[test]
    fn test_existing_regular_file_is_left_alone() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("gcc"), b"#!/bin/sh\n").unwrap();

        assert_eq!(
            link_alias(dir.path(), "gcc", "clang").unwrap(),
            LinkOutcome::AlreadyPresent
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("gcc")).unwrap(),
            "#!/bin/sh\n"
        );
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("bin");

        assert!(matches!(
            link_alias(&missing, "cc", "clang"),
            Err(LinkError::Create { .. })
        ));
    }
}
