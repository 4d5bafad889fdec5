//! Platform-specific file handling
//!
//! Permission changes and owner-only file creation for the secret file. On
//! Unix the exact mode bits are applied; elsewhere only the read-only flag can
//! be toggled.

use std::io;
use std::path::Path;
use tokio::fs::{self, File, OpenOptions};

/// Apply `mode` to the file at `path`
#[cfg(unix)]
pub async fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).await
}

/// Apply `mode` to the file at `path`. Only the owner-write bit is honoured.
#[cfg(not(unix))]
pub async fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    let mut permissions = fs::metadata(path).await?.permissions();
    permissions.set_readonly(mode & 0o200 == 0);
    fs::set_permissions(path, permissions).await
}

/// Open `path` for a full rewrite. A file created by this call starts out
/// readable and writable by its owner only.
pub async fn open_for_rewrite(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(crate::shared::constants::MODE_OWNER_READ_WRITE);
    options.open(path).await
}

/// Current permission bits of `path`
#[cfg(unix)]
pub async fn mode_of(path: &Path) -> io::Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::metadata(path).await?.permissions().mode() & 0o777)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::shared::constants::{MODE_OWNER_READ_ONLY, MODE_OWNER_READ_WRITE};
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_new_file_is_owner_only() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("secret");

        let mut file = open_for_rewrite(&path).await.expect("Failed to open file");
        file.write_all(b"data").await.expect("Failed to write file");
        drop(file);

        let mode = mode_of(&path).await.expect("Failed to read mode");
        assert_eq!(mode & 0o077, 0, "group/other bits set: {:o}", mode);
    }

    #[tokio::test]
    async fn test_set_mode() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("secret");
        std::fs::write(&path, b"data").expect("Failed to write file");

        set_mode(&path, MODE_OWNER_READ_ONLY).await.expect("Failed to set mode");
        assert_eq!(mode_of(&path).await.expect("Failed to read mode"), 0o400);

        set_mode(&path, MODE_OWNER_READ_WRITE).await.expect("Failed to set mode");
        assert_eq!(mode_of(&path).await.expect("Failed to read mode"), 0o600);
    }

    #[tokio::test]
    async fn test_set_mode_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = set_mode(&dir.path().join("missing"), MODE_OWNER_READ_WRITE).await;
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
