use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, EntryMetadata, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let kind = match entry.file_type() {
                    Ok(file_type) if file_type.is_symlink() => EntryKind::Symlink,
                    Ok(file_type) if file_type.is_dir() => EntryKind::Directory,
                    Ok(file_type) if file_type.is_file() => EntryKind::File,
                    Ok(_) => EntryKind::Other,
                    Err(err) => {
                        tracing::warn!(path = %entry.path().display(), %err, "cannot determine entry type");
                        EntryKind::Other
                    }
                };

                entries.push(FsEntry {
                    path: entry.path(),
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind,
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || {
            let metadata = std::fs::symlink_metadata(&path)?;
            Ok(EntryMetadata {
                modified: metadata.modified().ok(),
                len: metadata.len(),
                executable: metadata.is_file() && can_execute(&path),
            })
        })
        .await?
    }
}

/// Whether this process may execute `path`, as answered by `access(2)`.
#[cfg(unix)]
fn can_execute(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};
    access(path, AccessFlags::X_OK).is_ok()
}

#[cfg(not(unix))]
fn can_execute(_path: &Path) -> bool {
    false
}
