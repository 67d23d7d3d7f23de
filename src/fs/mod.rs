mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::{EntryMetadata, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Immediate children of `dir`, in the order the platform yields them.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;

    /// Metadata for `path` itself; symlinks are not followed.
    async fn metadata(&self, path: &Path) -> io::Result<EntryMetadata>;
}
