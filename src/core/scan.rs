use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, SubsecRound};
use thiserror::Error;

use crate::ListOptions;
use crate::fs::FileSystem;
use crate::models::{EntryKind, EntryMetadata, FileDescription, FileKind, FsEntry};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot access '{}'", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Describe every immediate entry of `dir`.
///
/// Records come back in the order the filesystem yields them; no sorting is
/// applied. Metadata is only looked up when `options` needs it: for every
/// entry in long format, and for regular files when the type is requested.
pub async fn scan<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &ListOptions,
) -> Result<Vec<FileDescription>, ScanError> {
    let entries = fs
        .read_dir(dir)
        .await
        .map_err(|source| ScanError::DirectoryNotFound {
            path: dir.to_path_buf(),
            source,
        })?;
    tracing::debug!(dir = %dir.display(), entries = entries.len(), "read directory");

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let metadata = if needs_metadata(&entry, options) {
            match fs.metadata(&entry.path).await {
                Ok(metadata) => Some(metadata),
                Err(err) => {
                    tracing::warn!(path = %entry.path.display(), %err, "cannot read entry metadata");
                    None
                }
            }
        } else {
            None
        };

        records.push(describe(entry, metadata.as_ref(), options));
    }

    Ok(records)
}

fn needs_metadata(entry: &FsEntry, options: &ListOptions) -> bool {
    options.long_format || (options.filetype && entry.kind == EntryKind::File)
}

fn describe(
    entry: FsEntry,
    metadata: Option<&EntryMetadata>,
    options: &ListOptions,
) -> FileDescription {
    let kind = if options.filetype {
        classify(entry.kind, metadata)
    } else {
        FileKind::Other
    };

    let (modified_at, size_bytes) = match metadata {
        Some(metadata) if options.long_format => {
            let modified_at = metadata
                .modified
                .map(|time| DateTime::<Local>::from(time).trunc_subsecs(0));
            let size_bytes = if entry.kind == EntryKind::File {
                metadata.len
            } else {
                0
            };
            (modified_at, size_bytes)
        }
        _ => (None, 0),
    };

    FileDescription {
        name: entry.name,
        kind,
        modified_at,
        size_bytes,
    }
}

fn classify(kind: EntryKind, metadata: Option<&EntryMetadata>) -> FileKind {
    match kind {
        EntryKind::Directory => FileKind::Directory,
        EntryKind::File if metadata.is_some_and(|metadata| metadata.executable) => {
            FileKind::Executable
        }
        EntryKind::File | EntryKind::Symlink | EntryKind::Other => FileKind::Other,
    }
}
