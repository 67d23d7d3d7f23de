use std::path::PathBuf;
use std::time::SystemTime;

/// Entry type as reported by the directory listing, without following symlinks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryMetadata {
    pub modified: Option<SystemTime>,
    pub len: u64,
    /// A regular file this process is permitted to execute.
    pub executable: bool,
}
