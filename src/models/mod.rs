mod description;
mod entry;

pub use description::{FileDescription, FileKind};
pub use entry::{EntryKind, EntryMetadata, FsEntry};
