use chrono::{DateTime, Local};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FileKind {
    Directory,
    Executable,
    Other,
}

impl FileKind {
    /// Marker appended to the name when the type is displayed.
    pub fn suffix(self) -> &'static str {
        match self {
            FileKind::Directory => "/",
            FileKind::Executable => "*",
            FileKind::Other => "",
        }
    }
}

/// One listed entry, as gathered by the scanner.
///
/// `modified_at` is only set in long format and carries whole seconds.
/// `size_bytes` is 0 unless long format was requested and the entry is a
/// regular file.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FileDescription {
    pub name: String,
    pub kind: FileKind,
    pub modified_at: Option<DateTime<Local>>,
    pub size_bytes: u64,
}
