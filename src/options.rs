use crate::cli::Cli;

/// Display toggles shared by the scanner and the renderer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ListOptions {
    /// Include modification time and size, and always show the type suffix.
    pub long_format: bool,
    /// Append a type suffix to each name.
    pub filetype: bool,
}

impl From<&Cli> for ListOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            long_format: cli.long_format,
            filetype: cli.filetype,
        }
    }
}
