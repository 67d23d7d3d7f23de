use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dirls", version)]
#[command(about = "Lists files in given or current dir", long_about = None)]
#[command(after_help = "poor man's ls")]
pub struct Cli {
    /// Name of directory to list the contents of
    #[arg(default_value = ".")]
    pub dirname: PathBuf,

    /// Presents more details about files in columnar format
    #[arg(short = 'l', long = "long-format")]
    pub long_format: bool,

    /// Adds an extra character to the end of the printed filename that indicates its type
    #[arg(short = 'F', long = "filetype")]
    pub filetype: bool,
}
