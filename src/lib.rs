pub mod cli;
pub mod core;
pub mod fs;
pub mod models;
pub mod options;

pub use options::ListOptions;
