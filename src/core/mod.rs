mod render;
mod scan;

pub use render::write_descriptions;
pub use scan::{ScanError, scan};
