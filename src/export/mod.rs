//! Output side of the pipeline: the fixed JSON template and file writing.

mod json;
mod write;

pub use json::format_json;
pub use write::{CATEGORIES_FILE, RESOURCES_FILE, load_readme, write_database};
