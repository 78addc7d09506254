//! File I/O: loading the README and persisting the database files.

use std::fs;
use std::path::Path;

use crate::db::Database;
use crate::error::{Error, Result};

use super::json::format_json;

/// Resource database filename within the output directory.
pub const RESOURCES_FILE: &str = "resources.json";
/// Category database filename within the output directory.
pub const CATEGORIES_FILE: &str = "categories.json";

/// Read the README as UTF-8 text.
pub fn load_readme(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `resources.json` and `categories.json` into `out_dir`, creating
/// the directory if needed and overwriting existing files.
///
/// The two writes are sequential; a failure on the second can leave the
/// first in place.
pub fn write_database(db: &Database, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|source| Error::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;
    write_file(&out_dir.join(RESOURCES_FILE), &format_json(&db.resources)?)?;
    write_file(&out_dir.join(CATEGORIES_FILE), &format_json(&db.categories)?)?;
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
