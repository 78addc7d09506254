//! The in-memory database: every resource entry plus every category.

use std::path::Path;

use crate::error::Result;
use crate::export::load_readme;
use crate::extract::{
    Category, Entry, find_index_list, format_categories, format_resources, group_rows,
    index_labels, separate_tables,
};
use crate::readme::parse_readme;

/// Everything extracted from one README: the flattened resource entries and
/// the category index.
#[derive(Debug, Clone, Default)]
pub struct Database {
    pub resources: Vec<Entry>,
    pub categories: Vec<Category>,
}

impl Database {
    /// Build a database from README markdown text.
    ///
    /// Runs the whole extraction pipeline: parse into blocks, locate the
    /// index list, pair category headings with their tables, group rows,
    /// and normalize records.
    pub fn from_markdown(text: &str) -> Result<Self> {
        let blocks = parse_readme(text);
        let list_index = find_index_list(&blocks)?;
        let labels = index_labels(&blocks, list_index)?;
        let tables = separate_tables(&blocks, list_index)?;
        let grouped = tables.iter().map(group_rows).collect::<Result<Vec<_>>>()?;
        Ok(Database {
            resources: format_resources(&grouped),
            categories: format_categories(&labels),
        })
    }

    /// Build a database from a README file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = load_readme(path.as_ref())?;
        Self::from_markdown(&text)
    }
}
