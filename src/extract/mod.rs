//! Block model → domain records.
//!
//! The stages mirror the document structure: [`table`] pairs category
//! headings with their table paragraphs, [`rows`] groups a table's inlines
//! into per-entry stubs, [`entry`] and [`category`] normalize stubs and
//! index labels into the final JSON records.

mod category;
mod entry;
mod rows;
mod slug;
mod table;

pub use category::{Category, format_categories};
pub use entry::{Entry, format_resources};
pub use rows::{EntryStub, GroupedTable, group_rows};
pub use slug::slugify;
pub use table::{Table, find_index_list, index_labels, separate_tables};
