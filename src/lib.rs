//! # apidb
//!
//! Builds JSON resource databases from a public-apis style README: a
//! Markdown document listing third-party APIs in tables under category
//! headings, preceded by a category index list.
//!
//! One pass produces two files: `resources.json` (every entry with
//! normalized fields) and `categories.json` (category names with URL-safe
//! slugs).
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use apidb::{Database, write_database};
//!
//! let db = Database::from_file("README.md").unwrap();
//! write_database(&db, Path::new("db")).unwrap();
//! ```
//!
//! ## Pipeline
//!
//! The [`Database`] struct is the central type; building one runs the whole
//! extraction pipeline:
//!
//! ```
//! use apidb::Database;
//!
//! let readme = "\
//! * [Animals](#animals)
//!
//! #### Animals
//! API | Description | Auth | HTTPS | CORS |
//! |---|---|---|---|---|
//! | [Cat API](http://x) | Some cats. | No | Yes | No |
//! ";
//! let db = Database::from_markdown(readme).unwrap();
//! assert_eq!(db.resources[0].api, "Cat API");
//! assert_eq!(db.categories[0].slug, "animals");
//! ```
//!
//! The README can also be linted against the upstream contribution rules
//! with [`validate::check_readme`].

pub mod db;
pub mod error;
pub mod export;
pub mod extract;
pub mod readme;
pub mod validate;

pub use db::Database;
pub use error::{Error, Result};
pub use export::{format_json, load_readme, write_database};
pub use extract::{Category, Entry, slugify};
pub use readme::parse_readme;
