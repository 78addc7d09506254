//! README parsing: raw Markdown text → top-level block sequence.
//!
//! Parsing proper is delegated to pulldown-cmark; this module reduces its
//! event stream to the handful of block shapes the extraction stages care
//! about (headings, the index list, paragraph-shaped tables).

mod block;
mod parse;

pub use block::{Block, Inline};
pub use parse::parse_readme;
