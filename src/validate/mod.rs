//! README lint checks, independent of the build pipeline.
//!
//! These operate on the raw README text so they can point at exact line
//! numbers and catch problems the forgiving Markdown parser would paper
//! over.

mod format;
mod links;

pub use format::check_format;
pub use links::{duplicate_links, find_links_in_text};

/// Run every check over README text, returning all messages.
pub fn check_readme(text: &str) -> Vec<String> {
    let mut messages = check_format(text);
    for link in duplicate_links(text) {
        messages.push(format!("duplicate link: {link}"));
    }
    messages
}
