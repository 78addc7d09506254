//! Category records for `categories.json`.

use serde::{Deserialize, Serialize};

use super::slug::slugify;

/// One category as it appears in `categories.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

/// Map index-list labels into `{name, slug}` pairs, preserving input order.
///
/// Slugs are not deduplicated; two labels that collapse to the same slug
/// both pass through.
pub fn format_categories(labels: &[String]) -> Vec<Category> {
    labels
        .iter()
        .map(|label| Category {
            name: label.clone(),
            slug: slugify(label),
        })
        .collect()
}
