//! Final resource records and the stub → record normalization.

use serde::{Deserialize, Serialize};

use super::rows::{EntryStub, GroupedTable};

/// One resource record as it appears in `resources.json`.
///
/// Field order is the serialization order, which consumers of the JSON
/// depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "API")]
    pub api: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Auth")]
    pub auth: String,
    #[serde(rename = "HTTPS")]
    pub https: bool,
    #[serde(rename = "Cors", default, skip_serializing_if = "Option::is_none")]
    pub cors: Option<String>,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Category")]
    pub category: String,
}

/// Flatten every grouped table into one entry list, tagging each entry with
/// its table's name. Order is table order, then row order within the table.
pub fn format_resources(tables: &[GroupedTable]) -> Vec<Entry> {
    tables
        .iter()
        .flat_map(|table| table.rows.iter().map(|stub| format_entry(stub, &table.name)))
        .collect()
}

/// Split a stub's accumulated description on `|` into the ordered
/// description/auth/https/cors fields and normalize them.
fn format_entry(stub: &EntryStub, category: &str) -> Entry {
    let mut fields = stub
        .description
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let description = fields.next().unwrap_or_default();
    let auth = fields.next();
    let https = fields.next();
    let cors = fields.next();

    Entry {
        api: stub.name.clone(),
        description: description.to_string(),
        auth: match auth {
            Some(a) if !a.eq_ignore_ascii_case("no") => a.to_string(),
            _ => String::new(),
        },
        https: https.is_some_and(|h| h.eq_ignore_ascii_case("yes")),
        cors: cors.map(str::to_lowercase),
        link: stub.link.clone(),
        category: category.to_string(),
    }
}
