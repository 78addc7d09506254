//! Groups a table's inline nodes into per-entry stubs.

use crate::error::{Error, Result};
use crate::readme::Inline;

use super::table::Table;

/// One table row under construction: the entry's link plus whatever
/// description text has been folded in so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStub {
    pub link: String,
    pub name: String,
    pub description: String,
}

/// A table whose rows have been grouped into stubs.
#[derive(Debug, Clone)]
pub struct GroupedTable {
    pub name: String,
    pub rows: Vec<EntryStub>,
}

/// Group a table's inlines into entry stubs.
///
/// The first inline is always the header text run and is skipped. After
/// that, every link opens a new stub and every text run is a continuation
/// of the most recently opened stub's description.
pub fn group_rows(table: &Table) -> Result<GroupedTable> {
    let mut rows: Vec<EntryStub> = Vec::new();
    for inline in table.rows.iter().skip(1) {
        match inline {
            Inline::Link { url, label } => rows.push(EntryStub {
                link: url.clone(),
                name: label.clone(),
                description: String::new(),
            }),
            Inline::Text(text) => {
                let Some(open) = rows.last_mut() else {
                    return Err(Error::Structure(format!(
                        "table \"{}\" has description text before its first entry link",
                        table.name
                    )));
                };
                open.description.push(' ');
                open.description.push_str(text);
            }
        }
    }
    Ok(GroupedTable {
        name: table.name.clone(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str, label: &str) -> Inline {
        Inline::Link {
            url: url.to_string(),
            label: label.to_string(),
        }
    }

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn table(name: &str, rows: Vec<Inline>) -> Table {
        Table {
            name: name.to_string(),
            rows,
        }
    }

    #[test]
    fn test_header_is_skipped_and_links_open_stubs() {
        let t = table(
            "Animals",
            vec![
                text("API | Description |\n|---|---|\n| "),
                link("http://x", "Cat API"),
                text(" | Some cats. | No | Yes | No |"),
            ],
        );
        let grouped = group_rows(&t).unwrap();
        assert_eq!(grouped.rows.len(), 1);
        assert_eq!(grouped.rows[0].name, "Cat API");
        assert_eq!(grouped.rows[0].link, "http://x");
        assert_eq!(grouped.rows[0].description, "  | Some cats. | No | Yes | No |");
    }

    #[test]
    fn test_continuation_text_accumulates_on_open_stub() {
        let t = table(
            "Animals",
            vec![
                text("header"),
                link("http://x", "Cat API"),
                text("first"),
                text("second"),
            ],
        );
        let grouped = group_rows(&t).unwrap();
        assert_eq!(grouped.rows[0].description, " first second");
    }

    #[test]
    fn test_text_before_first_link_is_structural_error() {
        let t = table("Animals", vec![text("header"), text("stray")]);
        let err = group_rows(&t).unwrap_err();
        assert!(err.to_string().contains("Animals"));
    }

    #[test]
    fn test_empty_table_yields_no_rows() {
        let t = table("Animals", vec![text("header only")]);
        let grouped = group_rows(&t).unwrap();
        assert!(grouped.rows.is_empty());
    }
}
