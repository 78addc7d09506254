//! Pairs category headings with the table blocks that follow them.

use crate::error::{Error, Result};
use crate::readme::{Block, Inline};

/// Heading level that introduces a category table.
const CATEGORY_HEADING_LEVEL: u8 = 3;

/// A category heading paired with the inline rows of its table paragraph.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    pub rows: Vec<Inline>,
}

/// Position of the category index: the first list in the document.
pub fn find_index_list(blocks: &[Block]) -> Result<usize> {
    blocks
        .iter()
        .position(|b| matches!(b, Block::List { .. }))
        .ok_or_else(|| Error::Structure("no category index list found".to_string()))
}

/// Category labels from the index list at `list_index`.
pub fn index_labels(blocks: &[Block], list_index: usize) -> Result<Vec<String>> {
    match blocks.get(list_index) {
        Some(Block::List { items }) => Ok(items.clone()),
        _ => Err(Error::Structure(format!(
            "block {list_index} is not a list"
        ))),
    }
}

/// Walk the blocks after the index list and pair every level-3 heading with
/// the paragraph that follows it. Document order is preserved; blocks that
/// are neither category headings nor their tables are dropped.
pub fn separate_tables(blocks: &[Block], list_index: usize) -> Result<Vec<Table>> {
    let mut tables = Vec::new();
    for (i, block) in blocks.iter().enumerate().skip(list_index + 1) {
        let Block::Heading { level, text } = block else {
            continue;
        };
        if *level != CATEGORY_HEADING_LEVEL {
            continue;
        }
        match blocks.get(i + 1) {
            Some(Block::Paragraph { inlines }) => tables.push(Table {
                name: text.clone(),
                rows: inlines.clone(),
            }),
            _ => {
                return Err(Error::Structure(format!(
                    "category heading \"{text}\" is not followed by a table"
                )));
            }
        }
    }
    Ok(tables)
}
