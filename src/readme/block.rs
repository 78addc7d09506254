//! Block-level document model.
//!
//! A deliberately small subset of Markdown structure: the README format only
//! uses headings, one index list, and paragraph-shaped tables. Everything
//! else is kept as [`Block::Other`] so document positions stay meaningful.

/// One top-level block of the parsed README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// An ATX heading with its level (1-6) and flattened text content.
    Heading { level: u8, text: String },
    /// A list; each item reduced to its label (link text, or plain text for
    /// items without a link).
    List { items: Vec<String> },
    /// A paragraph as a sequence of inline nodes. Without the tables
    /// extension, a pipe table parses as one of these: a text run for the
    /// header and delimiter lines, then alternating links and text runs.
    Paragraph { inlines: Vec<Inline> },
    /// Any other block (code fence, blockquote, rule, HTML). Never inspected,
    /// only occupies a position.
    Other,
}

/// One inline node inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// A maximal run of plain text. Adjacent text and soft breaks are
    /// coalesced, so the text between two links is always a single node.
    Text(String),
    /// A link with its destination and label text.
    Link { url: String, label: String },
}
