//! Markdown → block model via pulldown-cmark.
//!
//! The tables extension is intentionally left off: entry tables must come
//! through as plain paragraphs (header text run, then alternating link and
//! text nodes) because that is the shape the row walker consumes.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use super::block::{Block, Inline};

/// Parse a README into its top-level block sequence.
pub fn parse_readme(text: &str) -> Vec<Block> {
    let parser = Parser::new_ext(text, Options::empty());
    let mut state = ParserState::default();
    for event in parser {
        state.handle(event);
    }
    state.blocks
}

/// Incremental builder driven by the pulldown-cmark event stream.
#[derive(Default)]
struct ParserState {
    blocks: Vec<Block>,

    /// Open heading: level and accumulated text.
    heading: Option<(u8, String)>,

    /// Nesting depth of lists; items are only collected at depth 1.
    list_depth: usize,
    list_items: Vec<String>,
    item_text: String,
    item_label: Option<String>,
    item_link: Option<String>,

    /// Open top-level paragraph.
    paragraph: Option<Vec<Inline>>,
    /// Open link inside that paragraph: destination and accumulated label.
    link: Option<(String, String)>,

    /// Nesting depth of blocks we pass over (blockquotes, code, HTML).
    skip_depth: usize,
}

impl ParserState {
    fn handle(&mut self, event: Event<'_>) {
        if self.skip_depth > 0 {
            match event {
                Event::Start(tag) if is_skipped(&tag) => self.skip_depth += 1,
                Event::End(tag) if is_skipped_end(&tag) => self.skip_depth -= 1,
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(Tag::Heading { level, .. }) if self.list_depth == 0 => {
                self.heading = Some((level as u8, String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = self.heading.take() {
                    self.blocks.push(Block::Heading {
                        level,
                        text: text.trim().to_string(),
                    });
                }
            }

            Event::Start(Tag::List(_)) => {
                self.list_depth += 1;
                if self.list_depth == 1 {
                    self.list_items.clear();
                }
            }
            Event::End(TagEnd::List(_)) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    let items = std::mem::take(&mut self.list_items);
                    self.blocks.push(Block::List { items });
                }
            }
            Event::Start(Tag::Item) if self.list_depth == 1 => {
                self.item_text.clear();
                self.item_label = None;
            }
            Event::End(TagEnd::Item) if self.list_depth == 1 => {
                let label = self
                    .item_label
                    .take()
                    .unwrap_or_else(|| self.item_text.trim().to_string());
                self.list_items.push(label);
            }

            Event::Start(Tag::Paragraph) if self.list_depth == 0 => {
                self.paragraph = Some(Vec::new());
            }
            Event::End(TagEnd::Paragraph) if self.list_depth == 0 => {
                if let Some(inlines) = self.paragraph.take() {
                    self.blocks.push(Block::Paragraph { inlines });
                }
            }

            Event::Start(Tag::Link { dest_url, .. }) => {
                if self.heading.is_some() {
                    // Heading text is flattened; the label flows into it.
                } else if self.list_depth > 0 {
                    self.item_link = Some(String::new());
                } else if self.paragraph.is_some() {
                    self.link = Some((dest_url.to_string(), String::new()));
                }
            }
            Event::End(TagEnd::Link) => {
                if let Some(label) = self.item_link.take() {
                    // First link in the item names the category.
                    if self.list_depth == 1 && self.item_label.is_none() {
                        self.item_label = Some(label);
                    }
                } else if let Some((url, label)) = self.link.take() {
                    if let Some(inlines) = self.paragraph.as_mut() {
                        inlines.push(Inline::Link { url, label });
                    }
                }
            }

            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => self.push_text(&code),
            Event::SoftBreak | Event::HardBreak => {
                if self.paragraph.is_some() && self.link.is_none() {
                    self.push_text("\n");
                } else {
                    self.push_text(" ");
                }
            }

            Event::Start(tag) if is_skipped(&tag) => {
                self.blocks.push(Block::Other);
                self.skip_depth += 1;
            }
            Event::Rule => self.blocks.push(Block::Other),

            _ => {}
        }
    }

    /// Route a text fragment to whichever node is currently open.
    fn push_text(&mut self, text: &str) {
        if let Some((_, buf)) = self.heading.as_mut() {
            buf.push_str(text);
        } else if let Some(label) = self.item_link.as_mut() {
            label.push_str(text);
        } else if self.list_depth > 0 {
            if self.list_depth == 1 {
                self.item_text.push_str(text);
            }
        } else if let Some((_, label)) = self.link.as_mut() {
            label.push_str(text);
        } else if let Some(inlines) = self.paragraph.as_mut() {
            match inlines.last_mut() {
                Some(Inline::Text(buf)) => buf.push_str(text),
                _ => inlines.push(Inline::Text(text.to_string())),
            }
        }
    }
}

fn is_skipped(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::BlockQuote(_)
            | Tag::CodeBlock(_)
            | Tag::HtmlBlock
            | Tag::FootnoteDefinition(_)
            | Tag::Table(_)
    )
}

fn is_skipped_end(tag: &TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::BlockQuote(_)
            | TagEnd::CodeBlock
            | TagEnd::HtmlBlock
            | TagEnd::FootnoteDefinition
            | TagEnd::Table
    )
}
