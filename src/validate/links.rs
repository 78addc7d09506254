//! Duplicate link detection.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Only links after the index are considered; everything above it is prose.
const INDEX_MARKER: &str = "## Index";

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?:https?://|www\d{0,3}\.)[^\s()<>"'\]]+"#).unwrap())
}

/// All URLs appearing in `text`, in order of appearance.
pub fn find_links_in_text(text: &str) -> Vec<String> {
    url_re()
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .trim_end_matches(['.', ',', ';', ':', '!', '?'])
                .to_string()
        })
        .collect()
}

/// URLs listed more than once after the `## Index` marker, each reported
/// once. Trailing slashes are ignored when comparing.
pub fn duplicate_links(text: &str) -> Vec<String> {
    let content = match text.find(INDEX_MARKER) {
        Some(pos) => &text[pos..],
        None => text,
    };
    check_duplicate_links(&find_links_in_text(content))
}

fn check_duplicate_links(links: &[String]) -> Vec<String> {
    let mut seen: HashMap<&str, u32> = HashMap::new();
    let mut duplicates = Vec::new();
    for link in links {
        let link = link.trim_end_matches('/');
        let count = seen.entry(link).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(link.to_string());
        }
    }
    duplicates
}
