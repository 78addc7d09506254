//! The `{count, entries}` output template.

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;

/// Render a list as `{\n"count": <N>,\n"entries": <array>}` with the array
/// pretty-printed at 4-space indentation.
///
/// This is a fixed template, not a generic object serializer; consumers of
/// the output files depend on this exact shape.
pub fn format_json<T: Serialize>(entries: &[T]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut ser)?;
    let array = String::from_utf8(buf)?;
    Ok(format!(
        "{{\n\"count\": {},\n\"entries\": {}}}",
        entries.len(),
        array
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Category;

    #[test]
    fn test_empty_list() {
        let out = format_json::<Category>(&[]).unwrap();
        assert_eq!(out, "{\n\"count\": 0,\n\"entries\": []}");
    }

    #[test]
    fn test_template_shape_and_indentation() {
        let categories = vec![Category {
            name: "Animals".to_string(),
            slug: "animals".to_string(),
        }];
        let out = format_json(&categories).unwrap();
        let expected = "{\n\"count\": 1,\n\"entries\": [\n    {\n        \"name\": \"Animals\",\n        \"slug\": \"animals\"\n    }\n]}";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_count_matches_entries_length() {
        let categories: Vec<Category> = (0..7)
            .map(|i| Category {
                name: format!("C{i}"),
                slug: format!("c{i}"),
            })
            .collect();
        let out = format_json(&categories).unwrap();
        assert!(out.starts_with("{\n\"count\": 7,"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["entries"].as_array().unwrap().len(), 7);
    }
}
