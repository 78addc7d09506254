//! Line-oriented format lint for the README's entry tables.
//!
//! Checks the raw text rather than the parsed tree: column counts, segment
//! padding, title/description/auth/https/cors rules, per-category entry
//! minimums, and alphabetical ordering of entries within each category.

use std::sync::OnceLock;

use regex::Regex;

const ANCHOR: &str = "###";
const AUTH_KEYS: [&str; 5] = ["apiKey", "OAuth", "X-Mashape-Key", "User-Agent", "No"];
const HTTPS_KEYS: [&str; 2] = ["Yes", "No"];
const CORS_KEYS: [&str; 3] = ["Yes", "No", "Unknown"];

const NUM_SEGMENTS: usize = 5;
const MIN_ENTRIES_PER_CATEGORY: usize = 3;
const MAX_DESCRIPTION_LENGTH: usize = 100;

// ASCII punctuation, minus parentheses: descriptions ending in ")" are
// allowed for now.
const TRAILING_PUNCTUATION: &str = "!\"#$%&'*+,-./:;<=>?@[\\]^_`{|}~";

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[(.+)\]\((http.*)\)").unwrap())
}

fn anchor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^###\s(.+)").unwrap())
}

fn index_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\*\s\[(.*)\]").unwrap())
}

fn error_message(line_num: usize, message: impl AsRef<str>) -> String {
    format!("(L{:03}) {}", line_num + 1, message.as_ref())
}

/// Lint README text, returning one `(L%03d) message` per violation.
pub fn check_format(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    check_file_format(&lines)
}

fn check_file_format(lines: &[&str]) -> Vec<String> {
    let mut err_msgs = check_alphabetical_order(lines);
    let mut category_titles_in_index: Vec<String> = Vec::new();
    // Primed above the minimum so no check fires before the first category.
    let mut num_in_category = MIN_ENTRIES_PER_CATEGORY + 1;
    let mut category = String::new();
    let mut category_line = 0;

    for (line_num, line) in lines.iter().enumerate() {
        if let Some(caps) = index_title_re().captures(line) {
            category_titles_in_index.push(caps[1].to_string());
        }
        if line.starts_with(ANCHOR) {
            match anchor_re().captures(line) {
                Some(caps) => {
                    if !category_titles_in_index.iter().any(|t| t.as_str() == &caps[1]) {
                        err_msgs.push(error_message(
                            line_num,
                            format!("category header ({}) not added to Index section", &caps[1]),
                        ));
                    }
                }
                None => {
                    err_msgs.push(error_message(
                        line_num,
                        "category header is not formatted correctly",
                    ));
                }
            }
            if num_in_category < MIN_ENTRIES_PER_CATEGORY {
                err_msgs.push(error_message(
                    category_line,
                    format!(
                        "{category} category does not have the minimum {MIN_ENTRIES_PER_CATEGORY} entries (only has {num_in_category})"
                    ),
                ));
            }
            category = line
                .split(' ')
                .nth(1)
                .unwrap_or_default()
                .to_string();
            category_line = line_num;
            num_in_category = 0;
            continue;
        }
        if !line.starts_with('|') || line.starts_with("|---") {
            continue;
        }
        num_in_category += 1;
        let segments = raw_segments(line);
        if segments.len() < NUM_SEGMENTS {
            err_msgs.push(error_message(
                line_num,
                format!(
                    "entry does not have all the required columns (have {}, need {NUM_SEGMENTS})",
                    segments.len()
                ),
            ));
            continue;
        }
        for segment in &segments {
            if leading_whitespace(segment) != 1 || trailing_whitespace(segment) != 1 {
                err_msgs.push(error_message(
                    line_num,
                    "each segment must start and end with exactly 1 space",
                ));
            }
        }
        let segments: Vec<&str> = segments.iter().map(|s| s.trim()).collect();
        err_msgs.extend(check_entry(line_num, &segments));
    }
    err_msgs
}

/// Table cells between the outer pipes, untrimmed.
fn raw_segments(line: &str) -> Vec<&str> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1].to_vec()
}

fn leading_whitespace(segment: &str) -> usize {
    segment.chars().count() - segment.trim_start().chars().count()
}

fn trailing_whitespace(segment: &str) -> usize {
    segment.chars().count() - segment.trim_end().chars().count()
}

/// Per-category titles with the category's line number, in document order.
fn categories_content(lines: &[&str]) -> Vec<(String, usize, Vec<String>)> {
    let mut categories: Vec<(String, usize, Vec<String>)> = Vec::new();
    for (line_num, line) in lines.iter().enumerate() {
        if line.starts_with(ANCHOR) {
            let category = line
                .split(ANCHOR)
                .nth(1)
                .unwrap_or_default()
                .trim()
                .to_string();
            categories.push((category, line_num, Vec::new()));
            continue;
        }
        if !line.starts_with('|') || line.starts_with("|---") {
            continue;
        }
        let Some((_, _, titles)) = categories.last_mut() else {
            continue;
        };
        let segments = raw_segments(line);
        let Some(raw_title) = segments.first().map(|s| s.trim()) else {
            continue;
        };
        if let Some(caps) = link_re().captures(raw_title) {
            titles.push(caps[1].to_uppercase());
        }
    }
    categories
}

fn check_alphabetical_order(lines: &[&str]) -> Vec<String> {
    let mut err_msgs = Vec::new();
    for (category, line_num, titles) in categories_content(lines) {
        let mut sorted = titles.clone();
        sorted.sort();
        if sorted != titles {
            err_msgs.push(error_message(
                line_num,
                format!("{category} category is not alphabetical order"),
            ));
        }
    }
    err_msgs
}

fn check_entry(line_num: usize, segments: &[&str]) -> Vec<String> {
    let mut err_msgs = Vec::new();
    err_msgs.extend(check_title(line_num, segments[0]));
    err_msgs.extend(check_description(line_num, segments[1]));
    err_msgs.extend(check_auth(line_num, segments[2]));
    err_msgs.extend(check_https(line_num, segments[3]));
    err_msgs.extend(check_cors(line_num, segments[4]));
    err_msgs
}

fn check_title(line_num: usize, raw_title: &str) -> Vec<String> {
    let mut err_msgs = Vec::new();
    match link_re().captures(raw_title) {
        None => err_msgs.push(error_message(
            line_num,
            "Title syntax should be \"[TITLE](LINK)\"",
        )),
        Some(caps) => {
            if caps[1].to_uppercase().ends_with(" API") {
                err_msgs.push(error_message(
                    line_num,
                    "Title should not end with \"... API\". Every entry is an API here!",
                ));
            }
        }
    }
    err_msgs
}

fn check_description(line_num: usize, description: &str) -> Vec<String> {
    let mut err_msgs = Vec::new();
    let mut chars = description.chars();
    let Some(first_char) = chars.next() else {
        return vec![error_message(line_num, "description is empty")];
    };
    if first_char.is_lowercase() {
        err_msgs.push(error_message(
            line_num,
            "first character of description is not capitalized",
        ));
    }
    if let Some(last_char) = description.chars().last()
        && TRAILING_PUNCTUATION.contains(last_char)
    {
        err_msgs.push(error_message(
            line_num,
            format!("description should not end with {last_char}"),
        ));
    }
    let desc_length = description.chars().count();
    if desc_length > MAX_DESCRIPTION_LENGTH {
        err_msgs.push(error_message(
            line_num,
            format!(
                "description should not exceed {MAX_DESCRIPTION_LENGTH} characters (currently {desc_length})"
            ),
        ));
    }
    err_msgs
}

fn check_auth(line_num: usize, auth: &str) -> Vec<String> {
    let mut err_msgs = Vec::new();
    if auth != "No" && !(auth.starts_with('`') && auth.ends_with('`')) {
        err_msgs.push(error_message(
            line_num,
            "auth value is not enclosed with `backticks`",
        ));
    }
    if !AUTH_KEYS.contains(&auth.replace('`', "").as_str()) {
        err_msgs.push(error_message(
            line_num,
            format!("{auth} is not a valid Auth option"),
        ));
    }
    err_msgs
}

fn check_https(line_num: usize, https: &str) -> Vec<String> {
    if HTTPS_KEYS.contains(&https) {
        Vec::new()
    } else {
        vec![error_message(
            line_num,
            format!("{https} is not a valid HTTPS option"),
        )]
    }
}

fn check_cors(line_num: usize, cors: &str) -> Vec<String> {
    if CORS_KEYS.contains(&cors) {
        Vec::new()
    } else {
        vec![error_message(
            line_num,
            format!("{cors} is not a valid CORS option"),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: &str = "\
* [Animals](#animals)\n\
\n\
### Animals\n\
API | Description | Auth | HTTPS | CORS |\n\
|---|---|---|---|---|\n\
| [Axolotl](http://a) | Axolotl pictures | No | Yes | No |\n\
| [Cats](http://b) | Pictures of cats | `apiKey` | Yes | No |\n\
| [Dogs](http://c) | Dogs, all of them | No | Yes | Unknown |\n";

    #[test]
    fn test_clean_readme_passes() {
        assert_eq!(check_format(CLEAN), Vec::<String>::new());
    }

    #[test]
    fn test_missing_column_is_reported_with_line_number() {
        let text = CLEAN.replace(" | No | Yes | No |", " | No | Yes |");
        let msgs = check_format(&text);
        assert_eq!(msgs.len(), 1);
        assert_eq!(
            msgs[0],
            "(L006) entry does not have all the required columns (have 4, need 5)"
        );
    }

    #[test]
    fn test_segment_padding() {
        let text = CLEAN.replace("| No | Yes | No |", "|No | Yes | No |");
        let msgs = check_format(&text);
        assert!(
            msgs.contains(&"(L006) each segment must start and end with exactly 1 space".to_string()),
            "got {msgs:?}"
        );
    }

    #[test]
    fn test_title_must_be_a_link() {
        let text = CLEAN.replace("[Axolotl](http://a)", "Axolotl");
        let msgs = check_format(&text);
        assert!(msgs.iter().any(|m| m.contains("Title syntax")), "got {msgs:?}");
    }

    #[test]
    fn test_title_must_not_end_with_api() {
        let text = CLEAN.replace("[Axolotl](http://a)", "[Axolotl API](http://a)");
        let msgs = check_format(&text);
        assert!(
            msgs.iter().any(|m| m.contains("should not end with \"... API\"")),
            "got {msgs:?}"
        );
    }

    #[test]
    fn test_description_rules() {
        let text = CLEAN.replace("Axolotl pictures", "axolotl pictures.");
        let msgs = check_format(&text);
        assert!(
            msgs.iter()
                .any(|m| m.contains("first character of description is not capitalized"))
        );
        assert!(msgs.iter().any(|m| m.contains("should not end with .")));
    }

    #[test]
    fn test_description_length_limit() {
        let long = "A".repeat(101);
        let text = CLEAN.replace("Axolotl pictures", &long);
        let msgs = check_format(&text);
        assert!(
            msgs.iter()
                .any(|m| m.contains("should not exceed 100 characters (currently 101)"))
        );
    }

    #[test]
    fn test_auth_values() {
        let text = CLEAN.replace("| `apiKey` |", "| apiKey |");
        let msgs = check_format(&text);
        assert!(
            msgs.iter()
                .any(|m| m.contains("auth value is not enclosed with `backticks`"))
        );

        let text = CLEAN.replace("| `apiKey` |", "| `token` |");
        let msgs = check_format(&text);
        assert!(msgs.iter().any(|m| m.contains("`token` is not a valid Auth option")));
    }

    #[test]
    fn test_https_and_cors_values() {
        let text = CLEAN.replace("| Yes | No |", "| Maybe | No |");
        let msgs = check_format(&text);
        assert!(msgs.iter().any(|m| m.contains("Maybe is not a valid HTTPS option")));

        let text = CLEAN.replace("| Yes | Unknown |", "| Yes | Sometimes |");
        let msgs = check_format(&text);
        assert!(msgs.iter().any(|m| m.contains("Sometimes is not a valid CORS option")));
    }

    #[test]
    fn test_alphabetical_order() {
        let text = CLEAN
            .replace("[Axolotl](http://a)", "[Zebras](http://a)")
            .replace("Axolotl pictures", "Zebra pictures");
        let msgs = check_format(&text);
        assert!(
            msgs.contains(&"(L003) Animals category is not alphabetical order".to_string()),
            "got {msgs:?}"
        );
    }

    #[test]
    fn test_minimum_entries_per_category() {
        let mut text = String::from(CLEAN);
        text.truncate(text.rfind("| [Dogs]").unwrap());
        text.push_str("\n### Birds\nAPI | Description | Auth | HTTPS | CORS |\n|---|---|---|---|---|\n| [Robins](http://r) | Robin sightings | No | Yes | No |\n");
        let msgs = check_format(&text);
        assert!(
            msgs.iter().any(|m| {
                m.contains("Animals category does not have the minimum 3 entries (only has 2)")
            }),
            "got {msgs:?}"
        );
    }

    #[test]
    fn test_category_must_appear_in_index() {
        let text = CLEAN.replace("* [Animals](#animals)", "* [Plants](#plants)");
        let msgs = check_format(&text);
        assert!(
            msgs.iter()
                .any(|m| m.contains("category header (Animals) not added to Index section")),
            "got {msgs:?}"
        );
    }
}
