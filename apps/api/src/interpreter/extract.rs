//! Keyword allow-lists and parameter extraction from a lower-cased query.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::interpreter::Query;

/// Any of these in a query makes it a skill question.
pub const SKILL_TRIGGERS: &[&str] = &[
    "java",
    "react",
    "python",
    "javascript",
    "typescript",
    "node",
    "aws",
    "docker",
];

/// Extraction priority: the first keyword found wins, even when several occur.
pub const SKILL_PRIORITY: &[&str] = &[
    "java",
    "react",
    "python",
    "javascript",
    "aws",
    "typescript",
    "node",
    "docker",
];

/// Skills recognised inside "top" and location questions.
pub const HEADLINE_SKILLS: &[&str] = &["java", "react", "python"];

pub const LOCATIONS: &[&str] = &["seattle", "san francisco", "new york", "austin", "remote"];

static YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\+?\s*years?").expect("years pattern is valid"));

/// First keyword of `keywords` (in list order) contained in the query.
pub fn first_keyword(query: &Query, keywords: &[&'static str]) -> Option<&'static str> {
    keywords.iter().copied().find(|k| query.contains(k))
}

/// Minimum years of experience, e.g. "5+ years" or "3 year". Only ASCII digits
/// count. Values too large for `u32` saturate instead of being rejected.
pub fn min_years(query: &Query) -> Option<u32> {
    let digits = YEARS_RE.captures(query.lower())?.get(1)?.as_str();
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

/// Case-insensitive occurrence of `keyword` in `text` that is not glued to a
/// neighbouring ASCII letter or digit. "java" is found in "Java" and "Core Java"
/// but not in "JavaScript"; "node" is found in "Node.js".
pub fn contains_word(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    let text = text.to_lowercase();
    let keyword = keyword.to_lowercase();

    text.match_indices(&keyword).any(|(start, matched)| {
        let end = start + matched.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(|c| c.is_ascii_alphanumeric())
            && !after.is_some_and(|c| c.is_ascii_alphanumeric())
    })
}

/// "san francisco" -> "San francisco".
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
