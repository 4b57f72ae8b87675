use std::sync::LazyLock;

use regex::Regex;

static BLANK_LINE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

pub const ITEM_SEPARATOR: &str = "\n\n";

/// Splits generated text into items separated by at least one blank line.
/// Items are trimmed and empty ones are discarded.
pub fn split_items(text: &str) -> Vec<String> {
    BLANK_LINE_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
