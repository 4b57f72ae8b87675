use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-\n(?P<suffix>\w)").unwrap());

static PUNCTUATION_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\W_]{3,}$").unwrap());

static BLANK_LINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

const MIN_REPEATED_RUN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no usable text")]
pub struct NoUsableText;

/// Cleans text extracted from a PDF and rejects it when nothing readable is left.
pub fn normalize_text(raw: &str) -> Result<String, NoUsableText> {
    let cleaned = clean_text(raw);
    if cleaned.trim().is_empty() {
        return Err(NoUsableText);
    }
    Ok(cleaned)
}

/// Rejoins hyphenated line breaks, drops decorative lines and collapses blank
/// runs. Passes repeat until the text stops changing, so the result is a
/// fixed point: cleaning it again is a no-op.
pub fn clean_text(raw: &str) -> String {
    let mut current: String = raw.replace("\r\n", "\n").nfkc().collect();

    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(text: &str) -> String {
    let rejoined = rejoin_hyphenated(text);

    let kept: Vec<&str> = rejoined.lines().filter(|line| !is_noise_line(line)).collect();
    let joined = kept.join("\n");

    BLANK_LINE_RUN.replace_all(&joined, "\n\n").into_owned()
}

fn rejoin_hyphenated(text: &str) -> Cow<'_, str> {
    HYPHEN_NEWLINE.replace_all(text, "$prefix$suffix")
}

fn is_noise_line(line: &str) -> bool {
    PUNCTUATION_RULE.is_match(line) || is_repeated_char_run(line)
}

fn is_repeated_char_run(line: &str) -> bool {
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    let mut count = 1;
    for ch in chars {
        if ch != first {
            return false;
        }
        count += 1;
    }

    count >= MIN_REPEATED_RUN
}
