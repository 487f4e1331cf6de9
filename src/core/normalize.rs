// src/core/normalize.rs
use crate::core::types::WordEntry;
use regex::Regex;
use std::sync::LazyLock;

/// Letters only: Lu, Ll, Lt, Lm, Lo. Letter numbers (Nl) and combining marks don't count.
static LETTERS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{L}+$").unwrap());

/// Every line boundary a word list might use, including a lone `\r` and the Unicode separators.
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").unwrap()
});

/// Why a line was dropped. Only used for counting and trace logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Blank,
    Comment,
    NotAlphabetic,
}

/// Splits raw text into lines. A terminator at the very end does not open an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = match LINE_BREAK_RE.find_iter(text).last() {
        Some(m) if m.end() == text.len() => &text[..m.start()],
        _ => text,
    };
    let empty = text.is_empty();
    LINE_BREAK_RE.split(body).filter(move |_| !empty)
}

/// Runs one raw line through the filter chain:
/// trim, lowercase, then drop blanks, `#` comments and anything non-alphabetic.
pub fn normalize_line(line: &str) -> Result<WordEntry, Rejection> {
    let word = line.trim().to_lowercase();
    if word.is_empty() {
        return Err(Rejection::Blank);
    }
    if word.starts_with('#') {
        return Err(Rejection::Comment);
    }
    if !LETTERS_RE.is_match(&word) {
        return Err(Rejection::NotAlphabetic);
    }
    Ok(WordEntry(word))
}
