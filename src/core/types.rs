// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A normalized word from the source list: lowercase, trimmed and purely alphabetic.
/// Only the normalization chain can build one, so every instance upholds that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry(pub(crate) String);

impl WordEntry {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A word paired with the score the frequency oracle gave it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub word: WordEntry,
    pub score: f64,
}

impl ScoredEntry {
    /// The score as it appears in the output table: fixed point, three decimals.
    pub fn formatted_score(&self) -> String {
        format!("{:.3}", self.score)
    }
}

/// What a single run did. Serialized into the summary notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub wordlist: PathBuf,
    pub output: PathBuf,
    /// Rows written.
    pub words: usize,
    /// Lines dropped by the filter chain (blanks, comments, non-alphabetic).
    pub filtered: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_always_three_decimals() {
        let word = WordEntry("cat".to_string());
        let cases = [(4.5, "4.500"), (0.0, "0.000"), (3.14159, "3.142"), (-1.25, "-1.250")];
        for (score, expected) in cases {
            let entry = ScoredEntry { word: word.clone(), score };
            assert_eq!(entry.formatted_score(), expected);
        }
    }

    #[test]
    fn summary_serializes_with_paths() {
        let summary = BuildSummary {
            wordlist: PathBuf::from("in.txt"),
            output: PathBuf::from("out/zipf.tsv"),
            words: 2,
            filtered: 3,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"wordlist":"in.txt","output":"out/zipf.tsv","words":2,"filtered":3}"#
        );
    }
}
