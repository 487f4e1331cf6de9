// File: src/config.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_WORDLIST_PATH: &str = "public/wordswords/wordlist.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "public/wordswords/zipf.tsv";
pub const DEFAULT_TABLE_PATH: &str = "data/wordswords/wordfreq.tsv";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Everything one build run needs to know about where to read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Source word list, one candidate per line.
    pub input_path: PathBuf,
    /// Destination of the scored `word\tscore` table.
    pub output_path: PathBuf,
    /// Optional precomputed frequency table backing the oracle.
    #[serde(default)]
    pub table_path: Option<PathBuf>,
    /// Language tag passed to the oracle with every word.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl BuildConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            table_path: None,
            language: default_language(),
        }
    }

    pub fn with_table(mut self, table_path: impl Into<PathBuf>) -> Self {
        self.table_path = Some(table_path.into());
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORDLIST_PATH, DEFAULT_OUTPUT_PATH).with_table(DEFAULT_TABLE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_wordswords_assets() {
        let config = BuildConfig::default();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_WORDLIST_PATH));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.table_path, Some(PathBuf::from(DEFAULT_TABLE_PATH)));
        assert_eq!(config.language, "en");
    }

    #[test]
    fn language_defaults_when_missing_from_json() {
        let config: BuildConfig =
            serde_json::from_str(r#"{"input_path":"a.txt","output_path":"b.tsv"}"#).unwrap();
        assert_eq!(config, BuildConfig::new("a.txt", "b.tsv"));
    }
}
