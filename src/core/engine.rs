use crate::config::BuildConfig;
use crate::core::normalize::{normalize_line, split_lines};
use crate::core::types::{BuildSummary, ScoredEntry, WordEntry};
use crate::error::{LexiconError, Result};
use crate::oracle::FrequencyOracle;
use crate::persistence::write_lexicon;
use std::fs;
use tracing::{info, trace};

/// Turns a word list into a scored lexicon.
///
/// One run is a single linear pass: read the whole list, filter it, score each
/// surviving word and write the table. Duplicates are kept as separate rows.
pub struct LexiconBuilder<'a> {
    config: BuildConfig,
    oracle: &'a dyn FrequencyOracle,
}

impl<'a> LexiconBuilder<'a> {
    pub fn new(config: BuildConfig, oracle: &'a dyn FrequencyOracle) -> Self {
        Self { config, oracle }
    }

    /// Reads the word list and returns the entries that survive the filter chain,
    /// in input order, together with how many lines were dropped.
    pub fn read_words(&self) -> Result<(Vec<WordEntry>, usize)> {
        let path = &self.config.input_path;
        if !path.exists() {
            return Err(LexiconError::MissingInput { path: path.clone() });
        }
        let raw = fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
        Ok(filter_lines(split_lines(&raw)))
    }

    pub fn score_words(&self, words: Vec<WordEntry>) -> Vec<ScoredEntry> {
        words
            .into_iter()
            .map(|word| {
                let score = self.oracle.score(word.as_str(), &self.config.language);
                ScoredEntry { word, score }
            })
            .collect()
    }

    /// Runs the full pipeline. Nothing is written if the word list is missing.
    pub fn build(&self) -> Result<BuildSummary> {
        let (words, filtered) = self.read_words()?;
        info!(
            wordlist = %self.config.input_path.display(),
            words = words.len(),
            filtered,
            "Read word list"
        );

        let scored = self.score_words(words);
        write_lexicon(&scored, &self.config.output_path)?;
        info!(output = %self.config.output_path.display(), rows = scored.len(), "Wrote lexicon");

        Ok(BuildSummary {
            wordlist: self.config.input_path.clone(),
            output: self.config.output_path.clone(),
            words: scored.len(),
            filtered,
        })
    }
}

/// Applies `normalize_line` to every line, keeping order and duplicates.
pub fn filter_lines<'l, I>(lines: I) -> (Vec<WordEntry>, usize)
where
    I: IntoIterator<Item = &'l str>,
{
    let mut words = Vec::new();
    let mut filtered = 0;
    for (idx, line) in lines.into_iter().enumerate() {
        match normalize_line(line) {
            Ok(word) => words.push(word),
            Err(reason) => {
                trace!(line = idx + 1, ?reason, "Skipping line");
                filtered += 1;
            }
        }
    }
    (words, filtered)
}
