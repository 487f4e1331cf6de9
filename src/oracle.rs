// File: src/oracle.rs
use crate::error::{LexiconError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Column separator for frequency tables: a tab or a run of two or more whitespace characters.
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t|\s{2,}").unwrap());

/// Score returned for any word the oracle has never seen.
pub const FLOOR_SCORE: f64 = 0.0;

/// Maps a (word, language) pair to a Zipf-style frequency score.
/// Higher is more common. Implementations must be pure and must never fail:
/// unknown words get a floor value instead of an error.
pub trait FrequencyOracle {
    fn score(&self, word: &str, language: &str) -> f64;
}

/// Any `Fn(word, language) -> f64` can act as an oracle, which keeps test fakes short.
impl<F> FrequencyOracle for F
where
    F: Fn(&str, &str) -> f64,
{
    fn score(&self, word: &str, language: &str) -> f64 {
        self(word, language)
    }
}

/// Knows no words at all. Used when no frequency table is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorOracle;

impl FrequencyOracle for FloorOracle {
    fn score(&self, _word: &str, _language: &str) -> f64 {
        FLOOR_SCORE
    }
}

/// How many table rows were accepted vs. skipped while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    pub kept: usize,
    pub skipped: usize,
}

/// A precomputed `word -> zipf` table for a single language.
///
/// The source format is one `<word>\t<zipf>` pair per line. Columns may also be
/// separated by two or more spaces. Blank lines and `#` comments are ignored;
/// rows whose word is not `[a-z]+` or whose score is not a finite number are skipped.
#[derive(Debug, Clone, Default)]
pub struct ZipfTable {
    language: String,
    scores: HashMap<String, f64>,
    stats: TableStats,
}

impl ZipfTable {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            ..Default::default()
        }
    }

    pub fn load(path: &Path, language: &str) -> Result<Self> {
        let file = File::open(path).map_err(|e| LexiconError::io(path, e))?;
        let table = Self::from_reader(BufReader::new(file), language)
            .map_err(|e| LexiconError::io(path, e))?;
        debug!(
            path = %path.display(),
            kept = table.stats.kept,
            skipped = table.stats.skipped,
            "Loaded frequency table"
        );
        Ok(table)
    }

    pub fn from_reader<R: BufRead>(reader: R, language: &str) -> std::io::Result<Self> {
        let mut table = Self::new(language);

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match parse_row(trimmed) {
                Some((word, zipf)) => {
                    table.insert(word, zipf);
                    table.stats.kept += 1;
                }
                None => table.stats.skipped += 1,
            }
        }
        Ok(table)
    }

    /// First score wins if a word appears more than once.
    pub fn insert(&mut self, word: String, zipf: f64) {
        self.scores.entry(word).or_insert(zipf);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        self.stats
    }
}

impl FrequencyOracle for ZipfTable {
    fn score(&self, word: &str, language: &str) -> f64 {
        if language != self.language {
            return FLOOR_SCORE;
        }
        self.scores.get(word).copied().unwrap_or(FLOOR_SCORE)
    }
}

fn parse_row(line: &str) -> Option<(String, f64)> {
    let mut fields = SEPARATOR_RE.split(line);
    let raw_word = fields.next().filter(|w| !w.is_empty())?;
    let raw_zipf = fields.next().filter(|z| !z.is_empty())?;

    let word = raw_word.to_lowercase();
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    let zipf: f64 = raw_zipf.trim().parse().ok()?;
    if !zipf.is_finite() {
        return None;
    }
    Some((word, zipf))
}
