// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    /// The word list is absent. Raised before anything is written.
    #[error("Missing word list at {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write lexicon row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to replace output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LexiconError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LexiconError>;
