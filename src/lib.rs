// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod oracle;
pub mod persistence;

pub use crate::config::BuildConfig;
pub use crate::core::engine::LexiconBuilder;
pub use crate::error::LexiconError;
pub use crate::oracle::{FloorOracle, FrequencyOracle, ZipfTable};
