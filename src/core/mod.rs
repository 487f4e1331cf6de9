// src/core/mod.rs
pub mod engine;
pub mod normalize;
pub mod types;
