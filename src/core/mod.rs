// src/core/mod.rs

pub mod engine;
pub mod generator;
pub mod lexicon;
pub mod tagger;
pub mod types;
