// src/lib.rs

pub mod core;
pub mod persistence;
pub use crate::core::engine::TranslationEngine;
