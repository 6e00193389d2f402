//! Core pipeline orchestration and content assembly for Ebook Studio.
//!
//! This crate ties seed derivation, phrase-pool selection, the content
//! assemblers, and ebook assembly into the four-stage generation run
//! ([`pipeline::Studio::generate`]), plus Markdown/JSON export.

pub mod assembler;
pub mod board;
pub mod compose;
pub mod export;
pub mod pipeline;
pub mod pool;
pub mod seed;
