//! Shared types, error model, and configuration for Ebook Studio.
//!
//! This crate is the foundation depended on by all other Ebook Studio crates.
//! It provides:
//! - [`StudioError`] — the unified error type
//! - Domain types ([`Brief`], [`Tone`], [`Ebook`], [`Chapter`], [`AgentLogEntry`])
//! - Configuration ([`AppConfig`], [`Pacing`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, Pacing, PacingConfig, StagePause, config_dir, config_file_path,
    init_config, load_brief_from, load_config, load_config_from,
};
pub use error::{FALLBACK_FAILURE_MESSAGE, Result, StudioError};
pub use types::{
    AgentLogEntry, AgentStatus, Brief, Chapter, Ebook, MAX_CHAPTERS, MAX_WORDS_PER_CHAPTER,
    MIN_CHAPTERS, MIN_WORDS_PER_CHAPTER, RunId, StageId, Tone, ToneProfile,
};
