//! Shared types, error model, and configuration for skillmeta.
//!
//! This crate is the foundation depended on by all other skillmeta crates.
//! It provides:
//! - [`SkillMetaError`] — the unified error type
//! - Domain types ([`Field`], [`SkillTarget`], [`SkillSummary`], [`SkillManifest`])
//! - Configuration ([`AppConfig`], [`ExtractionConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, ExtractionConfig, Thresholds, config_dir, config_file_path,
    init_config, load_config, load_config_from, validate_config,
};
pub use error::{Result, SkillMetaError};
pub use types::{Field, ManifestEntry, SkillManifest, SkillSummary, SkillTarget};
