//! Skill README summarization.
//!
//! This crate turns a README's sections into a [`SkillSummary`]: title
//! resolution, example extraction, and the assembler that ties them together,
//! plus a batch pipeline that runs the summarizer over a manifest of skills.
//!
//! [`SkillSummary`]: skillmeta_shared::SkillSummary

pub mod examples;
pub mod pipeline;
pub mod summary;
pub mod title;

pub use summary::{Summarizer, summarize};
