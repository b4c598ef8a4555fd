//! README → [`SkillSummary`] assembly.

use tracing::{debug, instrument};

use skillmeta_markdown::{Resolver, format_sentence, parse_whitespace, split_sections};
use skillmeta_shared::{ExtractionConfig, Field, Result, SkillMetaError, SkillSummary, SkillTarget};

use crate::examples::ExampleExtractor;
use crate::title::find_title_info;

/// Builds one [`SkillSummary`] per README. Holds configuration only, so a
/// single instance can be shared across threads and documents.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: ExtractionConfig,
    examples: ExampleExtractor,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl Summarizer {
    pub fn new(config: ExtractionConfig) -> Self {
        let examples = ExampleExtractor::new(config.wake_words.clone());
        Self { config, examples }
    }

    /// Extract the structured record for `target` from its README text.
    ///
    /// Fields whose heading cannot be found come back empty; only a blank skill
    /// name is rejected.
    #[instrument(skip_all, fields(skill = %target.name))]
    pub fn summarize(&self, document: &str, target: &SkillTarget) -> Result<SkillSummary> {
        if target.name.trim().is_empty() {
            return Err(SkillMetaError::validation("skill name must not be empty"));
        }

        let thresholds = self.config.thresholds;
        let sections = split_sections(document);
        let resolver = Resolver::new(&sections, thresholds);

        let title_info = find_title_info(&sections, &target.name, thresholds.title);
        let short_desc = format_sentence(&parse_whitespace(&title_info.short_desc.replace('\n', " ")))
            .trim_end_matches('.')
            .to_string();

        let author = resolver.find(Field::Author).unwrap_or_default().to_string();
        let description = format_sentence(&parse_whitespace(
            resolver.find(Field::Description).unwrap_or_default(),
        ));
        let examples = self.examples.extract(&resolver);
        let requires = tokens(resolver.find(Field::Require));
        let excludes = tokens(resolver.find(Field::Exclude));

        debug!(
            title = %title_info.title,
            examples = examples.len(),
            requires = requires.len(),
            excludes = excludes.len(),
            "summary assembled"
        );

        Ok(SkillSummary {
            repo: target.repo.clone().unwrap_or_default(),
            title: title_info.title,
            name: target.name.clone(),
            author,
            github_username: target.author.clone(),
            short_desc,
            description,
            examples,
            requires,
            excludes,
        })
    }
}

/// Summarize a README with the default configuration.
pub fn summarize(document: &str, name: &str, author: &str) -> Result<SkillSummary> {
    Summarizer::default().summarize(document, &SkillTarget::new(name, author))
}

/// Whitespace-separated tokens of a resolved section, or none.
fn tokens(body: Option<&str>) -> Vec<String> {
    parse_whitespace(body.unwrap_or_default())
        .split_whitespace()
        .map(String::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
