//! Example utterance extraction.
//!
//! Bulleted lines under the examples (or usage) heading are rewritten into
//! clean utterances: quotes and wake words removed, questions marked as
//! questions, and sentence punctuation enforced.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use skillmeta_markdown::{Resolver, format_sentence, parse_whitespace};
use skillmeta_shared::Field;

/// Bulleted line: `-` or `*` after optional indentation; captures the rest of the line.
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*](.*)$").expect("valid regex"));

/// Interrogative opener, optionally contracted, followed by a space.
static QUESTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:who|what|when|where)(?:'s|s|'d|d|'re|re)? ").expect("valid regex")
});

/// Raw bullet text from the examples section, falling back to the usage section
/// when the examples heading is missing or empty.
///
/// Returns an empty list when neither heading resolves to any text.
pub fn find_examples<'a>(resolver: &Resolver<'a>) -> Vec<&'a str> {
    let Some(body) = resolver
        .find(Field::Examples)
        .filter(|body| !body.is_empty())
        .or_else(|| resolver.find(Field::Usage))
    else {
        debug!("no examples or usage section");
        return Vec::new();
    };

    BULLET_RE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Rewrite one raw bullet into a canonical example utterance.
pub fn parse_example(raw: &str, wake_words: &[String]) -> String {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '`'));
    let normalized = parse_whitespace(trimmed);

    // Keep only the quoted phrase when commentary follows it.
    let mut example = normalized.split(['"', '`']).next().unwrap_or_default();

    for wake_word in wake_words {
        if let Some(rest) = strip_prefix_ignore_case(example, wake_word) {
            example = rest;
        }
    }
    let example = example.trim_matches([' ', ',']);

    if QUESTION_RE.is_match(example) {
        let question = format!("{}?", example.trim_end_matches(['?', '.']));
        return format_sentence(&question);
    }

    format_sentence(example)
}

/// Strip `prefix` from the front of `s`, comparing case-insensitively.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = s.chars();
    for expected in prefix.chars() {
        let actual = rest.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(rest.as_str())
}

/// Extracts and normalizes example utterances with a fixed wake-word list.
#[derive(Debug, Clone)]
pub struct ExampleExtractor {
    wake_words: Vec<String>,
}

impl ExampleExtractor {
    pub fn new(wake_words: Vec<String>) -> Self {
        Self { wake_words }
    }

    /// Normalized examples in document order. Duplicates and empty strings are kept.
    pub fn extract(&self, resolver: &Resolver<'_>) -> Vec<String> {
        find_examples(resolver)
            .into_iter()
            .map(|raw| parse_example(raw, &self.wake_words))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
