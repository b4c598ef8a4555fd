//! Splitting a heading-delimited README into labelled sections.

use tracing::debug;

/// Character that marks a heading line (repeated any number of times).
const HEADING_MARKER: char = '#';

/// Ordered sections of a document.
///
/// Real headings keep the order they were first seen in. Text before the first
/// heading lives in a separate preamble whose label is the empty string; it is
/// always present and always iterated last, so it only ever serves as a fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    headings: Vec<(String, String)>,
    preamble: String,
}

impl SectionMap {
    /// All `(label, body)` pairs: headings in document order, then the preamble as `("", body)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headings
            .iter()
            .map(|(label, body)| (label.as_str(), body.as_str()))
            .chain(std::iter::once(("", self.preamble.as_str())))
    }

    /// Label of the first heading in the document, or `""` when there is none.
    pub fn first_label(&self) -> &str {
        self.headings
            .first()
            .map(|(label, _)| label.as_str())
            .unwrap_or_default()
    }

    /// Body of the section called `label`; `""` addresses the preamble.
    pub fn get(&self, label: &str) -> Option<&str> {
        if label.is_empty() {
            return Some(&self.preamble);
        }
        self.headings
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, body)| body.as_str())
    }

    /// Text before the first heading.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Number of sections including the preamble (never zero).
    pub fn section_count(&self) -> usize {
        self.headings.len() + 1
    }
}

/// Split a document into sections in a single line-oriented pass.
///
/// Every line is trimmed. A line starting with `#` opens a section whose label is
/// the line with surrounding `#` and whitespace removed; a heading seen twice
/// keeps its first position but restarts its body. Other lines are appended to
/// the current section, each preceded by `\n`. Bodies are trimmed at the end and
/// no section is ever dropped, even when empty.
pub fn split_sections(document: &str) -> SectionMap {
    let mut map = SectionMap::default();
    // `None` is the preamble.
    let mut current: Option<usize> = None;

    for line in document.split('\n') {
        let line = line.trim();

        if line.starts_with(HEADING_MARKER) {
            let label = line.trim_matches(|c: char| c == HEADING_MARKER || c.is_whitespace());
            current = if label.is_empty() {
                map.preamble.clear();
                None
            } else if let Some(idx) = map.headings.iter().position(|(l, _)| l == label) {
                map.headings[idx].1.clear();
                Some(idx)
            } else {
                map.headings.push((label.to_string(), String::new()));
                Some(map.headings.len() - 1)
            };
            continue;
        }

        let body = match current {
            Some(idx) => &mut map.headings[idx].1,
            None => &mut map.preamble,
        };
        body.push('\n');
        body.push_str(line);
    }

    for (_, body) in &mut map.headings {
        *body = body.trim().to_string();
    }
    map.preamble = map.preamble.trim().to_string();

    debug!(sections = map.section_count(), "split document into sections");
    map
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
