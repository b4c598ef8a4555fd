//! Fuzzy lookup of a canonical field among author-chosen headings.
//!
//! READMEs say "Usage", "How to use" or "Examples" for the same thing, so a
//! field is resolved to whichever heading is most similar to its name, as long
//! as the similarity clears a threshold.

use tracing::trace;

use skillmeta_shared::{Field, Thresholds};

use crate::sections::SectionMap;
use crate::similarity::ratio;

/// Minimum similarity used when a caller has no field-specific threshold.
pub const DEFAULT_MIN_CONF: f64 = 0.5;

/// Body of the heading most similar to `name`, or `None` when the best score
/// is below `min_conf`.
///
/// Every label is scored, the empty preamble label included. Ties go to the
/// section seen first. The threshold is inclusive. The body is returned as-is.
pub fn find_section<'a>(name: &str, sections: &'a SectionMap, min_conf: f64) -> Option<&'a str> {
    let mut best: Option<(&str, &str, f64)> = None;

    for (label, body) in sections.iter() {
        let score = ratio(label, name);
        if best.is_none_or(|(_, _, top)| score > top) {
            best = Some((label, body, score));
        }
    }

    let (label, body, score) = best?;
    trace!(field = name, heading = label, score, min_conf, "best heading match");

    (score >= min_conf).then_some(body)
}

/// Resolves canonical [`Field`]s against one document with per-field thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    sections: &'a SectionMap,
    thresholds: Thresholds,
}

impl<'a> Resolver<'a> {
    pub fn new(sections: &'a SectionMap, thresholds: Thresholds) -> Self {
        Self {
            sections,
            thresholds,
        }
    }

    /// Body of the section resolved for `field`, if any heading matches well enough.
    pub fn find(&self, field: Field) -> Option<&'a str> {
        find_section(field.name(), self.sections, self.thresholds.for_field(field))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
