//! Fragment cleanup: whitespace normalization and sentence formatting.
//!
//! Each helper is a function `&str -> String` so they can be chained the same
//! way regardless of where the fragment came from (heading body, bullet item,
//! skill name).

use std::sync::LazyLock;

use regex::{Captures, Regex};

// ---------------------------------------------------------------------------
// Whitespace
// ---------------------------------------------------------------------------

/// Normalize whitespace in a free-text fragment.
///
/// A lone `\n` (a soft wrap inside a paragraph) becomes a space, a run of two
/// or more `\n` collapses to a single `\n`, and runs of spaces collapse to one
/// space. Nothing else is touched.
pub fn parse_whitespace(s: &str) -> String {
    static NEWLINES_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n+").expect("valid regex"));
    static SPACES_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex"));

    let joined = NEWLINES_RE.replace_all(s, |caps: &Captures| {
        if caps[0].len() == 1 { " " } else { "\n" }
    });

    SPACES_RE.replace_all(&joined, " ").into_owned()
}

// ---------------------------------------------------------------------------
// Sentences
// ---------------------------------------------------------------------------

/// Upper-case the first character without lowercasing the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize and make sure the fragment ends with punctuation.
///
/// A period is appended only when the last character is alphanumeric, so
/// `"done?"` stays `"Done?"`.
pub fn format_sentence(s: &str) -> String {
    let mut out = capitalize(s);
    if out.chars().last().is_some_and(char::is_alphanumeric) {
        out.push('.');
    }
    out
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Lower-case a skill name and turn hyphens into spaces (`Weather-Skill` → `weather skill`).
pub fn normalize_name(s: &str) -> String {
    s.to_lowercase().replace('-', " ")
}

/// Title-case a phrase: a letter is upper-cased when it follows a non-letter
/// and lower-cased otherwise.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_wraps_become_spaces() {
        assert_eq!(parse_whitespace("one\ntwo"), "one two");
    }

    #[test]
    fn paragraph_breaks_collapse() {
        assert_eq!(parse_whitespace("one\n\n\n\ntwo"), "one\ntwo");
    }

    #[test]
    fn space_runs_collapse() {
        assert_eq!(parse_whitespace("a    b \n  c"), "a b c");
    }

    #[test]
    fn tabs_are_left_alone() {
        assert_eq!(parse_whitespace("a\t\tb"), "a\t\tb");
    }

    #[test]
    fn whitespace_is_idempotent_on_normalized_text() {
        let once = parse_whitespace("Reads  the\nforecast   for  your\n  location.");
        assert_eq!(once, "Reads the forecast for your location.");
        assert_eq!(parse_whitespace(&once), once);
    }

    #[test]
    fn second_pass_joins_paragraphs() {
        // Paragraph breaks survive one pass as a single `\n`, which a second
        // pass treats as a soft wrap.
        let once = parse_whitespace("a\n\n\nb");
        assert_eq!(once, "a\nb");
        assert_eq!(parse_whitespace(&once), "a b");
    }

    #[test]
    fn format_sentence_cases() {
        assert_eq!(format_sentence(""), "");
        assert_eq!(format_sentence("nasa api key"), "Nasa api key.");
        assert_eq!(format_sentence("already done?"), "Already done?");
        assert_eq!(format_sentence("set a timer for 5"), "Set a timer for 5.");
        assert_eq!(format_sentence("ends with a quote)"), "Ends with a quote)");
    }

    #[test]
    fn capitalize_keeps_acronyms() {
        assert_eq!(capitalize("ask NASA about ISS"), "Ask NASA about ISS");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn normalize_name_replaces_hyphens() {
        assert_eq!(normalize_name("Weather-Skill"), "weather skill");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("weather skill"), "Weather Skill");
        assert_eq!(title_case("mYCROFT  timer"), "Mycroft  Timer");
        assert_eq!(title_case("skill 2go"), "Skill 2Go");
    }
}
