//! README structure and text primitives.
//!
//! Splits heading-delimited Markdown into sections, fuzzily resolves canonical
//! field names to the headings authors actually used, and normalizes the text
//! fragments pulled out of them.

pub mod resolve;
pub mod sections;
pub mod similarity;
pub mod text;

pub use resolve::{DEFAULT_MIN_CONF, Resolver, find_section};
pub use sections::{SectionMap, split_sections};
pub use similarity::ratio;
pub use text::{capitalize, format_sentence, normalize_name, parse_whitespace, title_case};
