//! Deciding whether a README titles itself.

use skillmeta_markdown::{SectionMap, capitalize, normalize_name, ratio, title_case};

/// Title and the raw text the short description is taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInfo<'a> {
    pub title: String,
    pub short_desc: &'a str,
}

/// Resolve the display title for `skill_name`.
///
/// When the first heading resembles the skill name (similarity of the
/// hyphen-normalized forms at least `min_conf`), the heading is the title and
/// its body is the description source. Otherwise the first heading is something
/// generic like "Overview": the skill name is title-cased and the preamble is used.
pub fn find_title_info<'a>(sections: &'a SectionMap, skill_name: &str, min_conf: f64) -> TitleInfo<'a> {
    let first_label = sections.first_label();
    let first_body = sections.get(first_label).unwrap_or_default();

    if ratio(&normalize_name(first_label), &normalize_name(skill_name)) >= min_conf {
        TitleInfo {
            title: capitalize(first_label),
            short_desc: first_body,
        }
    } else {
        TitleInfo {
            title: title_case(&normalize_name(skill_name)),
            short_desc: sections.preamble(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmeta_markdown::split_sections;

    const TITLE_CONF: f64 = 0.3;

    #[test]
    fn self_titled_readme() {
        let map = split_sections("# Weather\nGet the forecast.\n## Examples\n- weather");
        let info = find_title_info(&map, "weather-skill", TITLE_CONF);
        assert_eq!(info.title, "Weather");
        assert_eq!(info.short_desc, "Get the forecast.");
    }

    #[test]
    fn self_titled_readme_ignores_preamble() {
        let map = split_sections("[badge]\n# Weather Skill\nForecasts.\n# Weather Skill Notes\nx");
        let info = find_title_info(&map, "weather-skill", TITLE_CONF);
        assert_eq!(info.title, "Weather Skill");
        assert_eq!(info.short_desc, "Forecasts.");
    }

    #[test]
    fn generic_first_heading_falls_back_to_name() {
        let map = split_sections("A weather skill for you.\n# Overview\nLong text.");
        let info = find_title_info(&map, "weather-skill", TITLE_CONF);
        assert_eq!(info.title, "Weather Skill");
        assert_eq!(info.short_desc, "A weather skill for you.");
    }

    #[test]
    fn lowercase_heading_is_capitalized() {
        let map = split_sections("# mycroft timer\nSet timers.");
        let info = find_title_info(&map, "mycroft-timer", TITLE_CONF);
        assert_eq!(info.title, "Mycroft timer");
    }

    #[test]
    fn no_headings_uses_name_and_preamble() {
        let map = split_sections("Just a description.");
        let info = find_title_info(&map, "my-cool-skill", TITLE_CONF);
        assert_eq!(info.title, "My Cool Skill");
        assert_eq!(info.short_desc, "Just a description.");
    }
}
