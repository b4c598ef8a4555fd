//! Core domain types for skillmeta.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, SkillMetaError};

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// Canonical field names that get fuzzily matched against README headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Description,
    Examples,
    Usage,
    Require,
    Exclude,
}

impl Field {
    /// The label headings are compared against.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Description => "description",
            Self::Examples => "examples",
            Self::Usage => "usage",
            Self::Require => "require",
            Self::Exclude => "exclude",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// SkillTarget
// ---------------------------------------------------------------------------

/// The skill a README belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTarget {
    /// Canonical skill name (e.g. `weather-skill`).
    pub name: String,
    /// Author / account identifier.
    pub author: String,
    /// Repository page, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl SkillTarget {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            repo: None,
        }
    }

    /// Build a target from a repository URL of the form
    /// `https://<host>/<author>/<repo>[.git]`.
    pub fn from_repo_url(name: impl Into<String>, repo_url: &str) -> Result<Self> {
        let url = Url::parse(repo_url)
            .map_err(|e| SkillMetaError::parse(format!("invalid repo URL '{repo_url}': {e}")))?;

        let mut segments = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty());

        let (Some(author), Some(repo)) = (segments.next(), segments.next()) else {
            return Err(SkillMetaError::parse(format!(
                "repo URL '{repo_url}' has no <author>/<repo> path"
            )));
        };
        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        let host = url.host_str().unwrap_or_default();

        Ok(Self {
            name: name.into(),
            author: author.to_string(),
            repo: Some(format!("{}://{host}/{author}/{repo}", url.scheme())),
        })
    }

    /// Build a target from whichever identifiers are available: a repository
    /// URL (the explicit `author` overrides the one derived from it) or an
    /// author alone. `Ok(None)` means neither was given.
    pub fn resolve(name: &str, url: Option<&str>, author: Option<&str>) -> Result<Option<Self>> {
        let target = match (url, author) {
            (Some(url), author) => {
                let mut target = Self::from_repo_url(name, url)?;
                if let Some(author) = author {
                    target.author = author.to_string();
                }
                target
            }
            (None, Some(author)) => Self::new(name, author),
            (None, None) => return Ok(None),
        };
        Ok(Some(target))
    }
}

// ---------------------------------------------------------------------------
// SkillSummary
// ---------------------------------------------------------------------------

/// Structured metadata extracted from one skill README.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSummary {
    /// Repository identifier (empty when the caller did not supply one).
    pub repo: String,
    /// Human-readable title.
    pub title: String,
    /// Canonical skill name.
    pub name: String,
    /// Author as written in the README's author section.
    pub author: String,
    /// Account name the skill is published under.
    pub github_username: String,
    /// One-line summary, no trailing period.
    pub short_desc: String,
    /// Full description.
    pub description: String,
    /// Example utterances in document order.
    pub examples: Vec<String>,
    /// Capabilities the skill needs.
    pub requires: Vec<String>,
    /// Platforms/capabilities the skill cannot run with.
    pub excludes: Vec<String>,
}

// ---------------------------------------------------------------------------
// SkillManifest
// ---------------------------------------------------------------------------

/// `skills.toml`: the list of READMEs a batch run should summarize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillManifest {
    #[serde(default)]
    pub skills: Vec<ManifestEntry>,
}

/// One `[[skills]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Canonical skill name.
    pub name: String,
    /// Repository URL; the author is derived from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Explicit author, overriding the one derived from `url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// README path, relative to the manifest. Defaults to `<name>/README.md`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<PathBuf>,
}

impl ManifestEntry {
    /// Resolve the entry into a target. `Ok(None)` means the entry carries
    /// neither a URL nor an author and should be skipped.
    pub fn target(&self) -> Result<Option<SkillTarget>> {
        SkillTarget::resolve(&self.name, self.url.as_deref(), self.author.as_deref())
    }

    /// README location relative to the manifest directory.
    pub fn readme_path(&self) -> PathBuf {
        self.readme
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.name).join("README.md"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_from_github_url() {
        let target =
            SkillTarget::from_repo_url("weather-skill", "https://github.com/MycroftAI/skill-weather.git")
                .expect("parse");
        assert_eq!(target.author, "MycroftAI");
        assert_eq!(target.repo.as_deref(), Some("https://github.com/MycroftAI/skill-weather"));
    }

    #[test]
    fn target_from_url_without_repo_fails() {
        let err = SkillTarget::from_repo_url("x", "https://github.com/MycroftAI").unwrap_err();
        assert!(err.to_string().contains("<author>/<repo>"));

        assert!(SkillTarget::from_repo_url("x", "not a url").is_err());
    }

    #[test]
    fn resolve_prefers_explicit_author() {
        let target = SkillTarget::resolve(
            "timer",
            Some("https://github.com/forslund/skill-timer"),
            Some("someone-else"),
        )
        .expect("resolve")
        .expect("some");
        assert_eq!(target.author, "someone-else");
        assert_eq!(target.repo.as_deref(), Some("https://github.com/forslund/skill-timer"));

        assert!(SkillTarget::resolve("timer", None, None).expect("resolve").is_none());
    }

    #[test]
    fn summary_serializes_with_record_keys() {
        let summary = SkillSummary {
            repo: String::new(),
            title: "Weather".into(),
            name: "weather-skill".into(),
            author: String::new(),
            github_username: "someone".into(),
            short_desc: "Get the forecast".into(),
            description: String::new(),
            examples: vec!["What is the weather?".into()],
            requires: vec!["internet".into()],
            excludes: vec![],
        };

        let json = serde_json::to_value(&summary).expect("serialize");
        for key in [
            "repo",
            "title",
            "name",
            "author",
            "github_username",
            "short_desc",
            "description",
            "examples",
            "requires",
            "excludes",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn manifest_entries_resolve_targets() {
        let manifest: SkillManifest = toml::from_str(
            r#"
[[skills]]
name = "weather-skill"
url = "https://github.com/MycroftAI/skill-weather"

[[skills]]
name = "timer"
author = "forslund"
readme = "timer.md"

[[skills]]
name = "orphan"
"#,
        )
        .expect("parse manifest");
        let skills = manifest.skills;

        let weather = skills[0].target().expect("target").expect("some");
        assert_eq!(weather.author, "MycroftAI");
        assert_eq!(skills[0].readme_path(), PathBuf::from("weather-skill/README.md"));

        let timer = skills[1].target().expect("target").expect("some");
        assert_eq!(timer.author, "forslund");
        assert!(timer.repo.is_none());
        assert_eq!(skills[1].readme_path(), PathBuf::from("timer.md"));

        assert!(skills[2].target().expect("target").is_none());
    }
}
