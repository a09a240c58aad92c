// Portfolio content - the read-only data source behind every section
//
// All page copy lives here: personal info, education and experience
// timelines, skill levels, project records, and contact details. The
// collections are fixed at load time and consumed by the render layer;
// nothing in the app mutates them.
//
// Content comes from a TOML file (`folio content --init` scaffolds one) or
// falls back to the bundled sample portfolio. An invalid file fails fast
// with the parse error rather than silently rendering defaults.

mod defaults;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identity block for the Home section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    /// Lead-in shown before the name ("Hi, I'm")
    pub greeting: String,
    /// Role lines rotated under the name
    pub roles: Vec<String>,
    pub summary: String,
}

/// One stat tile in the About section ("20+ projects")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatTile {
    pub label: String,
    pub value: String,
}

/// About section copy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub role_title: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<StatTile>,
}

/// One entry in the education or experience timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub organization: String,
    pub description: String,
}

/// A named skill with a proficiency percentage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency 0-100, rendered as a gauge
    pub level: u8,
}

/// A titled group of skills (one column in the Skills section)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

/// One project record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Contact channels shown beside the form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// External profile link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// The complete portfolio: every collection the page renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub about: AboutContent,
    pub education: Vec<TimelineEntry>,
    pub experience: Vec<TimelineEntry>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub contact: ContactDetails,
    pub social: Vec<SocialLink>,
}

impl Portfolio {
    /// Load content from a TOML file, or the bundled sample when no path
    /// is configured
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read content file {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("Failed to parse content file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Serialize to TOML for `folio content --init`
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize portfolio content")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_portfolio_has_every_collection() {
        let portfolio = Portfolio::default();
        assert!(!portfolio.personal.name.is_empty());
        assert!(!portfolio.personal.roles.is_empty());
        assert!(!portfolio.about.paragraphs.is_empty());
        assert!(!portfolio.education.is_empty());
        assert!(!portfolio.experience.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.social.is_empty());
        assert!(portfolio.contact.email.contains('@'));
    }

    #[test]
    fn default_portfolio_round_trips_through_toml() {
        let portfolio = Portfolio::default();
        let toml_str = portfolio.to_toml().expect("serializes");
        let parsed: Portfolio = toml::from_str(&toml_str).expect("parses back");
        assert_eq!(parsed.personal.name, portfolio.personal.name);
        assert_eq!(parsed.projects.len(), portfolio.projects.len());
        assert_eq!(parsed.skills.len(), portfolio.skills.len());
    }

    #[test]
    fn skill_levels_stay_in_percent_range() {
        let portfolio = Portfolio::default();
        for group in &portfolio.skills {
            for skill in &group.skills {
                assert!(skill.level <= 100, "{} exceeds 100%", skill.name);
            }
        }
    }

    #[test]
    fn missing_content_path_uses_bundled_sample() {
        let portfolio = Portfolio::load(None).expect("defaults load");
        assert_eq!(portfolio.personal.name, Portfolio::default().personal.name);
    }

    #[test]
    fn unreadable_content_path_is_an_error() {
        let result = Portfolio::load(Some(Path::new("/nonexistent/portfolio.toml")));
        assert!(result.is_err());
    }
}
