//! Portfolio: the candidate's project links, matched against a posting's skills.
//!
//! Matching is a case-insensitive intersection between the posting's skill
//! list and each entry's tag set. No I/O; the same input always yields the
//! same links in portfolio order.

pub mod handlers;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of entries returned when no tag intersects the posting's skills.
const FALLBACK_LINK_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
}

/// A matched portfolio entry, rendered as a markdown link by `Display`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioLink {
    pub title: String,
    pub url: String,
}

impl fmt::Display for PortfolioLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.title, self.url)
    }
}

impl From<&PortfolioEntry> for PortfolioLink {
    fn from(entry: &PortfolioEntry) -> Self {
        Self {
            title: entry.title.clone(),
            url: entry.url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Portfolio {
    entries: Vec<PortfolioEntry>,
}

impl Default for Portfolio {
    fn default() -> Self {
        let entry = |title: &str, url: &str, tags: &[&str]| PortfolioEntry {
            title: title.to_string(),
            url: url.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };

        Self {
            entries: vec![
                entry(
                    "AI Resume Analyzer",
                    "https://github.com/username/ai-resume-analyzer",
                    &["AI", "machine learning", "NLP", "resume"],
                ),
                entry(
                    "Personal Website",
                    "https://username.github.io",
                    &["web development", "portfolio", "React"],
                ),
                entry(
                    "Chatbot Assistant",
                    "https://github.com/username/chatbot-assistant",
                    &["chatbot", "AI", "dialogue systems"],
                ),
                entry(
                    "Grammar Scoring Engine",
                    "https://github.com/username/grammar-scoring",
                    &["NLP", "grammar", "scoring"],
                ),
            ],
        }
    }
}

impl Portfolio {
    pub fn new(entries: Vec<PortfolioEntry>) -> Result<Self> {
        if entries.is_empty() {
            anyhow::bail!("Portfolio must contain at least one entry");
        }
        Ok(Self { entries })
    }

    /// Loads entries from a JSON array of `{title, url, tags}` objects.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read portfolio file {}", path.display()))?;
        let entries: Vec<PortfolioEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Portfolio file {} is not valid JSON", path.display()))?;
        info!("Loaded {} portfolio entries from {}", entries.len(), path.display());
        Self::new(entries)
    }

    /// Loads from `path` when given, otherwise the built-in entries.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    /// Returns every entry whose tags intersect `skills` (case-insensitive).
    /// With no intersection, returns the first two entries instead.
    pub fn query_links(&self, skills: &[String]) -> Vec<PortfolioLink> {
        let wanted: HashSet<String> = skills.iter().map(|s| s.trim().to_lowercase()).collect();

        let matched: Vec<PortfolioLink> = self
            .entries
            .iter()
            .filter(|entry| {
                entry
                    .tags
                    .iter()
                    .any(|tag| wanted.contains(&tag.trim().to_lowercase()))
            })
            .map(PortfolioLink::from)
            .collect();

        if matched.is_empty() {
            return self
                .entries
                .iter()
                .take(FALLBACK_LINK_COUNT)
                .map(PortfolioLink::from)
                .collect();
        }
        matched
    }
}

/// Joins links as `[title](url), [title](url)` for prompt embedding.
pub fn format_links(links: &[PortfolioLink]) -> String {
    links
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn titles(links: &[PortfolioLink]) -> Vec<&str> {
        links.iter().map(|l| l.title.as_str()).collect()
    }

    #[test]
    fn test_matches_in_portfolio_order() {
        let links = Portfolio::default().query_links(&skills(&["NLP"]));
        assert_eq!(titles(&links), vec!["AI Resume Analyzer", "Grammar Scoring Engine"]);
    }

    #[test]
    fn test_matching_ignores_case() {
        let portfolio = Portfolio::default();
        let lower = portfolio.query_links(&skills(&["ai", "react"]));
        let upper = portfolio.query_links(&skills(&["AI", "REACT"]));
        let mixed = portfolio.query_links(&skills(&["Ai", "ReAcT"]));
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(
            titles(&lower),
            vec!["AI Resume Analyzer", "Personal Website", "Chatbot Assistant"]
        );
    }

    #[test]
    fn test_multi_word_tags_match_whole() {
        let links = Portfolio::default().query_links(&skills(&["Machine Learning"]));
        assert_eq!(titles(&links), vec!["AI Resume Analyzer"]);
    }

    #[test]
    fn test_no_intersection_falls_back_to_first_two() {
        let portfolio = Portfolio::default();
        for input in [skills(&["COBOL", "Fortran"]), skills(&[])] {
            let links = portfolio.query_links(&input);
            assert_eq!(links.len(), 2);
            assert_eq!(titles(&links), vec!["AI Resume Analyzer", "Personal Website"]);
        }
    }

    #[test]
    fn test_fallback_with_single_entry_portfolio() {
        let portfolio = Portfolio::new(vec![PortfolioEntry {
            title: "Only".into(),
            url: "https://example.com".into(),
            tags: vec!["rust".into()],
        }])
        .unwrap();
        assert_eq!(portfolio.query_links(&skills(&["go"])).len(), 1);
    }

    #[test]
    fn test_format_links_as_markdown() {
        let links = Portfolio::default().query_links(&skills(&["grammar"]));
        assert_eq!(
            format_links(&links),
            "[Grammar Scoring Engine](https://github.com/username/grammar-scoring)"
        );
        let fallback = Portfolio::default().query_links(&[]);
        assert_eq!(
            format_links(&fallback),
            "[AI Resume Analyzer](https://github.com/username/ai-resume-analyzer), \
             [Personal Website](https://username.github.io)"
        );
    }

    #[test]
    fn test_empty_portfolio_is_rejected() {
        assert!(Portfolio::new(vec![]).is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(
            &path,
            r#"[{"title": "Rust CLI", "url": "https://example.com/cli", "tags": ["Rust", "CLI"]}]"#,
        )
        .unwrap();

        let portfolio = Portfolio::load(Some(&path)).unwrap();
        assert_eq!(portfolio.entries().len(), 1);
        assert_eq!(titles(&portfolio.query_links(&skills(&["rust"]))), vec!["Rust CLI"]);
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        assert!(Portfolio::load(Some(Path::new("/nonexistent/portfolio.json"))).is_err());
    }
}
