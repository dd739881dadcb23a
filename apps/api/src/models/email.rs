use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::posting::JobPosting;
use crate::portfolio::PortfolioLink;

/// Downloadable form of a generated email.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadLink {
    pub filename: String,
    /// `data:text/plain;base64,...`, usable directly as an anchor `href`.
    pub data_url: String,
}

impl DownloadLink {
    pub fn for_email(candidate_name: &str, email: &str) -> Self {
        Self {
            filename: download_filename(candidate_name),
            data_url: format!("data:text/plain;base64,{}", STANDARD.encode(email.as_bytes())),
        }
    }
}

/// The final composed email. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct EmailDraft {
    pub email: String,
    pub posting: JobPosting,
    pub postings: Vec<JobPosting>,
    pub portfolio_links: Vec<PortfolioLink>,
    pub download: DownloadLink,
    pub generated_at: DateTime<Utc>,
}

/// `cold_email_<Name_With_Underscores>.txt`, restricted to header-safe characters.
pub fn download_filename(candidate_name: &str) -> String {
    let stem: String = candidate_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect();

    if stem.is_empty() {
        "cold_email.txt".to_string()
    } else {
        format!("cold_email_{stem}.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_filename_replaces_spaces() {
        assert_eq!(download_filename("Jane Doe"), "cold_email_Jane_Doe.txt");
        assert_eq!(download_filename("  Ada   M. Lovelace "), "cold_email_Ada_M._Lovelace.txt");
    }

    #[test]
    fn test_download_filename_drops_unsafe_characters() {
        assert_eq!(download_filename("Bob\"; rm"), "cold_email_Bob_rm.txt");
        assert_eq!(download_filename("   "), "cold_email.txt");
    }

    #[test]
    fn test_data_url_round_trips_email_text() {
        let link = DownloadLink::for_email("Jane Doe", "Hello, world");
        let encoded = link.data_url.strip_prefix("data:text/plain;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), b"Hello, world");
        assert_eq!(link.filename, "cold_email_Jane_Doe.txt");
    }
}
