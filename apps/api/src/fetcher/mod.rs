//! Page Fetcher: downloads a job posting page and reduces it to plain text.
//!
//! One GET per call. No retry, no caching.

pub mod html;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use thiserror::Error;
use tracing::info;
use url::Url;

use crate::fetcher::html::{html_to_text, truncate_chars};

/// Upper bound on page text handed to the posting extractor.
/// Keeps the extraction prompt inside the model's context window.
pub const MAX_PAGE_CHARS: usize = 12_000;

/// Largest response body read from a job page, checked before and while reading.
pub const MAX_PAGE_BYTES: usize = 5 * 1024 * 1024;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("page returned HTTP {0}")]
    Status(u16),

    #[error("page is not text (content type: {0})")]
    NonText(String),

    #[error("page contains no readable text")]
    EmptyPage,

    #[error("page is larger than {} MiB", MAX_PAGE_BYTES / (1024 * 1024))]
    TooLarge,
}

/// Readable text of a fetched page.
#[derive(Debug, Clone)]
pub struct PageText {
    pub url: String,
    pub text: String,
    pub truncated: bool,
}

#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns its visible text, truncated to `MAX_PAGE_CHARS`.
    pub async fn fetch_text(&self, url: &str) -> Result<PageText, FetchError> {
        let parsed = parse_job_url(url)?;
        info!("Fetching job page: {}", parsed);

        let response = self.client.get(parsed.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_textual(content_type) {
                return Err(FetchError::NonText(content_type.to_string()));
            }
        }

        if response
            .content_length()
            .is_some_and(|len| len > MAX_PAGE_BYTES as u64)
        {
            return Err(FetchError::TooLarge);
        }

        let body = read_capped_body(response).await?;
        let text = html_to_text(&body);
        if text.is_empty() {
            return Err(FetchError::EmptyPage);
        }

        let kept = truncate_chars(&text, MAX_PAGE_CHARS);
        let truncated = kept.len() < text.len();
        info!(
            "Extracted {} chars of page text{}",
            kept.chars().count(),
            if truncated { " (truncated)" } else { "" }
        );

        Ok(PageText {
            url: parsed.to_string(),
            text: kept.to_string(),
            truncated,
        })
    }
}

/// Reads the body chunk by chunk, giving up once it passes `MAX_PAGE_BYTES`.
/// Covers chunked responses that declare no length.
async fn read_capped_body(mut response: reqwest::Response) -> Result<String, FetchError> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > MAX_PAGE_BYTES {
            return Err(FetchError::TooLarge);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&body).into_owned())
}

fn parse_job_url(url: &str) -> Result<Url, FetchError> {
    let trimmed = url.trim();
    let parsed = Url::parse(trimmed).map_err(|e| FetchError::InvalidUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl {
            url: trimmed.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn is_textual(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("text/") || mime == "application/xhtml+xml"
}
