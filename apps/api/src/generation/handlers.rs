//! Axum route handlers for the cold email API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::pipeline::{GenerateRequest, Pipeline};
use crate::generation::posting_extractor::extract_postings;
use crate::generation::tone::{EmailLanguage, EmailTone};
use crate::models::email::{download_filename, EmailDraft};
use crate::models::posting::JobPosting;
use crate::portfolio::PortfolioLink;
use crate::resume::handlers::{read_resume_field, RESUME_FIELD};
use crate::resume::ResumeUpload;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw generate form as posted by the client. Every field is optional here;
/// `into_request` applies the validation order.
#[derive(Debug, Default)]
pub struct GenerateForm {
    pub name: Option<String>,
    pub job_url: Option<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
    pub resume: Option<ResumeUpload>,
}

impl GenerateForm {
    /// Validates name, then job URL, then resume; tone and language fall
    /// back to their defaults when left blank.
    pub fn into_request(self) -> Result<GenerateRequest, AppError> {
        let candidate_name = non_blank(self.name)
            .ok_or_else(|| AppError::Validation("Please enter your full name".to_string()))?;
        let job_url = non_blank(self.job_url).ok_or_else(|| {
            AppError::Validation("Please enter a valid job posting URL".to_string())
        })?;
        let resume = self
            .resume
            .ok_or_else(|| AppError::Validation("Please upload your resume".to_string()))?;

        let tone = match non_blank(self.tone) {
            Some(t) => t.parse::<EmailTone>().map_err(AppError::Validation)?,
            None => EmailTone::default(),
        };
        let language = match non_blank(self.language) {
            Some(l) => l.parse::<EmailLanguage>().map_err(AppError::Validation)?,
            None => EmailLanguage::default(),
        };

        Ok(GenerateRequest {
            candidate_name,
            job_url,
            tone,
            language,
            resume,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub candidate_name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractPostingsRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct PostingPreview {
    pub posting: JobPosting,
    pub portfolio_links: Vec<PortfolioLink>,
}

#[derive(Debug, Serialize)]
pub struct ExtractPostingsResponse {
    pub url: String,
    pub page_truncated: bool,
    pub postings: Vec<PostingPreview>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/emails/generate
///
/// Multipart form: `name`, `job_url`, `tone`, `language`, `resume` (PDF/DOCX).
/// Runs the full pipeline and returns the email with its download link.
pub async fn handle_generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EmailDraft>, AppError> {
    let mut form = GenerateForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            RESUME_FIELD => form.resume = read_resume_field(field).await?,
            "name" => form.name = Some(field.text().await?),
            "job_url" => form.job_url = Some(field.text().await?),
            "tone" => form.tone = Some(field.text().await?),
            "language" => form.language = Some(field.text().await?),
            _ => {}
        }
    }

    let request = form.into_request()?;
    let pipeline = Pipeline {
        llm: &state.llm,
        fetcher: &state.fetcher,
        portfolio: &state.portfolio,
    };

    Ok(Json(pipeline.generate(request).await?))
}

/// POST /api/v1/emails/download
///
/// Returns the email as a `text/plain` attachment named after the candidate.
pub async fn handle_download(
    Json(request): Json<DownloadRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }

    let disposition = format!(
        "attachment; filename=\"{}\"",
        download_filename(&request.candidate_name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        request.email,
    ))
}

/// POST /api/v1/postings/extract
///
/// Fetches a job page and returns every extracted posting with the portfolio
/// links that would accompany it. Nothing is composed.
pub async fn handle_extract_postings(
    State(state): State<AppState>,
    Json(request): Json<ExtractPostingsRequest>,
) -> Result<Json<ExtractPostingsResponse>, AppError> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    let page = state.fetcher.fetch_text(url).await?;
    let postings = extract_postings(&page.text, &state.llm).await?;

    let postings = postings
        .into_iter()
        .map(|posting| PostingPreview {
            portfolio_links: state.portfolio.query_links(&posting.skills),
            posting,
        })
        .collect();

    Ok(Json(ExtractPostingsResponse {
        url: page.url,
        page_truncated: page.truncated,
        postings,
    }))
}
