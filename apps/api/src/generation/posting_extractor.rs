//! Posting Extractor: turns raw page text into structured `JobPosting`s via the LLM.

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::POSTING_EXTRACT_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::posting::JobPosting;

/// The model answers with either a single posting object or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PostingsPayload {
    Many(Vec<JobPosting>),
    One(JobPosting),
}

impl From<PostingsPayload> for Vec<JobPosting> {
    fn from(payload: PostingsPayload) -> Self {
        match payload {
            PostingsPayload::Many(postings) => postings,
            PostingsPayload::One(posting) => vec![posting],
        }
    }
}

/// Extracts zero or more postings from scraped page text.
///
/// Unparsable model output is an error; partial data is never returned.
/// An empty array means the page holds no posting.
pub async fn extract_postings(page_text: &str, llm: &LlmClient) -> Result<Vec<JobPosting>, AppError> {
    let prompt = fill_template(POSTING_EXTRACT_PROMPT_TEMPLATE, &[("page_text", page_text)]);

    let payload = llm
        .call_json::<PostingsPayload>(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(extraction_error)?;

    let postings = recognised_postings(payload.into())?;
    info!("Extracted {} job posting(s)", postings.len());
    Ok(postings)
}

/// Every field of `JobPosting` is optional, so any JSON object deserializes.
/// Objects carrying none of role, skills or description were not postings.
fn recognised_postings(parsed: Vec<JobPosting>) -> Result<Vec<JobPosting>, AppError> {
    let parsed_count = parsed.len();
    let postings: Vec<JobPosting> = parsed.into_iter().filter(is_recognisable).collect();

    if postings.is_empty() && parsed_count > 0 {
        return Err(AppError::PostingExtraction(format!(
            "Context too big. Unable to parse jobs. (none of {parsed_count} returned object(s) had a role, skills or description)"
        )));
    }
    if postings.len() < parsed_count {
        warn!(
            "Dropped {} unrecognisable posting object(s)",
            parsed_count - postings.len()
        );
    }
    Ok(postings)
}

fn is_recognisable(posting: &JobPosting) -> bool {
    !posting.role.is_empty() || !posting.skills.is_empty() || !posting.description.is_empty()
}

fn extraction_error(e: LlmError) -> AppError {
    match e {
        LlmError::Parse(_) | LlmError::EmptyContent => AppError::PostingExtraction(format!(
            "Context too big. Unable to parse jobs. ({e})"
        )),
        other => AppError::PostingExtraction(format!("Posting extraction call failed: {other}")),
    }
}
