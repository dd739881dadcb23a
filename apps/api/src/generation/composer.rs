//! Email Composer: builds the final prompt from every input and returns the
//! model's text verbatim (trimmed). Tone and length are not post-validated.

use tracing::info;

use crate::errors::AppError;
use crate::fetcher::html::truncate_chars;
use crate::generation::prompts::{COMPOSE_PROMPT_TEMPLATE, COMPOSE_SYSTEM};
use crate::generation::tone::{render_tone_instruction, EmailLanguage, EmailTone};
use crate::llm_client::prompts::{fill_template, NO_PREAMBLE_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::models::posting::JobPosting;
use crate::portfolio::{format_links, PortfolioLink};

/// Resume text beyond this many characters is dropped from the prompt.
pub const MAX_RESUME_CHARS: usize = 8_000;

/// Everything the composer needs for one email.
#[derive(Debug, Clone)]
pub struct ComposeInput<'a> {
    pub candidate_name: &'a str,
    pub tone: EmailTone,
    pub language: EmailLanguage,
    pub resume_text: &'a str,
    pub posting: &'a JobPosting,
    pub portfolio_links: &'a [PortfolioLink],
}

/// Composes the cold email for `input`. Returns non-empty text or an error.
pub async fn compose_email(llm: &LlmClient, input: &ComposeInput<'_>) -> Result<String, AppError> {
    let prompt = build_compose_prompt(input)?;

    let email = llm
        .call_text(&prompt, COMPOSE_SYSTEM)
        .await
        .map_err(|e| AppError::Composition(e.to_string()))?;

    info!(
        "Composed {} email ({} chars) for role '{}'",
        input.tone.as_str(),
        email.chars().count(),
        input.posting.role
    );
    Ok(email)
}

/// Builds the composition prompt by filling the template.
fn build_compose_prompt(input: &ComposeInput<'_>) -> Result<String, AppError> {
    let job_description = serde_json::to_string_pretty(input.posting).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to serialize job posting: {e}"))
    })?;

    let links = if input.portfolio_links.is_empty() {
        "(none)".to_string()
    } else {
        format_links(input.portfolio_links)
    };

    let tone_instruction = render_tone_instruction(input.tone);
    let resume_text = truncate_chars(input.resume_text.trim(), MAX_RESUME_CHARS);

    Ok(fill_template(
        COMPOSE_PROMPT_TEMPLATE,
        &[
            ("tone_instruction", tone_instruction.as_str()),
            ("language", input.language.as_str()),
            ("no_preamble_instruction", NO_PREAMBLE_INSTRUCTION),
            ("candidate_name", input.candidate_name.trim()),
            ("portfolio_links", links.as_str()),
            ("job_description", job_description.as_str()),
            ("resume_text", resume_text),
        ],
    ))
}
