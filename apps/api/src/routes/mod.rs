pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers as email_handlers;
use crate::job_search::handlers as job_search_handlers;
use crate::portfolio::handlers as portfolio_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

/// Largest accepted request body; resumes arrive inside it.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Cold email API
        .route(
            "/api/v1/emails/generate",
            post(email_handlers::handle_generate),
        )
        .route(
            "/api/v1/emails/download",
            post(email_handlers::handle_download),
        )
        .route(
            "/api/v1/postings/extract",
            post(email_handlers::handle_extract_postings),
        )
        .route(
            "/api/v1/resumes/extract",
            post(resume_handlers::handle_extract_resume),
        )
        .route(
            "/api/v1/portfolio",
            get(portfolio_handlers::handle_get_portfolio),
        )
        // Job search API
        .route(
            "/api/v1/job-search/domains",
            get(job_search_handlers::handle_domains),
        )
        .route(
            "/api/v1/job-search/suggestions",
            get(job_search_handlers::handle_suggestions),
        )
        .route(
            "/api/v1/job-search/companies",
            get(job_search_handlers::handle_companies),
        )
        .route(
            "/api/v1/job-search/insights",
            get(job_search_handlers::handle_insights),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
