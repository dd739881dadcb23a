//! Axum route handlers for the Job Search API.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::job_search::catalog::{find_domain, DomainInsights, DomainProfile};
use crate::job_search::{
    domains, domain_insights, job_suggestions, specific_jobs, trending_companies, JobLink,
    JobType, DEFAULT_LOCATION,
};

/// Results returned when the client does not pass `limit`.
const DEFAULT_RESULT_LIMIT: usize = 8;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DomainQuery {
    pub domain: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    pub domain: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub company: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct DomainsResponse {
    pub domains: Vec<&'static str>,
    pub job_types: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub domain: &'static str,
    pub location: String,
    pub job_type: JobType,
    pub company: Option<String>,
    pub total: usize,
    pub results: Vec<JobLink>,
}

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub domain: &'static str,
    pub companies: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub domain: &'static str,
    pub insights: &'static DomainInsights,
}

fn require_domain(domain: Option<&str>) -> Result<&'static DomainProfile, AppError> {
    let domain = domain
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::Validation("domain is required".to_string()))?;
    find_domain(domain).ok_or_else(|| AppError::NotFound(format!("Unknown domain '{domain}'")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/job-search/domains
pub async fn handle_domains() -> Json<DomainsResponse> {
    Json(DomainsResponse {
        domains: domains(),
        job_types: JobType::ALL.map(|t| t.label()).to_vec(),
    })
}

/// GET /api/v1/job-search/suggestions
///
/// Search links for a domain. With `company` set, the search is scoped to that
/// employer on LinkedIn and Indeed instead of fanning out across boards.
pub async fn handle_suggestions(
    Query(query): Query<SuggestionsQuery>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let profile = require_domain(query.domain.as_deref())?;

    let job_type = match query.job_type.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.parse::<JobType>().map_err(AppError::Validation)?,
        _ => JobType::default(),
    };
    let location = query
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LOCATION)
        .to_string();
    let company = query
        .company
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let mut results = match company.as_deref() {
        Some(company) => specific_jobs(profile.name, Some(company), &location),
        None => job_suggestions(profile.name, &location, job_type),
    };
    let total = results.len();
    results.truncate(query.limit.unwrap_or(DEFAULT_RESULT_LIMIT));

    Ok(Json(SuggestionsResponse {
        domain: profile.name,
        location,
        job_type,
        company,
        total,
        results,
    }))
}

/// GET /api/v1/job-search/companies
pub async fn handle_companies(
    Query(query): Query<DomainQuery>,
) -> Result<Json<CompaniesResponse>, AppError> {
    let profile = require_domain(query.domain.as_deref())?;
    Ok(Json(CompaniesResponse {
        domain: profile.name,
        companies: trending_companies(profile.name),
    }))
}

/// GET /api/v1/job-search/insights
///
/// Salary range, growth rate, key skills and certifications for a domain.
/// Domains without published insights return 404.
pub async fn handle_insights(
    Query(query): Query<DomainQuery>,
) -> Result<Json<InsightsResponse>, AppError> {
    let profile = require_domain(query.domain.as_deref())?;
    let insights = domain_insights(profile.name).ok_or_else(|| {
        AppError::NotFound(format!("No insights available for '{}'", profile.name))
    })?;

    Ok(Json(InsightsResponse {
        domain: profile.name,
        insights,
    }))
}
