use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::fetcher::PageFetcher;
use crate::llm_client::LlmClient;
use crate::portfolio::Portfolio;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests never share mutable data.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub fetcher: PageFetcher,
    pub portfolio: Arc<Portfolio>,
    pub config: Config,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let llm = LlmClient::new(
            config.groq_api_key.clone(),
            &config.groq_api_url,
            config.groq_model.clone(),
        )
        .context("Failed to build LLM client")?;
        info!("LLM client initialized (model: {})", llm.model());

        let fetcher = PageFetcher::new().context("Failed to build page fetcher")?;

        let portfolio = Portfolio::load(config.portfolio_path.as_deref())?;
        info!("Portfolio ready with {} entries", portfolio.entries().len());

        Ok(Self {
            llm,
            fetcher,
            portfolio: Arc::new(portfolio),
            config,
        })
    }
}
