use axum::{extract::State, Json};
use serde::Serialize;

use crate::portfolio::PortfolioEntry;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub entries: Vec<PortfolioEntry>,
}

/// GET /api/v1/portfolio
///
/// Lists the portfolio entries that skill matching draws from.
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<PortfolioResponse> {
    Json(PortfolioResponse {
        entries: state.portfolio.entries().to_vec(),
    })
}
