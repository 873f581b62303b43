use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{error::ApiResult, main_lib::AppState};
use metalfolio_core::portfolio::{aggregate, PortfolioSummary};
use metalfolio_core::prices::MetalPrices;
use metalfolio_core::purchases::Purchase;

/// The dashboard payload: raw records, the prices they were valued at,
/// and the aggregated positions.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioView {
    purchases: Vec<Purchase>,
    prices: MetalPrices,
    summary: PortfolioSummary,
}

async fn get_portfolio(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioView>> {
    let purchases = state.purchase_service.get_purchases()?;
    let prices = state.price_service.get_prices().await;
    let summary = aggregate(&purchases, &prices);
    Ok(Json(PortfolioView {
        purchases,
        prices,
        summary,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio", get(get_portfolio))
}
