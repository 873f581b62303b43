use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use metalfolio_core::prices::{HistoricalPrice, MetalPrices};
use metalfolio_core::purchases::MetalType;

async fn get_prices(State(state): State<Arc<AppState>>) -> Json<MetalPrices> {
    Json(state.price_service.get_prices().await)
}

/// Synthetic series; see the core history module. Not market data.
async fn get_price_history(
    Path(metal): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HistoricalPrice>>> {
    let metal: MetalType = metal
        .parse()
        .map_err(metalfolio_core::Error::Validation)?;
    Ok(Json(state.price_service.get_history(metal).await))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prices", get(get_prices))
        .route("/prices/history/{metal}", get(get_price_history))
}
