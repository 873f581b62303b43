use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use metalfolio_core::purchases::{NewPurchase, Purchase};

async fn list_purchases(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Purchase>>> {
    let purchases = state.purchase_service.get_purchases()?;
    Ok(Json(purchases))
}

async fn create_purchase(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewPurchase>,
) -> ApiResult<(StatusCode, Json<Purchase>)> {
    let created = state.purchase_service.add_purchase(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_purchase(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.purchase_service.remove_purchase(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/purchases", get(list_purchases).post(create_purchase))
        .route("/purchases/{id}", delete(delete_purchase))
}
