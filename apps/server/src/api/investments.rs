use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use folio_core::auth::Identity;
use folio_core::investments::{Investment, InvestmentUpdate, NewInvestment};

async fn list_investments(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<Vec<Investment>>> {
    let investments = state.investment_service.list_investments(&identity.user_id)?;
    Ok(Json(investments))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<NewInvestment>,
) -> ApiResult<(StatusCode, Json<Investment>)> {
    let created = state
        .investment_service
        .create_investment(&identity.user_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<InvestmentUpdate>,
) -> ApiResult<Json<Investment>> {
    let updated = state
        .investment_service
        .update_investment(&identity.user_id, &id, payload)
        .await?;
    Ok(Json(updated))
}

#[derive(serde::Serialize)]
struct DeleteInvestmentResponse {
    success: bool,
    investment: Investment,
}

async fn delete_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<DeleteInvestmentResponse>> {
    let deleted = state
        .investment_service
        .delete_investment(&identity.user_id, &id)
        .await?;
    Ok(Json(DeleteInvestmentResponse {
        success: true,
        investment: deleted,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/investments",
            get(list_investments).post(create_investment),
        )
        .route(
            "/investments/{id}",
            put(update_investment).delete(delete_investment),
        )
}
