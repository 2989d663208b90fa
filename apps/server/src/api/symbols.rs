use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::main_lib::AppState;
use folio_core::symbols::SymbolSearchResult;

#[derive(serde::Deserialize)]
struct SymbolsQuery {
    q: Option<String>,
}

/// Search-as-you-type is fail-soft: a store error is logged and the caller
/// still receives a usable empty array instead of an error payload.
async fn search_symbols(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolsQuery>,
) -> (StatusCode, Json<Vec<SymbolSearchResult>>) {
    let q = query.q.unwrap_or_default();
    match state.symbol_service.search_symbols(&q) {
        Ok(results) => (StatusCode::OK, Json(results)),
        Err(e) => {
            tracing::error!("symbols search error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::new()))
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/symbols", get(search_symbols))
}
