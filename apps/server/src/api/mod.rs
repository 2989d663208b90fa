use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_identity;
use crate::main_lib::AppState;

pub mod investments;
pub mod symbols;

/// Composes the application router: investments behind the identity layer,
/// symbol lookup public.
pub fn app_router(state: Arc<AppState>) -> Router {
    let protected = investments::router().route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_identity,
    ));

    let api = protected.merge(symbols::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
