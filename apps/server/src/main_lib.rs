use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::JwtVerifier;
use crate::config::Config;
use folio_core::auth::TokenVerifier;
use folio_core::investments::{InvestmentService, InvestmentServiceTrait};
use folio_core::symbols::{SymbolService, SymbolServiceTrait};
use folio_storage_sqlite::db::{self, write_actor};
use folio_storage_sqlite::investments::InvestmentRepository;
use folio_storage_sqlite::symbols::SymbolRepository;

pub struct AppState {
    pub investment_service: Arc<dyn InvestmentServiceTrait + Send + Sync>,
    pub symbol_service: Arc<dyn SymbolServiceTrait + Send + Sync>,
    pub token_verifier: Arc<dyn TokenVerifier + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    if config.auth_secret.trim().is_empty() {
        anyhow::bail!("FOLIO_AUTH_SECRET must be set");
    }

    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let investment_repository = Arc::new(InvestmentRepository::new(pool.clone(), writer.clone()));
    let investment_service = Arc::new(InvestmentService::new(investment_repository));

    let symbol_repository = Arc::new(SymbolRepository::new(pool.clone(), writer.clone()));
    let symbol_service = Arc::new(SymbolService::new(symbol_repository));

    let token_verifier = Arc::new(JwtVerifier::new(&config.auth_secret));

    Ok(Arc::new(AppState {
        investment_service,
        symbol_service,
        token_verifier,
    }))
}
