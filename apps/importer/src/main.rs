//! folio-import: loads an exchange master list into the `symbols` reference
//! table as an idempotent bulk upsert.
//!
//! Re-running with refreshed data overwrites existing rows; any batch
//! failure aborts the run with a non-zero exit so a partial refresh never
//! looks like success.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use folio_core::symbols::{
    import::parse_reference_csv, NewSymbol, SymbolService, SymbolServiceTrait,
};
use folio_storage_sqlite::db::{self, write_actor};
use folio_storage_sqlite::symbols::SymbolRepository;

#[derive(Parser, Debug)]
#[command(
    name = "folio-import",
    about = "Import an exchange symbol master list into the reference table"
)]
struct Cli {
    /// CSV export of the exchange master sheet
    file: PathBuf,

    /// SQLite database to load into
    #[arg(long, env = "FOLIO_DB_PATH", default_value = "folio.db")]
    database: String,

    /// Also write a flattened {symbol, name, exchange} JSON snapshot here
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRow<'a> {
    symbol: &'a str,
    name: &'a str,
    exchange: Option<&'a str>,
}

fn write_snapshot(path: &PathBuf, records: &[NewSymbol]) -> anyhow::Result<()> {
    let rows: Vec<SnapshotRow> = records
        .iter()
        .map(|r| SnapshotRow {
            symbol: &r.symbol,
            name: &r.name,
            exchange: r.exchange.as_deref(),
        })
        .collect();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(&rows)?)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    info!("Reading reference file: {}", cli.file.display());
    let content = std::fs::read(&cli.file)
        .with_context(|| format!("cannot read {}", cli.file.display()))?;

    let parsed = parse_reference_csv(&content)?;
    info!(
        "Parsed rows: {} (of {} in the sheet)",
        parsed.records.len(),
        parsed.total_rows
    );
    info!(
        "Missing symbol: {}, Missing name: {}",
        parsed.missing_symbol, parsed.missing_name
    );
    if parsed.missing_symbol > 0 {
        warn!("Some rows lack a symbol; check the file's header names.");
    }

    let db_path = db::init(&cli.database)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let repository = Arc::new(SymbolRepository::new(pool.clone(), writer));
    let service = SymbolService::new(repository);

    let summary = service.import_symbols(parsed.records.clone()).await?;
    info!(
        "Upsert complete. {} unique symbols in {} batches, {} rows applied.",
        summary.unique, summary.batches, summary.upserted
    );

    // Derived artifact only; a failed write is not a failed import.
    if let Some(snapshot) = &cli.snapshot {
        match write_snapshot(snapshot, &parsed.records) {
            Ok(()) => info!("Wrote snapshot: {}", snapshot.display()),
            Err(e) => warn!("Could not write snapshot {}: {}", snapshot.display(), e),
        }
    }

    Ok(())
}
