//! Database models for the symbol catalog.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use folio_core::symbols::{NewSymbol, Symbol};

/// Database model for symbols. `metadata` is a JSON object stored as TEXT.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::symbols)]
#[diesel(primary_key(symbol))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SymbolDB {
    pub symbol: String,
    pub name: String,
    pub exchange: Option<String>,
    pub isin: Option<String>,
    pub instrument_type: Option<String>,
    pub metadata: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl SymbolDB {
    /// Builds an insertable row from a canonical import record, stamping both
    /// timestamps with `now`. On conflict the upsert keeps the original
    /// `created_at` and replaces the rest.
    pub fn from_new(record: NewSymbol, now: NaiveDateTime) -> Self {
        Self {
            symbol: record.symbol,
            name: record.name,
            exchange: record.exchange,
            isin: record.isin,
            instrument_type: record.instrument_type,
            metadata: record.metadata.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

// Conversion to domain models
impl From<SymbolDB> for Symbol {
    fn from(db: SymbolDB) -> Self {
        let metadata = match serde_json::from_str(&db.metadata) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring unparseable metadata for symbol {}: {}", db.symbol, e);
                None
            }
        };
        Self {
            symbol: db.symbol,
            name: db.name,
            exchange: db.exchange,
            isin: db.isin,
            instrument_type: db.instrument_type,
            metadata,
        }
    }
}
