//! Security reference domain models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One tradable instrument known to the system.
///
/// Rows are created and refreshed only by the importer; user actions never
/// write this table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub symbol: String,
    pub name: String,
    pub exchange: Option<String>,
    pub isin: Option<String>,
    pub instrument_type: Option<String>,
    pub metadata: Option<Value>,
}

/// Canonical import row, produced by the reference CSV pipeline and applied
/// as an upsert keyed on `symbol`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSymbol {
    pub symbol: String,
    pub name: String,
    pub isin: Option<String>,
    pub exchange: Option<String>,
    pub instrument_type: Option<String>,
    pub metadata: Value,
}

impl NewSymbol {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            isin: None,
            exchange: None,
            instrument_type: None,
            metadata: Value::Object(Map::new()),
        }
    }
}

/// Wire shape returned by the lookup endpoint.
///
/// Always normalized: uppercase symbol, `null` for a missing exchange, an
/// empty object for missing metadata, whatever the store held.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSearchResult {
    pub symbol: String,
    pub name: String,
    pub exchange: Option<String>,
    pub metadata: Value,
}

impl From<Symbol> for SymbolSearchResult {
    fn from(symbol: Symbol) -> Self {
        let metadata = match symbol.metadata {
            Some(value @ Value::Object(_)) => value,
            _ => Value::Object(Map::new()),
        };
        Self {
            symbol: symbol.symbol.to_uppercase(),
            name: symbol.name,
            exchange: symbol.exchange,
            metadata,
        }
    }
}

/// Outcome of one import run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Distinct symbols after deduplication.
    pub unique: usize,
    /// Rows the store reported as applied.
    pub upserted: usize,
    /// Number of batches executed.
    pub batches: usize,
}
