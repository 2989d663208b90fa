use async_trait::async_trait;

use super::symbols_model::{ImportSummary, NewSymbol, Symbol, SymbolSearchResult};
use crate::errors::Result;

/// Trait for symbol repository operations.
#[async_trait]
pub trait SymbolRepositoryTrait: Send + Sync {
    /// Candidates whose `name` contains `query` (case-insensitive) or whose
    /// `symbol` starts with it (case-insensitive), ordered by `name`
    /// ascending, at most `limit` rows.
    fn search(&self, query: &str, limit: i64) -> Result<Vec<Symbol>>;

    /// Insert-or-update keyed on `symbol`; re-running with the same rows
    /// must leave the table unchanged.
    async fn upsert_batch(&self, records: Vec<NewSymbol>) -> Result<usize>;
}

/// Trait for symbol service operations.
#[async_trait]
pub trait SymbolServiceTrait: Send + Sync {
    /// Ranked autocomplete candidates for a partial query. An empty or
    /// whitespace query returns an empty list without touching the store.
    fn search_symbols(&self, query: &str) -> Result<Vec<SymbolSearchResult>>;

    /// Applies canonical reference rows in fixed-size batches, strictly in
    /// order, aborting on the first batch failure.
    async fn import_symbols(&self, records: Vec<NewSymbol>) -> Result<ImportSummary>;
}
