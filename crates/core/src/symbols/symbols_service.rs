use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info};

use super::symbols_model::{ImportSummary, NewSymbol, SymbolSearchResult};
use super::symbols_traits::{SymbolRepositoryTrait, SymbolServiceTrait};
use crate::errors::{ImportError, Result};

/// Maximum candidates returned by the lookup endpoint.
pub const SYMBOL_SEARCH_LIMIT: i64 = 20;

/// Rows per upsert statement. Matches the SQLite parameter-limit chunk the
/// storage layer is sized for.
pub const UPSERT_BATCH_SIZE: usize = 500;

/// Service for the shared security reference catalog.
pub struct SymbolService {
    repository: Arc<dyn SymbolRepositoryTrait>,
}

impl SymbolService {
    pub fn new(repository: Arc<dyn SymbolRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SymbolServiceTrait for SymbolService {
    fn search_symbols(&self, query: &str) -> Result<Vec<SymbolSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.repository.search(query, SYMBOL_SEARCH_LIMIT)?;
        Ok(candidates
            .into_iter()
            .map(SymbolSearchResult::from)
            .collect())
    }

    async fn import_symbols(&self, records: Vec<NewSymbol>) -> Result<ImportSummary> {
        // Last occurrence wins, like sequential upserts would behave; keeps
        // a single batch from carrying conflicting rows for one key.
        let mut by_symbol: HashMap<String, usize> = HashMap::new();
        let mut deduped: Vec<NewSymbol> = Vec::with_capacity(records.len());
        for record in records {
            match by_symbol.get(&record.symbol) {
                Some(&slot) => deduped[slot] = record,
                None => {
                    by_symbol.insert(record.symbol.clone(), deduped.len());
                    deduped.push(record);
                }
            }
        }

        let unique = deduped.len();
        let mut upserted = 0usize;
        let mut batches = 0usize;
        for (index, chunk) in deduped.chunks(UPSERT_BATCH_SIZE).enumerate() {
            let batch = index + 1;
            let first = index * UPSERT_BATCH_SIZE + 1;
            info!("Upserting rows {}..{}", first, first + chunk.len() - 1);
            upserted += self
                .repository
                .upsert_batch(chunk.to_vec())
                .await
                .map_err(|e| {
                    error!("Upsert error on batch {}: {}", batch, e);
                    ImportError::BatchFailed {
                        batch,
                        cause: e.to_string(),
                    }
                })?;
            batches = batch;
        }

        Ok(ImportSummary {
            unique,
            upserted,
            batches,
        })
    }
}
