//! Symbols module - the shared security reference catalog.
//!
//! Covers the two consumers of the `symbols` table: the autocomplete lookup
//! (read path, fail-soft) and the offline reference-data importer (write
//! path, fail-fast).

pub mod import;

mod symbols_model;
mod symbols_service;
mod symbols_traits;


pub use symbols_model::{ImportSummary, NewSymbol, Symbol, SymbolSearchResult};
pub use symbols_service::{SymbolService, SYMBOL_SEARCH_LIMIT, UPSERT_BATCH_SIZE};
pub use symbols_traits::{SymbolRepositoryTrait, SymbolServiceTrait};
