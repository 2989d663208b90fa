use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::upsert::excluded;
use diesel::SqliteConnection;

use folio_core::symbols::{NewSymbol, Symbol, SymbolRepositoryTrait};
use folio_core::Result;

use super::model::SymbolDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::symbols;

pub struct SymbolRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl SymbolRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }

    pub fn search_impl(&self, query: &str, limit: i64) -> Result<Vec<Symbol>> {
        let mut conn = get_connection(&self.pool)?;

        // SQLite LIKE is case-insensitive for ASCII, which covers ticker and
        // company-name text.
        let name_contains = format!("%{}%", query);
        let symbol_prefix = format!("{}%", query);

        let records = symbols::table
            .select(SymbolDB::as_select())
            .filter(
                symbols::name
                    .like(name_contains)
                    .or(symbols::symbol.like(symbol_prefix)),
            )
            .order(symbols::name.asc())
            .limit(limit)
            .load::<SymbolDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(records.into_iter().map(Symbol::from).collect())
    }
}

#[async_trait]
impl SymbolRepositoryTrait for SymbolRepository {
    fn search(&self, query: &str, limit: i64) -> Result<Vec<Symbol>> {
        self.search_impl(query, limit)
    }

    async fn upsert_batch(&self, records: Vec<NewSymbol>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let now = chrono::Utc::now().naive_utc();
                let rows: Vec<SymbolDB> = records
                    .into_iter()
                    .map(|record| SymbolDB::from_new(record, now))
                    .collect();

                let mut affected = 0usize;
                for row in &rows {
                    affected += diesel::insert_into(symbols::table)
                        .values(row)
                        .on_conflict(symbols::symbol)
                        .do_update()
                        .set((
                            symbols::name.eq(excluded(symbols::name)),
                            symbols::exchange.eq(excluded(symbols::exchange)),
                            symbols::isin.eq(excluded(symbols::isin)),
                            symbols::instrument_type.eq(excluded(symbols::instrument_type)),
                            symbols::metadata.eq(excluded(symbols::metadata)),
                            symbols::updated_at.eq(excluded(symbols::updated_at)),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(affected)
            })
            .await
    }
}
