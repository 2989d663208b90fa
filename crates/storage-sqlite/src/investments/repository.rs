use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use folio_core::investments::{
    CreateInvestment, Investment, InvestmentRepositoryTrait, InvestmentUpdate,
};
use folio_core::Result;

use super::model::{InvestmentDB, NewInvestmentDB, UpdateInvestmentDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::investments;

pub struct InvestmentRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl InvestmentRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }

    pub fn list_by_user_impl(&self, user_id: &str) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let records = investments::table
            .select(InvestmentDB::as_select())
            .filter(investments::user_id.eq(user_id))
            .order(investments::created_at.desc())
            .load::<InvestmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records.into_iter().map(Investment::from).collect())
    }

    pub fn get_by_id_impl(&self, investment_id: &str) -> Result<Investment> {
        let mut conn = get_connection(&self.pool)?;
        let record = investments::table
            .select(InvestmentDB::as_select())
            .find(investment_id)
            .first::<InvestmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(record.into())
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Investment>> {
        self.list_by_user_impl(user_id)
    }

    fn get_by_id(&self, investment_id: &str) -> Result<Investment> {
        self.get_by_id_impl(investment_id)
    }

    async fn insert(&self, new_investment: CreateInvestment) -> Result<Investment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                let mut new_db: NewInvestmentDB = new_investment.into();
                if new_db.id.is_none() {
                    new_db.id = Some(Uuid::new_v4().to_string());
                }
                new_db.created_at = Some(chrono::Utc::now().naive_utc());

                let result_db = diesel::insert_into(investments::table)
                    .values(&new_db)
                    .returning(InvestmentDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Investment::from(result_db))
            })
            .await
    }

    async fn update(&self, investment_id: &str, update: InvestmentUpdate) -> Result<Investment> {
        let investment_id = investment_id.to_string();
        let changes: UpdateInvestmentDB = update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                diesel::update(investments::table.find(&investment_id))
                    .set(&changes)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = investments::table
                    .select(InvestmentDB::as_select())
                    .find(&investment_id)
                    .first::<InvestmentDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Investment::from(result_db))
            })
            .await
    }

    async fn delete(&self, investment_id: &str) -> Result<()> {
        let investment_id = investment_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::delete(investments::table.find(&investment_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
