use async_trait::async_trait;

use super::investments_model::{CreateInvestment, Investment, InvestmentUpdate, NewInvestment};
use crate::errors::Result;

/// Trait for investment repository operations.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Loads all records owned by `user_id`, newest first.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Investment>>;

    /// Loads one record by id; `DatabaseError::NotFound` when absent.
    fn get_by_id(&self, investment_id: &str) -> Result<Investment>;

    async fn insert(&self, new_investment: CreateInvestment) -> Result<Investment>;

    /// Applies the `Some` fields of `update` and returns the stored row.
    async fn update(&self, investment_id: &str, update: InvestmentUpdate) -> Result<Investment>;

    async fn delete(&self, investment_id: &str) -> Result<()>;
}

/// Trait for investment service operations.
///
/// Every operation takes the verified caller's user id; the service is the
/// single place ownership is enforced, before any write reaches storage.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>>;

    async fn create_investment(
        &self,
        user_id: &str,
        new_investment: NewInvestment,
    ) -> Result<Investment>;

    async fn update_investment(
        &self,
        user_id: &str,
        investment_id: &str,
        update: InvestmentUpdate,
    ) -> Result<Investment>;

    /// Deletes the record and returns its prior contents.
    async fn delete_investment(&self, user_id: &str, investment_id: &str) -> Result<Investment>;
}
