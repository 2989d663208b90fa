use std::sync::Arc;

use async_trait::async_trait;

use super::investments_model::{CreateInvestment, Investment, InvestmentUpdate, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing per-user investment records.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Loads the target record and verifies the caller owns it.
    ///
    /// NotFound (absent record) is reported before Forbidden (wrong owner),
    /// and both before any mutation is attempted.
    fn load_owned(&self, user_id: &str, investment_id: &str) -> Result<Investment> {
        let existing = self.repository.get_by_id(investment_id)?;
        if existing.user_id != user_id {
            return Err(Error::Forbidden(format!(
                "investment {} belongs to another user",
                investment_id
            )));
        }
        Ok(existing)
    }
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>> {
        self.repository.list_by_user(user_id)
    }

    async fn create_investment(
        &self,
        user_id: &str,
        new_investment: NewInvestment,
    ) -> Result<Investment> {
        new_investment.validate()?;

        // validate() guarantees the unwraps below never fire.
        let create = CreateInvestment {
            id: None,
            user_id: user_id.to_string(),
            name: new_investment.name.unwrap_or_default(),
            symbol: new_investment.symbol.unwrap_or_default().to_uppercase(),
            asset_type: new_investment.asset_type.unwrap_or_default(),
            shares: new_investment.shares.unwrap_or_default(),
            buy_price: new_investment.buy_price.unwrap_or_default(),
            current_price: new_investment.current_price.unwrap_or_default(),
        };

        self.repository.insert(create).await
    }

    async fn update_investment(
        &self,
        user_id: &str,
        investment_id: &str,
        update: InvestmentUpdate,
    ) -> Result<Investment> {
        update.validate()?;
        let existing = self.load_owned(user_id, investment_id)?;

        if update.is_noop() {
            return Ok(existing);
        }

        let mut update = update;
        if let Some(symbol) = update.symbol.as_mut() {
            *symbol = symbol.to_uppercase();
        }

        self.repository.update(investment_id, update).await
    }

    async fn delete_investment(&self, user_id: &str, investment_id: &str) -> Result<Investment> {
        let existing = self.load_owned(user_id, investment_id)?;
        self.repository.delete(investment_id).await?;
        Ok(existing)
    }
}
