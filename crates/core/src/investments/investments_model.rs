//! Investment domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing one user's position in an instrument.
///
/// `user_id` is fixed at creation; every read or mutation beyond listing
/// goes through an ownership check against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub shares: Decimal,
    pub buy_price: Decimal,
    pub current_price: Decimal,
    pub created_at: NaiveDateTime,
}

/// Request shape for creating an investment.
///
/// Every field is optional on the wire so that a missing field is reported
/// as a validation failure with the field's name rather than a body
/// deserialization rejection. `user_id` is deliberately absent: ownership
/// always comes from the verified caller, never from the payload.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub name: Option<String>,
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub shares: Option<Decimal>,
    pub buy_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
}

impl NewInvestment {
    /// Checks that every required field is present and usable, reporting the
    /// first offender by its wire name. String fields that are empty after
    /// trimming count as missing.
    pub fn validate(&self) -> Result<()> {
        fn present(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|s| !s.trim().is_empty())
        }

        if !present(&self.name) {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if !present(&self.symbol) {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if !present(&self.asset_type) {
            return Err(ValidationError::MissingField("type".to_string()).into());
        }
        if self.shares.is_none() {
            return Err(ValidationError::MissingField("shares".to_string()).into());
        }
        if self.buy_price.is_none() {
            return Err(ValidationError::MissingField("buyPrice".to_string()).into());
        }
        if self.current_price.is_none() {
            return Err(ValidationError::MissingField("currentPrice".to_string()).into());
        }
        if self.shares.is_some_and(|s| s.is_sign_negative()) {
            return Err(
                ValidationError::InvalidInput("shares must be non-negative".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Validated insert payload handed to the repository.
///
/// `id` is minted by the repository when `None`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestment {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub shares: Decimal,
    pub buy_price: Decimal,
    pub current_price: Decimal,
}

/// Partial update payload. Only `Some` fields are applied; omitted fields
/// are left untouched by the repository.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentUpdate {
    pub name: Option<String>,
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub shares: Option<Decimal>,
    pub buy_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
}

impl InvestmentUpdate {
    /// True when the patch carries no fields at all.
    pub fn is_noop(&self) -> bool {
        self.name.is_none()
            && self.symbol.is_none()
            && self.asset_type.is_none()
            && self.shares.is_none()
            && self.buy_price.is_none()
            && self.current_price.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.shares.is_some_and(|s| s.is_sign_negative()) {
            return Err(
                ValidationError::InvalidInput("shares must be non-negative".to_string()).into(),
            );
        }
        Ok(())
    }
}
