//! Database models for investments.
//!
//! Decimal quantities are stored as TEXT and converted at the boundary so
//! SQLite's floating-point affinity never touches monetary values.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use folio_core::investments::{CreateInvestment, Investment, InvestmentUpdate};

/// Parses a stored decimal string, falling back to an f64 parse for rows
/// written with scientific notation, and to zero as a last resort.
pub(crate) fn parse_decimal_string_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str) {
            Ok(f_val) => Decimal::from_f64(f_val).unwrap_or_else(|| {
                log::error!(
                    "Failed to convert {} '{}' (parsed as f64: {}) to Decimal.",
                    field_name,
                    value_str,
                    f_val
                );
                Decimal::ZERO
            }),
            Err(e_f64) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as f64 (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_f64
                );
                Decimal::ZERO
            }
        },
    }
}

/// Database model for investments
#[derive(
    Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub symbol: String,
    pub asset_type: String,
    pub shares: String,
    pub buy_price: String,
    pub current_price: String,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new investment
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::investments)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestmentDB {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub symbol: String,
    pub asset_type: String,
    pub shares: String,
    pub buy_price: String,
    pub current_price: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Changeset for partial updates; `None` fields are skipped by Diesel, which
/// is exactly the update-by-omission contract.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::investments)]
pub struct UpdateInvestmentDB {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub asset_type: Option<String>,
    pub shares: Option<String>,
    pub buy_price: Option<String>,
    pub current_price: Option<String>,
}

// Conversion to domain models
impl From<InvestmentDB> for Investment {
    fn from(db: InvestmentDB) -> Self {
        Self {
            shares: parse_decimal_string_tolerant(&db.shares, "shares"),
            buy_price: parse_decimal_string_tolerant(&db.buy_price, "buy_price"),
            current_price: parse_decimal_string_tolerant(&db.current_price, "current_price"),
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            symbol: db.symbol,
            asset_type: db.asset_type,
            created_at: db.created_at,
        }
    }
}

impl From<CreateInvestment> for NewInvestmentDB {
    fn from(domain: CreateInvestment) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            symbol: domain.symbol,
            asset_type: domain.asset_type,
            shares: domain.shares.to_string(),
            buy_price: domain.buy_price.to_string(),
            current_price: domain.current_price.to_string(),
            created_at: None,
        }
    }
}

impl From<InvestmentUpdate> for UpdateInvestmentDB {
    fn from(domain: InvestmentUpdate) -> Self {
        Self {
            name: domain.name,
            symbol: domain.symbol,
            asset_type: domain.asset_type,
            shares: domain.shares.map(|d| d.to_string()),
            buy_price: domain.buy_price.map(|d| d.to_string()),
            current_price: domain.current_price.map(|d| d.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn tolerant_parse_accepts_plain_and_scientific_forms() {
        assert_eq!(parse_decimal_string_tolerant("10.5", "shares"), dec!(10.5));
        assert_eq!(parse_decimal_string_tolerant("1e2", "shares"), dec!(100));
        assert_eq!(
            parse_decimal_string_tolerant("garbage", "shares"),
            Decimal::ZERO
        );
    }
}
