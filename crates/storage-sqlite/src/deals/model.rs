//! Database models for FX deals.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::errors::StorageError;
use dealwarehouse_core::deals::{FxDeal, NewFxDeal};

/// Stored deal row. `created_at` is assigned by the database on insert.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::deals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FxDealDB {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub deal_amount: String,
    pub deal_timestamp: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::deals)]
pub struct NewFxDealDB {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub deal_amount: String,
    pub deal_timestamp: NaiveDateTime,
}

impl From<NewFxDeal> for NewFxDealDB {
    fn from(domain: NewFxDeal) -> Self {
        Self {
            id: domain.id,
            from_currency: domain.from_currency,
            to_currency: domain.to_currency,
            // Decimal's Display keeps the scale, so "100.50" stays "100.50".
            deal_amount: domain.deal_amount.to_string(),
            deal_timestamp: domain.deal_timestamp,
        }
    }
}

impl TryFrom<FxDealDB> for FxDeal {
    type Error = StorageError;

    fn try_from(db: FxDealDB) -> Result<Self, Self::Error> {
        let deal_amount = Decimal::from_str(&db.deal_amount).map_err(|e| {
            StorageError::InvalidData(format!(
                "deal {} has unreadable amount '{}': {}",
                db.id, db.deal_amount, e
            ))
        })?;

        Ok(Self {
            id: db.id,
            from_currency: db.from_currency,
            to_currency: db.to_currency,
            deal_timestamp: db.deal_timestamp,
            deal_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_new_deal_amount_keeps_scale() {
        let row = NewFxDealDB::from(NewFxDeal {
            id: "D-1".to_string(),
            from_currency: "USD".to_string(),
            to_currency: "EUR".to_string(),
            deal_timestamp: timestamp(),
            deal_amount: dec!(100.50),
        });
        assert_eq!(row.deal_amount, "100.50");
    }

    #[test]
    fn test_unreadable_amount_is_rejected() {
        let row = FxDealDB {
            id: "D-1".to_string(),
            from_currency: "USD".to_string(),
            to_currency: "EUR".to_string(),
            deal_amount: "not-a-number".to_string(),
            deal_timestamp: timestamp(),
            created_at: timestamp(),
        };
        let result = FxDeal::try_from(row);
        assert!(matches!(result, Err(StorageError::InvalidData(_))));
    }
}
