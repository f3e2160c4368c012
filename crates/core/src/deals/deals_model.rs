//! Deal domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a stored FX deal. Never mutated once persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FxDeal {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub deal_timestamp: NaiveDateTime,
    pub deal_amount: Decimal,
}

/// Input model for ingesting a new deal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFxDeal {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub deal_timestamp: NaiveDateTime,
    pub deal_amount: Decimal,
}
