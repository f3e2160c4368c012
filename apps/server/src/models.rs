//! Wire models for the HTTP API.
//!
//! Requests keep every field optional so that missing or blank fields can be
//! reported together instead of failing on the first one.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use dealwarehouse_core::constants::{DEAL_ID_MAX_LENGTH, DEAL_ID_MIN_LENGTH};
use dealwarehouse_core::deals::{FxDeal, NewFxDeal};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DealRequest {
    pub id: Option<String>,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub deal_timestamp: Option<NaiveDateTime>,
    pub deal_amount: Option<Decimal>,
}

impl DealRequest {
    /// Checks field presence and shape, returning every failing field.
    ///
    /// Currency codes are only checked for presence here; their format and
    /// reference-data checks belong to the ingestion service.
    pub fn into_new_deal(self) -> Result<NewFxDeal, BTreeMap<String, String>> {
        let mut errors = BTreeMap::new();

        match self.id.as_deref() {
            Some(id) if !id.trim().is_empty() => {
                let len = id.chars().count();
                if !(DEAL_ID_MIN_LENGTH..=DEAL_ID_MAX_LENGTH).contains(&len) {
                    errors.insert(
                        "id".to_string(),
                        format!(
                            "Deal ID must be between {} and {} characters",
                            DEAL_ID_MIN_LENGTH, DEAL_ID_MAX_LENGTH
                        ),
                    );
                }
            }
            _ => {
                errors.insert(
                    "id".to_string(),
                    "Deal ID is required and cannot be blank".to_string(),
                );
            }
        }

        if is_blank(&self.from_currency) {
            errors.insert(
                "fromCurrency".to_string(),
                "From Currency is required and cannot be blank".to_string(),
            );
        }
        if is_blank(&self.to_currency) {
            errors.insert(
                "toCurrency".to_string(),
                "To Currency is required and cannot be blank".to_string(),
            );
        }
        if self.deal_timestamp.is_none() {
            errors.insert(
                "dealTimestamp".to_string(),
                "Deal timestamp is required".to_string(),
            );
        }
        match self.deal_amount {
            None => {
                errors.insert(
                    "dealAmount".to_string(),
                    "Deal amount is required".to_string(),
                );
            }
            Some(amount) if amount <= Decimal::ZERO => {
                errors.insert(
                    "dealAmount".to_string(),
                    "Deal amount must be a positive number".to_string(),
                );
            }
            Some(_) => {}
        }

        match (
            self.id,
            self.from_currency,
            self.to_currency,
            self.deal_timestamp,
            self.deal_amount,
        ) {
            (Some(id), Some(from_currency), Some(to_currency), Some(deal_timestamp), Some(deal_amount))
                if errors.is_empty() =>
            {
                Ok(NewFxDeal {
                    id,
                    from_currency,
                    to_currency,
                    deal_timestamp,
                    deal_amount,
                })
            }
            _ => Err(errors),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Echo of a stored deal as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealResponse {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub deal_timestamp: NaiveDateTime,
    pub deal_amount: Decimal,
}

impl From<FxDeal> for DealResponse {
    fn from(deal: FxDeal) -> Self {
        Self {
            id: deal.id,
            from_currency: deal.from_currency,
            to_currency: deal.to_currency,
            deal_timestamp: deal.deal_timestamp,
            deal_amount: deal.deal_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn valid_request() -> DealRequest {
        DealRequest {
            id: Some("DEAL-001".to_string()),
            from_currency: Some("USD".to_string()),
            to_currency: Some("EUR".to_string()),
            deal_timestamp: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0),
            deal_amount: Some(dec!(1000.50)),
        }
    }

    #[test]
    fn test_valid_request_converts() {
        let deal = valid_request().into_new_deal().unwrap();
        assert_eq!(deal.id, "DEAL-001");
        assert_eq!(deal.deal_amount, dec!(1000.50));
    }

    #[test]
    fn test_empty_request_reports_every_field() {
        let errors = DealRequest::default().into_new_deal().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors["id"], "Deal ID is required and cannot be blank");
        assert_eq!(
            errors["fromCurrency"],
            "From Currency is required and cannot be blank"
        );
        assert_eq!(
            errors["toCurrency"],
            "To Currency is required and cannot be blank"
        );
        assert_eq!(errors["dealTimestamp"], "Deal timestamp is required");
        assert_eq!(errors["dealAmount"], "Deal amount is required");
    }

    #[test]
    fn test_short_id_is_rejected() {
        let mut request = valid_request();
        request.id = Some("AB".to_string());
        let errors = request.into_new_deal().unwrap_err();
        assert_eq!(errors["id"], "Deal ID must be between 3 and 255 characters");
    }

    #[test]
    fn test_id_length_bounds_are_inclusive() {
        let mut request = valid_request();
        request.id = Some("A".repeat(255));
        assert!(request.into_new_deal().is_ok());

        let mut request = valid_request();
        request.id = Some("A".repeat(256));
        assert!(request.into_new_deal().is_err());
    }

    #[test]
    fn test_blank_currency_is_rejected() {
        let mut request = valid_request();
        request.to_currency = Some("   ".to_string());
        let errors = request.into_new_deal().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("toCurrency"));
    }

    #[test]
    fn test_non_positive_amount_is_rejected() {
        for amount in [dec!(0), dec!(-5.25)] {
            let mut request = valid_request();
            request.deal_amount = Some(amount);
            let errors = request.into_new_deal().unwrap_err();
            assert_eq!(errors["dealAmount"], "Deal amount must be a positive number");
        }
    }

    #[test]
    fn test_malformed_currency_passes_field_checks() {
        let mut request = valid_request();
        request.from_currency = Some("usd".to_string());
        assert!(request.into_new_deal().is_ok());
    }
}
