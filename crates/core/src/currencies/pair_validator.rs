use std::sync::Arc;

use super::currency_format::check_format;
use super::reference_set::CurrencyReferenceSet;
use crate::constants::{FROM_CURRENCY_FIELD, TO_CURRENCY_FIELD};
use crate::errors::{Error, Result};

/// Trait for validating the currency pair of a deal.
pub trait CurrencyPairValidatorTrait: Send + Sync {
    fn validate(&self, from: Option<&str>, to: Option<&str>) -> Result<()>;
}

/// Validates a (from, to) currency pair against the reference set.
///
/// Checks run in a fixed order and stop at the first failure:
/// format of `from`, format of `to`, distinctness, existence of `from`,
/// existence of `to`. Format is checked on the raw values, so `"USD"`/`"usd"`
/// fails on the format of `to` and never reaches the distinctness check.
#[derive(Debug, Clone)]
pub struct CurrencyPairValidator {
    reference_set: Arc<CurrencyReferenceSet>,
}

impl CurrencyPairValidator {
    pub fn new(reference_set: Arc<CurrencyReferenceSet>) -> Self {
        Self { reference_set }
    }

    fn ensure_different(from: &str, to: &str) -> Result<()> {
        if from.eq_ignore_ascii_case(to) {
            return Err(Error::InvalidCurrency(format!(
                "fromCurrency and toCurrency must differ: {}",
                from
            )));
        }
        Ok(())
    }

    fn verify_existence(&self, code: &str) -> Result<()> {
        if !self.reference_set.contains(&code.to_uppercase()) {
            return Err(Error::UnknownCurrency(format!(
                "Currency not recognized: {}",
                code
            )));
        }
        Ok(())
    }
}

impl CurrencyPairValidatorTrait for CurrencyPairValidator {
    fn validate(&self, from: Option<&str>, to: Option<&str>) -> Result<()> {
        let from = check_format(from, FROM_CURRENCY_FIELD)?;
        let to = check_format(to, TO_CURRENCY_FIELD)?;
        Self::ensure_different(from, to)?;
        self.verify_existence(from)?;
        self.verify_existence(to)
    }
}
