use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use super::deals_model::{FxDeal, NewFxDeal};
use super::deals_traits::{FxDealRepositoryTrait, FxDealServiceTrait};
use crate::currencies::CurrencyPairValidatorTrait;
use crate::errors::{DatabaseError, Error, Result};

/// Validates and persists incoming FX deals.
pub struct FxDealService {
    repository: Arc<dyn FxDealRepositoryTrait>,
    currency_validator: Arc<dyn CurrencyPairValidatorTrait>,
}

impl FxDealService {
    pub fn new(
        repository: Arc<dyn FxDealRepositoryTrait>,
        currency_validator: Arc<dyn CurrencyPairValidatorTrait>,
    ) -> Self {
        Self {
            repository,
            currency_validator,
        }
    }

    fn duplicate_deal(deal_id: &str) -> Error {
        Error::DuplicateDeal(format!("A deal with ID '{}' already exists.", deal_id))
    }
}

#[async_trait]
impl FxDealServiceTrait for FxDealService {
    /// Validates the currency pair, rejects known IDs and stores the deal.
    ///
    /// The existence check is only a fast path: a concurrent insert of the
    /// same ID surfaces from `save` as a unique violation and is reported as
    /// the same `DuplicateDeal` error.
    async fn submit_deal(&self, new_deal: NewFxDeal) -> Result<FxDeal> {
        info!(
            "Processing FX deal request: ID={}, From={}, To={}, Amount={}",
            new_deal.id, new_deal.from_currency, new_deal.to_currency, new_deal.deal_amount
        );

        self.currency_validator.validate(
            Some(new_deal.from_currency.as_str()),
            Some(new_deal.to_currency.as_str()),
        )?;

        let deal_id = new_deal.id.clone();
        if self.repository.exists_by_id(&deal_id)? {
            warn!("Duplicate deal ID detected: {}", deal_id);
            return Err(Self::duplicate_deal(&deal_id));
        }

        let saved = match self.repository.save(new_deal).await {
            Ok(deal) => deal,
            Err(Error::Database(DatabaseError::UniqueViolation(reason))) => {
                warn!(
                    "Deal ID {} was stored by a concurrent request: {}",
                    deal_id, reason
                );
                return Err(Self::duplicate_deal(&deal_id));
            }
            Err(e) => return Err(e),
        };

        info!("Successfully saved FX deal with ID: {}", saved.id);
        Ok(saved)
    }

    fn get_deal(&self, deal_id: &str) -> Result<FxDeal> {
        self.repository.find_by_id(deal_id)?.ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!(
                "Deal not found: {}",
                deal_id
            )))
        })
    }
}
