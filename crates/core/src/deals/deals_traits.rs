use crate::deals::deals_model::{FxDeal, NewFxDeal};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for deal repository operations.
///
/// Implementations must enforce uniqueness of the deal ID themselves and
/// report a violation from `save` as `DatabaseError::UniqueViolation`.
#[async_trait]
pub trait FxDealRepositoryTrait: Send + Sync {
    fn exists_by_id(&self, deal_id: &str) -> Result<bool>;
    fn find_by_id(&self, deal_id: &str) -> Result<Option<FxDeal>>;
    async fn save(&self, new_deal: NewFxDeal) -> Result<FxDeal>;
}

/// Trait for deal service operations
#[async_trait]
pub trait FxDealServiceTrait: Send + Sync {
    async fn submit_deal(&self, new_deal: NewFxDeal) -> Result<FxDeal>;
    fn get_deal(&self, deal_id: &str) -> Result<FxDeal>;
}
