//! Deals module - domain models, services, and traits.

mod deals_model;
mod deals_service;
mod deals_traits;


pub use deals_model::{FxDeal, NewFxDeal};
pub use deals_service::FxDealService;
pub use deals_traits::{FxDealRepositoryTrait, FxDealServiceTrait};
