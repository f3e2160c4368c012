//! SQLite storage implementation for FX deals.

mod model;
mod repository;

pub use model::{FxDealDB, NewFxDealDB};
pub use repository::FxDealRepository;
