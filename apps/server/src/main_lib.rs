use std::sync::Arc;

use anyhow::Context;
use dealwarehouse_core::{
    currencies::{CsvCurrencySource, CurrencyPairValidator, CurrencyReferenceSet},
    deals::{FxDealService, FxDealServiceTrait},
};
use dealwarehouse_storage_sqlite::{
    db::{self, write_actor},
    deals::FxDealRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub deal_service: Arc<dyn FxDealServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("DW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // Reference data first: without it no deal can be validated.
    let source = CsvCurrencySource::new(&config.currency_file);
    let reference_set = CurrencyReferenceSet::load(&source)
        .with_context(|| format!("Cannot load currencies from {}", source.path().display()))?;
    tracing::info!("Loaded {} currency codes", reference_set.len());
    let currency_validator = Arc::new(CurrencyPairValidator::new(Arc::new(reference_set)));

    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let deal_repository = Arc::new(FxDealRepository::new(pool.clone(), writer));
    let deal_service = Arc::new(FxDealService::new(deal_repository, currency_validator));

    Ok(Arc::new(AppState { deal_service }))
}
