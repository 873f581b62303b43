use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use metalfolio_core::prices::{PriceService, PriceServiceTrait, PriceSourceConfig};
use metalfolio_core::purchases::{PurchaseService, PurchaseServiceTrait};
use metalfolio_storage_sqlite::db::{self, write_actor};
use metalfolio_storage_sqlite::purchases::PurchaseRepository;

pub struct AppState {
    pub purchase_service: Arc<dyn PurchaseServiceTrait + Send + Sync>,
    pub price_service: Arc<dyn PriceServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
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

/// Announce which optional credentials were found, without printing them.
pub fn announce_startup(config: &Config) {
    if config.secret_key_is_dev() {
        tracing::info!("SECRET_KEY not set - using development fallback");
    } else {
        tracing::info!("SECRET_KEY loaded from environment");
    }
    if config.metal_price_api_key.is_some() {
        tracing::info!("METAL_PRICE_API_KEY loaded from environment");
    } else {
        tracing::info!("METAL_PRICE_API_KEY not set - serving fallback price data");
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let purchase_repo = Arc::new(PurchaseRepository::new(pool.clone(), writer.clone()));
    let purchase_service = Arc::new(PurchaseService::new(purchase_repo));

    let price_service = Arc::new(PriceService::new(PriceSourceConfig {
        api_key: config.metal_price_api_key.clone(),
    }));

    Ok(Arc::new(AppState {
        purchase_service,
        price_service,
    }))
}
