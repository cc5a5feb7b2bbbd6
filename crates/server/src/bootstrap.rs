use axum::middleware;
use axum::Router;
use catalogd_core::catalog::CatalogHandle;
use catalogd_core::config::{AppConfig, ConfigError, LoadOptions};
use thiserror::Error;
use tracing::info;

use crate::{api, request_log, site};

pub struct Application {
    pub config: AppConfig,
    pub catalog: CatalogHandle,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );
    let config = AppConfig::load(options)?;

    Ok(bootstrap_with_config(config))
}

pub fn bootstrap_with_config(config: AppConfig) -> Application {
    let catalog = CatalogHandle::seeded();
    info!(
        event_name = "system.bootstrap.catalog_seeded",
        correlation_id = "bootstrap",
        product_count = catalog.len(),
        "in-memory catalog seeded"
    );

    Application { config, catalog }
}

impl Application {
    /// Everything the server exposes: the JSON API, the landing page, the
    /// static asset fallback, with request logging wrapped around all of it.
    pub fn router(&self) -> Router {
        api::router(self.catalog.clone())
            .merge(site::router(&self.config.static_assets.directory))
            .layer(middleware::from_fn(request_log::log_request))
    }
}
