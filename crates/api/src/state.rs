use std::sync::Arc;

use rakuda_core::catalog::Catalog;
use rakuda_core::error::CoreError;
use rakuda_core::manifest::Manifest;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind `Arc` and is read-only after
/// startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Every mounted domain, used by the catalog and health endpoints.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }

    /// Build state from configuration, loading the manifest at
    /// `CATALOG_PATH` or falling back to the built-in catalog.
    pub fn from_config(config: ServerConfig) -> Result<Self, CoreError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading catalog manifest");
                Manifest::from_path(path)?.into_catalog()?
            }
            None => Catalog::builtin()?,
        };
        Ok(Self::new(config, catalog))
    }
}
