//! Shared application state for all routes.

use crate::catalog::Catalog;
use crate::error::ConfigError;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// State over the built-in thesis catalog.
    pub fn new(pool: PgPool) -> Result<Self, ConfigError> {
        Ok(AppState {
            pool,
            catalog: Arc::new(Catalog::builtin()?),
        })
    }
}
