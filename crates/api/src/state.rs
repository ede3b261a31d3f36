use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::{FilmReadService, FilmWriteService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The services receive their storage handle explicitly at construction;
/// there are no global singletons.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: kino_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read-side film service.
    pub read: FilmReadService,
    /// Write-side film service.
    pub write: FilmWriteService,
}

impl AppState {
    /// Wire up the services around the given pool and configuration.
    pub fn new(pool: kino_db::DbPool, config: ServerConfig) -> Self {
        Self {
            read: FilmReadService::new(pool.clone()),
            write: FilmWriteService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
