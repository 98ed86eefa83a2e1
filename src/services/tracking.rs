use async_trait::async_trait;
use thiserror::Error;
use crate::models::{Cargo, TrackingId};

/// Faults raised while looking up a cargo
///
/// An unknown tracking id is not a fault; lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Tracking service unavailable: {0}")]
    Unavailable(String),
}

/// Lookup capability the tracking handler depends on
#[async_trait]
pub trait TrackingService: Send + Sync {
    /// Find the cargo with the given tracking id, if any
    async fn track(&self, tracking_id: &TrackingId) -> Result<Option<Cargo>, TrackingError>;

    /// Short name of the backing store, reported by the health endpoint
    fn name(&self) -> &'static str;

    /// Whether lookups are served through a read-through cache
    fn is_cached(&self) -> bool {
        false
    }

    async fn health_check(&self) -> Result<bool, TrackingError> {
        Ok(true)
    }
}
