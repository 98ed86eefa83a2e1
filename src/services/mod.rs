// Service exports
pub mod cache;
pub mod memory;
pub mod postgres;
pub mod tracking;

use std::sync::Arc;
use crate::config::{Settings, StoreBackend};

pub use cache::CachedTrackingService;
pub use memory::InMemoryCargoStore;
pub use postgres::PostgresCargoStore;
pub use tracking::{TrackingError, TrackingService};

/// Build the lookup capability described by the settings
///
/// The store is wrapped in the read-through cache when caching is enabled.
pub async fn build_tracking_service(settings: &Settings) -> Result<Arc<dyn TrackingService>, TrackingError> {
    match settings.store.backend {
        StoreBackend::Memory => {
            let store = InMemoryCargoStore::with_sample_data();
            tracing::info!("Using in-memory cargo store ({} sample cargos)", store.len().await);
            Ok(with_cache(store, settings))
        }
        StoreBackend::Postgres => {
            let url = settings.store.database_url.as_deref().ok_or_else(|| {
                TrackingError::Unavailable("no database url configured".to_string())
            })?;
            let store = PostgresCargoStore::from_settings(
                url,
                settings.store.max_connections,
                settings.store.min_connections,
            )
            .await?;
            if settings.store.seed_sample_data {
                store.seed(memory::sample_cargos()).await?;
            }
            tracing::info!("Using PostgreSQL cargo store");
            Ok(with_cache(store, settings))
        }
    }
}

fn with_cache<S: TrackingService + 'static>(store: S, settings: &Settings) -> Arc<dyn TrackingService> {
    if settings.cache.enabled {
        tracing::info!(
            "Cargo cache enabled (capacity: {}, TTL: {}s)",
            settings.cache.capacity,
            settings.cache.ttl_secs
        );
        Arc::new(CachedTrackingService::new(store, settings.cache.capacity, settings.cache.ttl_secs))
    } else {
        Arc::new(store)
    }
}
