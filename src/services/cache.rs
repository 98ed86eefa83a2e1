use async_trait::async_trait;
use std::time::Duration;
use crate::models::{Cargo, TrackingId};
use crate::services::tracking::{TrackingError, TrackingService};

/// Read-through cache in front of another tracking service
///
/// Only found cargo is cached. Unknown ids and faults always reach the inner
/// service, so a cargo registered later is visible on the next lookup.
pub struct CachedTrackingService<S> {
    inner: S,
    cache: moka::future::Cache<TrackingId, Cargo>,
}

impl<S: TrackingService> CachedTrackingService<S> {
    pub fn new(inner: S, capacity: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, cache }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drop a cached entry, e.g. after the cargo was updated
    pub async fn invalidate(&self, tracking_id: &TrackingId) {
        self.cache.invalidate(tracking_id).await;
    }

    /// Number of cached cargos, after pending inserts and evictions are applied
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait]
impl<S: TrackingService> TrackingService for CachedTrackingService<S> {
    async fn track(&self, tracking_id: &TrackingId) -> Result<Option<Cargo>, TrackingError> {
        if let Some(cargo) = self.cache.get(tracking_id).await {
            tracing::trace!("Cache hit: {}", tracking_id);
            return Ok(Some(cargo));
        }

        let found = self.inner.track(tracking_id).await?;
        if let Some(cargo) = &found {
            self.cache.insert(tracking_id.clone(), cargo.clone()).await;
            tracing::trace!("Cache set: {}", tracking_id);
        }

        Ok(found)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn is_cached(&self) -> bool {
        true
    }

    async fn health_check(&self) -> Result<bool, TrackingError> {
        self.inner.health_check().await
    }
}
