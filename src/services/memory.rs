use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use crate::models::{Cargo, TrackingId, TransportStatus};
use crate::services::tracking::{TrackingError, TrackingService};

/// Cargo store kept entirely in memory
///
/// Used for local runs and tests. Lookups match the tracking id exactly.
#[derive(Debug, Default)]
pub struct InMemoryCargoStore {
    cargos: RwLock<HashMap<TrackingId, Cargo>>,
}

impl InMemoryCargoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the sample cargo used in demos
    pub fn with_sample_data() -> Self {
        Self::from_cargos(sample_cargos())
    }

    pub fn from_cargos(cargos: impl IntoIterator<Item = Cargo>) -> Self {
        let cargos = cargos
            .into_iter()
            .map(|cargo| (cargo.tracking_id.clone(), cargo))
            .collect();

        Self {
            cargos: RwLock::new(cargos),
        }
    }

    /// Add or replace a cargo
    pub async fn insert(&self, cargo: Cargo) {
        let mut cargos = self.cargos.write().await;
        tracing::debug!("Storing cargo {}", cargo.tracking_id);
        cargos.insert(cargo.tracking_id.clone(), cargo);
    }

    pub async fn len(&self) -> usize {
        self.cargos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cargos.read().await.is_empty()
    }
}

#[async_trait]
impl TrackingService for InMemoryCargoStore {
    async fn track(&self, tracking_id: &TrackingId) -> Result<Option<Cargo>, TrackingError> {
        let cargos = self.cargos.read().await;
        Ok(cargos.get(tracking_id).cloned())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Sample cargo served by the demo store
pub fn sample_cargos() -> Vec<Cargo> {
    let now = chrono::Utc::now();

    vec![
        Cargo {
            last_updated: Some(now),
            ..Cargo::new("ABC123", "CNHKG", "FIHEL", TransportStatus::InPort).at_location("CNHKG")
        },
        Cargo {
            last_updated: Some(now),
            ..Cargo::new("JKL567", "CNHGH", "SESTO", TransportStatus::OnboardCarrier)
                .at_location("USNYC")
        },
        Cargo::new("XYZ789", "SESTO", "CNSHA", TransportStatus::NotReceived),
    ]
}
