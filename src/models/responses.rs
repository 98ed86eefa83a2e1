use serde::{Deserialize, Serialize};
use crate::models::domain::Cargo;

/// Field error with its message already resolved for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedFieldError {
    pub field: String,
    pub code: String,
    pub args: Vec<String>,
    pub message: String,
}

/// Model behind the tracking form
///
/// Holds the submitted id plus either the cargo or the field errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingView {
    #[serde(rename = "trackingId")]
    pub tracking_id: Option<String>,
    pub cargo: Option<Cargo>,
    pub errors: Vec<RenderedFieldError>,
}

impl TrackingView {
    /// The blank form, before anything was submitted
    pub fn empty() -> Self {
        Self {
            tracking_id: None,
            cargo: None,
            errors: Vec::new(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: String,
    pub cached: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
