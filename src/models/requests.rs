use serde::{Deserialize, Serialize};

/// Tracking form submission
///
/// The id is kept raw; a missing field binds to an empty string, as an empty
/// form input would.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackCommand {
    #[serde(alias = "tracking_id", rename = "trackingId", default)]
    pub tracking_id: String,
}

impl TrackCommand {
    pub fn new(tracking_id: impl Into<String>) -> Self {
        Self {
            tracking_id: tracking_id.into(),
        }
    }
}
