use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a cargo as entered by the customer
///
/// Any string is accepted; deciding whether an id refers to a real cargo is the
/// lookup's job, not the identifier's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(String);

impl TrackingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackingId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TrackingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Where a cargo currently is in its transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportStatus {
    NotReceived,
    InPort,
    OnboardCarrier,
    Claimed,
    Unknown,
}

impl TransportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportStatus::NotReceived => "NOT_RECEIVED",
            TransportStatus::InPort => "IN_PORT",
            TransportStatus::OnboardCarrier => "ONBOARD_CARRIER",
            TransportStatus::Claimed => "CLAIMED",
            TransportStatus::Unknown => "UNKNOWN",
        }
    }

    /// Parse a stored status, falling back to `Unknown` for anything unrecognised
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "NOT_RECEIVED" => TransportStatus::NotReceived,
            "IN_PORT" => TransportStatus::InPort,
            "ONBOARD_CARRIER" => TransportStatus::OnboardCarrier,
            "CLAIMED" => TransportStatus::Claimed,
            _ => TransportStatus::Unknown,
        }
    }
}

impl fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cargo as exposed to the tracking view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    #[serde(rename = "trackingId")]
    pub tracking_id: TrackingId,
    pub origin: String,
    #[serde(rename = "finalDestination")]
    pub final_destination: String,
    #[serde(rename = "transportStatus")]
    pub transport_status: TransportStatus,
    #[serde(rename = "lastKnownLocation", default)]
    pub last_known_location: Option<String>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
}

impl Cargo {
    pub fn new(
        tracking_id: impl Into<TrackingId>,
        origin: &str,
        final_destination: &str,
        transport_status: TransportStatus,
    ) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            origin: origin.to_string(),
            final_destination: final_destination.to_string(),
            transport_status,
            last_known_location: None,
            last_updated: None,
        }
    }

    pub fn at_location(mut self, location: &str) -> Self {
        self.last_known_location = Some(location.to_string());
        self
    }
}

/// Error attached to a single form field
///
/// Mirrors a rejected field value: the message code is resolved later against
/// a message bundle, falling back to `default_message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub args: Vec<String>,
    #[serde(rename = "defaultMessage")]
    pub default_message: String,
}

impl FieldError {
    pub fn new(field: &str, code: &str, args: Vec<String>, default_message: &str) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            args,
            default_message: default_message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_lenient() {
        assert_eq!(TransportStatus::parse_lenient("IN_PORT"), TransportStatus::InPort);
        assert_eq!(TransportStatus::parse_lenient("onboard_carrier"), TransportStatus::OnboardCarrier);
        assert_eq!(TransportStatus::parse_lenient("LOST_AT_SEA"), TransportStatus::Unknown);
    }

    #[test]
    fn test_cargo_serializes_camel_case() {
        let cargo = Cargo::new("ABC123", "CNHKG", "FIHEL", TransportStatus::InPort).at_location("CNHKG");
        let json = serde_json::to_value(&cargo).unwrap();

        assert_eq!(json["trackingId"], "ABC123");
        assert_eq!(json["transportStatus"], "IN_PORT");
        assert_eq!(json["lastKnownLocation"], "CNHKG");
    }

    #[test]
    fn test_tracking_id_accepts_any_string() {
        assert_eq!(TrackingId::new("").as_str(), "");
        assert_eq!(TrackingId::new("  weird id ").to_string(), "  weird id ");
    }
}
