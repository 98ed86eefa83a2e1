// Tracking request handling
pub mod messages;
pub mod tracking;

pub use messages::MessageSource;
pub use tracking::{TrackingRequestHandler, TrackingResult, TRACKING_ID_FIELD, UNKNOWN_ID_CODE};
