//! Cargo Tracker - look up a cargo by its tracking id
//!
//! The tracking form handler sits directly on top of the lookup capability:
//! a submitted id either resolves to a cargo or comes back as a field error on
//! the form.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MessageSource, TrackingRequestHandler, TrackingResult};
pub use models::{Cargo, FieldError, TrackCommand, TrackingId, TrackingView, TransportStatus};
pub use services::{TrackingError, TrackingService};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let command = TrackCommand::new("ABC123");
        assert_eq!(TrackingId::new(command.tracking_id.as_str()).as_str(), "ABC123");
    }
}
