// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Cargo, FieldError, TrackingId, TransportStatus};
pub use requests::TrackCommand;
pub use responses::{ErrorResponse, HealthResponse, RenderedFieldError, TrackingView};
