use std::sync::Arc;
use crate::core::messages::MessageSource;
use crate::models::{Cargo, FieldError, RenderedFieldError, TrackCommand, TrackingId, TrackingView};
use crate::services::{TrackingError, TrackingService};

/// Form field the tracking id is bound to
pub const TRACKING_ID_FIELD: &str = "trackingId";

/// Message code for a tracking id no cargo is registered under
pub const UNKNOWN_ID_CODE: &str = "cargo.unknown_id";

pub const UNKNOWN_ID_DEFAULT_MESSAGE: &str = "Unknown tracking id";

/// Outcome of handling a tracking request
///
/// A result carries either the cargo or the field error, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackingResult {
    Found(Cargo),
    NotFound(FieldError),
}

impl TrackingResult {
    pub fn is_found(&self) -> bool {
        matches!(self, TrackingResult::Found(_))
    }

    pub fn cargo(&self) -> Option<&Cargo> {
        match self {
            TrackingResult::Found(cargo) => Some(cargo),
            TrackingResult::NotFound(_) => None,
        }
    }

    pub fn error(&self) -> Option<&FieldError> {
        match self {
            TrackingResult::Found(_) => None,
            TrackingResult::NotFound(error) => Some(error),
        }
    }

    /// Merge the outcome into the form model of the command that produced it
    pub fn into_view(self, command: &TrackCommand, messages: &MessageSource) -> TrackingView {
        let (cargo, errors) = match self {
            TrackingResult::Found(cargo) => (Some(cargo), Vec::new()),
            TrackingResult::NotFound(error) => {
                let message = messages.resolve(&error.code, &error.args, &error.default_message);
                let rendered = RenderedFieldError {
                    field: error.field,
                    code: error.code,
                    args: error.args,
                    message,
                };
                (None, vec![rendered])
            }
        };

        TrackingView {
            tracking_id: Some(command.tracking_id.clone()),
            cargo,
            errors,
        }
    }
}

/// Turns a tracking form submission into a lookup result
///
/// The lookup capability is fixed at construction. An unknown id becomes a
/// field error; faults from the lookup are returned to the caller untouched.
#[derive(Clone)]
pub struct TrackingRequestHandler {
    tracking_service: Arc<dyn TrackingService>,
}

impl TrackingRequestHandler {
    pub fn new(tracking_service: Arc<dyn TrackingService>) -> Self {
        Self { tracking_service }
    }

    pub fn tracking_service(&self) -> &Arc<dyn TrackingService> {
        &self.tracking_service
    }

    pub async fn handle(&self, command: &TrackCommand) -> Result<TrackingResult, TrackingError> {
        let submitted = &command.tracking_id;
        let cargo = self
            .tracking_service
            .track(&TrackingId::new(submitted.as_str()))
            .await?;

        Ok(match cargo {
            Some(cargo) => TrackingResult::Found(cargo),
            None => TrackingResult::NotFound(FieldError::new(
                TRACKING_ID_FIELD,
                UNKNOWN_ID_CODE,
                vec![submitted.clone()],
                UNKNOWN_ID_DEFAULT_MESSAGE,
            )),
        })
    }
}
