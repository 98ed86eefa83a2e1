// Route exports
pub mod errors;
pub mod tracking;

use actix_web::web;

pub use errors::{handle_form_payload_error, handle_json_payload_error, JsonError};
pub use tracking::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(tracking::configure),
    );
}

/// Payload extractor settings shared by the server and tests
pub fn configure_payloads(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::FormConfig::default().error_handler(handle_form_payload_error));
}
