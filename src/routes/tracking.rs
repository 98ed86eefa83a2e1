use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use crate::core::{MessageSource, TrackingRequestHandler};
use crate::models::{ErrorResponse, HealthResponse, TrackCommand, TrackingView};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub handler: TrackingRequestHandler,
    pub messages: Arc<MessageSource>,
}

impl AppState {
    pub fn new(handler: TrackingRequestHandler, messages: MessageSource) -> Self {
        Self {
            handler,
            messages: Arc::new(messages),
        }
    }
}

/// Configure all tracking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/track", web::get().to(show_form))
        .route("/track", web::post().to(submit_form))
        .route("/track.json", web::post().to(submit_json));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let service = state.handler.tracking_service();
    let healthy = match service.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Health check of {} store failed: {}", service.name(), e);
            false
        }
    };

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: service.name().to_string(),
        cached: service.is_cached(),
        timestamp: chrono::Utc::now(),
    })
}

/// Blank tracking form
///
/// GET /api/v1/track
async fn show_form() -> impl Responder {
    HttpResponse::Ok().json(TrackingView::empty())
}

/// Tracking form submission
///
/// POST /api/v1/track
///
/// Form body: `trackingId=ABC123`
async fn submit_form(
    state: web::Data<AppState>,
    form: web::Form<TrackCommand>,
) -> impl Responder {
    track(&state, form.into_inner()).await
}

/// Same as the form submission, with a JSON body
///
/// POST /api/v1/track.json
///
/// Request body:
/// ```json
/// { "trackingId": "ABC123" }
/// ```
async fn submit_json(
    state: web::Data<AppState>,
    body: web::Json<TrackCommand>,
) -> impl Responder {
    track(&state, body.into_inner()).await
}

/// Found and unknown ids both re-display the form; only lookup faults fail
async fn track(state: &AppState, command: TrackCommand) -> HttpResponse {
    tracing::info!("Tracking cargo: {}", command.tracking_id);

    match state.handler.handle(&command).await {
        Ok(result) => {
            tracing::debug!("Tracking {}: found={}", command.tracking_id, result.is_found());
            HttpResponse::Ok().json(result.into_view(&command, &state.messages))
        }
        Err(e) => {
            tracing::error!("Failed to track cargo {}: {}", command.tracking_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to track cargo".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
