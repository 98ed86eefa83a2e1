use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use cargo_tracker::config::Settings;
use cargo_tracker::core::{MessageSource, TrackingRequestHandler};
use cargo_tracker::routes::{self, AppState};
use cargo_tracker::services;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting cargo tracker...");

    let tracking_service = match services::build_tracking_service(&settings).await {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to initialise cargo store: {}", e);
            std::process::exit(1);
        }
    };

    let handler = TrackingRequestHandler::new(tracking_service);
    let messages = MessageSource::with_overrides(&settings.message_overrides());
    let app_state = AppState::new(handler, messages);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{} ({} workers)", host, port, workers);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_payloads)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
