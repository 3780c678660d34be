use dotenvy::dotenv;
use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;
use tokio::net::TcpListener;

mod config {
    pub mod app_config;
}
mod handlers {
    pub mod contact_handlers;
}
mod utils {
    pub mod mailer;
    pub mod sanitize;
}

use config::app_config::AppConfig;
use handlers::contact_handlers;
use utils::mailer::{LogMailer, MailTransport, SmtpMailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    config: AppConfig,
    mailer: Arc<dyn MailTransport>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // page routes like /about.html only exist client side
    let index = ServeFile::new(state.config.static_dir.join("index.html"));
    let site = ServeDir::new(&state.config.static_dir).not_found_service(index);

    Router::new()
        .route("/api/health", get(health_check))
        .route("/contact", get(contact_handlers::contact_page).post(contact_handlers::submit_contact))
        // the exported markup still posts to the old php path
        .route("/contact.php", get(contact_handlers::contact_page).post(contact_handlers::submit_contact))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("Starting Studio X backend ({})", config.environment);

    let mailer: Arc<dyn MailTransport> = match &config.smtp {
        Some(smtp) => {
            tracing::info!("Relaying contact mail through {}", smtp.host);
            Arc::new(SmtpMailer::new(smtp)?)
        }
        None => {
            tracing::info!("ENVIRONMENT is development, contact mail will only be logged");
            Arc::new(LogMailer)
        }
    };

    let bind_addr = config.bind_addr.clone();
    tracing::info!("Serving site from {}", config.static_dir.display());

    let state = Arc::new(AppState { config, mailer });
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on {}", bind_addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
