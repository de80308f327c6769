mod config;
mod errors;
mod extraction;
mod layout;
mod mail;
mod matching;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::a4_report_geometry;
use crate::mail::{ReportMailer, SmtpSettings};
use crate::matching::{LexicalMatchScorer, ScoringConfig};
use crate::render::ReportStore;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Reports directory, served under /reports
    let reports = ReportStore::new(config.reports_dir.clone());
    reports.ensure_dir().await?;
    info!("Reports directory: {}", reports.dir().display());

    // Lexical scorer with the stock weights (0.55 / 0.25 / 0.10 / 0.10)
    let scoring = ScoringConfig::default();
    info!(
        "Scoring weights: skills={} experience={} education={} extras={}",
        scoring.weights.skills,
        scoring.weights.experience,
        scoring.weights.education,
        scoring.weights.extras
    );
    let scorer = Arc::new(LexicalMatchScorer::new(scoring));

    // Optional report email delivery
    let mailer = match SmtpSettings::from_config(&config) {
        Some(settings) => {
            info!("Email delivery via {}:{}", settings.host, settings.port);
            Some(ReportMailer::new(settings)?)
        }
        None => {
            info!("SMTP credentials not set; email delivery disabled");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        scorer,
        page: a4_report_geometry(),
        reports,
        mailer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
