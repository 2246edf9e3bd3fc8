use anyhow::Result;
use tracing::{error, info, warn};

use view_arquitetura::catalog::ContentCatalog;
use view_arquitetura::config::Config;
use view_arquitetura::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("view_arquitetura=info".parse()?),
        )
        .init();

    info!("Starting View Arquitetura site");

    let config = Config::from_env()?;
    info!(
        default_locale = %config.default_locale,
        submit_delay_ms = config.contact_submit_delay.as_millis() as u64,
        "Configuration loaded"
    );

    let catalog = ContentCatalog::load();
    info!(
        projects = catalog.projects.len(),
        process_steps = catalog.process.len(),
        values = catalog.values.len(),
        team = catalog.team.len(),
        "Content loaded"
    );

    // Content problems are reported but never block startup
    let report = catalog.audit();
    for problem in &report.errors {
        error!("Content audit: {}", problem);
    }
    for problem in &report.warnings {
        warn!("Content audit: {}", problem);
    }
    if report.is_clean() {
        info!("Content audit passed");
    }

    server::serve(AppState::new(config, catalog)).await
}
