use std::sync::Arc;

use anyhow::{Context, Result};
use maud::Render;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use community_leaderboard::components::{render_text, LeaderboardPanel};
use community_leaderboard::config::{Config, OutputFormat};
use community_leaderboard::leaderboard::{LeaderboardClient, LeaderboardQuery};
use community_leaderboard::ranking::{LeaderboardPage, PageState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(
        base_url = %config.base_url,
        period = %config.period,
        category = %config.category,
        ordering = %config.response_ordering,
        "Configuration loaded"
    );

    let client = LeaderboardClient::new(&config).context("Failed to create leaderboard client")?;
    let query = LeaderboardQuery::new(Arc::new(client), config.query_options());

    // With auto-fetch off nothing happens on mount, so fetch explicitly.
    let fetch = query.mount().unwrap_or_else(|| query.refetch());

    tokio::select! {
        joined = fetch => joined.context("Leaderboard fetch task failed")?,
        () = shutdown_signal() => {
            info!("Interrupted before the leaderboard loaded");
            return Ok(());
        }
    }

    let page = LeaderboardPage::from_view(&query.snapshot(), config.category);
    if let PageState::Failed { message } = &page.state {
        warn!(error = %message, "Leaderboard unavailable");
    }

    let output = match config.output {
        OutputFormat::Text => render_text(&page),
        OutputFormat::Html => LeaderboardPanel::new(&page).render().into_string(),
    };
    println!("{output}");

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,community_leaderboard=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    // Logs go to stderr so stdout carries only the rendered leaderboard.
    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
