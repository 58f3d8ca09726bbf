use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vapi_console::{create_router, AppState, Config, VapiClientFactory};

/// Web console for starting and stopping hosted voice assistant sessions
#[derive(Parser, Debug)]
#[command(name = "vapi-console", version, about)]
struct Cli {
    /// Config file path (extension optional)
    #[arg(long, short = 'c', default_value = "config/vapi-console")]
    config: String,

    /// Address to bind, overrides the config file
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on, overrides the config file
    #[arg(long, short = 'p')]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;
    if let Some(bind) = cli.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = cli.port {
        cfg.service.http.port = port;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Voice API: {}", cfg.vapi.base_url);
    if cfg.vapi.api_key.is_none() {
        warn!("VAPI_API_KEY not set, pages will ask for a key");
    }

    let factory = VapiClientFactory::new(
        &cfg.vapi.base_url,
        cfg.vapi.request_timeout_secs.map(Duration::from_secs),
    )?;

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let state = AppState::new(cfg, Arc::new(factory))?;
    state.spawn_idle_reaper(Duration::from_secs(60));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
