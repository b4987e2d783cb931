// src/main.rs - Gateway startup
use clap::Parser;
use spoolgate::config;
use spoolgate::spooler::CupsSpooler;
use spoolgate::web;

#[derive(Parser)]
#[command(name = "spoolgate", about = "HTTP print gateway")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "spoolgate.toml")]
    config: std::path::PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting spoolgate print gateway");

    let args = Args::parse();
    let config = if args.config.exists() {
        tracing::info!("Loading configuration from: {}", args.config.display());
        config::load_config(&args.config).map_err(|e| {
            tracing::error!("Failed to load config from '{}': {}", args.config.display(), e);
            Box::new(e) as Box<dyn std::error::Error + Send + Sync + 'static>
        })?
    } else {
        tracing::info!(
            "No configuration file at '{}', using defaults",
            args.config.display()
        );
        config::Config::default()
    };

    tracing::info!("Printer: {}", config.printer.name);
    tracing::info!("Job directory: {}", config.jobs.dir.display());
    tokio::fs::create_dir_all(&config.jobs.dir).await?;

    let spooler = Box::new(CupsSpooler::new(&config.spooler));
    let bind = config.server.bind.clone();
    let app = web::api::create_router(config, spooler);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("Web API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
