//! `lamp-catalog` - the catalog server binary.
//!
//! Usage:
//!   lamp-catalog [-c <config.toml>] [--listen <addr>] [--port <n>]
//!                [--storage none|memory|redb] [--db <path>] [--static-dir <dir>]
//!
//! Startup loads both collections before the listener binds. A failed load
//! ends the process with an error; there is no partial-service mode.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use lamp_catalog::{loader, store, web, AppConfig, Backend, HttpSource};
use tracing::{error, info};

/// Lamp catalog server.
#[derive(Parser, Debug)]
#[command(name = "lamp-catalog", version, about = "Lamp catalog server")]
struct Cli {
    /// Path to the TOML config file. Missing file means defaults.
    #[arg(short = 'c', long = "config", default_value = "lamp-catalog.toml")]
    config: PathBuf,

    /// Listen address (overrides the config file).
    #[arg(long = "listen")]
    listen: Option<String>,

    /// Port to listen on, keeping the configured host.
    #[arg(long = "port", env = "PORT")]
    port: Option<u16>,

    /// Document store backend: none, memory or redb.
    #[arg(long = "storage")]
    storage: Option<Backend>,

    /// Database file for the redb backend.
    #[arg(long = "db")]
    db: Option<PathBuf>,

    /// Directory of static assets.
    #[arg(long = "static-dir")]
    static_dir: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) -> anyhow::Result<()> {
        if let Some(listen) = &self.listen {
            config.listen = listen.clone();
        }
        if let Some(port) = self.port {
            config.set_port(port)?;
        }
        if let Some(backend) = self.storage {
            config.storage.backend = backend;
        }
        if let Some(db) = &self.db {
            config.storage.path = db.clone();
        }
        if let Some(dir) = &self.static_dir {
            config.static_dir = Some(dir.clone());
        }
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration, then apply command-line overrides.
    info!("Loading configuration from {}", cli.config.display());
    let mut config = AppConfig::load(&cli.config)?;
    cli.apply(&mut config)?;
    config.validate()?;

    let store = store::open(&config.storage)?;
    let source = HttpSource::new(&config.sources)?;

    let catalog = match loader::load_catalog(&source, store.as_deref()).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "startup data load failed, not serving");
            return Err(e.into());
        }
    };

    // The store is only needed for the startup load.
    drop(store);

    web::serve(Arc::new(catalog), &config.listen, config.static_dir.as_deref()).await?;

    Ok(())
}
