mod command;
mod console;
mod render;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eyang_core::{
    load_config, load_default_config, validate_config, Config, InMemoryTicketStore, LoggingConfig,
    TicketDesk, TicketFilter, TicketStore,
};

use console::Console;

/// Environment variable naming the config file
const CONFIG_ENV: &str = "EYANG_CONFIG";

/// Config file picked up from the working directory when present
const DEFAULT_CONFIG_PATH: &str = "eyang.toml";

fn main() {
    if let Err(e) = run() {
        // Logging may not be set up yet
        eprintln!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = resolve_config()?;
    validate_config(&config).context("Configuration validation failed")?;

    init_logging(&config.logging)?;
    info!("Store id strategy: {:?}", config.store.id_strategy);
    info!("Output format: {:?}", config.console.format);

    let store = Arc::new(InMemoryTicketStore::with_id_strategy(
        config.store.id_strategy,
    ));
    let desk = TicketDesk::new(store.clone());

    info!("Session started");
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), config.console).run(&desk)?;

    // Nothing outlives the process
    let discarded = store.count(&TicketFilter::new())?;
    info!(discarded, "Session ended");
    Ok(())
}

/// `EYANG_CONFIG` if set, else `eyang.toml` if present, else defaults.
fn resolve_config() -> Result<Config> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        let path = PathBuf::from(path);
        return load_config(&path)
            .with_context(|| format!("Failed to load config from {:?}", path));
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        return load_config(default_path)
            .with_context(|| format!("Failed to load config from {:?}", default_path));
    }

    load_default_config().context("Failed to load default config")
}

/// Log to stderr; stdout belongs to the session.
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.filter)
            .with_context(|| format!("Invalid logging.filter {:?}", logging.filter))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
    Ok(())
}
