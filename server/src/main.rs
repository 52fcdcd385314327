use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tracing::{Level, info};

mod db;
mod http;
mod service;

use common::{
    config::{DbBackend, HbConfig, read_config},
    db::{MariaDBBackend, MemoryBackend},
};
use service::{HbRegistry, HbService};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/hintbox/config.toml")]
    config: String,

    /// Log at debug level instead of info

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    info!("hintbox server starting up, processing config file");

    let config = read_config(PathBuf::from(args.config)).await?;

    info!("starting core services");

    let registry = HbRegistry::new();

    match config.db_backend {
        DbBackend::MariaDB => start_services::<MariaDBBackend>(config.clone(), &registry).await?,
        DbBackend::Memory => start_services::<MemoryBackend>(config.clone(), &registry).await?,
    }

    info!("startup complete!");

    tokio::signal::ctrl_c().await?;

    info!("received interrupt, shutting down");

    Ok(())
}

// the services detach their tasks on start, so they do not need to outlive this call
async fn start_services<B: common::db::DbBackend>(
    config: Arc<HbConfig>,
    registry: &HbRegistry,
) -> anyhow::Result<()> {
    let db_svc = db::svc::DbService::<B>::create(config.clone(), registry)?;
    let http_svc = http::svc::HttpService::create(config.clone(), registry)?;

    db_svc.start(registry).await?;
    http_svc.start(registry).await?;

    Ok(())
}
