use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use vpn_traffic::api::{routes, AppState};
use vpn_traffic::models::config::AppConfig;
use vpn_traffic::utils::logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Capture status and daily traffic index for a VPN gateway, with REST API")]
struct Args {
    /// Directory containing capture files and their CSV reports
    #[clap(short, long, env = "TRAFFIC_DIR")]
    traffic_dir: PathBuf,

    /// Address for the REST API server
    #[clap(short, long, env = "TRAFFIC_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port for the REST API server
    #[clap(short, long, env = "TRAFFIC_PORT", default_value = "3000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error, off)
    #[clap(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger with specified level
    logging::init_logger(logging::get_log_level(&args.log_level));

    info!("Starting vpn-traffic v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig {
        traffic_dir: args.traffic_dir,
        bind_address: args.bind,
        port: args.port,
    };

    let state = web::Data::new(AppState::new(config.clone()));

    // The index must be complete before the first request is served
    let snapshot = state.traffic.rebuild().with_context(|| {
        format!("building traffic index from {}", config.traffic_dir.display())
    })?;
    info!(
        "Indexed {} days ({:?} to {:?})",
        snapshot.index.len(),
        snapshot.index.first_date(),
        snapshot.index.last_date()
    );

    info!("Starting API server on {}", config.listen_addr());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(config.listen_addr())?
    .run()
    .await?;

    Ok(())
}
