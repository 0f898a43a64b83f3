//! Main entry point for the timecard chaincode peer.
//!
//! This file sets up logging, loads configuration, deploys the contract on an
//! in-memory ledger and serves the HTTP routes until interrupted.

use std::sync::Arc;

use ledger_shim::MemoryStub;
use timecard_chaincode::api::chaincode_router;
use timecard_chaincode::config::{Config, LogFormat};
use timecard_chaincode::services::Peer;
use timecard_chaincode::TimecardChaincode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(2);
        }
    };
    init_tracing(config.log_format);

    let peer = Arc::new(Peer::new(
        config.chaincode_name.clone(),
        TimecardChaincode::new(),
        Arc::new(MemoryStub::new()),
    ));

    if let Some(args) = &config.init_args {
        if let Err(err) = peer.init(args).await {
            error!(error = %err, "init failed");
            std::process::exit(1);
        }
        info!("chaincode initialized");
    }

    let app = chaincode_router(peer);
    info!(addr = %config.listen_addr, chaincode = %config.chaincode_name, "listening");

    let builder = match axum::Server::try_bind(&config.listen_addr) {
        Ok(builder) => builder,
        Err(err) => {
            error!(addr = %config.listen_addr, error = %err, "cannot bind");
            std::process::exit(1);
        }
    };
    let server = builder
        .serve(app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        });
    if let Err(err) = server.await {
        error!(error = %err, "server error");
        std::process::exit(1);
    }
}
