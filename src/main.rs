//! QuakeMock Server Entry Point

use clap::Parser;
use quakemock::cli::Cli;
use quakemock::config::ServerConfig;
use quakemock::cycler::SampleCycler;
use quakemock::error::FeedResult;
use quakemock::{logging, server, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    info!("QuakeMock v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.server_config();

    // サンプルが1件も無いフィードがあれば起動させない
    let state = match build_state(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "[p2p] {} sample files in {}",
        state.p2p.pool_size(),
        state.p2p.dir().display()
    );
    info!(
        "[jma] {} sample files in {}",
        state.jma.pool_size(),
        state.jma.dir().display()
    );

    server::run(state, &config.bind_addr()).await;
}

/// フィードごとの巡回器を組み立てる
fn build_state(config: &ServerConfig) -> FeedResult<AppState> {
    let p2p = SampleCycler::from_dir("p2p", config.feed_dir("p2p"))?;
    let jma = SampleCycler::from_dir("jma", config.feed_dir("jma"))?;
    Ok(AppState { p2p, jma })
}
