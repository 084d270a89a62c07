//! CLI module for quakemock
//!
//! Provides command-line interface for the mock feed server.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ServerConfig;

/// QuakeMock - canned earthquake/tsunami feeds for frontend development
#[derive(Parser, Debug, Clone)]
#[command(name = "quakemock")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    QUAKEMOCK_HOST           Bind address (default: 0.0.0.0)
    QUAKEMOCK_PORT           Listen port (default: 1212)
    QUAKEMOCK_SAMPLES_DIR    Root directory of sample files (default: samples)
    QUAKEMOCK_LOG_LEVEL      Log level (default: info)
"#)]
pub struct Cli {
    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "QUAKEMOCK_HOST")]
    pub host: String,

    /// Listen port
    #[arg(short, long, default_value = "1212", env = "QUAKEMOCK_PORT")]
    pub port: u16,

    /// Root directory of sample files (expects <dir>/p2p and <dir>/jma)
    #[arg(long, default_value = "samples", env = "QUAKEMOCK_SAMPLES_DIR")]
    pub samples_dir: PathBuf,
}

impl Cli {
    /// 解析済み引数からサーバー設定を組み立てる
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            samples_dir: self.samples_dir.clone(),
        }
    }
}
