//! ログ初期化
//!
//! tracing-subscriberでコンソール出力のロガーを構成する。
//! フィルタは `RUST_LOG` が最優先、未設定なら `QUAKEMOCK_LOG_LEVEL`
//! （デフォルト: info）から組み立てる。

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config;

/// グローバルロガーを初期化する
pub fn init() -> Result<(), TryInitError> {
    let level = config::get_env_or("QUAKEMOCK_LOG_LEVEL", "info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("quakemock={level},tower_http={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
