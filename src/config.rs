//! Configuration management via environment variables
//!
//! Provides a helper for reading environment variables and the server
//! settings assembled from the parsed CLI.

use std::path::PathBuf;

/// Get an environment variable with a default value
///
/// # Arguments
/// * `name` - The environment variable name
/// * `default` - The default value to return if the variable is not set
pub fn get_env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// サーバー設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// バインド先ホスト
    pub host: String,
    /// 待受ポート
    pub port: u16,
    /// サンプルファイル群のルートディレクトリ
    pub samples_dir: PathBuf,
}

impl ServerConfig {
    /// バインドアドレス文字列を返す
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// フィードのサンプルディレクトリを返す（`<samples_dir>/<feed>`）
    pub fn feed_dir(&self, feed: &str) -> PathBuf {
        self.samples_dir.join(feed)
    }
}
