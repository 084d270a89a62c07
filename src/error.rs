//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use std::path::PathBuf;

use thiserror::Error;

/// Mock feed error type
#[derive(Debug, Error)]
pub enum FeedError {
    /// No usable sample files were found for a feed
    #[error("no sample files for feed '{feed}' in {}", dir.display())]
    EmptyPool {
        /// Feed name (e.g. "p2p", "jma")
        feed: String,
        /// Directory that was scanned
        dir: PathBuf,
    },

    /// Filesystem error while scanning or reading sample files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias (feed)
pub type FeedResult<T> = Result<T, FeedError>;
