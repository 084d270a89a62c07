//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::error::FeedError;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub FeedError);

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // プール枯渇は起動時に弾くので、ここに届くのは実質読み出し失敗のみ
        let AppError(err) = self;
        tracing::error!("feed request failed: {err}");

        let payload = json!({
            "error": err.to_string()
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
    }
}
