//! フィードAPIハンドラー
//!
//! フィードごとに選択中のサンプルJSONを返すエンドポイント

/// APIエラーレスポンス型
pub mod error;

use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::cycler::SampleCycler;
use crate::AppState;
use error::AppError;

/// APIルーターを作成
///
/// 利用側はブラウザ上のフロントエンドなので、CORSは全開放にする。
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/p2p", get(serve_p2p))
        .route("/jma", get(serve_jma))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// `GET /p2p` - 地震情報フィードのサンプルを返す
async fn serve_p2p(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    serve_feed(&state.p2p).await
}

/// `GET /jma` - 津波情報フィードのサンプルを返す
async fn serve_jma(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    serve_feed(&state.jma).await
}

/// 選択中のサンプルを読み出してJSONレスポンスにする
async fn serve_feed(cycler: &SampleCycler) -> Result<impl IntoResponse, AppError> {
    let sample = cycler.fetch().await?;
    info!("[{}] serving {}", cycler.feed(), sample.name);
    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        sample.body,
    ))
}
