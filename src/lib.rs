//! QuakeMock Server
//!
//! 地震・津波フィードのモックサーバー。フロントエンド開発用に、
//! 本物の上流APIの代わりに缶詰のサンプルJSONを返す。

#![warn(missing_docs)]

/// フィードAPIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// サンプル巡回管理
pub mod cycler;

/// エラー型定義
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// サーバー起動・シャットダウンハンドリング
pub mod server;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// p2p地震情報フィードの巡回器
    pub p2p: cycler::SampleCycler,
    /// 気象庁津波情報フィードの巡回器
    pub jma: cycler::SampleCycler,
}
