//! # Todo API サーバー
//!
//! To-Do アイテムの CRUD を HTTP/JSON で提供する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! HTTP ─▶ handler ─▶ usecase ─▶ ItemRepository ─▶ PostgreSQL
//!                                (todo-infra)
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`extract`] - リクエストボディの抽出
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`shutdown`] - グレースフルシャットダウン
//! - [`usecase`] - ユースケース
//!
//! ## 依存関係
//!
//! - `todo_domain`: ドメインモデル、エラー定義
//! - `todo_infra`: データベース接続、リポジトリ
//! - `todo_shared`: エラーボディ、ヘルスチェック型、トレーシング初期化

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod shutdown;
pub mod usecase;
