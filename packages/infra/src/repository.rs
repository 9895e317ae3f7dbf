//! # リポジトリ実装
//!
//! 永続化の抽象（トレイト）と PostgreSQL 実装を提供する。
//!
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: API 層は `Arc<dyn ItemRepository>` にのみ依存する

pub mod item_repository;

pub use item_repository::{ItemRepository, PostgresItemRepository};
