//! # ユースケース層
//!
//! ハンドラとリポジトリの間に立ち、入力の検証とエラーの変換を行う。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラはリクエストの解釈とレスポンスの組み立てのみ
//!
//! ## モジュール構成
//!
//! - `item`: To-Do アイテムの CRUD

pub mod item;

pub use item::{ItemInput, ItemUseCaseImpl};
