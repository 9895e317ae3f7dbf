//! # Todo ドメイン層
//!
//! To-Do アイテムを表現するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`item::Item`]）
//! - **値オブジェクト**: 生成時に検証される不変オブジェクト（[`item::ItemTitle`] など）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`item`] - To-Do アイテム
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::{DomainError, item::NewItem};
//!
//! let input = NewItem::new("牛乳を買う", None, None).unwrap();
//! assert_eq!(input.title().as_str(), "牛乳を買う");
//! assert!(!input.completed());
//!
//! let error = NewItem::new("", None, None).unwrap_err();
//! assert!(matches!(error, DomainError::Validation(_)));
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod item;

pub use error::DomainError;
