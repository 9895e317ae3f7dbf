//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証とエラー変換はユースケースに委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェックハンドラ
//!     └── item.rs     # To-Do アイテムハンドラ
//! ```

pub mod health;
pub mod item;

pub use health::{ReadinessState, health_check, readiness_check};
pub use item::{
   ItemDto,
   ItemRequest,
   ItemState,
   create_item,
   delete_item,
   empty_item_id,
   get_item,
   list_items,
   method_not_allowed,
   not_found,
   update_item,
};
