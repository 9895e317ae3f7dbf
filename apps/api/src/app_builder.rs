//! # アプリケーション構築
//!
//! State を受け取り、ルーターを組み立てる。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ## ルーティング
//!
//! | パス | メソッド | ハンドラ |
//! |------|----------|----------|
//! | `/items` | GET / POST | 一覧 / 作成 |
//! | `/items/{id}` | GET / PUT / DELETE | 取得 / 置き換え / 削除 |
//! | `/items/` | すべて | 400（ID が空） |
//! | `/health` | GET | liveness |
//! | `/health/ready` | GET | readiness |
//!
//! 既知のパスに対する未対応メソッドは 405、未知のパスは 404。
//! いずれも `{"error": ...}` 形式で返す。

use std::sync::Arc;

use axum::{
   Router,
   routing::{any, get},
};
use tower_http::trace::TraceLayer;

use crate::handler::{
   ItemState,
   ReadinessState,
   create_item,
   delete_item,
   empty_item_id,
   get_item,
   health_check,
   list_items,
   method_not_allowed,
   not_found,
   readiness_check,
   update_item,
};

/// ルーターを構築する
pub fn build_app(item_state: Arc<ItemState>, readiness_state: Arc<ReadinessState>) -> Router {
   let item_routes = Router::new()
      .route(
         "/items",
         get(list_items)
            .post(create_item)
            .fallback(method_not_allowed),
      )
      .route("/items/", any(empty_item_id))
      .route(
         "/items/{id}",
         get(get_item)
            .put(update_item)
            .delete(delete_item)
            .fallback(method_not_allowed),
      )
      .with_state(item_state);

   let health_routes = Router::new()
      .route("/health", get(health_check).fallback(method_not_allowed))
      .route(
         "/health/ready",
         get(readiness_check).fallback(method_not_allowed),
      )
      .with_state(readiness_state);

   Router::new()
      .merge(item_routes)
      .merge(health_routes)
      .fallback(not_found)
      .layer(TraceLayer::new_for_http())
}
