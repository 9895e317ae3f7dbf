//! API 統合テストの共通ヘルパー

use std::{sync::Arc, time::Duration};

use axum::{
   Router,
   body::Body,
   http::{Method, Request, Response},
};
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use todo_api::{
   app_builder::build_app,
   handler::{ItemState, ReadinessState},
   usecase::ItemUseCaseImpl,
};
use todo_domain::clock::SteppingClock;
use todo_infra::mock::MockItemRepository;

pub fn test_now() -> DateTime<Utc> {
   DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// 1 秒ずつ進む時計を持つモックリポジトリ
pub fn mock_repository() -> MockItemRepository {
   MockItemRepository::new(Arc::new(SteppingClock::new(
      test_now(),
      chrono::Duration::seconds(1),
   )))
}

/// モックリポジトリを使ったアプリケーションを構築する
///
/// readiness 用のプールは接続できないアドレスを指す。
pub fn create_test_app(repository: MockItemRepository) -> Router {
   let item_state = Arc::new(ItemState {
      usecase: ItemUseCaseImpl::new(Arc::new(repository)),
   });
   let pool = PgPoolOptions::new()
      .acquire_timeout(Duration::from_millis(200))
      .connect_lazy_with(PgConnectOptions::new().host("127.0.0.1").port(1));
   let readiness_state = Arc::new(ReadinessState { pool });

   build_app(item_state, readiness_state)
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
   Request::builder()
      .method(method)
      .uri(uri)
      .header("content-type", "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
}

pub fn raw_request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
   Request::builder()
      .method(method)
      .uri(uri)
      .body(Body::from(body))
      .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> axum::body::Bytes {
   axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
   serde_json::from_slice(&body_bytes(response).await).unwrap()
}
