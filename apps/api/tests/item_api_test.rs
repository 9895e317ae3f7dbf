//! To-Do アイテム API の統合テスト
//!
//! ルーター全体（フォールバックを含む）をモックリポジトリで動かす。
//!
//! 実行方法:
//! ```bash
//! cargo test -p todo-api --test item_api_test
//! ```

mod common;

use axum::http::{Method, StatusCode, header};
use chrono::{DateTime, Utc};
use common::{
   body_bytes,
   body_json,
   create_test_app,
   json_request,
   mock_repository,
   raw_request,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tower::ServiceExt;

fn timestamp(value: &serde_json::Value) -> DateTime<Utc> {
   value.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_作成から削除までの一連の操作() {
   let repository = mock_repository();
   let app = create_test_app(repository.clone());

   // 作成
   let response = app
      .clone()
      .oneshot(json_request(
         Method::POST,
         "/items",
         serde_json::json!({ "title": "buy milk" }),
      ))
      .await
      .unwrap();
   assert_eq!(response.status(), StatusCode::CREATED);
   assert_eq!(
      response.headers()[header::CONTENT_TYPE],
      "application/json"
   );
   let created = body_json(response).await;
   assert_eq!(created["title"], "buy milk");
   assert_eq!(created["completed"], false);
   assert_eq!(created["createdAt"], created["updatedAt"]);
   let id = created["id"].as_str().unwrap().to_string();

   // 取得
   let response = app
      .clone()
      .oneshot(raw_request(Method::GET, &format!("/items/{id}"), ""))
      .await
      .unwrap();
   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(body_json(response).await, created);

   // 更新
   let response = app
      .clone()
      .oneshot(json_request(
         Method::PUT,
         &format!("/items/{id}"),
         serde_json::json!({ "title": "buy milk", "completed": true }),
      ))
      .await
      .unwrap();
   assert_eq!(response.status(), StatusCode::OK);
   let updated = body_json(response).await;
   assert_eq!(updated["id"], created["id"]);
   assert_eq!(updated["completed"], true);
   assert_eq!(updated["createdAt"], created["createdAt"]);
   assert!(timestamp(&updated["updatedAt"]) > timestamp(&created["updatedAt"]));

   // 削除
   let response = app
      .clone()
      .oneshot(raw_request(Method::DELETE, &format!("/items/{id}"), ""))
      .await
      .unwrap();
   assert_eq!(response.status(), StatusCode::NO_CONTENT);
   assert!(body_bytes(response).await.is_empty());

   // 削除後の取得
   let response = app
      .oneshot(raw_request(Method::GET, &format!("/items/{id}"), ""))
      .await
      .unwrap();
   assert_eq!(response.status(), StatusCode::NOT_FOUND);
   assert!(body_json(response).await["error"].is_string());
   assert!(repository.items().is_empty());
}

#[rstest]
#[case(Method::PATCH, "/items")]
#[case(Method::DELETE, "/items")]
#[case(Method::POST, "/items/0190a3b4-0000-7000-8000-000000000000")]
#[case(Method::PATCH, "/items/0190a3b4-0000-7000-8000-000000000000")]
#[tokio::test]
async fn test_未対応のメソッドは405とjsonが返る(#[case] method: Method, #[case] uri: &str) {
   // Given
   let sut = create_test_app(mock_repository());

   // When
   let response = sut.oneshot(raw_request(method, uri, "")).await.unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
   assert_eq!(
      body_json(response).await,
      serde_json::json!({ "error": "許可されていないメソッドです" })
   );
}

#[rstest]
#[case(Method::GET)]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[tokio::test]
async fn test_空のidは400とjsonが返る(#[case] method: Method) {
   // Given
   let sut = create_test_app(mock_repository());

   // When
   let response = sut.oneshot(raw_request(method, "/items/", "")).await.unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   assert!(body_json(response).await["error"].is_string());
}

#[rstest]
#[case(Method::POST, "/items")]
#[case(Method::PUT, "/items/0190a3b4-0000-7000-8000-000000000000")]
#[tokio::test]
async fn test_不正なjsonは400とjsonが返る(#[case] method: Method, #[case] uri: &str) {
   // Given
   let repository = mock_repository();
   let sut = create_test_app(repository.clone());

   // When
   let response = sut
      .oneshot(raw_request(method, uri, "{\"title\": "))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   assert!(body_json(response).await["error"].is_string());
   assert!(repository.items().is_empty());
}

#[rstest]
#[case(Method::GET)]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[tokio::test]
async fn test_不正なutf8を含むidは400とjsonが返る(#[case] method: Method) {
   // Given
   let sut = create_test_app(mock_repository());

   // When
   let response = sut
      .oneshot(raw_request(method, "/items/%FF", r#"{"title":"buy milk"}"#))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   assert_eq!(
      response.headers()[header::CONTENT_TYPE],
      "application/json"
   );
   assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_未知のパスは404とjsonが返る() {
   // Given
   let sut = create_test_app(mock_repository());

   // When
   let response = sut
      .oneshot(raw_request(Method::GET, "/todos", ""))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::NOT_FOUND);
   assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_ストア障害時は500とjsonが返る() {
   // Given
   let repository = mock_repository();
   let sut = create_test_app(repository.clone());
   repository.set_unavailable(true);

   // When
   let response = sut
      .oneshot(json_request(
         Method::POST,
         "/items",
         serde_json::json!({ "title": "buy milk" }),
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(
      body_json(response).await,
      serde_json::json!({ "error": "内部エラーが発生しました" })
   );
}

#[tokio::test]
async fn test_healthは200を返す() {
   // Given
   let sut = create_test_app(mock_repository());

   // When
   let response = sut
      .oneshot(raw_request(Method::GET, "/health", ""))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_データベースに接続できない場合readinessは503を返す() {
   // Given
   let sut = create_test_app(mock_repository());

   // When
   let response = sut
      .oneshot(raw_request(Method::GET, "/health/ready", ""))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
   assert_eq!(body_json(response).await["status"], "not_ready");
}
