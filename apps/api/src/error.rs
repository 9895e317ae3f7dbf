//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! ドメイン層エラー (DomainError) ─┐
//! インフラ層エラー (InfraError)  ─┼→ API エラー (ApiError)
//! リクエスト解釈の失敗           ─┘        ↓ IntoResponse
//!                                  HTTP レスポンス (StatusCode + {"error": ...})
//! ```
//!
//! ## ステータスコードの対応
//!
//! | ApiError | HTTP Status |
//! |----------|-------------|
//! | BadRequest | 400 |
//! | Validation | 400 |
//! | NotFound | 404 |
//! | MethodNotAllowed | 405 |
//! | Internal | 500 |
//!
//! レスポンスを書き出す前に、4xx は `warn`、5xx は `error` でログに残す。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::DomainError;
use todo_infra::InfraError;
use todo_shared::ErrorResponse;

/// API 層で発生するエラー
///
/// ハンドラから返されるエラー型。`IntoResponse` を実装しているため、
/// axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
   /// リクエストを解釈できない（400 Bad Request）
   ///
   /// 不正な JSON、フィールドの型不一致、空の ID セグメントなど。
   #[error("{0}")]
   BadRequest(String),

   /// 入力値の検証失敗（400 Bad Request）
   #[error(transparent)]
   Validation(#[from] DomainError),

   /// リソースが見つからない（404 Not Found）
   #[error("{0}")]
   NotFound(String),

   /// パスは存在するがメソッドが許可されていない（405 Method Not Allowed）
   #[error("許可されていないメソッドです")]
   MethodNotAllowed,

   /// 内部サーバーエラー（500 Internal Server Error）
   ///
   /// 内部エラーの詳細はクライアントに返さない。
   #[error("内部エラー: {0}")]
   Internal(InfraError),
}

impl From<InfraError> for ApiError {
   fn from(err: InfraError) -> Self {
      if err.is_not_found() {
         ApiError::NotFound(err.to_string())
      } else {
         ApiError::Internal(err)
      }
   }
}

impl ApiError {
   /// 対応する HTTP ステータスコード
   pub fn status(&self) -> StatusCode {
      match self {
         ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
         ApiError::NotFound(_) => StatusCode::NOT_FOUND,
         ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
         ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let status = self.status();
      let body = match &self {
         ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg.as_str()),
         ApiError::Validation(err) => ErrorResponse::bad_request(err.to_string()),
         ApiError::NotFound(msg) => ErrorResponse::not_found(msg.as_str()),
         ApiError::MethodNotAllowed => ErrorResponse::method_not_allowed(),
         ApiError::Internal(err) => {
            tracing::error!(
               status = status.as_u16(),
               error.kind = ?err.kind(),
               "内部エラー: {}\n{}",
               err,
               err.span_trace()
            );
            ErrorResponse::internal_error()
         }
      };

      if status.is_client_error() {
         tracing::warn!(status = status.as_u16(), "{}", body.error);
      }

      (status, Json(body)).into_response()
   }
}
