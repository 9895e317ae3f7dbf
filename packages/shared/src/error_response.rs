//! # エラーレスポンス
//!
//! すべてのエラー応答で共通のボディ `{"error": "<message>"}` を提供する。
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - よく使うエラー種別は便利コンストラクタで提供し、メッセージの表記揺れを防ぐ

use serde::{Deserialize, Serialize};

/// エラーレスポンスボディ
///
/// ```
/// use todo_shared::ErrorResponse;
///
/// let body = ErrorResponse::not_found("Item が見つかりません");
/// assert_eq!(body.error, "Item が見つかりません");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub error: String,
}

impl ErrorResponse {
   pub fn new(error: impl Into<String>) -> Self {
      Self {
         error: error.into(),
      }
   }

   /// 400 Bad Request
   pub fn bad_request(detail: impl Into<String>) -> Self {
      Self::new(detail)
   }

   /// 404 Not Found
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new(detail)
   }

   /// 405 Method Not Allowed
   pub fn method_not_allowed() -> Self {
      Self::new("許可されていないメソッドです")
   }

   /// 500 Internal Server Error
   ///
   /// 内部の原因はクライアントに返さず、ログにのみ出力する。
   pub fn internal_error() -> Self {
      Self::new("内部エラーが発生しました")
   }
}
