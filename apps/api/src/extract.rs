//! # リクエスト抽出
//!
//! - [`JsonBody`]: `Content-Type` ヘッダーに関係なくボディを JSON として読む
//! - [`ApiPath`]: パスパラメータを読む
//!
//! 失敗はすべて [`ApiError::BadRequest`] になり、`{"error": ...}` 形式で返る。

use axum::{
   body::Bytes,
   extract::{FromRequest, FromRequestParts, Path, Request},
   http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON ボディ抽出器
///
/// `axum::Json` は `Content-Type: application/json` 以外を 415 で拒否し、
/// エラーボディもプレーンテキストになるため、こちらを使う。
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
   T: DeserializeOwned,
   S: Send + Sync,
{
   type Rejection = ApiError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      let bytes = Bytes::from_request(req, state)
         .await
         .map_err(|e| ApiError::BadRequest(format!("リクエストボディを読み込めません: {e}")))?;

      serde_json::from_slice(&bytes)
         .map(JsonBody)
         .map_err(|e| ApiError::BadRequest(format!("リクエストボディが不正です: {e}")))
   }
}

/// パスパラメータ抽出器
///
/// `axum::extract::Path` の拒否（不正な UTF-8 を含むセグメントなど）は
/// プレーンテキストの 400 になるため、[`ApiError`] に変換する。
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
   T: DeserializeOwned + Send,
   S: Send + Sync,
{
   type Rejection = ApiError;

   async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
      Path::<T>::from_request_parts(parts, state)
         .await
         .map(|Path(value)| ApiPath(value))
         .map_err(|e| ApiError::BadRequest(format!("パスが不正です: {}", e.body_text())))
   }
}
