//! # To-Do アイテムハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /items` - アイテム一覧（作成日時の降順）
//! - `POST /items` - アイテム作成
//! - `GET /items/{id}` - アイテム取得
//! - `PUT /items/{id}` - アイテム置き換え
//! - `DELETE /items/{id}` - アイテム削除
//!
//! リクエストボディは `Content-Type` に関係なく JSON として読む（[`JsonBody`]）。
//! パスの ID は [`ApiPath`] で読み、解釈できない場合も JSON で 400 を返す。

use std::sync::Arc;

use axum::{
   Json,
   extract::State,
   http::StatusCode,
   response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_domain::item::{Item, ItemId};
use uuid::Uuid;

use crate::{
   error::ApiError,
   extract::{ApiPath, JsonBody},
   usecase::{ItemInput, ItemUseCaseImpl},
};

/// アイテム API の共有状態
pub struct ItemState {
   pub usecase: ItemUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// アイテム作成・更新リクエスト
///
/// `title` が欠けている場合は空文字列として扱い、ユースケースで 400 になる。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ItemRequest {
   pub title:       String,
   pub description: Option<String>,
   pub completed:   Option<bool>,
}

impl From<ItemRequest> for ItemInput {
   fn from(req: ItemRequest) -> Self {
      Self {
         title:       req.title,
         description: req.description,
         completed:   req.completed,
      }
   }
}

/// アイテム DTO
///
/// 空の `description` は出力しない。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
   pub id:          Uuid,
   pub title:       String,
   #[serde(default, skip_serializing_if = "String::is_empty")]
   pub description: String,
   pub completed:   bool,
   pub created_at:  DateTime<Utc>,
   pub updated_at:  DateTime<Utc>,
}

impl From<&Item> for ItemDto {
   fn from(item: &Item) -> Self {
      Self {
         id:          *item.id().as_uuid(),
         title:       item.title().as_str().to_string(),
         description: item.description().to_string(),
         completed:   item.completed(),
         created_at:  item.created_at(),
         updated_at:  item.updated_at(),
      }
   }
}

/// パスの ID セグメントを解釈する
///
/// UUID として解釈できない ID はどのアイテムも指さないため 404 とする。
fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
   if raw.trim().is_empty() {
      return Err(ApiError::BadRequest("アイテム ID が指定されていません".to_string()));
   }
   ItemId::parse(raw).ok_or_else(|| ApiError::NotFound(format!("Item が見つかりません: {raw}")))
}

// --- ハンドラ ---

/// GET /items
#[tracing::instrument(skip_all)]
pub async fn list_items(State(state): State<Arc<ItemState>>) -> Result<impl IntoResponse, ApiError> {
   let items = state.usecase.list_items().await?;

   let dtos: Vec<ItemDto> = items.iter().map(ItemDto::from).collect();
   Ok((StatusCode::OK, Json(dtos)))
}

/// POST /items
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたアイテム
/// - `400 Bad Request`: 不正な JSON、タイトル未入力・文字数超過
#[tracing::instrument(skip_all)]
pub async fn create_item(
   State(state): State<Arc<ItemState>>,
   JsonBody(req): JsonBody<ItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let item = state.usecase.create_item(req.into()).await?;

   Ok((StatusCode::CREATED, Json(ItemDto::from(&item))))
}

/// GET /items/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_item(
   State(state): State<Arc<ItemState>>,
   ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse, ApiError> {
   let item_id = parse_item_id(&id)?;

   let item = state.usecase.get_item(&item_id).await?;

   Ok((StatusCode::OK, Json(ItemDto::from(&item))))
}

/// PUT /items/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のアイテム
/// - `400 Bad Request`: 不正な JSON、タイトル未入力・文字数超過
/// - `404 Not Found`: アイテムが見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_item(
   State(state): State<Arc<ItemState>>,
   ApiPath(id): ApiPath<String>,
   JsonBody(req): JsonBody<ItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let item_id = parse_item_id(&id)?;

   let item = state.usecase.update_item(&item_id, req.into()).await?;

   Ok((StatusCode::OK, Json(ItemDto::from(&item))))
}

/// DELETE /items/{id}
///
/// 成功時は `204 No Content`（ボディなし）。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_item(
   State(state): State<Arc<ItemState>>,
   ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse, ApiError> {
   let item_id = parse_item_id(&id)?;

   state.usecase.delete_item(&item_id).await?;

   Ok(StatusCode::NO_CONTENT)
}

// --- ルーティングのフォールバック ---

/// `/items/`（ID セグメントが空）
pub async fn empty_item_id() -> ApiError {
   ApiError::BadRequest("アイテム ID が指定されていません".to_string())
}

/// 既知のパスで許可されていないメソッド
pub async fn method_not_allowed() -> ApiError {
   ApiError::MethodNotAllowed
}

/// 未知のパス
pub async fn not_found() -> ApiError {
   ApiError::NotFound("リソースが見つかりません".to_string())
}
