//! # ItemRepository
//!
//! To-Do アイテムの永続化を担当するリポジトリ。
//!
//! - **ID・タイムスタンプの採番**: 挿入時に DB（`gen_random_uuid()` / `NOW()`）が行う
//! - **単一ステートメント**: 各操作は 1 文で完結し、行単位で原子的
//! - **不在の表現**: 対象行がない場合は [`InfraErrorKind::NotFound`](crate::InfraErrorKind::NotFound) を返す
//! - **説明**: 空文字列は `NULL` として格納し、読み出し時に空文字列へ戻す

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use todo_domain::item::{Item, ItemId, NewItem};
use uuid::Uuid;

use crate::error::InfraError;

const ENTITY: &str = "Item";

/// アイテムリポジトリトレイト
#[async_trait]
pub trait ItemRepository: Send + Sync {
   /// アイテムを作成し、採番済みの状態を返す
   async fn create(&self, input: &NewItem) -> Result<Item, InfraError>;

   /// ID でアイテムを取得する
   async fn get(&self, id: &ItemId) -> Result<Item, InfraError>;

   /// 全アイテムを作成日時の降順で取得する
   async fn list(&self) -> Result<Vec<Item>, InfraError>;

   /// アイテムを全置換更新し、更新後の状態を返す
   async fn update(&self, id: &ItemId, input: &NewItem) -> Result<Item, InfraError>;

   /// アイテムを削除する
   async fn delete(&self, id: &ItemId) -> Result<(), InfraError>;
}

/// `items` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
   id:          Uuid,
   title:       String,
   description: Option<String>,
   completed:   bool,
   created_at:  DateTime<Utc>,
   updated_at:  DateTime<Utc>,
}

impl TryFrom<ItemRow> for Item {
   type Error = InfraError;

   fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
      let id = row.id;
      Item::from_db(
         ItemId::from_uuid(id),
         row.title,
         row.description,
         row.completed,
         row.created_at,
         row.updated_at,
      )
      .map_err(|e| InfraError::unexpected(format!("不正な items 行 (id={id}): {e}")))
   }
}

/// 空の説明は NULL として格納する
fn description_param(input: &NewItem) -> Option<&str> {
   Some(input.description()).filter(|d| !d.is_empty())
}

/// PostgreSQL 実装の ItemRepository
#[derive(Debug, Clone)]
pub struct PostgresItemRepository {
   pool: PgPool,
}

impl PostgresItemRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn create(&self, input: &NewItem) -> Result<Item, InfraError> {
      let row = sqlx::query_as::<_, ItemRow>(
         r#"
         INSERT INTO items (title, description, completed)
         VALUES ($1, $2, $3)
         RETURNING id, title, description, completed, created_at, updated_at
         "#,
      )
      .bind(input.title().as_str())
      .bind(description_param(input))
      .bind(input.completed())
      .fetch_one(&self.pool)
      .await?;

      row.try_into()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn get(&self, id: &ItemId) -> Result<Item, InfraError> {
      let row = sqlx::query_as::<_, ItemRow>(
         r#"
         SELECT id, title, description, completed, created_at, updated_at
         FROM items
         WHERE id = $1
         "#,
      )
      .bind(id.as_uuid())
      .fetch_optional(&self.pool)
      .await?;

      let Some(row) = row else {
         return Err(InfraError::not_found(ENTITY, id.to_string()));
      };
      row.try_into()
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn list(&self) -> Result<Vec<Item>, InfraError> {
      let rows = sqlx::query_as::<_, ItemRow>(
         r#"
         SELECT id, title, description, completed, created_at, updated_at
         FROM items
         ORDER BY created_at DESC, id DESC
         "#,
      )
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(Item::try_from).collect()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn update(&self, id: &ItemId, input: &NewItem) -> Result<Item, InfraError> {
      let row = sqlx::query_as::<_, ItemRow>(
         r#"
         UPDATE items
         SET title = $2, description = $3, completed = $4, updated_at = NOW()
         WHERE id = $1
         RETURNING id, title, description, completed, created_at, updated_at
         "#,
      )
      .bind(id.as_uuid())
      .bind(input.title().as_str())
      .bind(description_param(input))
      .bind(input.completed())
      .fetch_optional(&self.pool)
      .await?;

      let Some(row) = row else {
         return Err(InfraError::not_found(ENTITY, id.to_string()));
      };
      row.try_into()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, id: &ItemId) -> Result<(), InfraError> {
      let result = sqlx::query(
         r#"
         DELETE FROM items
         WHERE id = $1
         "#,
      )
      .bind(id.as_uuid())
      .execute(&self.pool)
      .await?;

      if result.rows_affected() == 0 {
         return Err(InfraError::not_found(ENTITY, id.to_string()));
      }
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;
   use crate::InfraErrorKind;

   fn fixed_now() -> DateTime<Utc> {
      DateTime::from_timestamp(1_700_000_000, 0).unwrap()
   }

   #[test]
   fn test_トレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<PostgresItemRepository>();
      assert_send_sync::<Box<dyn ItemRepository>>();
   }

   #[test]
   fn test_空の説明はnullとして渡す() {
      let input = NewItem::new("牛乳を買う", None, None).unwrap();
      assert_eq!(description_param(&input), None);

      let input = NewItem::new("牛乳を買う", Some("2 本".to_string()), None).unwrap();
      assert_eq!(description_param(&input), Some("2 本"));
   }

   #[test]
   fn test_行からアイテムに変換できる() {
      let id = Uuid::now_v7();
      let row = ItemRow {
         id,
         title: "牛乳を買う".to_string(),
         description: None,
         completed: true,
         created_at: fixed_now(),
         updated_at: fixed_now(),
      };

      let item = Item::try_from(row).unwrap();

      assert_eq!(item.id(), &ItemId::from_uuid(id));
      assert_eq!(item.title().as_str(), "牛乳を買う");
      assert_eq!(item.description(), "");
      assert!(item.completed());
   }

   #[test]
   fn test_不正な行はunexpectedエラーになる() {
      let row = ItemRow {
         id:          Uuid::now_v7(),
         title:       "   ".to_string(),
         description: None,
         completed:   false,
         created_at:  fixed_now(),
         updated_at:  fixed_now(),
      };

      let err = Item::try_from(row).unwrap_err();

      assert!(matches!(err.kind(), InfraErrorKind::Unexpected(_)));
   }
}
