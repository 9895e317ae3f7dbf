//! To-Do アイテム管理ユースケース

use std::sync::Arc;

use todo_domain::item::{Item, ItemId, NewItem};
use todo_infra::repository::ItemRepository;

use crate::error::ApiError;

/// 作成・更新の入力
///
/// `description` と `completed` は省略可能。省略時はそれぞれ空文字列と `false`。
#[derive(Debug, Clone, Default)]
pub struct ItemInput {
   pub title:       String,
   pub description: Option<String>,
   pub completed:   Option<bool>,
}

impl ItemInput {
   fn into_new_item(self) -> Result<NewItem, ApiError> {
      Ok(NewItem::new(self.title, self.description, self.completed)?)
   }
}

/// To-Do アイテム管理ユースケース
pub struct ItemUseCaseImpl {
   repository: Arc<dyn ItemRepository>,
}

impl ItemUseCaseImpl {
   pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
      Self { repository }
   }

   /// アイテムを作成する
   ///
   /// タイトルが空の場合は何も保存せずにバリデーションエラーを返す。
   pub async fn create_item(&self, input: ItemInput) -> Result<Item, ApiError> {
      let new_item = input.into_new_item()?;
      let item = self.repository.create(&new_item).await?;
      tracing::info!(item_id = %item.id(), "アイテムを作成しました");
      Ok(item)
   }

   /// アイテムを取得する
   pub async fn get_item(&self, id: &ItemId) -> Result<Item, ApiError> {
      Ok(self.repository.get(id).await?)
   }

   /// アイテム一覧を作成日時の降順で取得する
   pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
      Ok(self.repository.list().await?)
   }

   /// アイテムを置き換える
   ///
   /// タイトル・説明・完了状態をすべて上書きする。作成日時と ID は変わらない。
   pub async fn update_item(&self, id: &ItemId, input: ItemInput) -> Result<Item, ApiError> {
      let new_item = input.into_new_item()?;
      let item = self.repository.update(id, &new_item).await?;
      tracing::info!(item_id = %item.id(), "アイテムを更新しました");
      Ok(item)
   }

   /// アイテムを削除する
   pub async fn delete_item(&self, id: &ItemId) -> Result<(), ApiError> {
      self.repository.delete(id).await?;
      tracing::info!(item_id = %id, "アイテムを削除しました");
      Ok(())
   }
}
