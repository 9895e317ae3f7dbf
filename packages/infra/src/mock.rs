//! # テスト用モックリポジトリ
//!
//! HTTP 層・ユースケースのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
   Arc,
   Mutex,
   atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use todo_domain::{
   clock::Clock,
   item::{Item, ItemId, NewItem},
};

use crate::{error::InfraError, repository::ItemRepository};

const ENTITY: &str = "Item";

// ===== MockItemRepository =====

/// インメモリの ItemRepository
///
/// ID は UUID v7 で採番し、タイムスタンプは注入された [`Clock`] から取得する。
/// [`set_unavailable`](Self::set_unavailable) でストア障害を再現できる。
#[derive(Clone)]
pub struct MockItemRepository {
   items:       Arc<Mutex<Vec<Item>>>,
   clock:       Arc<dyn Clock>,
   unavailable: Arc<AtomicBool>,
}

impl MockItemRepository {
   pub fn new(clock: Arc<dyn Clock>) -> Self {
      Self {
         items: Arc::new(Mutex::new(Vec::new())),
         clock,
         unavailable: Arc::new(AtomicBool::new(false)),
      }
   }

   /// 格納済みアイテムのスナップショットを挿入順で返す
   pub fn items(&self) -> Vec<Item> {
      self.items.lock().unwrap().clone()
   }

   /// `true` の間、すべての操作が失敗する
   pub fn set_unavailable(&self, unavailable: bool) {
      self.unavailable.store(unavailable, Ordering::SeqCst);
   }

   fn ensure_available(&self) -> Result<(), InfraError> {
      if self.unavailable.load(Ordering::SeqCst) {
         return Err(InfraError::unexpected("モックストアは利用できません"));
      }
      Ok(())
   }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
   async fn create(&self, input: &NewItem) -> Result<Item, InfraError> {
      self.ensure_available()?;
      let item = Item::create(ItemId::new(), input.clone(), self.clock.now());
      self.items.lock().unwrap().push(item.clone());
      Ok(item)
   }

   async fn get(&self, id: &ItemId) -> Result<Item, InfraError> {
      self.ensure_available()?;
      self
         .items
         .lock()
         .unwrap()
         .iter()
         .find(|i| i.id() == id)
         .cloned()
         .ok_or_else(|| InfraError::not_found(ENTITY, id.to_string()))
   }

   async fn list(&self) -> Result<Vec<Item>, InfraError> {
      self.ensure_available()?;
      // 作成日時が同じ場合は後から挿入したものを先にする
      let mut items: Vec<Item> = self.items.lock().unwrap().iter().rev().cloned().collect();
      items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
      Ok(items)
   }

   async fn update(&self, id: &ItemId, input: &NewItem) -> Result<Item, InfraError> {
      self.ensure_available()?;
      let mut items = self.items.lock().unwrap();
      let Some(pos) = items.iter().position(|i| i.id() == id) else {
         return Err(InfraError::not_found(ENTITY, id.to_string()));
      };
      let updated = items[pos].clone().replace(input.clone(), self.clock.now());
      items[pos] = updated.clone();
      Ok(updated)
   }

   async fn delete(&self, id: &ItemId) -> Result<(), InfraError> {
      self.ensure_available()?;
      let mut items = self.items.lock().unwrap();
      let Some(pos) = items.iter().position(|i| i.id() == id) else {
         return Err(InfraError::not_found(ENTITY, id.to_string()));
      };
      items.remove(pos);
      Ok(())
   }
}
