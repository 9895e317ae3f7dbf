//! # To-Do アイテム
//!
//! サービスが扱う唯一のリソース。
//!
//! ## ライフサイクル
//!
//! - **作成**: ストアが挿入時に ID と作成・更新日時を採番する
//! - **更新**: タイトル・説明・完了フラグを全置換し、更新日時を進める
//!   （ID と作成日時は保持）
//! - **削除**: 物理削除。論理削除やバージョン管理は行わない
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::{DateTime, Duration};
//! use todo_domain::item::{Item, ItemId, NewItem};
//!
//! let created_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
//! let item = Item::create(
//!     ItemId::new(),
//!     NewItem::new("牛乳を買う", None, None).unwrap(),
//!     created_at,
//! );
//! assert_eq!(item.created_at(), item.updated_at());
//!
//! let updated = item.clone().replace(
//!     NewItem::new("牛乳を買う", Some("2 本".to_string()), Some(true)).unwrap(),
//!     created_at + Duration::seconds(1),
//! );
//! assert!(updated.completed());
//! assert_eq!(updated.id(), item.id());
//! assert_eq!(updated.created_at(), item.created_at());
//! assert!(updated.updated_at() > item.updated_at());
//! ```

use chrono::{DateTime, Utc};

use crate::DomainError;

/// タイトルの最大文字数（DB: `VARCHAR(255)`）
pub const MAX_TITLE_LENGTH: usize = 255;

define_uuid_id! {
   /// アイテムの一意識別子
   ///
   /// 本番では DB が `gen_random_uuid()` で採番する。
   /// 呼び出し側が ID を指定して作成することはない。
   pub struct ItemId;
}

define_validated_string! {
   /// アイテムのタイトル（値オブジェクト）
   ///
   /// # 不変条件
   ///
   /// - 前後の空白を除いて空文字列ではない
   /// - 最大 255 文字
   pub struct ItemTitle {
      label: "タイトル",
      max_length: MAX_TITLE_LENGTH,
   }
}

/// アイテムの作成・全置換更新に使う入力
///
/// 生成時にタイトルを検証するため、この型の値は常に永続化可能。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
   title:       ItemTitle,
   description: String,
   completed:   bool,
}

impl NewItem {
   /// 入力値を検証して作成する
   ///
   /// - `description`: 未指定は空文字列として扱う
   /// - `completed`: 未指定は `false`
   ///
   /// # エラー
   ///
   /// タイトルが空、または長すぎる場合は `DomainError::Validation` を返す。
   pub fn new(
      title: impl Into<String>,
      description: Option<String>,
      completed: Option<bool>,
   ) -> Result<Self, DomainError> {
      Ok(Self {
         title:       ItemTitle::new(title)?,
         description: description.unwrap_or_default(),
         completed:   completed.unwrap_or(false),
      })
   }

   pub fn title(&self) -> &ItemTitle {
      &self.title
   }

   pub fn description(&self) -> &str {
      &self.description
   }

   pub fn completed(&self) -> bool {
      self.completed
   }
}

/// To-Do アイテムエンティティ
///
/// # 不変条件
///
/// - `title` は空ではない（[`ItemTitle`] が保証）
/// - `created_at <= updated_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
   id:          ItemId,
   title:       ItemTitle,
   description: String,
   completed:   bool,
   created_at:  DateTime<Utc>,
   updated_at:  DateTime<Utc>,
}

impl Item {
   /// 新しいアイテムを作成する
   ///
   /// 作成日時と更新日時は同じ値になる。
   pub fn create(id: ItemId, input: NewItem, now: DateTime<Utc>) -> Self {
      Self {
         id,
         title: input.title,
         description: input.description,
         completed: input.completed,
         created_at: now,
         updated_at: now,
      }
   }

   /// データベースからアイテムを復元する
   ///
   /// # エラー
   ///
   /// 格納されていたタイトルが不変条件を満たさない場合は
   /// `DomainError::Validation` を返す。
   pub fn from_db(
      id: ItemId,
      title: String,
      description: Option<String>,
      completed: bool,
      created_at: DateTime<Utc>,
      updated_at: DateTime<Utc>,
   ) -> Result<Self, DomainError> {
      Ok(Self {
         id,
         title: ItemTitle::new(title)?,
         description: description.unwrap_or_default(),
         completed,
         created_at,
         updated_at,
      })
   }

   /// 入力値で全置換した新しい状態を返す
   ///
   /// ID と作成日時は保持し、更新日時を `now` にする。
   pub fn replace(self, input: NewItem, now: DateTime<Utc>) -> Self {
      Self {
         title: input.title,
         description: input.description,
         completed: input.completed,
         updated_at: now,
         ..self
      }
   }

   // Getter メソッド

   pub fn id(&self) -> &ItemId {
      &self.id
   }

   pub fn title(&self) -> &ItemTitle {
      &self.title
   }

   pub fn description(&self) -> &str {
      &self.description
   }

   pub fn completed(&self) -> bool {
      self.completed
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }
}
