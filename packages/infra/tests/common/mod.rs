//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用する入力生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use sqlx::PgPool;
use todo_domain::item::NewItem;

/// タイトルのみ指定した作成入力
pub fn new_item(title: &str) -> NewItem {
   NewItem::new(title, None, None).unwrap()
}

/// 全項目を指定した作成入力
pub fn new_item_with(title: &str, description: &str, completed: bool) -> NewItem {
   NewItem::new(title, Some(description.to_string()), Some(completed)).unwrap()
}

/// `items` テーブルの行数
pub async fn count_items(pool: &PgPool) -> i64 {
   let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
      .fetch_one(pool)
      .await
      .expect("件数の取得に失敗");
   count
}
