//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Database, NotFound, Unexpected）
//!
//! 呼び出し側はメッセージ文字列ではなく [`InfraError::kind`] で分岐する。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// `From<sqlx::Error>` や convenience constructor でエラーを生成すると、
/// その時点のスパン情報が自動的にキャプチャされる。
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::NotFound { .. } => { /* 404 */ }
///     _ => { /* 500 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// データベースエラー
   ///
   /// 接続失敗、クエリ実行失敗、`statement_timeout` 超過、
   /// 接続取得タイムアウトなど。
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),

   /// 対象のレコードが存在しない
   #[error("{entity} が見つかりません: {id}")]
   NotFound {
      /// エンティティ名（例: "Item"）
      entity: &'static str,
      /// 検索に使用した ID
      id:     String,
   },

   /// 予期しないエラー
   ///
   /// 格納済みの行がドメインの不変条件を満たさない場合など。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   /// エラー種別を取得する
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   /// SpanTrace を取得する
   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// NotFound 種別かどうか
   pub fn is_not_found(&self) -> bool {
      matches!(self.kind, InfraErrorKind::NotFound { .. })
   }

   // ===== Convenience constructors =====

   /// レコード不在エラーを生成する
   pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::NotFound {
            entity,
            id: id.into(),
         },
         span_trace: SpanTrace::capture(),
      }
   }

   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Unexpected(msg.into()),
         span_trace: SpanTrace::capture(),
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      self.kind.source()
   }
}

impl From<sqlx::Error> for InfraError {
   fn from(source: sqlx::Error) -> Self {
      Self {
         kind:       InfraErrorKind::Database(source),
         span_trace: SpanTrace::capture(),
      }
   }
}
