//! # ヘルスチェックハンドラ
//!
//! アプリケーションの稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! - `GET /health` - liveness（依存サービスは確認しない）
//! - `GET /health/ready` - readiness（データベースへの疎通を確認する）
//!
//! ## レスポンス例
//!
//! ```json
//! { "status": "ready", "checks": { "database": "ok" } }
//! ```

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use todo_infra::db;
use todo_shared::{CheckStatus, HealthResponse, ReadinessResponse};

/// データベース疎通確認のタイムアウト
const READINESS_TIMEOUT: Duration = Duration::from_secs(5);

/// Readiness Check 用の共有状態
pub struct ReadinessState {
   pub pool: PgPool,
}

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK を返す。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check エンドポイント
///
/// データベースに接続できれば 200、できなければ 503 を返す。
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
   let checks = BTreeMap::from([("database".to_string(), check_database(&state.pool).await)]);
   let response = ReadinessResponse::from_checks(checks);

   let status = if response.is_ready() {
      StatusCode::OK
   } else {
      StatusCode::SERVICE_UNAVAILABLE
   };

   (status, Json(response))
}

/// データベースへの接続を `SELECT 1` で確認する（タイムアウト: 5 秒）
async fn check_database(pool: &PgPool) -> CheckStatus {
   match tokio::time::timeout(READINESS_TIMEOUT, db::check_connection(pool)).await {
      Ok(Ok(())) => CheckStatus::Ok,
      Ok(Err(e)) => {
         tracing::warn!(error = %e, "readiness check: database query failed");
         CheckStatus::Error
      }
      Err(_) => {
         tracing::warn!("readiness check: database check timed out");
         CheckStatus::Error
      }
   }
}
