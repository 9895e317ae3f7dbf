//! # グレースフルシャットダウン
//!
//! SIGINT / SIGTERM を受け取ったら新規接続の受け付けを止め、
//! 処理中のリクエストを猶予期間まで待ってからサーバーを終了する。

use std::{future::Future, io, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};

/// シャットダウンの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
   /// すべてのリクエストが完了した
   Drained,
   /// 猶予期間内に完了しなかったリクエストを打ち切った
   GracePeriodElapsed,
}

/// SIGINT（Ctrl+C）または SIGTERM を待つ
pub async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = tokio::signal::ctrl_c().await {
         tracing::error!(error = %e, "SIGINT ハンドラを登録できませんでした");
         std::future::pending::<()>().await;
      }
   };

   #[cfg(unix)]
   let terminate = async {
      use tokio::signal::unix::{SignalKind, signal};

      match signal(SignalKind::terminate()) {
         Ok(mut sigterm) => {
            sigterm.recv().await;
         }
         Err(e) => {
            tracing::error!(error = %e, "SIGTERM ハンドラを登録できませんでした");
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      _ = ctrl_c => tracing::info!("SIGINT を受信しました。シャットダウンを開始します"),
      _ = terminate => tracing::info!("SIGTERM を受信しました。シャットダウンを開始します"),
   }
}

/// `signal` が完了するまでリクエストを処理する
///
/// `signal` の完了後は新規接続を受け付けず、処理中のリクエストを
/// 最大 `grace_period` だけ待つ。
pub async fn serve<F>(
   listener: TcpListener,
   app: Router,
   signal: F,
   grace_period: Duration,
) -> io::Result<ShutdownOutcome>
where
   F: Future<Output = ()> + Send + 'static,
{
   let notify = Arc::new(Notify::new());
   let triggered = notify.clone();

   let server = axum::serve(listener, app).with_graceful_shutdown(async move {
      signal.await;
      triggered.notify_one();
   });
   let mut server = std::pin::pin!(server.into_future());

   tokio::select! {
      result = &mut server => {
         result?;
         return Ok(ShutdownOutcome::Drained);
      }
      _ = notify.notified() => {}
   }

   tracing::info!(
      grace_period = ?grace_period,
      "処理中のリクエストの完了を待っています"
   );

   match tokio::time::timeout(grace_period, server).await {
      Ok(result) => {
         result?;
         Ok(ShutdownOutcome::Drained)
      }
      Err(_) => {
         tracing::warn!("猶予期間内に完了しなかったリクエストを打ち切りました");
         Ok(ShutdownOutcome::GracePeriodElapsed)
      }
   }
}
