//! # Clock（時刻プロバイダ）
//!
//! 本番ではタイムスタンプは DB（`NOW()`）が採番するため、
//! このトレイトはインメモリのストア実装とテストで使用する。

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;
}

/// 呼び出しごとに一定間隔だけ進む時刻を返す実装
///
/// 作成と更新のタイムスタンプ順序を決定的に検証するために使う。
pub struct SteppingClock {
   next: Mutex<DateTime<Utc>>,
   step: Duration,
}

impl SteppingClock {
   pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
      Self {
         next: Mutex::new(start),
         step,
      }
   }
}

impl Clock for SteppingClock {
   fn now(&self) -> DateTime<Utc> {
      // ロックが poison していても時刻自体は有効なので取り出して使う
      let mut next = self.next.lock().unwrap_or_else(|e| e.into_inner());
      let now = *next;
      *next = now + self.step;
      now
   }
}
