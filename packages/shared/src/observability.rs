//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定を提供する。
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_ENV_FILTER: &str = "info,todo=debug,tower_http=info";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// JSON 形式（本番環境向け）
   Json,
   /// 人間が読みやすい形式（開発環境向け）
   #[default]
   Pretty,
}

impl LogFormat {
   /// 文字列からログ形式をパースする
   ///
   /// 大文字小文字は区別しない。未知の値は `None`。
   pub fn parse(s: &str) -> Option<Self> {
      match s.trim().to_ascii_lowercase().as_str() {
         "json" => Some(Self::Json),
         "pretty" => Some(Self::Pretty),
         _ => None,
      }
   }

   /// `LOG_FORMAT` の値から決定する
   ///
   /// 未設定の場合は [`Pretty`](LogFormat::Pretty)。不正な値の場合も
   /// Pretty にフォールバックし、stderr に警告を出す（subscriber 初期化前のため）。
   pub fn from_value(value: Option<&str>) -> Self {
      let Some(value) = value else {
         return Self::default();
      };
      Self::parse(value).unwrap_or_else(|| {
         eprintln!("WARNING: unknown LOG_FORMAT={value:?}, falling back to pretty");
         Self::default()
      })
   }

   /// 環境変数 `LOG_FORMAT` から読み取る
   pub fn from_env() -> Self {
      Self::from_value(std::env::var("LOG_FORMAT").ok().as_deref())
   }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
   /// サービス名（起動時のルートスパンに付与する）
   pub service_name: String,
   /// ログ出力形式
   pub log_format:   LogFormat,
}

impl TracingConfig {
   pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
      Self {
         service_name: service_name.into(),
         log_format,
      }
   }

   /// `LOG_FORMAT` 環境変数で出力形式を決定する
   pub fn from_env(service_name: impl Into<String>) -> Self {
      Self::new(service_name, LogFormat::from_env())
   }
}

/// トレーシングを初期化する
///
/// - `RUST_LOG` でログレベルを制御する（未設定時は [`DEFAULT_ENV_FILTER`]）
/// - `ErrorLayer` を登録し、エラー生成時に `SpanTrace` を捕捉できるようにする
///
/// プロセス内で一度だけ呼び出す。二度目以降はエラーを返す。
#[cfg(feature = "observability")]
pub fn init_tracing(
   config: &TracingConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
   use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| DEFAULT_ENV_FILTER.into());

   let fmt_layer = match config.log_format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_target(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
   };

   tracing_subscriber::registry()
      .with(env_filter)
      .with(fmt_layer)
      .with(tracing_error::ErrorLayer::default())
      .try_init()
}
