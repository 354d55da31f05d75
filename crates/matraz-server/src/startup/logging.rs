//! Logging setup
//!
//! Events go to stdout and to a daily-rotated `matraz.log` under the
//! configured log directory. Filtering follows `RUST_LOG` when set,
//! otherwise defaults to info with the noisier SQL layers at warn.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::model::Configuration;

/// Initialize the global subscriber.
///
/// The returned guard must stay alive for the process lifetime or the
/// file writer stops flushing.
pub fn init_logging(configuration: &Configuration) -> anyhow::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(configuration.logs_path(), "matraz.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,sea_orm=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    Ok(guard)
}
