//! Tracing subscriber setup
//!
//! File output always goes through a non-blocking rolling appender. Text
//! mode mirrors to stdout; JSON mode writes the file only.

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{AppConfig, Rotation};

/// Install the global subscriber. Keep the guard alive for the process
/// lifetime or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(file_appender(config));

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        registry.with(json_file_layer(writer)).init();
    } else {
        let stdout = fmt::layer().with_target(false).with_ansi(true);
        registry.with(text_file_layer(writer)).with(stdout).init();
    }

    guard
}

fn file_appender(config: &AppConfig) -> RollingFileAppender {
    RollingFileAppender::new(
        rolling_period(config.rotation),
        &config.log_dir,
        &config.log_file,
    )
}

fn rolling_period(rotation: Rotation) -> rolling::Rotation {
    match rotation {
        Rotation::Never => rolling::Rotation::NEVER,
        Rotation::Hourly => rolling::Rotation::HOURLY,
        Rotation::Daily => rolling::Rotation::DAILY,
    }
}

fn json_file_layer<S>(writer: NonBlocking) -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    // Target kept so log queries can filter by module
    fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(false)
        .with_writer(writer)
        .with_ansi(false)
}

fn text_file_layer<S>(writer: NonBlocking) -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_writer(writer)
        .with_ansi(false)
}
