use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::models::config::{LogFormat, LoggingConfig, RotationPolicy};

const LOG_FILE_NAME: &str = "mealsheet.log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Process-wide tracing setup.
///
/// Console output goes to stderr so that command output on stdout stays
/// machine-readable. Keep the value alive until exit: dropping it flushes
/// and closes the log file.
pub struct LoggerImpl {
    _file_guard: Option<WorkerGuard>,
}

impl LoggerImpl {
    /// Install the global subscriber described by `config`.
    ///
    /// `RUST_LOG` directives are layered over the configured level.
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let level = parse_log_level(&config.level)?;
        let filter = || {
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy()
        };

        let (file, file_guard) = match config.log_dir.as_deref() {
            Some(dir) => {
                let (layer, guard) = file_layer(dir, config.rotation);
                (Some(layer.with_filter(filter())), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(console_layer(config.format).with_filter(filter()))
            .with(file)
            .try_init()
            .context("Failed to install tracing subscriber")?;

        tracing::debug!(
            level = %level,
            format = ?config.format,
            log_dir = ?config.log_dir,
            "logging ready"
        );

        Ok(Self {
            _file_guard: file_guard,
        })
    }
}

fn console_layer<S>(format: LogFormat) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    match format {
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
        LogFormat::Pretty => layer.with_target(false).boxed(),
    }
}

/// JSON lines written through a non-blocking rolling appender.
fn file_layer<S>(dir: &Path, rotation: RotationPolicy) -> (BoxedLayer<S>, WorkerGuard)
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let appender: RollingFileAppender = match rotation {
        RotationPolicy::Daily => rolling::daily(dir, LOG_FILE_NAME),
        RotationPolicy::Hourly => rolling::hourly(dir, LOG_FILE_NAME),
        RotationPolicy::Never => rolling::never(dir, LOG_FILE_NAME),
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .with_current_span(true)
        .with_span_list(true)
        .with_file(true)
        .with_line_number(true)
        .boxed();
    (layer, guard)
}

fn parse_log_level(level: &str) -> Result<Level> {
    level
        .parse::<Level>()
        .map_err(|_| anyhow::anyhow!("Invalid log level: {level}"))
}
