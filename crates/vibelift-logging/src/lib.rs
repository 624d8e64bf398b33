//! # vibelift-logging
//!
//! Tracing setup shared by the vibelift binaries.
//!
//! ## Log Formats
//!
//! - `Pretty` - Human-readable output
//! - `JSON` - Structured JSON lines
//! - `Compact` - Minimal text output
//!
//! Console logs always go to stderr so command output on stdout stays
//! machine-readable. An optional log file receives JSON lines.

mod format;

pub use format::LogFormat;
pub use tracing_appender::non_blocking::WorkerGuard;

use std::io;
use std::path::Path;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing for the application.
///
/// `RUST_LOG` takes precedence over `level`. When `log_file` is set, the
/// returned guard must be held until exit so buffered lines are flushed.
pub fn init_tracing(
    level: &str,
    format: LogFormat,
    log_file: Option<&Path>,
) -> io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path.file_name().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "Log file path has no file name")
            })?;
            std::fs::create_dir_all(dir)?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    match format {
        LogFormat::Json => {
            registry
                .with(fmt::layer().json().with_target(false).with_writer(io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            registry
                .with(fmt::layer().with_target(false).with_writer(io::stderr))
                .init();
        }
        LogFormat::Compact => {
            registry
                .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
                .init();
        }
    }

    Ok(guard)
}
