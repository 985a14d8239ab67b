//! Tracing initialization for the `http-config-check` binary.

use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};


/// Initializes the global tracing subscriber with a filtered console layer
/// and, if `log_file_output_directory` is given, an additional daily-rotated
/// file layer.
///
/// The returned [`WorkerGuard`] (if any) must be kept alive for the duration
/// of the program, otherwise buffered log lines may be lost on exit.
pub fn initialize_tracing(
    console_output_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let (log_file_layer, worker_guard) = match log_file_output_directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)
                .into_diagnostic()
                .wrap_err("Failed to create the log file output directory.")?;

            let file_appender = tracing_appender::rolling::daily(directory, "http-config-check.log");
            let (non_blocking_writer, worker_guard) = tracing_appender::non_blocking(file_appender);

            let log_file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_writer);

            (Some(log_file_layer), Some(worker_guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(console_output_level_filter),
        )
        .with(log_file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to initialize the tracing subscriber.")?;

    Ok(worker_guard)
}
