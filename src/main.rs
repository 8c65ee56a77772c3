//! Blossi binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod catalog;
mod events;
mod logic;
mod state;
#[cfg(test)]
mod test_utils;
mod theme;
mod ui;
mod util;

use std::sync::OnceLock;
use std::fmt;

use clap::Parser;

struct BlossiTimer;

impl tracing_subscriber::fmt::time::FormatTime for BlossiTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T%H:%M:%S");
        w.write_str(&ts.to_string())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/blossi/logs/blossi.log`, falling
/// back to stderr when the file cannot be opened.
///
/// Inputs:
/// - `default_level`: Level used when `RUST_LOG` is unset.
///
/// Output: none.
fn init_logging(default_level: &str) {
    let mut log_path = crate::theme::logs_dir();
    log_path.push("blossi.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level.to_string()))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(BlossiTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_timer(BlossiTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&cli.log_level);

    tracing::info!(catalog = %cli.catalog.display(), "Blossi starting");
    if let Err(err) = app::run(&cli).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Blossi exited");
}
