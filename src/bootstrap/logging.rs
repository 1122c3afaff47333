//! Tracing configuration for snipstack
//!
//! - **Development**: debug level for the workspace crates
//! - **Production**: info level
//! - `RUST_LOG` replaces the default directives entirely
//!
//! Console output goes to stderr so command output on stdout stays clean.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "snipstack.log";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives, optionally extended from the host config.
fn build_filter_directives(is_dev: bool, extra: Option<&str>) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    let mut directives = vec![
        if is_dev { "info" } else { "warn" }.to_string(),
        format!("snipstack={level}"),
        format!("snip_core={level}"),
        format!("snip_app={level}"),
        format!("snip_infra={level}"),
        format!("snip_platform={level}"),
    ];
    if let Some(extra) = extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        directives.extend(extra.split(',').map(|d| d.trim().to_string()));
    }
    directives
}

/// Initialize the global tracing subscriber.
///
/// File logging is best effort: when `logs_dir` cannot be prepared the
/// console layer still gets installed.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>, extra_filter: Option<&str>) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), extra_filter);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let console_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match logs_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to console: {err:#}");
            None
        }
    };

    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(console_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
