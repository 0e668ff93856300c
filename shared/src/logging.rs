//! Shared logging utilities for consistent tracing output

/// Initialize tracing subscriber with the default `info` level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Initialize tracing subscriber with an explicit base log level.
///
/// An externally-set `RUST_LOG` wins over the assembled filter.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");
    let level_filter = format!("sentry={base_level},shared={base_level},reqwest=warn,hyper=warn");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level_filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
