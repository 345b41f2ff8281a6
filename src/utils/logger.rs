use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter_for(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

fn init_compact(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        filter_for("uxr_ds=debug,info")
    } else {
        filter_for("uxr_ds=info")
    };
    init_compact(filter);
}

pub fn init_json_logger(level: &str) {
    tracing_subscriber::registry()
        .with(filter_for(&format!("uxr_ds={level}")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

/// Installs the subscriber described by `[logging]`; `verbose` forces debug level.
pub fn init_from_config(logging: &LoggingConfig, verbose: bool) {
    if logging.json.unwrap_or(false) {
        init_json_logger(if verbose { "debug" } else { logging.level() });
    } else if verbose {
        init_cli_logger(true);
    } else {
        init_compact(filter_for(&format!("uxr_ds={}", logging.level())));
    }
}
