use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PERFLOOP_LOG";

pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Diagnostics go to stderr; stdout carries only the report lines.
/// `PERFLOOP_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
