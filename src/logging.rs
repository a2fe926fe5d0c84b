//! Tracing setup shared by the API binaries.
//!
//! Uses the standard RUST_LOG environment variable for filtering (default
//! `info`) and RUST_LOG_FORMAT for output:
//! - `json` - JSON formatted output (default, one event per log line)
//! - `compact` - Compact single-line output
//! - `pretty` - Pretty formatted output

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
    Pretty,
}

impl LogFormat {
    /// Format named by `value`; anything unrecognised falls back to JSON.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("compact") => LogFormat::Compact,
            Some("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// Initialize the global subscriber from the environment.
pub fn init() -> Result<(), TryInitError> {
    init_with_defaults("info")
}

/// Initialize with `default_filter` used when RUST_LOG is not set.
pub fn init_with_defaults(default_filter: &str) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let format = LogFormat::parse(std::env::var("RUST_LOG_FORMAT").ok().as_deref());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().with_ansi(false).json())
            .try_init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    }
}
