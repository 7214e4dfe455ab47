//! Log subscriber setup.
//!
//! Logs go to stderr so they never mix with report or JSON output.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Resolve the filter level: `-v` flags win over the config value.
pub fn resolve_level(verbose: u8, configured: Option<&str>) -> LevelFilter {
    match verbose {
        0 => configured
            .and_then(|value| value.trim().parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LEVEL),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, overrides `level`.
pub fn enable_logging(level: LevelFilter) -> anyhow::Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(value)?,
        _ => EnvFilter::new(format!("timeledger_core={level},timeledger={level}")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
