//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber.
///
/// The filter comes from `config.log_level` (normally `RUST_LOG`) and falls
/// back to `info` when it does not parse. `LOG_FORMAT=json` switches to one
/// JSON object per line.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
