use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global fmt subscriber. `RUST_LOG` wins over `LOG_LEVEL`.
///
/// Timestamps are left out since CloudWatch adds its own. Calling this more
/// than once is harmless, the later calls are no-ops.
pub fn init_logger(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
