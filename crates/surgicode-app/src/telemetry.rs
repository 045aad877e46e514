use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.log_filter`. Fails if a subscriber is
/// already installed.
pub fn init_tracing(config: &AppConfig) -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| eyre::eyre!("invalid log filter {:?}: {e}", config.log_filter))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
}
