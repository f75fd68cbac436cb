//! Startup configuration for the API binary

use anyhow::bail;
use sr_shared::config::environment::LogFormat;
use sr_shared::config::{AppConfig, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Refuse to start with settings that are unsafe in production
///
/// A default session secret is fatal. Other findings are logged.
pub fn check_production(config: &AppConfig) -> anyhow::Result<()> {
    if config.environment.is_production() && config.session.is_using_default_secret() {
        bail!("SESSION_SECRET must be set in production");
    }

    for violation in config.production_violations() {
        tracing::warn!(event = "config_warning", "{}", violation);
    }
    Ok(())
}
