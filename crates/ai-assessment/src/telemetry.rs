use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// `RUST_LOG` when set and valid, otherwise the configured level.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(config.log_level.trim()).map_err(|source| TelemetryError::EnvFilter {
        value: config.log_level.clone(),
        source,
    })
}

/// Install the global compact fmt subscriber. Fails if one is already installed.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(config.ansi)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_guard;

    fn config(log_level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: log_level.to_string(),
            ansi: false,
        }
    }

    #[test]
    fn configured_level_builds_a_filter() {
        let _env = env_guard();
        std::env::remove_var("RUST_LOG");
        let filter = build_filter(&config("ai_assessment=debug,info")).expect("valid filter");
        assert!(filter.to_string().contains("ai_assessment=debug"));
    }

    #[test]
    fn rejects_unparseable_log_level() {
        let _env = env_guard();
        std::env::remove_var("RUST_LOG");

        match build_filter(&config("assessment=verbose")) {
            Err(TelemetryError::EnvFilter { value, .. }) => assert_eq!(value, "assessment=verbose"),
            other => panic!("expected env filter error, got {other:?}"),
        }
    }
}
