use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
    Registry,
};

use crate::config::{LogFormat, LoggingConfig};

const FALLBACK_LEVEL: &str = "info";

/// Sets up stderr logging. `RUST_LOG`, when set, wins over `logging.level`;
/// an unparseable directive string falls back to `info`.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    let directives = filter_directives(&config.level, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL));

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
    };

    tracing_subscriber::registry().with(layer).with(filter).try_init()?;

    tracing::debug!(directives = %directives, "Logging ready");
    Ok(())
}

fn filter_directives(level: &str, env: Option<String>) -> String {
    env.filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_used_without_env() {
        assert_eq!(filter_directives("debug", None), "debug");
    }

    #[test]
    fn test_env_overrides_level() {
        let directives = filter_directives("info", Some("fertilizer_advisor=trace".to_string()));
        assert_eq!(directives, "fertilizer_advisor=trace");
    }

    #[test]
    fn test_blank_env_ignored() {
        assert_eq!(filter_directives("warn", Some("  ".to_string())), "warn");
    }
}
