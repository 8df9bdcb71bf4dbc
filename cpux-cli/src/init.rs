//! Logging initialization
//!
//! Logs go to stderr so stdout carries only the report.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or blank
const DEFAULT_DIRECTIVES: &str = "cpux_cli=info,cpux=info,cpux_core=info";

/// Log line format selected by `LOG_FORMAT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Build the event filter
///
/// `RUST_LOG` replaces the defaults entirely, so `RUST_LOG=cpux_core=debug`
/// shows why a host value was reported as zero.
fn env_filter(rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = rust_log
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES);
    Ok(EnvFilter::try_new(directives)?)
}

/// Initialize tracing for the CLI
///
/// - `RUST_LOG` when set, `info` for the cpux crates otherwise
/// - `LOG_FORMAT=json` for structured JSON output, human-readable text otherwise
pub fn init_tracing() -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(rust_log.as_deref())?;
    let format = LogFormat::from_env_value(std::env::var("LOG_FORMAT").ok().as_deref());

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match format {
        LogFormat::Json => registry.with(layer.json()).init(),
        LogFormat::Text => registry.with(layer.with_ansi(false)).init(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_defaults_when_rust_log_unset() {
        let filter = env_filter(None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(filter.to_string(), env_filter(Some("  ")).unwrap().to_string());
    }

    #[test]
    fn test_rust_log_enables_core_debug() {
        let filter = env_filter(Some("cpux_core=debug")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "cpux_core::info", tracing::Level::DEBUG));
        });
    }

    #[test]
    fn test_global_rust_log_level_kept() {
        let filter = env_filter(Some("debug")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_log_format_from_env_value() {
        assert_eq!(LogFormat::from_env_value(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some("pretty")), LogFormat::Text);
        assert_eq!(LogFormat::from_env_value(None), LogFormat::Text);
    }
}
