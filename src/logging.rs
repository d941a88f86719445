//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and request traces from `tower_http` stay at debug. Output goes to
//! stderr so rendered dashboards and exports on stdout stay clean.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::LoggingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `None` for anything other than `pretty` or `json`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Filter used when `RUST_LOG` is unset
pub fn default_directives(level: &str) -> String {
    format!("finlit={},tower_http=debug", level)
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));
    let format = LogFormat::parse(&config.format);

    let registry = tracing_subscriber::registry().with(filter);
    match format.unwrap_or(LogFormat::Pretty) {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
    }

    if format.is_none() {
        tracing::warn!("Unknown log format {:?}, using pretty", config.format);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(LogFormat::parse("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("Pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("compact"), None);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives("debug"), "finlit=debug,tower_http=debug");
    }
}
