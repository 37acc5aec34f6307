//! Tracing subscriber initialization.
//!
//! Filtering comes from `RUST_LOG` (default: `info` plus request spans from
//! `tower_http`). Output is JSON unless `LOG_FORMAT=pretty`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("pretty") | Some("text") => Self::Pretty,
            _ => Self::Json,
        }
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_defaults_to_json() {
        assert_eq!(LogFormat::parse(None), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("whatever")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("PRETTY")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(Some("text")), LogFormat::Pretty);
    }

    #[test]
    fn init_twice_is_a_no_op() {
        init(LogFormat::Pretty);
        init(LogFormat::Json);
    }
}
