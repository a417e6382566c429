//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Selects the log line format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "ROUTEGUARD_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub format: LogFormat,
    pub default_filter: String,
}

impl LogSettings {
    /// JSON unless `ROUTEGUARD_LOG_FORMAT=pretty`.
    pub fn from_env() -> Self {
        let format = match std::env::var(LOG_FORMAT_ENV) {
            Ok(v) if v.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        };

        Self {
            format,
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match settings.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_the_default_format() {
        temp_env::with_var_unset(LOG_FORMAT_ENV, || {
            let settings = LogSettings::from_env();
            assert_eq!(settings.format, LogFormat::Json);
            assert_eq!(settings.default_filter, "info");
        });
    }

    #[test]
    fn pretty_format_from_env() {
        temp_env::with_var(LOG_FORMAT_ENV, Some("PRETTY"), || {
            assert_eq!(LogSettings::from_env().format, LogFormat::Pretty);
        });
    }

    #[test]
    fn init_twice_is_a_no_op() {
        let settings = LogSettings {
            format: LogFormat::Json,
            default_filter: "debug".to_string(),
        };
        init(&settings);
        init(&settings);
        ::tracing::debug!("still alive");
    }
}
