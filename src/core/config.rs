//! Site configuration
//!
//! The intro policy is fixed at build time through `LAUGH_RIOT_FORCE_INTRO`
//! so server and browser render the same first stage. Server-only settings
//! come from the environment; call `dotenvy::dotenv()` before
//! `Config::from_env()`.

/// Tracing filter for the server, e.g. `info` or `laugh_riot=debug`
pub const LOG_ENV: &str = "LAUGH_RIOT_LOG";

/// Set to `off` to disable response compression
pub const COMPRESSION_ENV: &str = "LAUGH_RIOT_COMPRESSION";

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Parse a boolean-ish flag. `1`, `true`, `yes` and `on` are true.
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

/// Whether the intro ignores the session flag. Set `LAUGH_RIOT_FORCE_INTRO`
/// when building to always play it.
pub fn force_show_intro() -> bool {
    parse_flag(option_env!("LAUGH_RIOT_FORCE_INTRO"))
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing `EnvFilter` directive
    pub log_filter: String,

    /// Whether responses are Brotli/Gzip compressed
    pub compression: bool,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(LOG_ENV).ok().as_deref(),
            std::env::var(COMPRESSION_ENV).ok().as_deref(),
        )
    }

    /// Build from raw values as they would appear in the environment
    pub fn from_values(log_filter: Option<&str>, compression: Option<&str>) -> Self {
        let log_filter = log_filter
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string();

        let compression = !compression
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "off" | "0" | "false"));

        Self {
            log_filter,
            compression,
        }
    }
}

#[cfg(feature = "ssr")]
impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_truthy() {
        for v in ["1", "true", "TRUE", " yes ", "On"] {
            assert!(parse_flag(Some(v)), "{v:?} should be true");
        }
    }

    #[test]
    fn test_parse_flag_falsy() {
        for v in ["0", "false", "", "nope", "off"] {
            assert!(!parse_flag(Some(v)), "{v:?} should be false");
        }
        assert!(!parse_flag(None));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.log_filter, "info");
        assert!(config.compression);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_from_values() {
        let config = Config::from_values(Some("laugh_riot=debug"), Some("off"));
        assert_eq!(config.log_filter, "laugh_riot=debug");
        assert!(!config.compression);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_blank_filter_falls_back() {
        let config = Config::from_values(Some("   "), Some("on"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.compression);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_compression_variants() {
        for v in ["OFF", "0", "false"] {
            assert!(!Config::from_values(None, Some(v)).compression);
        }
        assert!(Config::from_values(None, Some("yes")).compression);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_from_env_returns_config() {
        let config = Config::from_env();
        assert!(!config.log_filter.is_empty());
    }
}
