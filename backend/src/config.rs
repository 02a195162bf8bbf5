//! Server settings read from the environment (and an optional `.env` file).
//!
//! | variable                | default     |
//! |-------------------------|-------------|
//! | `CERTGEN_HOST`          | `127.0.0.1` |
//! | `CERTGEN_PORT`          | `8080`      |
//! | `CERTGEN_OPEN_BROWSER`  | `true`      |
//! | `CERTGEN_MAX_UPLOAD_MB` | `10`        |

use log::warn;
use std::env;
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_MB: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Launch the default browser on the app URL after startup.
    pub open_browser: bool,
    /// Largest accepted spreadsheet upload, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable values fall back to
    /// the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("CERTGEN_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = parse_or(&lookup, "CERTGEN_PORT", defaults.port);
        let open_browser = lookup("CERTGEN_OPEN_BROWSER")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.open_browser);
        let max_upload_mb = parse_or(&lookup, "CERTGEN_MAX_UPLOAD_MB", DEFAULT_MAX_UPLOAD_MB);
        let max_upload_bytes = max_upload_mb.checked_mul(1024 * 1024).unwrap_or_else(|| {
            warn!("ignoring oversized CERTGEN_MAX_UPLOAD_MB={}", max_upload_mb);
            defaults.max_upload_bytes
        });

        Self {
            host,
            port,
            open_browser,
            max_upload_bytes,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {}={:?}", key, raw);
            default
        }),
        None => default,
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(ServerConfig::from_lookup(lookup(&[])), ServerConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("CERTGEN_HOST", "0.0.0.0"),
            ("CERTGEN_PORT", "9000"),
            ("CERTGEN_OPEN_BROWSER", "off"),
            ("CERTGEN_MAX_UPLOAD_MB", "2"),
        ]));
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert!(!config.open_browser);
        assert_eq!(config.max_upload_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("CERTGEN_PORT", "eighty"),
            ("CERTGEN_HOST", "  "),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn oversized_upload_limit_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[(
            "CERTGEN_MAX_UPLOAD_MB",
            &usize::MAX.to_string(),
        )]));
        assert_eq!(config.max_upload_bytes, ServerConfig::default().max_upload_bytes);
    }
}
