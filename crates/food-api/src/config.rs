//! Food API server configuration.

use serde::Deserialize;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Development run mode; lowers the default log filter to `debug`.
    #[serde(default)]
    pub debug: bool,
    /// Path of the food record file served by `/get-food-name`.
    #[serde(default = "default_food_data_path")]
    pub food_data_path: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_food_data_path() -> String {
    "food_data.json".to_string()
}

impl ApiConfig {
    /// Load config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let host = std::env::var("FOOD_API_HOST").unwrap_or_else(|_| default_host());
        let port = std::env::var("FOOD_API_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_port);
        let debug = std::env::var("FOOD_API_DEBUG")
            .map(|v| flag(&v))
            .unwrap_or(false);
        let food_data_path =
            std::env::var("FOOD_DATA_PATH").unwrap_or_else(|_| default_food_data_path());
        Self {
            host,
            port,
            debug,
            food_data_path,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            food_data_path: default_food_data_path(),
        }
    }
}

fn flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
        assert_eq!(config.food_data_path, "food_data.json");
    }

    #[test]
    fn flag_parsing() {
        assert!(flag("true"));
        assert!(flag("TRUE"));
        assert!(flag("1"));
        assert!(!flag("0"));
        assert!(!flag("false"));
        assert!(!flag("yes"));
    }
}
