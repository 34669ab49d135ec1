use std::sync::OnceLock;

pub const DEFAULT_BASE_URL: &str = "https://idleclans.com/api/";
const DEFAULT_LOG_FILTER: &str = "info";

const ENV_BASE_URL: &str = "CRAFT_PROFIT_API_URL";
const ENV_AVERAGE_PRICE: &str = "CRAFT_PROFIT_AVERAGE_PRICE";
const ENV_LOG_FILTER: &str = "RUST_LOG";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub include_average_price: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            include_average_price: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Process-wide configuration, read from `.env` and the environment on
    /// first access.
    pub fn load() -> &'static AppConfig {
        CONFIG.get_or_init(|| {
            // Already-set variables win over the .env file.
            dotenvy::dotenv().ok();
            Self::from_lookup(|key| std::env::var(key).ok())
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: lookup(ENV_BASE_URL)
                .map(|value| with_trailing_slash(value.trim()))
                .filter(|value| value != "/")
                .unwrap_or(defaults.api_base_url),
            include_average_price: lookup(ENV_AVERAGE_PRICE)
                .map(|value| parse_flag(&value))
                .unwrap_or(defaults.include_average_price),
            log_filter: lookup(ENV_LOG_FILTER)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

// Url::join drops the last path segment unless the base ends with '/'.
fn with_trailing_slash(value: &str) -> String {
    if value.ends_with('/') {
        value.to_string()
    } else {
        format!("{value}/")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn overrides_are_read_from_environment() {
        let config = config_from(&[
            (ENV_BASE_URL, "http://localhost:8080/api"),
            (ENV_AVERAGE_PRICE, "TRUE"),
            (ENV_LOG_FILTER, "debug"),
        ]);
        assert_eq!(config.api_base_url, "http://localhost:8080/api/");
        assert!(config.include_average_price);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[(ENV_BASE_URL, "  "), (ENV_LOG_FILTER, "")]);
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
