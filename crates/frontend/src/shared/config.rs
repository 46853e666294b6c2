//! Frontend configuration.
//!
//! Defaults live in `crates/frontend/config.toml` and are embedded into the
//! wasm bundle at compile time. The active chain can be overridden per page
//! load with `?chain=<id>&shortName=<prefix>`.

use serde::Deserialize;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub chain: ChainConfig,
    pub api: ApiConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChainConfig {
    pub chain_id: String,
    /// EIP-3770 prefix used in safe routes, e.g. `eth`
    pub short_name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AssetsConfig {
    /// Placeholder shown when a logo fails to load
    pub fallback_logo: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: "1".to_string(),
            short_name: "eth".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            fallback_logo: "/assets/icons/apps.svg".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryOverrides {
    chain: Option<String>,
    short_name: Option<String>,
}

impl AppConfig {
    pub fn from_toml(src: &str) -> Result<Self, String> {
        toml::from_str(src).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Applies `?chain=` / `?shortName=` from a location search string.
    /// Unknown parameters are ignored; empty values do not override.
    pub fn with_query_overrides(mut self, search: &str) -> Self {
        let overrides: QueryOverrides =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(chain) = overrides.chain.filter(|c| !c.is_empty()) {
            self.chain.chain_id = chain;
        }
        if let Some(short_name) = overrides.short_name.filter(|s| !s.is_empty()) {
            self.chain.short_name = short_name;
        }
        self
    }
}

/// Load configuration for the current page.
///
/// Falls back to built-in defaults if the embedded file is broken.
pub fn load_config() -> AppConfig {
    let config = match AppConfig::from_toml(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; using built-in defaults", e);
            AppConfig::default()
        }
    };

    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let config = config.with_query_overrides(&search);
    log::debug!(
        "Config loaded: chain {} ({}), api port {}",
        config.chain.chain_id,
        config.chain.short_name,
        config.api.port
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_toml("[chain]\nchain_id = \"100\"\n").unwrap();
        assert_eq!(config.chain.chain_id, "100");
        assert_eq!(config.chain.short_name, "eth");
        assert_eq!(config.api.port, 3000);
    }

    #[test]
    fn test_query_overrides() {
        let config = AppConfig::default().with_query_overrides("?chain=100&shortName=gno&x=1");
        assert_eq!(config.chain.chain_id, "100");
        assert_eq!(config.chain.short_name, "gno");

        let config = AppConfig::default().with_query_overrides("?chain=");
        assert_eq!(config.chain.chain_id, "1");

        let config = AppConfig::default().with_query_overrides("");
        assert_eq!(config, AppConfig::default());
    }
}
