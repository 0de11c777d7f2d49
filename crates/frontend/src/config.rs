use anyhow::{bail, Context};
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Absolute API origin. Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub debounce_ms: u32,
    pub search_param: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 8000

[list]
default_page_size = 10
max_page_size = 100
page_size_options = [10, 25, 50, 100]
debounce_ms = 400
search_param = "search"
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Invalid configuration, using defaults: {:#}", e);
        parse_config(DEFAULT_CONFIG).expect("embedded default config is valid")
    }
});

/// Load configuration.
///
/// A TOML document passed through `ADMIN_CONFIG_TOML` at build time takes
/// precedence over the embedded default.
pub fn load_config() -> anyhow::Result<AppConfig> {
    match option_env!("ADMIN_CONFIG_TOML") {
        Some(contents) => parse_config(contents).context("ADMIN_CONFIG_TOML"),
        None => parse_config(DEFAULT_CONFIG),
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

impl AppConfig {
    fn validate(&self) -> anyhow::Result<()> {
        let list = &self.list;
        if list.max_page_size == 0 {
            bail!("list.max_page_size must be positive");
        }
        if list.default_page_size == 0 || list.default_page_size > list.max_page_size {
            bail!(
                "list.default_page_size must be within 1..={}",
                list.max_page_size
            );
        }
        if let Some(size) = list
            .page_size_options
            .iter()
            .find(|&&size| size == 0 || size > list.max_page_size)
        {
            bail!("page size option {} exceeds list.max_page_size", size);
        }
        if !(300..=500).contains(&list.debounce_ms) {
            bail!("list.debounce_ms must be within 300..=500");
        }
        if list.search_param.trim().is_empty() {
            bail!("list.search_param must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 8000);
        assert!(config.api.base_url.is_empty());
        assert_eq!(config.list.default_page_size, 10);
        assert_eq!(config.list.debounce_ms, 400);
        assert_eq!(config.list.search_param, "search");
    }

    #[test]
    fn test_rejects_debounce_outside_quiet_window() {
        let contents = DEFAULT_CONFIG.replace("debounce_ms = 400", "debounce_ms = 50");
        assert!(parse_config(&contents).is_err());
    }

    #[test]
    fn test_rejects_page_size_option_above_max() {
        let contents = DEFAULT_CONFIG.replace("[10, 25, 50, 100]", "[10, 500]");
        assert!(parse_config(&contents).is_err());
    }
}
