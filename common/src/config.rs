//! Runtime settings of the admin panel.

use crate::model::query::FALLBACK_LIMIT;

/// Settings the frontend resolves once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminConfig {
    /// Prefix prepended to every brand endpoint path.
    pub api_base_url: String,
    /// `localStorage` key holding the bearer token.
    pub token_storage_key: String,
    /// Page size of the first list request.
    pub default_limit: u32,
    pub log_level: log::LevelFilter,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            token_storage_key: "token".to_string(),
            default_limit: FALLBACK_LIMIT,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl AdminConfig {
    /// Applies optional overrides, typically baked in with `option_env!`.
    /// Blank values and unknown level names are ignored.
    pub fn with_overrides(mut self, api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse().ok()) {
            self.log_level = level;
        }
        self
    }
}
