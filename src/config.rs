//! Portal client configuration.
//!
//! The client runs in the browser, where there is no process environment, so
//! values are baked in at build time through `option_env!` and normalised by
//! [`PortalConfig::from_values`].

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081/api";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// REST backend root, without a trailing `/`.
    pub api_base_url: String,
    /// `localStorage` key holding the bearer token.
    pub token_storage_key: String,
}

impl PortalConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `PORTAL_API_BASE_URL`: default `http://localhost:8081/api`
    /// - `PORTAL_TOKEN_STORAGE_KEY`: default `token`
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PORTAL_API_BASE_URL"), option_env!("PORTAL_TOKEN_STORAGE_KEY"))
    }

    /// Normalise raw values; blank or missing entries fall back to defaults.
    pub fn from_values(api_base_url: Option<&str>, token_storage_key: Option<&str>) -> Self {
        let api_base_url = non_blank(api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let token_storage_key = non_blank(token_storage_key)
            .unwrap_or(DEFAULT_TOKEN_STORAGE_KEY)
            .to_owned();
        Self { api_base_url, token_storage_key }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
