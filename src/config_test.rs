use super::*;

#[test]
fn defaults_when_values_missing() {
    let cfg = PortalConfig::from_values(None, None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
    assert_eq!(cfg, PortalConfig::default());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = PortalConfig::from_values(Some("   "), Some(""));
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
}

#[test]
fn trailing_slashes_are_trimmed_from_base_url() {
    let cfg = PortalConfig::from_values(Some("https://portal.example/api//"), None);
    assert_eq!(cfg.api_base_url, "https://portal.example/api");
}

#[test]
fn custom_storage_key_is_trimmed() {
    let cfg = PortalConfig::from_values(None, Some(" portal_token "));
    assert_eq!(cfg.token_storage_key, "portal_token");
}
