use super::*;

fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

// =============================================================
// Config parsing
// =============================================================

#[test]
fn config_requires_api_key() {
    let err = IdentityConfig::from_vars(vars(&[])).unwrap_err();
    assert!(matches!(err, IdentityError::MissingApiKey { var } if var == "IDENTITY_API_KEY"));
}

#[test]
fn config_rejects_empty_api_key() {
    let err = IdentityConfig::from_vars(vars(&[("IDENTITY_API_KEY", "")])).unwrap_err();
    assert!(matches!(err, IdentityError::MissingApiKey { .. }));
}

#[test]
fn config_defaults() {
    let config = IdentityConfig::from_vars(vars(&[("IDENTITY_API_KEY", "k")])).expect("config");
    assert_eq!(config.base_url, DEFAULT_IDENTITY_BASE_URL);
    assert_eq!(config.request_timeout_secs, DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS);
    assert_eq!(config.connect_timeout_secs, DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS);
}

#[test]
fn config_trims_trailing_slash_on_base_url() {
    let config = IdentityConfig::from_vars(vars(&[
        ("IDENTITY_API_KEY", "k"),
        ("IDENTITY_BASE_URL", "https://id.example.com/v1/"),
    ]))
    .expect("config");
    assert_eq!(config.base_url, "https://id.example.com/v1");
}

#[test]
fn config_parses_timeouts_and_ignores_garbage() {
    let config = IdentityConfig::from_vars(vars(&[
        ("IDENTITY_API_KEY", "k"),
        ("IDENTITY_REQUEST_TIMEOUT_SECS", "30"),
        ("IDENTITY_CONNECT_TIMEOUT_SECS", "banana"),
    ]))
    .expect("config");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.connect_timeout_secs, DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS);
}

// =============================================================
// Profile parsing
// =============================================================

#[test]
fn parse_profile_reads_full_record() {
    let body = serde_json::json!({
        "users": [{
            "localId": "uid-1",
            "displayName": "Ada Lovelace",
            "email": "ada@example.com",
            "photoUrl": "https://example.com/ada.png"
        }]
    });
    let profile = parse_profile(&body).expect("profile");
    assert_eq!(profile.uid, "uid-1");
    assert_eq!(profile.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(profile.email.as_deref(), Some("ada@example.com"));
    assert_eq!(profile.avatar_url.as_deref(), Some("https://example.com/ada.png"));
}

#[test]
fn parse_profile_treats_empty_display_name_as_absent() {
    let body = serde_json::json!({
        "users": [{"localId": "uid-1", "displayName": ""}]
    });
    let profile = parse_profile(&body).expect("profile");
    assert!(profile.name.is_none());
}

#[test]
fn parse_profile_requires_uid() {
    let body = serde_json::json!({"users": [{"email": "ada@example.com"}]});
    assert!(parse_profile(&body).is_none());
}

#[test]
fn parse_profile_requires_nonempty_users() {
    assert!(parse_profile(&serde_json::json!({"users": []})).is_none());
    assert!(parse_profile(&serde_json::json!({})).is_none());
}
