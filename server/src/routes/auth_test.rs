use super::*;

// =============================================================
// normalize_name
// =============================================================

#[test]
fn name_is_trimmed() {
    assert_eq!(normalize_name("  Ada ").as_deref(), Some("Ada"));
}

#[test]
fn empty_name_is_rejected() {
    assert!(normalize_name("").is_none());
    assert!(normalize_name("   ").is_none());
}

#[test]
fn name_at_limit_is_accepted() {
    let name: String = "a".repeat(MAX_NAME_LEN);
    assert_eq!(normalize_name(&name).as_deref(), Some(name.as_str()));
}

#[test]
fn overlong_name_is_rejected() {
    let name: String = "a".repeat(MAX_NAME_LEN + 1);
    assert!(normalize_name(&name).is_none());
}

// =============================================================
// Session cookie shape
// =============================================================

#[test]
fn session_cookie_is_http_only_and_scoped_to_root() {
    let cookie = session_cookie("tok".to_owned());
    assert_eq!(cookie.name(), SESSION_COOKIE);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
}
