use super::*;

// =============================================================
// normalize_body
// =============================================================

#[test]
fn normalize_body_trims_whitespace() {
    assert_eq!(normalize_body("  hello  ").as_deref(), Some("hello"));
}

#[test]
fn normalize_body_rejects_empty() {
    assert!(normalize_body("").is_none());
    assert!(normalize_body("   \n\t ").is_none());
}

#[test]
fn normalize_body_accepts_max_length() {
    let body: String = "x".repeat(MAX_MESSAGE_LEN);
    assert_eq!(normalize_body(&body).as_deref(), Some(body.as_str()));
}

#[test]
fn normalize_body_rejects_over_max_length() {
    let body: String = "x".repeat(MAX_MESSAGE_LEN + 1);
    assert!(normalize_body(&body).is_none());
}

#[test]
fn normalize_body_counts_chars_not_bytes() {
    // Multi-byte characters up to the limit are fine.
    let body: String = "é".repeat(MAX_MESSAGE_LEN);
    assert!(normalize_body(&body).is_some());
}

// =============================================================
// clamp_history_limit
// =============================================================

#[test]
fn history_limit_defaults_when_absent() {
    assert_eq!(clamp_history_limit(None), DEFAULT_HISTORY_LIMIT);
}

#[test]
fn history_limit_clamps_extremes() {
    assert_eq!(clamp_history_limit(Some(0)), 1);
    assert_eq!(clamp_history_limit(Some(-5)), 1);
    assert_eq!(clamp_history_limit(Some(10_000)), MAX_HISTORY_LIMIT);
}

#[test]
fn history_limit_passes_reasonable_values() {
    assert_eq!(clamp_history_limit(Some(25)), 25);
}

// =============================================================
// now_ms
// =============================================================

#[test]
fn now_ms_is_monotonic_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(b >= a);
    // Sanity: after 2020-01-01 in milliseconds.
    assert!(a > 1_577_836_800_000);
}
