use super::*;

// =============================================================
// Write format
// =============================================================

#[test]
fn sidebar_write_has_path_and_one_week_max_age() {
    assert_eq!(CookieWrite::sidebar("false").to_string(), "sidebar_state=false; path=/; max-age=604800");
}

// =============================================================
// Header lookup
// =============================================================

#[test]
fn find_cookie_picks_named_pair() {
    let header = "theme=dark; sidebar_state=true; other=1";
    assert_eq!(find_cookie(header, "sidebar_state"), Some("true"));
    assert_eq!(find_cookie(header, "other"), Some("1"));
}

#[test]
fn find_cookie_missing_or_empty_header() {
    assert_eq!(find_cookie("", SIDEBAR_COOKIE_NAME), None);
    assert_eq!(find_cookie("a=1", SIDEBAR_COOKIE_NAME), None);
}

#[test]
fn find_cookie_does_not_match_prefix() {
    assert_eq!(find_cookie("sidebar_state_v2=true", SIDEBAR_COOKIE_NAME), None);
}

// =============================================================
// Open-state decoding
// =============================================================

#[test]
fn only_exact_booleans_decode() {
    assert_eq!(parse_open_state("true"), Some(true));
    assert_eq!(parse_open_state("false"), Some(false));
    assert_eq!(parse_open_state("yes"), None);
    assert_eq!(parse_open_state("TRUE"), None);
    assert_eq!(parse_open_state(" true"), None);
    assert_eq!(parse_open_state(""), None);
}

#[test]
fn encode_matches_decode() {
    assert_eq!(parse_open_state(encode_open_state(true)), Some(true));
    assert_eq!(parse_open_state(encode_open_state(false)), Some(false));
}
