//! Sidebar cookie layout.
//!
//! One cookie, `sidebar_state`, holding literally `true` or `false`, written
//! with `path=/` and a one-week `max-age`. Reads accept only those two exact
//! strings; anything else is treated as absent.

use std::fmt;

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

pub const SIDEBAR_COOKIE_NAME: &str = "sidebar_state";
pub const SIDEBAR_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;
pub const SIDEBAR_COOKIE_PATH: &str = "/";

/// A `document.cookie` assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieWrite<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub path: &'a str,
    pub max_age_secs: u64,
}

impl<'a> CookieWrite<'a> {
    /// Sidebar cookie write with the fixed path and max-age.
    #[must_use]
    pub fn sidebar(value: &'a str) -> Self {
        Self { name: SIDEBAR_COOKIE_NAME, value, path: SIDEBAR_COOKIE_PATH, max_age_secs: SIDEBAR_COOKIE_MAX_AGE_SECS }
    }
}

impl fmt::Display for CookieWrite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}; path={}; max-age={}", self.name, self.value, self.path, self.max_age_secs)
    }
}

/// Find the value of `name` in a `Cookie` header / `document.cookie` string.
#[must_use]
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Exact-match decode of a persisted open flag.
#[must_use]
pub fn parse_open_state(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[must_use]
pub fn encode_open_state(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}
