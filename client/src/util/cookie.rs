//! `document.cookie` persistence for the sidebar open flag.

use design_system::host::PersistenceAdapter;
#[cfg(feature = "hydrate")]
use design_system::cookie::{CookieWrite, SIDEBAR_COOKIE_MAX_AGE_SECS, SIDEBAR_COOKIE_PATH, find_cookie};

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Cookie-backed [`PersistenceAdapter`]. Writes use the sidebar cookie's
/// root path and one-week max-age. Failures are logged and dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookie;

impl PersistenceAdapter for DocumentCookie {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let header = match html_document()?.cookie() {
                Ok(header) => header,
                Err(e) => {
                    log::debug!("cookie read unavailable: {e:?}");
                    return None;
                }
            };
            find_cookie(&header, key).map(str::to_owned)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(document) = html_document() else {
                return;
            };
            let write = CookieWrite {
                name: key,
                value,
                path: SIDEBAR_COOKIE_PATH,
                max_age_secs: SIDEBAR_COOKIE_MAX_AGE_SECS,
            };
            if let Err(e) = document.set_cookie(&write.to_string()) {
                log::debug!("cookie write dropped: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}
