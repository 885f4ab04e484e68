//! OS color-scheme signal via `matchMedia`.
//!
//! [`MatchMediaColorScheme`] answers the store's `system` theme lookups by
//! querying the media list on every call. [`watch`] subscribes to the list's
//! `change` event so the provider can re-render when the OS switches.

use design_system::host::ColorSchemeSource;
use design_system::lifecycle::ScopedListener;

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Live `prefers-color-scheme` reader. Never caches.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchMediaColorScheme;

impl ColorSchemeSource for MatchMediaColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Call `on_change` with the new dark flag whenever the OS scheme flips.
///
/// Returns `None` when no media list is available (SSR, old browsers).
pub fn watch(on_change: impl Fn(bool) + 'static) -> Option<ScopedListener> {
    #[cfg(feature = "hydrate")]
    {
        use send_wrapper::SendWrapper;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let query = web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
        let callback = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        });
        if let Err(e) = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            log::warn!("color-scheme listener not registered: {e:?}");
            return None;
        }

        // The media list and closure are main-thread JS handles; the release
        // closure only ever runs from the provider's cleanup on that thread.
        let registration = SendWrapper::new((query, callback));
        Some(ScopedListener::new("color-scheme", move || {
            let (query, callback) = registration.take();
            if let Err(e) = query.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
                log::warn!("color-scheme listener not removed: {e:?}");
            }
        }))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
        None
    }
}
