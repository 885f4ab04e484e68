//! Window listeners for the sidebar provider.
//!
//! Both listeners are registered through Leptos' `window_event_listener` and
//! handed back as [`ScopedListener`]s so the provider's `ListenerScope`
//! removes them on cleanup.

use design_system::lifecycle::ScopedListener;
use design_system::shortcut::KeyChord;

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

/// Current `window.innerWidth`, when running in a browser.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Host-neutral view of a keydown event.
pub fn key_chord(ev: &leptos::ev::KeyboardEvent) -> KeyChord {
    KeyChord { key: ev.key(), ctrl: ev.ctrl_key(), meta: ev.meta_key(), shift: ev.shift_key(), alt: ev.alt_key() }
}

/// Report the viewport width on every raw `resize` event.
pub fn listen_resize(on_resize: impl Fn(f64) + 'static) -> Option<ScopedListener> {
    #[cfg(feature = "hydrate")]
    {
        let handle = leptos::prelude::window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = viewport_width() {
                on_resize(width);
            }
        });
        Some(ScopedListener::new("resize", move || handle.remove()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_resize;
        None
    }
}

/// Feed every keydown to `on_chord`; a `true` return suppresses the browser
/// default for that event.
pub fn listen_keydown(on_chord: impl Fn(&KeyChord) -> bool + 'static) -> Option<ScopedListener> {
    #[cfg(feature = "hydrate")]
    {
        let handle = leptos::prelude::window_event_listener(leptos::ev::keydown, move |ev| {
            if on_chord(&key_chord(&ev)) {
                ev.prevent_default();
            }
        });
        Some(ScopedListener::new("keydown", move || handle.remove()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_chord;
        None
    }
}
