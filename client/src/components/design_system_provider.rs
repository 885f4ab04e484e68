//! Root provider for theme, density, and radius preferences.
//!
//! ARCHITECTURE
//! ============
//! Mounted once at the application root. Creates the preference context,
//! subscribes to the OS color-scheme signal for its lifetime, and mirrors the
//! resolved preferences onto the `<html>` element.

use std::sync::Arc;

use design_system::ProviderOptions;
use design_system::lifecycle::ListenerScope;
use leptos::prelude::*;

use crate::state::design_system::provide_design_system;
use crate::util::{color_scheme, theme_root};

#[component]
pub fn DesignSystemProvider(#[prop(optional)] options: ProviderOptions, children: Children) -> impl IntoView {
    let context = provide_design_system(options, Arc::new(color_scheme::MatchMediaColorScheme));

    let mut listeners = ListenerScope::new();
    listeners.push_some(color_scheme::watch(move |_| context.notify_color_scheme_changed()));
    on_cleanup(move || {
        let mut listeners = listeners;
        listeners.release_all();
    });

    Effect::new(move || {
        theme_root::apply(&context.root_attributes());
        theme_root::apply_properties(&context.root_properties());
    });

    children()
}
