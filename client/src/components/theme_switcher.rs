//! Pickers for the three preference axes.

use design_system::{Density, Radius, Theme};
use leptos::prelude::*;

use crate::state::design_system::use_design_system;

/// One `<select>` per axis, bound to the design-system context.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let prefs = use_design_system();

    let on_theme = move |ev| {
        if let Ok(theme) = event_target_value(&ev).parse::<Theme>() {
            prefs.set_theme(theme);
        }
    };
    let on_density = move |ev| {
        if let Ok(density) = event_target_value(&ev).parse::<Density>() {
            prefs.set_density(density);
        }
    };
    let on_radius = move |ev| {
        if let Ok(radius) = event_target_value(&ev).parse::<Radius>() {
            prefs.set_radius(radius);
        }
    };

    view! {
        <div class="theme-switcher">
            <label class="theme-switcher__field">
                <span>"Theme"</span>
                <select on:change=on_theme prop:value=move || prefs.theme().as_str()>
                    {Theme::ALL.iter().map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> }).collect_view()}
                </select>
            </label>
            <label class="theme-switcher__field">
                <span>"Density"</span>
                <select on:change=on_density prop:value=move || prefs.density().as_str()>
                    {Density::ALL.iter().map(|d| view! { <option value=d.as_str()>{d.as_str()}</option> }).collect_view()}
                </select>
            </label>
            <label class="theme-switcher__field">
                <span>"Radius"</span>
                <select on:change=on_radius prop:value=move || prefs.radius().as_str()>
                    {Radius::ALL.iter().map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> }).collect_view()}
                </select>
            </label>
            <span class="theme-switcher__resolved" title="Resolved theme">
                {move || prefs.resolved_theme().as_str()}
            </span>
        </div>
    }
}
