//! Sidebar component family.
//!
//! ARCHITECTURE
//! ============
//! `SidebarProvider` owns one [`SidebarContext`] plus its resize and keydown
//! listeners. The context starts from `default_open` on a desktop viewport
//! on both server and client; a post-mount effect then applies the cookie
//! and the measured width, so hydration never sees a different tree. `Sidebar` renders either the desktop panel (driven by `open`)
//! or the mobile drawer (driven by `open_mobile`), never both. Triggers,
//! rail, and menu items only talk to the context.

use std::sync::Arc;

use design_system::SidebarOptions;
use design_system::host::PersistenceAdapter;
use design_system::lifecycle::ListenerScope;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::sidebar::{SidebarContext, provide_deferred_sidebar, use_sidebar};
use crate::util::cookie::DocumentCookie;
use crate::util::listeners::{listen_keydown, listen_resize, viewport_width};

/// Provides an independent sidebar state to its subtree.
#[component]
pub fn SidebarProvider(
    #[prop(optional)] options: SidebarOptions,
    /// Overrides `options.default_open`.
    #[prop(optional)]
    default_open: Option<bool>,
    /// Where `open` is stored; the `sidebar_state` cookie when omitted.
    #[prop(optional)]
    persistence: Option<Arc<dyn PersistenceAdapter>>,
    children: Children,
) -> impl IntoView {
    let options = SidebarOptions { default_open: default_open.unwrap_or(options.default_open), ..options };
    let persistence = persistence.unwrap_or_else(|| Arc::new(DocumentCookie));
    let sidebar = provide_deferred_sidebar(options, persistence);

    Effect::new(move || sidebar.sync_with_host(viewport_width()));

    let mut listeners = ListenerScope::new();
    listeners.push_some(listen_resize(move |width| sidebar.resize(width)));
    if options.shortcut_enabled {
        listeners.push_some(listen_keydown(move |chord| sidebar.handle_key(chord)));
    }
    on_cleanup(move || {
        let mut listeners = listeners;
        listeners.release_all();
    });

    view! {
        <div
            class="sidebar-wrapper"
            data-state=move || sidebar.state().as_str()
            data-mobile=move || sidebar.is_mobile().to_string()
        >
            {children()}
        </div>
    }
}

/// Navigation panel: desktop rail/panel or mobile drawer.
#[component]
pub fn Sidebar(children: ChildrenFn) -> impl IntoView {
    let sidebar = use_sidebar();
    let desktop_children = children.clone();

    view! {
        <Show
            when=move || sidebar.is_mobile()
            fallback=move || {
                view! {
                    <aside class="sidebar" data-state=move || sidebar.state().as_str()>
                        <div class="sidebar__inner">{desktop_children()}</div>
                    </aside>
                }
            }
        >
            <MobileDrawer sidebar=sidebar>{children()}</MobileDrawer>
        </Show>
    }
}

#[component]
fn MobileDrawer(sidebar: SidebarContext, children: Children) -> impl IntoView {
    let on_backdrop = move |_| sidebar.set_open_mobile(false);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            sidebar.set_open_mobile(false);
        }
    };

    view! {
        <div class="sidebar-drawer" data-open=move || sidebar.open_mobile().to_string()>
            <div class="sidebar-drawer__backdrop" on:click=on_backdrop></div>
            <aside class="sidebar-drawer__panel" role="dialog" aria-modal="true" tabindex="-1" on:keydown=on_keydown>
                {children()}
            </aside>
        </div>
    }
}

/// Button toggling the sidebar.
#[component]
pub fn SidebarTrigger() -> impl IntoView {
    let sidebar = use_sidebar();
    let title = if sidebar.shortcut_enabled() {
        format!("Toggle sidebar ({})", sidebar.shortcut().label())
    } else {
        "Toggle sidebar".to_owned()
    };

    view! {
        <button class="sidebar-trigger" aria-label="Toggle Sidebar" title=title on:click=move |_| sidebar.toggle_sidebar()>
            "☰"
        </button>
    }
}

/// Thin hit area along the sidebar edge that toggles it.
#[component]
pub fn SidebarRail() -> impl IntoView {
    let sidebar = use_sidebar();

    view! {
        <button
            class="sidebar-rail"
            aria-label="Toggle Sidebar"
            tabindex="-1"
            title="Toggle Sidebar"
            on:click=move |_| sidebar.toggle_sidebar()
        ></button>
    }
}

/// Main content region beside the sidebar.
#[component]
pub fn SidebarInset(children: Children) -> impl IntoView {
    view! { <main class="sidebar-inset">{children()}</main> }
}

#[component]
pub fn SidebarMenu(children: Children) -> impl IntoView {
    view! { <ul class="sidebar-menu">{children()}</ul> }
}

/// Menu entry, marked active when its href is the current path. When the
/// desktop sidebar is collapsed the label moves into the tooltip.
#[component]
pub fn SidebarMenuItem(
    #[prop(into)] label: String,
    #[prop(into)] href: String,
    #[prop(into)] icon: String,
) -> impl IntoView {
    let sidebar = use_sidebar();
    let location = use_location();
    let target = href.clone();
    let active = move || location.pathname.get() == target;
    let collapsed = move || !sidebar.is_mobile() && !sidebar.open();
    let tooltip_label = label.clone();
    let tooltip = move || collapsed().then(|| tooltip_label.clone());

    view! {
        <li class="sidebar-menu__item">
            <a class="sidebar-menu__button" href=href data-active=move || active().to_string() title=tooltip>
                <span class="sidebar-menu__icon" aria-hidden="true">{icon}</span>
                <span class="sidebar-menu__label" class:sidebar-menu__label--hidden=collapsed>{label}</span>
            </a>
        </li>
    }
}
