//! Root application component with routing and the design-system providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::design_system_provider::DesignSystemProvider;
use crate::components::sidebar::{
    Sidebar, SidebarInset, SidebarMenu, SidebarMenuItem, SidebarProvider, SidebarRail, SidebarTrigger,
};
use crate::components::theme_switcher::ThemeSwitcher;
use crate::pages::{catalog::CatalogPage, dashboard::DashboardPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Wraps the router in the preference provider and lays every route out
/// beside the application sidebar.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/design-system.css"/>
        <Title text="Design System"/>

        <DesignSystemProvider>
            <Router>
                <SidebarProvider>
                    <Sidebar>
                        <div class="sidebar__brand">"Design System"</div>
                        <SidebarMenu>
                            <SidebarMenuItem label="Components" href="/" icon="◧"/>
                            <SidebarMenuItem label="Dashboard" href="/dashboard" icon="▤"/>
                        </SidebarMenu>
                        <SidebarRail/>
                    </Sidebar>
                    <SidebarInset>
                        <header class="app-header">
                            <SidebarTrigger/>
                            <ThemeSwitcher/>
                        </header>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=CatalogPage/>
                            <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        </Routes>
                    </SidebarInset>
                </SidebarProvider>
            </Router>
        </DesignSystemProvider>
    }
}
