//! Component catalog.
//!
//! Each story renders one component family under the live preferences so
//! every theme/density/radius combination can be inspected in place.

use std::sync::Arc;

use design_system::SidebarOptions;
use design_system::chart::{ChartColor, ChartConfig, ChartSeries};
use design_system::host::{MemoryPersistence, PersistenceAdapter};
use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeTone};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::chart::{ChartBars, ChartContainer, ChartLegend};
use crate::components::sidebar::{Sidebar, SidebarInset, SidebarMenu, SidebarMenuItem, SidebarProvider, SidebarTrigger};
use crate::components::theme_switcher::ThemeSwitcher;
use crate::state::design_system::use_design_system;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STORIES: &[Story] = &[
    Story { id: "preferences", title: "Preferences", description: "Theme, density, and radius pickers." },
    Story { id: "buttons", title: "Buttons", description: "Every variant at every size." },
    Story { id: "badges", title: "Badges", description: "Status tones." },
    Story { id: "chart", title: "Chart tokens", description: "Series colors that follow the resolved theme." },
    Story { id: "sidebar", title: "Nested sidebar", description: "An independent in-memory sidebar starting collapsed." },
];

fn story_body(id: &'static str) -> AnyView {
    match id {
        "preferences" => view! { <PreferencesStory/> }.into_any(),
        "buttons" => view! { <ButtonsStory/> }.into_any(),
        "badges" => view! { <BadgesStory/> }.into_any(),
        "chart" => view! { <ChartStory/> }.into_any(),
        "sidebar" => view! { <NestedSidebarStory/> }.into_any(),
        _ => ().into_any(),
    }
}

#[component]
fn PreferencesStory() -> impl IntoView {
    let prefs = use_design_system();
    let summary = move || {
        let p = prefs.preferences();
        format!("{} / {} / {} (resolved {})", p.theme, p.density, p.radius, prefs.resolved_theme())
    };

    view! {
        <ThemeSwitcher/>
        <p class="story__note">{summary}</p>
    }
}

#[component]
fn ButtonsStory() -> impl IntoView {
    let clicks = RwSignal::new(0_u32);
    let rows = ButtonSize::ALL
        .iter()
        .map(|&size| {
            let buttons = ButtonVariant::ALL
                .iter()
                .map(|&variant| {
                    let label = if size == ButtonSize::Icon { "★".to_owned() } else { variant.as_str().to_owned() };
                    view! {
                        <Button variant=variant size=size on_click=Callback::new(move |()| clicks.update(|c| *c += 1))>
                            {label}
                        </Button>
                    }
                })
                .collect_view();
            view! { <div class="story__row">{buttons}</div> }
        })
        .collect_view();

    view! {
        {rows}
        <div class="story__row">
            <Button disabled=true>"Disabled"</Button>
        </div>
        <p class="story__note">{move || format!("{} clicks", clicks.get())}</p>
    }
}

#[component]
fn BadgesStory() -> impl IntoView {
    view! {
        <div class="story__row">
            <Badge label="neutral"/>
            <Badge tone=BadgeTone::Success label="success"/>
            <Badge tone=BadgeTone::Warning label="warning"/>
            <Badge tone=BadgeTone::Danger label="danger"/>
        </div>
    }
}

#[component]
fn ChartStory() -> impl IntoView {
    let config = ChartConfig::new()
        .with_series("visits", ChartSeries { label: "Visits".to_owned(), color: Some(ChartColor::Fixed("#f97316".to_owned())) })
        .with_series(
            "signups",
            ChartSeries {
                label: "Signups".to_owned(),
                color: Some(ChartColor::Themed { light: "#7c3aed".to_owned(), dark: "#c4b5fd".to_owned() }),
            },
        );
    let labels: Vec<String> = ["Mon", "Tue", "Wed", "Thu", "Fri"].iter().map(|d| (*d).to_owned()).collect();

    view! {
        <ChartContainer id="catalog-chart" config=config.clone()>
            <div class="chart-bars-group">
                <ChartBars series_key="visits" labels=labels.clone() values=vec![12.0, 19.0, 7.0, 24.0, 15.0]/>
                <ChartBars series_key="signups" labels=labels values=vec![3.0, 5.0, 2.0, 9.0, 4.0]/>
            </div>
            <ChartLegend config=config/>
        </ChartContainer>
    }
}

/// Starts collapsed and leaves Ctrl/Cmd+B to the application sidebar.
fn nested_options() -> SidebarOptions {
    SidebarOptions { default_open: false, shortcut_enabled: false, ..SidebarOptions::default() }
}

#[component]
fn NestedSidebarStory() -> impl IntoView {
    let persistence: Arc<dyn PersistenceAdapter> = Arc::new(MemoryPersistence::new());

    view! {
        <div class="story__frame">
            <SidebarProvider options=nested_options() persistence=persistence>
                <Sidebar>
                    <SidebarMenu>
                        <SidebarMenuItem label="Inbox" href="#inbox" icon="✉"/>
                        <SidebarMenuItem label="Drafts" href="#drafts" icon="✎"/>
                    </SidebarMenu>
                </Sidebar>
                <SidebarInset>
                    <SidebarTrigger/>
                    <p class="story__note">"This sidebar keeps its own open state and ignores the keyboard shortcut."</p>
                </SidebarInset>
            </SidebarProvider>
        </div>
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let sections = STORIES
        .iter()
        .map(|story| {
            view! {
                <section class="card story" id=story.id>
                    <h2 class="card__title">{story.title}</h2>
                    <p class="story__description">{story.description}</p>
                    <div class="story__body">{story_body(story.id)}</div>
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="catalog">
            <h1 class="page-title">"Components"</h1>
            <nav class="catalog__toc">
                {STORIES.iter().map(|s| view! { <a href=format!("#{}", s.id)>{s.title}</a> }).collect_view()}
            </nav>
            {sections}
        </div>
    }
}
