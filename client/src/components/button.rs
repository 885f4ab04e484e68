//! Button primitive with variant and size modifiers.

use leptos::prelude::*;

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    pub const ALL: [Self; 5] = [Self::Primary, Self::Secondary, Self::Outline, Self::Ghost, Self::Destructive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Icon,
}

impl ButtonSize {
    pub const ALL: [Self; 4] = [Self::Sm, Self::Md, Self::Lg, Self::Icon];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

/// BEM class list for a button.
pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("btn btn--{} btn--{}", variant.as_str(), size.as_str())
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let on_click = move |_| {
        if let Some(cb) = on_click {
            cb.run(());
        }
    };

    view! {
        <button class=button_class(variant, size) type="button" disabled=disabled title=title on:click=on_click>
            {children()}
        </button>
    }
}
