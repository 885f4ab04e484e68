use design_system::host::FixedColorScheme;

use super::*;

fn provided(options: ProviderOptions, dark: bool) -> (DesignSystemContext, FixedColorScheme) {
    let scheme = FixedColorScheme::new(dark);
    let context = provide_design_system(options, Arc::new(scheme.clone()));
    (context, scheme)
}

// =============================================================
// Accessor
// =============================================================

#[test]
fn accessor_outside_provider_is_missing_provider() {
    let owner = Owner::new();
    owner.with(|| {
        assert_eq!(
            try_use_design_system().err(),
            Some(DesignSystemError::MissingProvider { provider: "DesignSystemProvider" })
        );
    });
}

#[test]
#[should_panic(expected = "DesignSystemProvider accessor used outside of its provider")]
fn use_outside_provider_panics() {
    let owner = Owner::new();
    owner.with(|| {
        use_design_system();
    });
}

#[test]
fn accessor_inside_provider_reads_same_store() {
    let owner = Owner::new();
    owner.with(|| {
        let (provided, _) = provided(ProviderOptions::default(), false);
        let found = use_design_system();
        provided.set_density(Density::Compact);
        assert_eq!(found.density(), Density::Compact);
    });
}

// =============================================================
// Preferences
// =============================================================

#[test]
fn defaults_match_fallbacks() {
    let owner = Owner::new();
    owner.with(|| {
        let (context, _) = provided(ProviderOptions::default(), false);
        assert_eq!(
            context.preferences(),
            ThemePreferences { theme: Theme::System, density: Density::Comfortable, radius: Radius::Md }
        );
    });
}

#[test]
fn setters_replace_one_axis() {
    let owner = Owner::new();
    owner.with(|| {
        let (context, _) = provided(ProviderOptions::default(), false);
        context.set_theme(Theme::Dark);
        context.set_theme(Theme::Dark);
        context.set_radius(Radius::Lg);
        assert_eq!(context.theme(), Theme::Dark);
        assert_eq!(context.density(), Density::Comfortable);
        assert_eq!(context.radius(), Radius::Lg);
    });
}

#[test]
fn system_theme_follows_host_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let options = ProviderOptions { default_theme: Some(Theme::System), ..ProviderOptions::default() };
        let (context, scheme) = provided(options, true);
        assert_eq!(context.resolved_theme(), ResolvedTheme::Dark);

        scheme.set_dark(false);
        context.notify_color_scheme_changed();
        assert_eq!(context.resolved_theme(), ResolvedTheme::Light);
        assert_eq!(context.root_attributes()[0], ("data-theme", "light"));
    });
}

#[test]
fn root_properties_follow_density_and_radius() {
    let owner = Owner::new();
    owner.with(|| {
        let (context, _) = provided(ProviderOptions::default(), false);
        context.set_density(Density::Spacious);
        context.set_radius(Radius::None);
        assert_eq!(context.root_properties(), [("--density-scale", "1.25"), ("--radius", "0")]);
    });
}
