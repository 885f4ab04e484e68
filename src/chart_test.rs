use super::*;

fn series(label: &str, color: Option<ChartColor>) -> ChartSeries {
    ChartSeries { label: label.to_owned(), color }
}

#[test]
fn config_without_colors_emits_nothing() {
    let config = ChartConfig::new().with_series("visits", series("Visits", None));
    assert_eq!(chart_style("chart-1", &config), None);
    assert_eq!(chart_style("chart-1", &ChartConfig::new()), None);
}

#[test]
fn fixed_and_themed_colors_render_per_theme() {
    let config = ChartConfig::new()
        .with_series("desktop", series("Desktop", Some(ChartColor::Fixed("#2563eb".into()))))
        .with_series("mobile", series("Mobile", Some(ChartColor::Themed { light: "#60a5fa".into(), dark: "#1e3a8a".into() })))
        .with_series("tablet", series("Tablet", None));

    let css = chart_style("chart-sales", &config).unwrap();
    assert_eq!(
        css,
        "[data-chart=\"chart-sales\"] {\n  --color-desktop: #2563eb;\n  --color-mobile: #60a5fa;\n}\n\
         [data-theme=dark] [data-chart=\"chart-sales\"] {\n  --color-desktop: #2563eb;\n  --color-mobile: #1e3a8a;\n}"
    );
}

#[test]
fn with_series_replaces_in_place() {
    let config = ChartConfig::new()
        .with_series("a", series("A", None))
        .with_series("b", series("B", None))
        .with_series("a", series("A2", None));
    let keys: Vec<&str> = config.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["a", "b"]);
    let labels: Vec<&str> = config.iter().map(|(_, series)| series.label.as_str()).collect();
    assert_eq!(labels, vec!["A2", "B"]);
    assert_eq!(config.len(), 2);
}

#[test]
fn dom_id_strips_colons() {
    assert_eq!(chart_dom_id(":r1:"), "chart-r1");
}

#[test]
fn dom_id_keeps_only_selector_safe_characters() {
    assert_eq!(chart_dom_id("sales by.region 2024"), "chart-salesbyregion2024");
    assert_eq!(chart_dom_id("a_b-c\"]{}"), "chart-a_b-c");
}

#[test]
fn style_block_quotes_the_chart_id() {
    let config = ChartConfig::new().with_series("x", series("X", Some(ChartColor::Fixed("red".into()))));
    let css = chart_style(&chart_dom_id("q3 revenue"), &config).unwrap();
    assert!(css.starts_with("[data-chart=\"chart-q3revenue\"] {"));
}

#[test]
fn chart_color_deserializes_both_shapes() {
    let fixed: ChartColor = serde_json::from_str(r#""red""#).unwrap();
    assert_eq!(fixed.for_theme(ResolvedTheme::Dark), "red");
    let themed: ChartColor = serde_json::from_str(r#"{"light":"white","dark":"black"}"#).unwrap();
    assert_eq!(themed.for_theme(ResolvedTheme::Light), "white");
    assert_eq!(themed.for_theme(ResolvedTheme::Dark), "black");
}
