//! Chart container and a minimal bar chart driven by color tokens.
//!
//! DESIGN
//! ======
//! `ChartContainer` scopes `--color-<series>` custom properties to one
//! chart via `data-chart`; series inside it reference `var(--color-key)` and
//! pick up the dark palette from `[data-theme=dark]` on the root.

use design_system::chart::{ChartConfig, chart_dom_id, chart_style};
use leptos::prelude::*;

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Wraps a chart, emitting its color-token style block.
#[component]
pub fn ChartContainer(#[prop(into)] id: String, config: ChartConfig, children: Children) -> impl IntoView {
    let chart_id = chart_dom_id(&id);
    let style = chart_style(&chart_id, &config);

    view! {
        <div class="chart" data-chart=chart_id.clone()>
            {style.map(|css| view! { <style inner_html=css></style> })}
            {children()}
        </div>
    }
}

/// Legend listing every configured series with its swatch.
#[component]
pub fn ChartLegend(config: ChartConfig) -> impl IntoView {
    let items = config
        .iter()
        .map(|(key, series)| {
            let swatch = format!("background: var(--color-{key})");
            let label = series.label.clone();
            view! {
                <li class="chart-legend__item">
                    <span class="chart-legend__swatch" style=swatch></span>
                    {label}
                </li>
            }
        })
        .collect_view();

    view! { <ul class="chart-legend">{items}</ul> }
}

/// Bar heights as percentages of the largest value. Negative values clamp
/// to zero; an all-zero series yields zero heights.
pub fn bar_heights(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v.max(0.0) / max) * 100.0).collect()
}

/// Vertical bars for one series, colored by its token.
#[component]
pub fn ChartBars(
    #[prop(into)] series_key: String,
    labels: Vec<String>,
    values: Vec<f64>,
) -> impl IntoView {
    let heights = bar_heights(&values);
    let bars = labels
        .into_iter()
        .zip(heights)
        .zip(values)
        .map(|((label, height), value)| {
            let style = format!("height: {height:.1}%; background: var(--color-{series_key})");
            view! {
                <div class="chart-bars__bar" title=format!("{label}: {value}")>
                    <div class="chart-bars__fill" style=style></div>
                    <span class="chart-bars__label">{label}</span>
                </div>
            }
        })
        .collect_view();

    view! { <div class="chart-bars">{bars}</div> }
}
