//! Chart color tokens.
//!
//! Charts reference series colors through CSS custom properties
//! (`var(--color-<series>)`). [`chart_style`] renders the rule blocks that
//! define those properties for one chart container, once per theme, so a
//! themed series switches color with `data-theme` on the document root.

use serde::{Deserialize, Serialize};

use crate::prefs::ResolvedTheme;

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Selector prefix scoping a rule block to one theme.
const THEME_SELECTORS: [(ResolvedTheme, &str); 2] =
    [(ResolvedTheme::Light, ""), (ResolvedTheme::Dark, "[data-theme=dark] ")];

/// Color of a series: one value for every theme, or one per theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartColor {
    Fixed(String),
    Themed { light: String, dark: String },
}

impl ChartColor {
    #[must_use]
    pub fn for_theme(&self, theme: ResolvedTheme) -> &str {
        match (self, theme) {
            (Self::Fixed(color), _) => color,
            (Self::Themed { light, .. }, ResolvedTheme::Light) => light,
            (Self::Themed { dark, .. }, ResolvedTheme::Dark) => dark,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    #[serde(default)]
    pub color: Option<ChartColor>,
}

/// Ordered series configuration for one chart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    series: Vec<(String, ChartSeries)>,
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a series, keeping first-insertion order.
    #[must_use]
    pub fn with_series(mut self, key: impl Into<String>, series: ChartSeries) -> Self {
        let key = key.into();
        match self.series.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = series,
            None => self.series.push((key, series)),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChartSeries)> {
        self.series.iter().map(|(key, series)| (key.as_str(), series))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// DOM id for a chart container. Keeps only `[A-Za-z0-9_-]`, so the id is
/// safe inside the quoted attribute selector of the style block.
#[must_use]
pub fn chart_dom_id(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-')).collect();
    format!("chart-{cleaned}")
}

/// CSS defining `--color-<series>` for `chart_id`, or `None` when no series
/// carries a color.
#[must_use]
pub fn chart_style(chart_id: &str, config: &ChartConfig) -> Option<String> {
    let colored: Vec<(&str, &ChartColor)> =
        config.iter().filter_map(|(key, series)| series.color.as_ref().map(|color| (key, color))).collect();
    if colored.is_empty() {
        return None;
    }

    let blocks: Vec<String> = THEME_SELECTORS
        .iter()
        .map(|(theme, prefix)| {
            let declarations: String = colored
                .iter()
                .map(|(key, color)| format!("  --color-{key}: {};\n", color.for_theme(*theme)))
                .collect();
            format!("{prefix}[data-chart=\"{chart_id}\"] {{\n{declarations}}}")
        })
        .collect();
    Some(blocks.join("\n"))
}
