//! Table components for data display
//!
//! Financial-statement table: metrics down the side, reporting periods
//! across the top, newest first as delivered by the backend.

use crate::api::FinancialPeriod;
use crate::theme::Theme;
use gpui::*;

/// How many reporting periods the table shows
pub const MAX_PERIODS: usize = 5;

/// Format a large value into a compact human form (1.23T / 4.56B / 7.89M)
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else {
        format!("{:.0}", value)
    }
}

/// Financial statement table over a fixed metric list
pub struct FinancialsTable<'a> {
    periods: &'a [FinancialPeriod],
    metrics: &'a [&'a str],
}

impl<'a> FinancialsTable<'a> {
    pub fn new(periods: &'a [FinancialPeriod], metrics: &'a [&'a str]) -> Self {
        Self { periods, metrics }
    }

    pub fn render(self, theme: &Theme) -> Div {
        let shown: Vec<&FinancialPeriod> = self.periods.iter().take(MAX_PERIODS).collect();

        div()
            .flex()
            .flex_col()
            .rounded(px(8.0))
            .border_1()
            .border_color(theme.border)
            .overflow_hidden()
            // Header row: metric column + period dates
            .child(
                div()
                    .flex()
                    .bg(theme.card_bg_elevated)
                    .border_b_1()
                    .border_color(theme.border)
                    .child(header_cell("Metric".to_string(), 180.0, theme))
                    .children(
                        shown
                            .iter()
                            .map(|p| header_cell(p.date.clone(), 120.0, theme)),
                    ),
            )
            // One row per metric
            .children(self.metrics.iter().enumerate().map(|(i, metric)| {
                let row = div()
                    .flex()
                    .child(
                        div()
                            .w(px(180.0))
                            .px(px(12.0))
                            .py(px(10.0))
                            .text_size(px(12.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.text_secondary)
                            .child(metric.to_string()),
                    )
                    .children(shown.iter().map(|p| {
                        let text = p
                            .metric(metric)
                            .map(format_compact)
                            .unwrap_or_else(|| "—".to_string());
                        div()
                            .w(px(120.0))
                            .px(px(12.0))
                            .py(px(10.0))
                            .text_size(px(12.0))
                            .text_color(theme.text)
                            .child(text)
                    }));

                if i % 2 == 1 {
                    row.bg(theme.card_bg_elevated.opacity(0.5))
                } else {
                    row
                }
            }))
    }
}

fn header_cell(text: String, width: f32, theme: &Theme) -> Div {
    div()
        .w(px(width))
        .px(px(12.0))
        .py(px(10.0))
        .text_size(px(11.0))
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(theme.text_muted)
        .child(text)
}
