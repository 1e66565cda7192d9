//! Chart components for data visualization
//!
//! Div-based line chart used by the macro indicator panel and the stock
//! price history tab. Values are normalized into bar heights; long series
//! are downsampled to a fixed column budget before layout.

use crate::theme::Theme;
use gpui::*;

/// Maximum number of columns a chart will lay out
pub const MAX_COLUMNS: usize = 64;

/// Minimum visible bar height so near-min samples don't vanish
const MIN_BAR: f32 = 3.0;

/// Stride needed to fit `len` samples into at most `max` columns
pub fn downsample_stride(len: usize, max: usize) -> usize {
    if max == 0 || len <= max {
        1
    } else {
        len.div_ceil(max)
    }
}

/// Map raw values onto bar heights in `[MIN_BAR, height]`.
///
/// A flat series renders at half height rather than collapsing to zero.
pub fn normalize_heights(values: &[f64], height: f32) -> Vec<f32> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    values
        .iter()
        .map(|v| {
            if max > min {
                let t = ((v - min) / (max - min)) as f32;
                MIN_BAR + t * (height - MIN_BAR)
            } else {
                height / 2.0
            }
        })
        .collect()
}

/// Line chart over (date, value) samples
pub struct LineChart {
    points: Vec<(String, f64)>,
    height: f32,
}

impl LineChart {
    pub fn new(points: Vec<(String, f64)>) -> Self {
        Self {
            points,
            height: 220.0,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Build the chart element
    pub fn render(self, theme: &Theme) -> Div {
        if self.points.is_empty() {
            return div()
                .h(px(self.height))
                .flex()
                .items_center()
                .justify_center()
                .child(
                    div()
                        .text_size(px(13.0))
                        .text_color(theme.text_dimmed)
                        .child("No data available"),
                );
        }

        let stride = downsample_stride(self.points.len(), MAX_COLUMNS);
        let sampled: Vec<&(String, f64)> = self.points.iter().step_by(stride).collect();
        let values: Vec<f64> = sampled.iter().map(|(_, v)| *v).collect();
        let heights = normalize_heights(&values, self.height - 24.0);

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let first_date = sampled.first().map(|(d, _)| d.clone()).unwrap_or_default();
        let last_date = sampled.last().map(|(d, _)| d.clone()).unwrap_or_default();

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            // Value range
            .child(
                div()
                    .flex()
                    .justify_between()
                    .child(range_label(format!("high {}", format_value(max)), theme))
                    .child(range_label(format!("low {}", format_value(min)), theme)),
            )
            // Bars
            .child(
                div()
                    .h(px(self.height - 24.0))
                    .flex()
                    .items_end()
                    .gap(px(1.0))
                    .border_b_1()
                    .border_color(theme.chart_grid)
                    .children(heights.into_iter().map(|h| {
                        div()
                            .flex_1()
                            .h(px(h))
                            .rounded_t(px(1.0))
                            .bg(theme.chart_line.opacity(0.85))
                    })),
            )
            // Date axis endpoints
            .child(
                div()
                    .flex()
                    .justify_between()
                    .child(range_label(first_date, theme))
                    .child(range_label(last_date, theme)),
            )
    }
}

fn range_label(text: String, theme: &Theme) -> Div {
    div()
        .text_size(px(10.0))
        .text_color(theme.text_dimmed)
        .child(text)
}

fn format_value(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.0}", value)
    } else if value.abs() >= 10.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.3}", value)
    }
}
