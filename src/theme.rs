//! Theme configuration for the Meridian GUI
//!
//! Dark and light palettes tuned for dense financial data. The dark theme
//! is the default; light exists for bright-room use.

use gpui::*;

/// Theme colors for the application
#[allow(dead_code)]
#[derive(Clone)]
pub struct Theme {
    // Backgrounds
    pub background: Hsla,
    pub sidebar_bg: Hsla,
    pub card_bg: Hsla,
    pub card_bg_elevated: Hsla,
    pub hover_bg: Hsla,

    // Text hierarchy
    pub text: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub text_dimmed: Hsla,

    // Borders
    pub border: Hsla,
    pub border_subtle: Hsla,

    // Accent
    pub accent: Hsla,
    pub accent_hover: Hsla,
    pub accent_subtle: Hsla,

    // Semantic
    pub positive: Hsla,
    pub positive_subtle: Hsla,
    pub negative: Hsla,
    pub negative_subtle: Hsla,
    pub warning: Hsla,

    // Charts
    pub chart_line: Hsla,
    pub chart_grid: Hsla,

    // Synthesis / AI output panels
    pub insight_bg: Hsla,
    pub insight_border: Hsla,
    pub insight_heading: Hsla,
}

impl Theme {
    /// Dark theme, the default for terminal-adjacent market work
    pub fn dark() -> Self {
        Self {
            background: hsla(216.0 / 360.0, 0.16, 0.09, 1.0),
            sidebar_bg: hsla(216.0 / 360.0, 0.18, 0.07, 1.0),
            card_bg: hsla(216.0 / 360.0, 0.15, 0.12, 1.0),
            card_bg_elevated: hsla(216.0 / 360.0, 0.15, 0.15, 1.0),
            hover_bg: hsla(216.0 / 360.0, 0.17, 0.17, 1.0),

            text: hsla(0.0, 0.0, 0.96, 1.0),
            text_secondary: hsla(214.0 / 360.0, 0.10, 0.80, 1.0),
            text_muted: hsla(214.0 / 360.0, 0.12, 0.58, 1.0),
            text_dimmed: hsla(214.0 / 360.0, 0.10, 0.43, 1.0),

            border: hsla(216.0 / 360.0, 0.14, 0.21, 1.0),
            border_subtle: hsla(216.0 / 360.0, 0.12, 0.15, 1.0),

            accent: hsla(208.0 / 360.0, 0.90, 0.58, 1.0),
            accent_hover: hsla(208.0 / 360.0, 0.92, 0.65, 1.0),
            accent_subtle: hsla(208.0 / 360.0, 0.80, 0.55, 0.16),

            positive: hsla(150.0 / 360.0, 0.70, 0.46, 1.0),
            positive_subtle: hsla(150.0 / 360.0, 0.62, 0.44, 0.16),
            negative: hsla(5.0 / 360.0, 0.74, 0.56, 1.0),
            negative_subtle: hsla(5.0 / 360.0, 0.68, 0.50, 0.16),
            warning: hsla(41.0 / 360.0, 0.90, 0.52, 1.0),

            chart_line: hsla(208.0 / 360.0, 0.90, 0.58, 1.0),
            chart_grid: hsla(216.0 / 360.0, 0.12, 0.18, 1.0),

            insight_bg: hsla(262.0 / 360.0, 0.40, 0.16, 0.55),
            insight_border: hsla(262.0 / 360.0, 0.50, 0.45, 0.50),
            insight_heading: hsla(262.0 / 360.0, 0.70, 0.75, 1.0),
        }
    }

    /// Light theme variant
    #[allow(dead_code)]
    pub fn light() -> Self {
        Self {
            background: hsla(214.0 / 360.0, 0.12, 0.97, 1.0),
            sidebar_bg: hsla(214.0 / 360.0, 0.10, 0.93, 1.0),
            card_bg: hsla(0.0, 0.0, 1.0, 1.0),
            card_bg_elevated: hsla(214.0 / 360.0, 0.08, 0.98, 1.0),
            hover_bg: hsla(214.0 / 360.0, 0.14, 0.91, 1.0),

            text: hsla(216.0 / 360.0, 0.26, 0.12, 1.0),
            text_secondary: hsla(216.0 / 360.0, 0.16, 0.28, 1.0),
            text_muted: hsla(216.0 / 360.0, 0.10, 0.44, 1.0),
            text_dimmed: hsla(216.0 / 360.0, 0.08, 0.57, 1.0),

            border: hsla(214.0 / 360.0, 0.14, 0.85, 1.0),
            border_subtle: hsla(214.0 / 360.0, 0.10, 0.91, 1.0),

            accent: hsla(208.0 / 360.0, 0.88, 0.46, 1.0),
            accent_hover: hsla(208.0 / 360.0, 0.90, 0.52, 1.0),
            accent_subtle: hsla(208.0 / 360.0, 0.82, 0.46, 0.12),

            positive: hsla(150.0 / 360.0, 0.66, 0.36, 1.0),
            positive_subtle: hsla(150.0 / 360.0, 0.58, 0.36, 0.12),
            negative: hsla(5.0 / 360.0, 0.70, 0.50, 1.0),
            negative_subtle: hsla(5.0 / 360.0, 0.64, 0.50, 0.12),
            warning: hsla(41.0 / 360.0, 0.86, 0.46, 1.0),

            chart_line: hsla(208.0 / 360.0, 0.88, 0.46, 1.0),
            chart_grid: hsla(214.0 / 360.0, 0.12, 0.88, 1.0),

            insight_bg: hsla(262.0 / 360.0, 0.55, 0.96, 1.0),
            insight_border: hsla(262.0 / 360.0, 0.45, 0.80, 1.0),
            insight_heading: hsla(262.0 / 360.0, 0.60, 0.40, 1.0),
        }
    }
}
