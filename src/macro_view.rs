//! Macro indicator view
//!
//! FRED indicator catalog grouped by economic role, a reactive series
//! chart, and AI synthesis of the latest values across all groups.

use crate::api::{MacroPoint, MeridianClient};
use crate::app::LoadingState;
use crate::components::charts::LineChart;
use crate::markdown::render_markdown;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Indicator catalog
// =============================================================================

/// A FRED series the dashboard knows how to chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub label: &'static str,
    pub series_id: &'static str,
    pub unit: &'static str,
}

/// Indicator groups, in presentation order. Labels, series ids, and units
/// are part of the synthesis request payload, so they are wire-visible.
pub const INDICATOR_GROUPS: &[(&str, &[Indicator])] = &[
    (
        "1. Leading Economic Indicators (Future Trends)",
        &[
            Indicator { label: "Average Weekly Hours (Manufacturing)", series_id: "AWHMAN", unit: "Hours" },
            Indicator { label: "Initial Jobless Claims", series_id: "ICSA", unit: "Thousands" },
            Indicator { label: "Manufacturers' New Orders", series_id: "AMDMNO-US", unit: "Millions USD" },
            Indicator { label: "Vendor Performance Index (ISM)", series_id: "PMICD", unit: "Index" },
            Indicator { label: "Non-Defense Capital Goods Orders", series_id: "NEWORDER", unit: "Millions USD" },
            Indicator { label: "Building Permits (New Housing)", series_id: "PERMIT", unit: "Units" },
            Indicator { label: "S&P 500 Index (Stock Prices)", series_id: "SP500", unit: "Index" },
            Indicator { label: "Consumer Expectations", series_id: "UMCSENT", unit: "Index" },
            Indicator { label: "Personal Consumption Expenditures", series_id: "PCE", unit: "Billions USD" },
        ],
    ),
    (
        "2. Monetary & Inflation (Policy Focus)",
        &[
            Indicator { label: "Federal Funds Rate (Current)", series_id: "FEDFUNDS", unit: "Percent" },
            Indicator { label: "10-Year Treasury Yield", series_id: "DGS10", unit: "Percent" },
            Indicator { label: "US Core Inflation (CPI)", series_id: "CPILFESL", unit: "Index" },
            Indicator { label: "Inflation, consumer prices for the United States", series_id: "FPCPITOTLZGUSA", unit: "Percent" },
            Indicator { label: "M2 Money Supply", series_id: "M2SL", unit: "Billions USD" },
        ],
    ),
    (
        "3. Lagging Indicators (Past Confirmation)",
        &[
            Indicator { label: "Unemployment Rate", series_id: "UNRATE", unit: "Percent" },
        ],
    ),
];

/// Build the synthesis request payload: group name -> [label, series_id,
/// unit] triples for every indicator in the catalog
pub fn grouped_payload() -> HashMap<String, Vec<[String; 3]>> {
    INDICATOR_GROUPS
        .iter()
        .map(|(group, indicators)| {
            let triples = indicators
                .iter()
                .map(|i| {
                    [
                        i.label.to_string(),
                        i.series_id.to_string(),
                        i.unit.to_string(),
                    ]
                })
                .collect();
            ((*group).to_string(), triples)
        })
        .collect()
}

/// Selectable history windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearRange {
    One,
    Two,
    #[default]
    Five,
    Ten,
    TwentyFive,
    Fifty,
}

impl YearRange {
    pub fn years(&self) -> u32 {
        match self {
            YearRange::One => 1,
            YearRange::Two => 2,
            YearRange::Five => 5,
            YearRange::Ten => 10,
            YearRange::TwentyFive => 25,
            YearRange::Fifty => 50,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            YearRange::One => "1Y",
            YearRange::Two => "2Y",
            YearRange::Five => "5Y",
            YearRange::Ten => "10Y",
            YearRange::TwentyFive => "25Y",
            YearRange::Fifty => "50Y",
        }
    }

    pub fn all() -> &'static [YearRange] {
        &[
            YearRange::One,
            YearRange::Two,
            YearRange::Five,
            YearRange::Ten,
            YearRange::TwentyFive,
            YearRange::Fifty,
        ]
    }
}

const DEFAULT_FOCUS: &str = "Impact of inflation and interest rates on recession risk";

// =============================================================================
// Macro view
// =============================================================================

/// Macro indicator view state
pub struct MacroView {
    theme: Theme,
    api_client: Arc<MeridianClient>,
    focus_handle: FocusHandle,

    group_index: usize,
    indicator_index: usize,
    show_indicator_dropdown: bool,
    year_range: YearRange,
    analysis_focus: String,
    focus_input_active: bool,

    series: LoadingState<Vec<MacroPoint>>,
    synthesis: LoadingState<String>,

    // Stale-response guard: only the latest fetch may apply its result
    fetch_generation: u64,
}

impl MacroView {
    pub fn new(api_client: Arc<MeridianClient>, theme: Theme, cx: &mut Context<Self>) -> Self {
        let mut view = Self {
            theme,
            api_client,
            focus_handle: cx.focus_handle(),
            group_index: 0,
            indicator_index: 0,
            show_indicator_dropdown: false,
            year_range: YearRange::default(),
            analysis_focus: DEFAULT_FOCUS.to_string(),
            focus_input_active: false,
            series: LoadingState::NotStarted,
            synthesis: LoadingState::NotStarted,
            fetch_generation: 0,
        };
        view.load_series(cx);
        view
    }

    pub fn selected_indicator(&self) -> Indicator {
        let (_, indicators) = INDICATOR_GROUPS[self.group_index];
        indicators[self.indicator_index.min(indicators.len() - 1)]
    }

    /// Fetch the selected series. Every call clears prior error state and
    /// invalidates any in-flight fetch.
    pub fn load_series(&mut self, cx: &mut Context<Self>) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.series = LoadingState::Loading;
        cx.notify();

        let client = self.api_client.clone();
        let indicator = self.selected_indicator();
        let years = self.year_range.years();

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let result = client
                .macro_series(indicator.series_id, indicator.label, years)
                .await;

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        if view.fetch_generation != generation {
                            // A newer selection superseded this fetch
                            return;
                        }
                        view.series = match result {
                            Ok(points) => LoadingState::Loaded(points),
                            Err(e) => {
                                log::debug!(
                                    "macro series fetch failed for {}: {}",
                                    indicator.series_id,
                                    e
                                );
                                LoadingState::Error(format!(
                                    "Failed to fetch data for {}",
                                    indicator.label
                                ))
                            }
                        };
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    /// Ask the backend for a narrative conclusion across all groups
    pub fn synthesize(&mut self, cx: &mut Context<Self>) {
        if self.synthesis.is_loading() {
            return;
        }
        self.synthesis = LoadingState::Loading;
        cx.notify();

        let client = self.api_client.clone();
        let focus = self.analysis_focus.clone();

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let result = client.synthesize_macro(grouped_payload(), &focus).await;

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        view.synthesis = match result {
                            Ok(response) => LoadingState::Loaded(response.conclusion),
                            Err(e) => {
                                LoadingState::Error(format!("Error generating synthesis: {}", e))
                            }
                        };
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    fn select_group(&mut self, index: usize, cx: &mut Context<Self>) {
        if self.group_index != index {
            self.group_index = index;
            // Group change resets the indicator to the group's first entry
            self.indicator_index = 0;
            self.show_indicator_dropdown = false;
            self.load_series(cx);
        }
    }

    fn select_indicator(&mut self, index: usize, cx: &mut Context<Self>) {
        self.show_indicator_dropdown = false;
        if self.indicator_index != index {
            self.indicator_index = index;
            self.load_series(cx);
        } else {
            cx.notify();
        }
    }

    fn set_year_range(&mut self, range: YearRange, cx: &mut Context<Self>) {
        if self.year_range != range {
            self.year_range = range;
            self.load_series(cx);
        }
    }

    fn toggle_indicator_dropdown(&mut self, cx: &mut Context<Self>) {
        self.show_indicator_dropdown = !self.show_indicator_dropdown;
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        if !self.focus_input_active {
            return;
        }
        let keystroke = &event.keystroke;
        match keystroke.key.as_str() {
            "backspace" => {
                self.analysis_focus.pop();
            }
            "space" => self.analysis_focus.push(' '),
            "enter" | "escape" => {
                self.focus_input_active = false;
            }
            key if key.chars().count() == 1 => {
                let ch = key.chars().next().unwrap_or(' ');
                if keystroke.modifiers.shift {
                    self.analysis_focus.extend(ch.to_uppercase());
                } else {
                    self.analysis_focus.push(ch);
                }
            }
            _ => return,
        }
        cx.notify();
    }
}

impl Focusable for MacroView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MacroView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("macro-view")
            .size_full()
            .flex()
            .gap(px(20.0))
            .p(px(24.0))
            .overflow_y_scroll()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            // Left column: selection controls
            .child(
                div()
                    .w(px(320.0))
                    .flex()
                    .flex_col()
                    .gap(px(20.0))
                    .child(self.render_controls_card(cx)),
            )
            // Right column: chart + synthesis
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap(px(20.0))
                    .child(self.render_chart_card())
                    .child(self.render_synthesis_card()),
            )
    }
}

impl MacroView {
    // =========================================================================
    // Controls
    // =========================================================================

    fn render_controls_card(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        div()
            .p(px(20.0))
            .rounded(px(12.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border)
            .flex()
            .flex_col()
            .gap(px(20.0))
            .child(
                div()
                    .text_size(px(14.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child("Macroeconomic Indicators (FRED Data)"),
            )
            .child(self.render_group_picker(cx))
            .child(self.render_indicator_picker(cx))
            .child(self.render_year_picker(cx))
            .child(self.render_focus_input(cx))
            .child(self.render_synthesize_button(cx))
    }

    fn render_group_picker(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .child(section_label("Indicator Group", theme))
            .children(INDICATOR_GROUPS.iter().enumerate().map(|(i, (group, _))| {
                let selected = i == self.group_index;
                div()
                    .id(SharedString::from(format!("macro-group-{}", i)))
                    .px(px(10.0))
                    .py(px(8.0))
                    .rounded(px(6.0))
                    .cursor_pointer()
                    .bg(if selected {
                        theme.accent_subtle
                    } else {
                        transparent_black()
                    })
                    .hover(|s| s.bg(theme.hover_bg))
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.select_group(i, cx);
                    }))
                    .flex()
                    .items_center()
                    .gap(px(8.0))
                    .child(
                        div()
                            .size(px(8.0))
                            .rounded_full()
                            .border_1()
                            .border_color(if selected { theme.accent } else { theme.border })
                            .when(selected, |el| el.bg(theme.accent)),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(if selected { theme.text } else { theme.text_secondary })
                            .child((*group).to_string()),
                    )
            }))
    }

    fn render_indicator_picker(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;
        let selected = self.selected_indicator();
        let (_, indicators) = INDICATOR_GROUPS[self.group_index];

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .child(section_label("Choose Indicator", theme))
            .child(
                div()
                    .relative()
                    .child(
                        div()
                            .id("macro-indicator-select")
                            .px(px(12.0))
                            .py(px(9.0))
                            .rounded(px(6.0))
                            .bg(theme.card_bg_elevated)
                            .border_1()
                            .border_color(theme.border)
                            .cursor_pointer()
                            .hover(|s| s.bg(theme.hover_bg))
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.toggle_indicator_dropdown(cx);
                            }))
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .text_color(theme.text)
                                    .child(selected.label),
                            )
                            .child(
                                div()
                                    .text_size(px(10.0))
                                    .text_color(theme.text_dimmed)
                                    .child(if self.show_indicator_dropdown { "^" } else { "v" }),
                            ),
                    )
                    .when(self.show_indicator_dropdown, |el| {
                        el.child(
                            div()
                                .absolute()
                                .top(px(40.0))
                                .left(px(0.0))
                                .right(px(0.0))
                                .rounded(px(6.0))
                                .bg(theme.card_bg_elevated)
                                .border_1()
                                .border_color(theme.border)
                                .shadow_lg()
                                .overflow_hidden()
                                .children(indicators.iter().enumerate().map(|(i, indicator)| {
                                    let is_selected = i == self.indicator_index;
                                    div()
                                        .id(SharedString::from(format!("macro-indicator-{}", i)))
                                        .px(px(12.0))
                                        .py(px(8.0))
                                        .cursor_pointer()
                                        .bg(if is_selected {
                                            theme.accent_subtle
                                        } else {
                                            transparent_black()
                                        })
                                        .hover(|s| s.bg(theme.hover_bg))
                                        .on_click(cx.listener(move |this, _, _, cx| {
                                            this.select_indicator(i, cx);
                                        }))
                                        .flex()
                                        .items_center()
                                        .justify_between()
                                        .child(
                                            div()
                                                .text_size(px(12.0))
                                                .text_color(if is_selected {
                                                    theme.accent
                                                } else {
                                                    theme.text
                                                })
                                                .child(indicator.label),
                                        )
                                        .child(
                                            div()
                                                .text_size(px(10.0))
                                                .text_color(theme.text_dimmed)
                                                .child(indicator.series_id),
                                        )
                                })),
                        )
                    }),
            )
    }

    fn render_year_picker(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .child(section_label(
                &format!("History: {} Years", self.year_range.years()),
                theme,
            ))
            .child(
                div()
                    .flex()
                    .gap(px(4.0))
                    .children(YearRange::all().iter().map(|range| {
                        let range = *range;
                        let selected = range == self.year_range;
                        div()
                            .id(SharedString::from(format!("macro-years-{}", range.label())))
                            .px(px(10.0))
                            .py(px(6.0))
                            .rounded(px(6.0))
                            .cursor_pointer()
                            .bg(if selected {
                                theme.accent_subtle
                            } else {
                                theme.card_bg_elevated
                            })
                            .border_1()
                            .border_color(if selected { theme.accent } else { theme.border })
                            .hover(|s| s.bg(theme.hover_bg))
                            .on_click(cx.listener(move |this, _, _, cx| {
                                this.set_year_range(range, cx);
                            }))
                            .child(
                                div()
                                    .text_size(px(11.0))
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(if selected { theme.accent } else { theme.text_muted })
                                    .child(range.label()),
                            )
                    })),
            )
    }

    fn render_focus_input(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;
        let active = self.focus_input_active;

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .child(section_label("AI Analysis Focus", theme))
            .child(
                div()
                    .id("macro-focus-input")
                    .min_h(px(36.0))
                    .px(px(12.0))
                    .py(px(8.0))
                    .rounded(px(6.0))
                    .bg(theme.card_bg_elevated)
                    .border_1()
                    .border_color(if active { theme.accent } else { theme.border })
                    .cursor_text()
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.focus_input_active = true;
                        window.focus(&this.focus_handle);
                        cx.notify();
                    }))
                    .child(
                        div()
                            .text_size(px(12.0))
                            .line_height(px(18.0))
                            .text_color(theme.text)
                            .child(self.analysis_focus.clone()),
                    ),
            )
    }

    fn render_synthesize_button(&self, cx: &mut Context<Self>) -> Stateful<Div> {
        let theme = &self.theme;
        let loading = self.synthesis.is_loading();

        div()
            .id("macro-synthesize")
            .h(px(38.0))
            .rounded(px(6.0))
            .bg(if loading {
                theme.insight_heading.opacity(0.4)
            } else {
                theme.insight_heading.opacity(0.8)
            })
            .cursor_pointer()
            .hover(|s| s.bg(theme.insight_heading))
            .on_click(cx.listener(|this, _, _, cx| {
                this.synthesize(cx);
            }))
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .text_size(px(13.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(hsla(0.0, 0.0, 1.0, 0.95))
                    .child(if loading {
                        "Analyzing..."
                    } else {
                        "Synthesize Conclusion"
                    }),
            )
    }

    // =========================================================================
    // Chart + synthesis
    // =========================================================================

    fn render_chart_card(&self) -> Div {
        let theme = &self.theme;
        let indicator = self.selected_indicator();

        div()
            .p(px(20.0))
            .rounded(px(12.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border)
            .flex()
            .flex_col()
            .gap(px(16.0))
            .child(
                div()
                    .flex()
                    .justify_center()
                    .text_size(px(14.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.text)
                    .child(format!("{} ({})", indicator.label, indicator.unit)),
            )
            .child(match &self.series {
                LoadingState::NotStarted | LoadingState::Loading => div()
                    .h(px(260.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(theme.text_dimmed)
                            .child("Loading chart data..."),
                    ),
                LoadingState::Error(e) => div()
                    .h(px(260.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(theme.negative)
                            .child(e.clone()),
                    ),
                LoadingState::Loaded(points) => {
                    let samples: Vec<(String, f64)> = points
                        .iter()
                        .map(|p| (p.date.clone(), p.value))
                        .collect();
                    LineChart::new(samples).height(260.0).render(theme)
                }
            })
    }

    fn render_synthesis_card(&self) -> Div {
        let theme = &self.theme;

        match &self.synthesis {
            LoadingState::NotStarted => div(),
            LoadingState::Loading => div()
                .p(px(20.0))
                .rounded(px(12.0))
                .bg(theme.card_bg)
                .border_1()
                .border_color(theme.border)
                .flex()
                .justify_center()
                .child(
                    div()
                        .text_size(px(13.0))
                        .text_color(theme.text_dimmed)
                        .child("Gathering latest values and synthesizing..."),
                ),
            LoadingState::Error(e) => div()
                .p(px(16.0))
                .rounded(px(12.0))
                .bg(theme.negative_subtle)
                .border_1()
                .border_color(theme.negative.opacity(0.4))
                .text_size(px(13.0))
                .text_color(theme.negative)
                .child(e.clone()),
            LoadingState::Loaded(conclusion) => div()
                .p(px(20.0))
                .rounded(px(12.0))
                .bg(theme.insight_bg)
                .border_1()
                .border_color(theme.insight_border)
                .flex()
                .flex_col()
                .gap(px(10.0))
                .child(
                    div()
                        .text_size(px(14.0))
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme.insight_heading)
                        .child("Economic Synthesis & Outlook"),
                )
                .child(render_markdown(conclusion, theme)),
        }
    }
}

fn section_label(text: &str, theme: &Theme) -> Div {
    div()
        .text_size(px(12.0))
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(theme.text_secondary)
        .child(text.to_string())
}
