//! Single-stock analysis view
//!
//! Ticker search drives three backend fetches: overview and one-year
//! history are issued together and must both succeed; the financials
//! fetch that follows is best-effort and never fails the search.

use crate::api::{ApiError, FinancialPeriod, MeridianClient, PricePoint, StockOverview};
use crate::components::charts::LineChart;
use crate::components::tables::{format_compact, FinancialsTable};
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;

/// User-facing message for a failed overview/history pair
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch stock data. Please check the ticker.";

/// Shown in the financials tab when the statement came back empty
pub const NO_FINANCIALS_MESSAGE: &str = "No financial data available from this source.";

/// Combine the overview/history pair per the fail-together policy: a
/// failure of either discards both and surfaces one generic message.
pub fn search_outcome(
    overview: Result<StockOverview, ApiError>,
    history: Result<Vec<PricePoint>, ApiError>,
) -> Result<(StockOverview, Vec<PricePoint>), String> {
    match (overview, history) {
        (Ok(overview), Ok(history)) => Ok((overview, history)),
        _ => Err(SEARCH_FAILED_MESSAGE.to_string()),
    }
}

/// Normalize raw ticker input for the request path
pub fn normalize_ticker(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Header price, e.g. "$190.00"; em dash when the provider had none
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:.2}", p),
        None => "—".to_string(),
    }
}

/// Tabs under the stock header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockTab {
    #[default]
    Overview,
    Charts,
    Financials,
}

impl StockTab {
    pub fn label(&self) -> &'static str {
        match self {
            StockTab::Overview => "Overview",
            StockTab::Charts => "Charts",
            StockTab::Financials => "Financials",
        }
    }

    pub fn all() -> &'static [StockTab] {
        &[StockTab::Overview, StockTab::Charts, StockTab::Financials]
    }
}

/// Financial statement selector inside the Financials tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementType {
    #[default]
    Income,
    BalanceSheet,
    CashFlow,
}

impl StatementType {
    /// Backend path segment
    pub fn path(&self) -> &'static str {
        match self {
            StatementType::Income => "income",
            StatementType::BalanceSheet => "balance_sheet",
            StatementType::CashFlow => "cash_flow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatementType::Income => "Income Statement",
            StatementType::BalanceSheet => "Balance Sheet",
            StatementType::CashFlow => "Cash Flow",
        }
    }

    /// Headline metrics shown in the table for this statement
    pub fn key_metrics(&self) -> &'static [&'static str] {
        match self {
            StatementType::Income => &[
                "Total Revenue",
                "Net Income",
                "Operating Income",
                "Gross Profit",
            ],
            StatementType::BalanceSheet => &[
                "Total Assets",
                "Total Liabilities Net Minority Interest",
                "Stockholders Equity",
                "Cash And Cash Equivalents",
            ],
            StatementType::CashFlow => &[
                "Operating Cash Flow",
                "Investing Cash Flow",
                "Financing Cash Flow",
                "Free Cash Flow",
            ],
        }
    }

    pub fn all() -> &'static [StatementType] {
        &[
            StatementType::Income,
            StatementType::BalanceSheet,
            StatementType::CashFlow,
        ]
    }
}

/// Single-stock view state
pub struct StockView {
    theme: Theme,
    api_client: Arc<MeridianClient>,
    focus_handle: FocusHandle,

    ticker_input: String,
    loading: bool,
    overview: Option<StockOverview>,
    history: Vec<PricePoint>,
    financials: Vec<FinancialPeriod>,
    error: Option<String>,
    active_tab: StockTab,
    statement_type: StatementType,

    // Stale-response guard: a search bumps the generation; completions
    // carrying an older generation are discarded
    search_generation: u64,
}

impl StockView {
    pub fn new(api_client: Arc<MeridianClient>, theme: Theme, cx: &mut Context<Self>) -> Self {
        Self {
            theme,
            api_client,
            focus_handle: cx.focus_handle(),
            ticker_input: "AAPL".to_string(),
            loading: false,
            overview: None,
            history: Vec::new(),
            financials: Vec::new(),
            error: None,
            active_tab: StockTab::default(),
            statement_type: StatementType::default(),
            search_generation: 0,
        }
    }

    /// Run the search orchestration for the current ticker input
    pub fn search(&mut self, cx: &mut Context<Self>) {
        let ticker = normalize_ticker(&self.ticker_input);
        if ticker.is_empty() {
            return;
        }

        self.search_generation += 1;
        let generation = self.search_generation;

        // Reset dependent state before anything is in flight
        self.loading = true;
        self.error = None;
        self.overview = None;
        self.history.clear();
        self.financials.clear();
        cx.notify();

        let client = self.api_client.clone();
        let statement = self.statement_type;

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            // Overview and history travel together; either failure fails
            // the search as a whole.
            let (overview, history) = futures::join!(
                client.stock_overview(&ticker),
                client.stock_history(&ticker, "1y", "1d"),
            );

            let pair = match search_outcome(overview, history) {
                Ok(pair) => pair,
                Err(message) => {
                    let _ = cx.update(|cx| {
                        if let Some(entity) = this.upgrade() {
                            entity.update(cx, |view, cx| {
                                if view.search_generation != generation {
                                    return;
                                }
                                view.error = Some(message);
                                view.loading = false;
                                cx.notify();
                            });
                        }
                    });
                    return;
                }
            };

            // Header and chart render as soon as the pair lands; the
            // financials fetch below fills its tab in afterwards.
            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        if view.search_generation != generation {
                            return;
                        }
                        let (overview, history) = pair;
                        view.overview = Some(overview);
                        view.history = history;
                        cx.notify();
                    });
                }
            });

            // Best-effort: a financials failure is logged and leaves the
            // table empty, never a user-visible error.
            let financials = match client
                .stock_financials(&ticker, statement.path(), "yahoo")
                .await
            {
                Ok(periods) => periods,
                Err(e) => {
                    log::warn!("financials fetch failed for {}: {}", ticker, e);
                    Vec::new()
                }
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        if view.search_generation != generation {
                            return;
                        }
                        view.financials = financials;
                        view.loading = false;
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    /// Refetch financials alone when the statement selector changes.
    /// Same best-effort policy as the search-time fetch.
    fn select_statement(&mut self, statement: StatementType, cx: &mut Context<Self>) {
        if self.statement_type == statement {
            return;
        }
        self.statement_type = statement;
        self.financials.clear();
        cx.notify();

        let Some(overview) = &self.overview else {
            return;
        };
        let ticker = overview.ticker.clone();
        let generation = self.search_generation;
        let client = self.api_client.clone();

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let financials = match client
                .stock_financials(&ticker, statement.path(), "yahoo")
                .await
            {
                Ok(periods) => periods,
                Err(e) => {
                    log::warn!("financials fetch failed for {}: {}", ticker, e);
                    Vec::new()
                }
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        if view.search_generation != generation
                            || view.statement_type != statement
                        {
                            return;
                        }
                        view.financials = financials;
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    fn set_active_tab(&mut self, tab: StockTab, cx: &mut Context<Self>) {
        self.active_tab = tab;
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        match keystroke.key.as_str() {
            "backspace" => {
                self.ticker_input.pop();
            }
            "enter" => {
                self.search(cx);
                return;
            }
            key if key.chars().count() == 1 => {
                // Tickers are upper-case alphanumerics plus the odd dot
                // or dash (BRK.B, BF-B)
                let ch = key.chars().next().unwrap_or(' ');
                if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
                    self.ticker_input.extend(ch.to_uppercase());
                }
            }
            _ => return,
        }
        cx.notify();
    }
}

impl Focusable for StockView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for StockView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();

        div()
            .id("stock-view")
            .size_full()
            .flex()
            .flex_col()
            .gap(px(20.0))
            .p(px(24.0))
            .overflow_y_scroll()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            .child(self.render_search_bar(cx))
            .when_some(self.error.clone(), |el, message| {
                el.child(
                    div()
                        .p(px(14.0))
                        .rounded(px(8.0))
                        .bg(theme.negative_subtle)
                        .border_1()
                        .border_color(theme.negative.opacity(0.4))
                        .text_size(px(13.0))
                        .text_color(theme.negative)
                        .child(message),
                )
            })
            .when(self.overview.is_some(), |el| {
                el.child(self.render_stock_content(cx))
            })
    }
}

impl StockView {
    fn render_search_bar(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        div()
            .p(px(16.0))
            .rounded(px(12.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border)
            .flex()
            .gap(px(12.0))
            .child(
                div()
                    .id("stock-ticker-input")
                    .flex_1()
                    .h(px(42.0))
                    .px(px(14.0))
                    .rounded(px(8.0))
                    .bg(theme.card_bg_elevated)
                    .border_1()
                    .border_color(theme.border)
                    .cursor_text()
                    .on_click(cx.listener(|this, _, window, cx| {
                        window.focus(&this.focus_handle);
                        cx.notify();
                    }))
                    .flex()
                    .items_center()
                    .child(
                        div()
                            .text_size(px(16.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(if self.ticker_input.is_empty() {
                                theme.text_dimmed
                            } else {
                                theme.text
                            })
                            .child(if self.ticker_input.is_empty() {
                                "Enter Ticker (e.g. MSFT, NVDA)".to_string()
                            } else {
                                self.ticker_input.clone()
                            }),
                    ),
            )
            .child(
                div()
                    .id("stock-search")
                    .w(px(110.0))
                    .h(px(42.0))
                    .rounded(px(8.0))
                    .bg(if self.loading {
                        theme.accent.opacity(0.5)
                    } else {
                        theme.accent
                    })
                    .cursor_pointer()
                    .hover(|s| s.bg(theme.accent_hover))
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.search(cx);
                    }))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(hsla(0.0, 0.0, 1.0, 0.95))
                            .child(if self.loading { "Loading..." } else { "Search" }),
                    ),
            )
    }

    fn render_stock_content(&self, cx: &mut Context<Self>) -> Div {
        let theme = self.theme.clone();
        let Some(overview) = self.overview.clone() else {
            return div();
        };

        div()
            .flex()
            .flex_col()
            .gap(px(20.0))
            .child(self.render_header(&overview, &theme))
            .child(self.render_kpi_row(&overview, &theme))
            .child(self.render_tab_bar(cx))
            .child(match self.active_tab {
                StockTab::Overview => self.render_overview_tab(&overview, &theme),
                StockTab::Charts => self.render_charts_tab(&theme),
                StockTab::Financials => self.render_financials_tab(cx),
            })
    }

    fn render_header(&self, overview: &StockOverview, theme: &Theme) -> Div {
        let sector_line = match (&overview.sector, &overview.industry) {
            (Some(sector), Some(industry)) => format!("{} • {}", sector, industry),
            (Some(sector), None) => sector.clone(),
            (None, Some(industry)) => industry.clone(),
            (None, None) => String::new(),
        };

        div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(4.0))
                    .child(
                        div()
                            .text_size(px(24.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.text)
                            .child(overview.headline()),
                    )
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(theme.text_muted)
                            .child(sector_line),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_end()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_size(px(24.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.accent)
                            .child(format_price(overview.price)),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(theme.text_muted)
                            .child(overview.currency.clone().unwrap_or_else(|| "USD".to_string())),
                    ),
            )
    }

    fn render_kpi_row(&self, overview: &StockOverview, theme: &Theme) -> Div {
        let market_cap = overview
            .market_cap
            .map(format_compact)
            .unwrap_or_else(|| "—".to_string());
        let pe = overview
            .pe_ratio
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "—".to_string());
        let div_yield = overview
            .dividend_yield
            .map(|v| format!("{:.2}%", v * 100.0))
            .unwrap_or_else(|| "—".to_string());
        let high_52w = overview
            .fifty_two_week_high
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "—".to_string());
        let low_52w = overview
            .fifty_two_week_low
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "—".to_string());

        div()
            .flex()
            .gap(px(12.0))
            .child(kpi_card("Market Cap", market_cap, theme))
            .child(kpi_card("P/E Ratio", pe, theme))
            .child(kpi_card("Div Yield", div_yield, theme))
            .child(kpi_card("52W High", high_52w, theme))
            .child(kpi_card("52W Low", low_52w, theme))
    }

    fn render_tab_bar(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        div()
            .flex()
            .gap(px(24.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .children(StockTab::all().iter().map(|tab| {
                let tab = *tab;
                let active = tab == self.active_tab;
                div()
                    .id(SharedString::from(format!("stock-tab-{}", tab.label())))
                    .pb(px(10.0))
                    .cursor_pointer()
                    .border_b_1()
                    .border_color(if active {
                        theme.accent
                    } else {
                        transparent_black()
                    })
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.set_active_tab(tab, cx);
                    }))
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(if active { theme.accent } else { theme.text_muted })
                            .child(tab.label()),
                    )
            }))
    }

    fn render_overview_tab(&self, overview: &StockOverview, theme: &Theme) -> Div {
        div()
            .flex()
            .flex_col()
            .gap(px(12.0))
            .child(
                div()
                    .text_size(px(15.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child("Business Summary"),
            )
            .child(
                div()
                    .text_size(px(13.0))
                    .line_height(px(21.0))
                    .text_color(theme.text_secondary)
                    .child(
                        overview
                            .description
                            .clone()
                            .unwrap_or_else(|| "No description available.".to_string()),
                    ),
            )
            .when_some(overview.website.clone(), |el, website| {
                el.child(
                    div()
                        .text_size(px(12.0))
                        .text_color(theme.accent)
                        .child(website),
                )
            })
    }

    fn render_charts_tab(&self, theme: &Theme) -> Div {
        let samples: Vec<(String, f64)> = self
            .history
            .iter()
            .map(|p| (p.date.clone(), p.close))
            .collect();

        div()
            .p(px(20.0))
            .rounded(px(12.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border)
            .child(LineChart::new(samples).height(320.0).render(theme))
    }

    fn render_financials_tab(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .gap(px(14.0))
            // Statement selector
            .child(
                div()
                    .flex()
                    .gap(px(6.0))
                    .children(StatementType::all().iter().map(|statement| {
                        let statement = *statement;
                        let selected = statement == self.statement_type;
                        div()
                            .id(SharedString::from(format!(
                                "stock-statement-{}",
                                statement.path()
                            )))
                            .px(px(12.0))
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
                                this.select_statement(statement, cx);
                            }))
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .text_color(if selected {
                                        theme.accent
                                    } else {
                                        theme.text_muted
                                    })
                                    .child(statement.label()),
                            )
                    })),
            )
            .child(if self.financials.is_empty() {
                div()
                    .py(px(32.0))
                    .flex()
                    .justify_center()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(theme.text_dimmed)
                            .child(NO_FINANCIALS_MESSAGE),
                    )
            } else {
                FinancialsTable::new(&self.financials, self.statement_type.key_metrics())
                    .render(theme)
            })
    }
}

fn kpi_card(label: &str, value: String, theme: &Theme) -> Div {
    div()
        .flex_1()
        .p(px(14.0))
        .rounded(px(10.0))
        .bg(theme.card_bg)
        .border_1()
        .border_color(theme.border)
        .flex()
        .flex_col()
        .gap(px(6.0))
        .child(
            div()
                .text_size(px(11.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(theme.text_muted)
                .child(label.to_string()),
        )
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::BOLD)
                .text_color(theme.text)
                .child(value),
        )
}
