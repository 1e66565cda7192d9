//! Daily briefing view
//!
//! Collects a list of news URLs and a focus topic, asks the backend to
//! scrape and summarize them, and renders one summary card per source.

use crate::api::MeridianClient;
use crate::app::LoadingState;
use crate::markdown::render_markdown;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::collections::HashMap;
use std::sync::Arc;

const DEFAULT_URLS: &str = "https://www.cnbc.com/market-insider/\nhttps://finance.yahoo.com/topic/stock-market-news/";
const DEFAULT_TOPIC: &str = "Market Open & Key Movers";

/// Which input currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsField {
    #[default]
    Urls,
    Topic,
}

/// A generated briefing: backend timestamp plus per-source summaries in
/// the order the URLs were requested
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Briefing {
    pub timestamp: Option<String>,
    pub items: Vec<(String, String)>,
}

impl Briefing {
    /// Reassemble the backend's flat URL->text map into request order.
    /// The `"timestamp"` entry is pulled out; URLs the backend skipped
    /// are dropped.
    pub fn from_response(requested: &[String], mut map: HashMap<String, String>) -> Self {
        let timestamp = map.remove("timestamp");
        let items = requested
            .iter()
            .filter_map(|url| map.remove(url).map(|summary| (url.clone(), summary)))
            .collect();

        Self { timestamp, items }
    }
}

/// Split the URL textarea into request-ready entries: trimmed, blanks
/// dropped, duplicates dropped, order preserved.
pub fn parse_url_lines(input: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for line in input.lines() {
        let url = line.trim();
        if url.is_empty() || seen.iter().any(|s| s == url) {
            continue;
        }
        seen.push(url.to_string());
    }
    seen
}

/// Short display name for a source URL, e.g. "CNBC" or "FINANCE.YAHOO"
pub fn source_name(url: &str) -> String {
    let stripped = url
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let host = stripped.split('/').next().unwrap_or("");
    let host = host.trim_start_matches("www.");

    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() > 1 {
        parts[..parts.len() - 1].join(".").to_uppercase()
    } else if host.is_empty() {
        "SOURCE".to_string()
    } else {
        host.to_uppercase()
    }
}

/// Daily briefing view state
pub struct NewsView {
    theme: Theme,
    api_client: Arc<MeridianClient>,
    focus_handle: FocusHandle,
    urls_input: String,
    topic_input: String,
    focused_field: NewsField,
    briefing: LoadingState<Briefing>,
}

impl NewsView {
    pub fn new(api_client: Arc<MeridianClient>, theme: Theme, cx: &mut Context<Self>) -> Self {
        Self {
            theme,
            api_client,
            focus_handle: cx.focus_handle(),
            urls_input: DEFAULT_URLS.to_string(),
            topic_input: DEFAULT_TOPIC.to_string(),
            focused_field: NewsField::default(),
            briefing: LoadingState::NotStarted,
        }
    }

    /// Kick off a briefing generation. One request; its outcome replaces
    /// the previous briefing wholesale.
    pub fn generate(&mut self, cx: &mut Context<Self>) {
        if self.briefing.is_loading() {
            return;
        }
        let urls = parse_url_lines(&self.urls_input);
        if urls.is_empty() {
            return;
        }

        self.briefing = LoadingState::Loading;
        cx.notify();

        let client = self.api_client.clone();
        let topic = self.topic_input.clone();

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let result = client.news_summary(&urls, &topic).await;

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        view.briefing = match result {
                            Ok(map) => LoadingState::Loaded(Briefing::from_response(&urls, map)),
                            Err(e) => LoadingState::Error(e.to_string()),
                        };
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    fn focus_field(&mut self, field: NewsField, window: &mut Window, cx: &mut Context<Self>) {
        self.focused_field = field;
        window.focus(&self.focus_handle);
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let target = match self.focused_field {
            NewsField::Urls => &mut self.urls_input,
            NewsField::Topic => &mut self.topic_input,
        };

        match keystroke.key.as_str() {
            "backspace" => {
                target.pop();
            }
            "space" => target.push(' '),
            "enter" => match self.focused_field {
                NewsField::Urls => self.urls_input.push('\n'),
                NewsField::Topic => {
                    self.generate(cx);
                    return;
                }
            },
            "tab" => {
                self.focused_field = match self.focused_field {
                    NewsField::Urls => NewsField::Topic,
                    NewsField::Topic => NewsField::Urls,
                };
            }
            key if key.chars().count() == 1 => {
                let ch = key.chars().next().unwrap_or(' ');
                if keystroke.modifiers.shift {
                    target.extend(ch.to_uppercase());
                } else {
                    target.push(ch);
                }
            }
            _ => return,
        }
        cx.notify();
    }
}

impl Focusable for NewsView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for NewsView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();

        div()
            .id("news-view")
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
            .child(self.render_config_card(cx))
            .child(self.render_results(&theme))
    }
}

impl NewsView {
    fn render_config_card(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;
        let loading = self.briefing.is_loading();

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
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_size(px(16.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.text)
                            .child("Daily Market Briefing"),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(theme.text_muted)
                            .child("Configure news sources and focus topic"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap(px(16.0))
                    .child(self.render_urls_box(cx))
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap(px(12.0))
                            .child(self.render_topic_box(cx))
                            .child(self.render_generate_button(loading, cx)),
                    ),
            )
    }

    fn render_urls_box(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;
        let focused = self.focused_field == NewsField::Urls;

        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .child(field_label("News URLs (one per line)", theme))
            .child(
                div()
                    .id("news-urls-input")
                    .min_h(px(96.0))
                    .px(px(12.0))
                    .py(px(8.0))
                    .rounded(px(6.0))
                    .bg(theme.card_bg_elevated)
                    .border_1()
                    .border_color(if focused { theme.accent } else { theme.border })
                    .cursor_text()
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.focus_field(NewsField::Urls, window, cx);
                    }))
                    .flex()
                    .flex_col()
                    .children(self.urls_input.split('\n').map(|line| {
                        div()
                            .text_size(px(12.0))
                            .line_height(px(18.0))
                            .text_color(theme.text)
                            .child(line.to_string())
                    })),
            )
    }

    fn render_topic_box(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;
        let focused = self.focused_field == NewsField::Topic;

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .child(field_label("Focus Topic", theme))
            .child(
                div()
                    .id("news-topic-input")
                    .h(px(36.0))
                    .px(px(12.0))
                    .rounded(px(6.0))
                    .bg(theme.card_bg_elevated)
                    .border_1()
                    .border_color(if focused { theme.accent } else { theme.border })
                    .cursor_text()
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.focus_field(NewsField::Topic, window, cx);
                    }))
                    .flex()
                    .items_center()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(theme.text)
                            .child(self.topic_input.clone()),
                    ),
            )
    }

    fn render_generate_button(&self, loading: bool, cx: &mut Context<Self>) -> Stateful<Div> {
        let theme = &self.theme;

        div()
            .id("news-generate")
            .h(px(38.0))
            .rounded(px(6.0))
            .bg(if loading {
                theme.accent.opacity(0.5)
            } else {
                theme.accent
            })
            .cursor_pointer()
            .hover(|s| s.bg(theme.accent_hover))
            .on_click(cx.listener(|this, _, _, cx| {
                this.generate(cx);
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
                        "Generate Briefing"
                    }),
            )
    }

    fn render_results(&self, theme: &Theme) -> Div {
        match &self.briefing {
            LoadingState::NotStarted => div(),
            LoadingState::Loading => div()
                .py(px(40.0))
                .flex()
                .justify_center()
                .child(
                    div()
                        .text_size(px(13.0))
                        .text_color(theme.text_dimmed)
                        .child("Reading sources and summarizing..."),
                ),
            LoadingState::Error(e) => div()
                .p(px(16.0))
                .rounded(px(8.0))
                .bg(theme.negative_subtle)
                .border_1()
                .border_color(theme.negative.opacity(0.4))
                .text_size(px(13.0))
                .text_color(theme.negative)
                .child(format!("Error: {}", e)),
            LoadingState::Loaded(briefing) => {
                let cards: Vec<Div> = briefing
                    .items
                    .iter()
                    .map(|(url, summary)| self.render_summary_card(url, summary, theme))
                    .collect();

                div()
                    .flex()
                    .flex_col()
                    .gap(px(10.0))
                    .when_some(briefing.timestamp.clone(), |el, ts| {
                        el.child(
                            div()
                                .flex()
                                .justify_end()
                                .text_size(px(11.0))
                                .text_color(theme.text_dimmed)
                                .child(format!("Last updated: {}", ts)),
                        )
                    })
                    .child(div().flex().flex_col().gap(px(12.0)).children(cards))
            }
        }
    }

    fn render_summary_card(&self, url: &str, summary: &str, theme: &Theme) -> Div {
        div()
            .flex()
            .rounded(px(10.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border)
            .overflow_hidden()
            .child(div().w(px(3.0)).bg(theme.accent))
            .child(
                div()
                    .flex_1()
                    .p(px(16.0))
                    .flex()
                    .flex_col()
                    .gap(px(8.0))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap(px(8.0))
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(theme.accent)
                                    .child(source_name(url)),
                            )
                            .child(
                                div()
                                    .text_size(px(10.0))
                                    .text_color(theme.text_dimmed)
                                    .child(url.to_string()),
                            ),
                    )
                    .child(render_markdown(summary, theme)),
            )
    }
}

fn field_label(text: &str, theme: &Theme) -> Div {
    div()
        .text_size(px(12.0))
        .font_weight(FontWeight::MEDIUM)
        .text_color(theme.text_secondary)
        .child(text.to_string())
}
