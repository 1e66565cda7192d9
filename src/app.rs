//! Main application state and rendering for the Meridian GUI

use crate::api::MeridianClient;
use crate::macro_view::MacroView;
use crate::news::NewsView;
use crate::stock::StockView;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;

/// Loading state for async data
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadingState<T> {
    #[default]
    NotStarted,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    #[allow(dead_code)]
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    #[allow(dead_code)]
    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }

    #[allow(dead_code)]
    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Briefing,
    Macro,
    Stock,
}

impl ActiveView {
    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Briefing => "Daily Briefing",
            ActiveView::Macro => "Macro Indicators",
            ActiveView::Stock => "Stock Analysis",
        }
    }

    pub fn all() -> &'static [ActiveView] {
        &[ActiveView::Briefing, ActiveView::Macro, ActiveView::Stock]
    }
}

/// Main application state
pub struct MeridianApp {
    active_view: ActiveView,
    theme: Theme,
    api_client: Arc<MeridianClient>,

    news: Entity<NewsView>,
    macro_view: Entity<MacroView>,
    stock: Entity<StockView>,
}

impl MeridianApp {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let api_client = MeridianClient::new_shared();
        let theme = Theme::dark();

        let news = cx.new(|cx| NewsView::new(api_client.clone(), theme.clone(), cx));
        let macro_view = cx.new(|cx| MacroView::new(api_client.clone(), theme.clone(), cx));
        let stock = cx.new(|cx| StockView::new(api_client.clone(), theme.clone(), cx));

        Self {
            active_view: ActiveView::default(),
            theme,
            api_client,
            news,
            macro_view,
            stock,
        }
    }

    pub fn set_active_view(&mut self, view: ActiveView, cx: &mut Context<Self>) {
        self.active_view = view;
        cx.notify();
    }
}

impl Render for MeridianApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .size_full()
            .flex()
            .flex_row()
            .bg(theme.background)
            .text_color(theme.text)
            .font_family("Inter")
            .child(self.render_sidebar(cx))
            .child(
                div().flex_1().h_full().child(match self.active_view {
                    ActiveView::Briefing => self.news.clone().into_any_element(),
                    ActiveView::Macro => self.macro_view.clone().into_any_element(),
                    ActiveView::Stock => self.stock.clone().into_any_element(),
                }),
            )
    }
}

impl MeridianApp {
    fn render_sidebar(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        div()
            .w(px(240.0))
            .h_full()
            .flex()
            .flex_col()
            .bg(theme.sidebar_bg)
            .border_r_1()
            .border_color(theme.border_subtle)
            .child(self.render_logo())
            .child(self.render_nav_items(cx))
            .child(div().flex_grow())
            .child(self.render_backend_line())
    }

    fn render_logo(&self) -> Div {
        let theme = &self.theme;

        div()
            .px(px(20.0))
            .py(px(22.0))
            .flex()
            .items_center()
            .gap(px(12.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .mb(px(8.0))
            .child(
                div()
                    .size(px(38.0))
                    .bg(theme.accent)
                    .rounded(px(10.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .text_size(px(19.0))
                            .font_weight(FontWeight::BLACK)
                            .text_color(hsla(0.0, 0.0, 1.0, 0.95))
                            .child("M"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_size(px(17.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.text)
                            .child("Meridian"),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(theme.text_dimmed)
                            .child("Market Intelligence"),
                    ),
            )
    }

    fn render_nav_items(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .gap(px(2.0))
            .px(px(12.0))
            .py(px(12.0))
            .child(
                div()
                    .text_size(px(10.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text_dimmed)
                    .px(px(12.0))
                    .mb(px(8.0))
                    .child("NAVIGATION"),
            )
            .children(ActiveView::all().iter().map(|view| {
                let view = *view;
                let active = view == self.active_view;
                div()
                    .id(SharedString::from(format!("nav-{}", view.label())))
                    .px(px(12.0))
                    .py(px(9.0))
                    .rounded(px(6.0))
                    .cursor_pointer()
                    .bg(if active {
                        theme.accent_subtle
                    } else {
                        transparent_black()
                    })
                    .hover(|s| s.bg(theme.hover_bg))
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.set_active_view(view, cx);
                    }))
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(if active {
                                FontWeight::SEMIBOLD
                            } else {
                                FontWeight::NORMAL
                            })
                            .text_color(if active { theme.accent } else { theme.text_secondary })
                            .child(view.label()),
                    )
            }))
    }

    fn render_backend_line(&self) -> Div {
        let theme = &self.theme;

        div()
            .px(px(20.0))
            .py(px(14.0))
            .border_t_1()
            .border_color(theme.border_subtle)
            .child(
                div()
                    .text_size(px(10.0))
                    .text_color(theme.text_dimmed)
                    .child(self.api_client.base_url().to_string()),
            )
    }
}
