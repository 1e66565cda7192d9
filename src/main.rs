//! Meridian GUI - GPUI desktop client for the Meridian backend
//!
//! Presents AI-generated market briefings, macroeconomic indicator
//! charts, and single-stock analysis. All data production happens in the
//! Python backend; this binary is presentation and request composition.

mod api;
mod app;
mod components;
mod macro_view;
mod markdown;
mod news;
mod stock;
mod theme;

#[cfg(test)]
mod tests;

use app::MeridianApp;
use gpui::*;

fn main() {
    env_logger::init();

    Application::new().run(|cx: &mut App| {
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: Point::default(),
                size: Size {
                    width: px(1440.0),
                    height: px(920.0),
                },
            })),
            titlebar: Some(TitlebarOptions {
                title: Some("Meridian - Market Intelligence".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| MeridianApp::new(cx))
        })
        .unwrap();
    });
}
