//! Markdown-lite rendering for AI-generated text
//!
//! The backend's summaries and synthesis conclusions use only `**bold**`
//! spans and newlines. Anything fancier is rendered as plain text.

use crate::theme::Theme;
use gpui::prelude::FluentBuilder;
use gpui::*;

/// A styled fragment of one line
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

/// Split text into lines of bold/plain spans.
///
/// An unterminated `**` marker is treated as literal text rather than
/// swallowing the rest of the line.
pub fn parse_lines(text: &str) -> Vec<Vec<Span>> {
    text.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        match after.find("**") {
            Some(end) => {
                if start > 0 {
                    spans.push(Span {
                        text: rest[..start].to_string(),
                        bold: false,
                    });
                }
                if end > 0 {
                    spans.push(Span {
                        text: after[..end].to_string(),
                        bold: true,
                    });
                }
                rest = &after[end + 2..];
            }
            None => break,
        }
    }

    if !rest.is_empty() {
        spans.push(Span {
            text: rest.to_string(),
            bold: false,
        });
    }

    spans
}

/// Render markdown-lite text as a column of lines
pub fn render_markdown(text: &str, theme: &Theme) -> Div {
    let text_color = theme.text_secondary;
    let bold_color = theme.text;

    div()
        .flex()
        .flex_col()
        .gap(px(4.0))
        .children(parse_lines(text).into_iter().map(move |spans| {
            if spans.is_empty() {
                // blank line keeps paragraph spacing
                return div().h(px(6.0));
            }
            div()
                .flex()
                .flex_wrap()
                .children(spans.into_iter().map(move |span| {
                    div()
                        .text_size(px(13.0))
                        .line_height(px(20.0))
                        .text_color(if span.bold { bold_color } else { text_color })
                        .when(span.bold, |el| el.font_weight(FontWeight::SEMIBOLD))
                        .child(span.text)
                }))
        }))
}
