use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode::{display_width, grapheme_at};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref message) = app.status {
                Line::from(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.yellow).bg(bg),
                ))
            } else if app.show_hints {
                hint_line(app, width, "a add  e edit  space toggle  d delete  tab view  q quit")
            } else {
                Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
            }
        }
        Mode::Edit => edit_line(app, width),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Right-aligned dim hints
fn hint_line(app: &App, width: usize, hint: &str) -> Line<'static> {
    let bg = app.theme.background;
    let hint_width = display_width(hint);
    let mut spans: Vec<Span> = Vec::new();
    if hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - hint_width),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(
        hint.to_string(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    Line::from(spans)
}

/// Edit prompt: `add> draft` or `edit> name`, cursor shown in reverse video
fn edit_line(app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let Some(ref edit) = app.edit else {
        return Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)));
    };

    let prompt = match edit.target {
        EditTarget::New => " add> ",
        EditTarget::Task(_) => " edit> ",
    };

    let mut spans = vec![Span::styled(
        prompt.to_string(),
        Style::default().fg(app.theme.highlight).bg(bg),
    )];

    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let before = &edit.buffer[..edit.cursor];
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), text_style));
    }
    let at = grapheme_at(&edit.buffer, edit.cursor);
    if at.is_empty() {
        // Cursor past the end of the buffer
        spans.push(Span::styled(
            "\u{258C}".to_string(),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            at.to_string(),
            text_style.add_modifier(Modifier::REVERSED),
        ));
        let after = &edit.buffer[edit.cursor + at.len()..];
        if !after.is_empty() {
            spans.push(Span::styled(after.to_string(), text_style));
        }
    }

    if app.show_hints {
        let hint = "Enter save  Esc cancel";
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(hint);
        if content_width + hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width - hint_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                hint.to_string(),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    Line::from(spans)
}
