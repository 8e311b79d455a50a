use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the task rows for the current filter
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible_height = area.height as usize;
    let width = area.width as usize;

    // Keep the cursor on screen before building rows
    app.clamp_cursor();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let tasks = app.visible();

    if tasks.is_empty() {
        let message = match app.filter {
            Filter::All => " No tasks — press a to add one",
            Filter::Active => " Nothing active",
            Filter::Completed => " Nothing completed yet",
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = i == app.cursor;
        let bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };

        let mut spans: Vec<Span> = Vec::new();

        // Checkbox
        let check_color = if task.completed {
            app.theme.green
        } else {
            app.theme.dim
        };
        spans.push(Span::styled(
            format!(" [{}] ", task.checkbox_char()),
            Style::default().fg(check_color).bg(bg),
        ));

        // Id
        spans.push(Span::styled(
            format!("{:>3} ", task.id),
            Style::default().fg(app.theme.dim).bg(bg),
        ));

        // Name: completed rows are dimmed and struck through
        let name_style = if task.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        spans.push(Span::styled(
            truncate_to_width(&task.name, width.saturating_sub(used)),
            name_style,
        ));

        // Pad cursor line to full width
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
