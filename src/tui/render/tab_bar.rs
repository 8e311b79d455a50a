use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;

/// Render the tab bar: one tab per filter, with separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg_style = Style::default().bg(app.theme.background);
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    let (active, completed) = app.counts();

    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();

    // Leading icon
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{2713}",
        Style::default().fg(app.theme.green).bg(app.theme.background),
    ));
    spans.push(Span::styled(" ", bg_style));

    for filter in Filter::TABS {
        let style = tab_style(app, app.filter == filter);
        let count = match filter {
            Filter::All => None,
            Filter::Active => Some(active),
            Filter::Completed => Some(completed),
        };
        match count {
            Some(n) => spans.push(Span::styled(format!(" {} {} ", filter.label(), n), style)),
            None => spans.push(Span::styled(format!(" {} ", filter.label()), style)),
        }
        sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
        spans.push(sep.clone());
    }

    let line = Line::from(spans);
    let tabs = Paragraph::new(line).style(Style::default().bg(app.theme.background));
    frame.render_widget(tabs, area);
    sep_cols
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let mut sep_text = String::with_capacity(width * 3);
    for col in 0..width {
        if sep_cols.contains(&col) {
            sep_text.push('\u{2534}');
        } else {
            sep_text.push('\u{2500}');
        }
    }

    let line = Line::from(Span::styled(
        sep_text,
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    let paragraph = Paragraph::new(line).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
