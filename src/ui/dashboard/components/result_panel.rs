//! Result panel component
//!
//! Renders an action's result element

use super::super::markdown::markdown_lines;
use super::super::state::DashboardState;
use crate::dispatcher::Action;
use crate::render::ResultView;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn view_lines(view: &ResultView) -> Vec<Line<'static>> {
    match view {
        ResultView::Markdown { source, .. } => markdown_lines(source),
        ResultView::Json(json) => json.lines().map(|l| Line::from(l.to_string())).collect(),
        ResultView::Error(_) => vec![Line::styled(view.text(), Style::default().fg(Color::Red))],
    }
}

pub fn render_result_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    action: Action,
) {
    let pane = state.result(action);
    let (lines, scroll) = match pane.and_then(|p| p.view.as_ref().map(|v| (v, p.scroll))) {
        Some((view, scroll)) => (view_lines(view), scroll),
        None => (
            vec![Line::styled(
                "No result yet",
                Style::default().fg(Color::DarkGray),
            )],
            0,
        ),
    };

    let title = if state.in_flight(action) > 0 {
        "RESULT (waiting for backend...)"
    } else {
        "RESULT"
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}
