//! Dashboard main renderer

use super::components::{footer, form_panel, header, logs, result_panel};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(20),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(state.forms.iter().map(|_| Constraint::Ratio(1, state.forms.len() as u32)))
        .split(main_chunks[1]);

    // Forms share one height so the result panes line up.
    let form_height = state
        .forms
        .iter()
        .map(form_panel::form_height)
        .max()
        .unwrap_or(3);

    for (index, (form, column)) in state.forms.iter().zip(columns.iter()).enumerate() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(form_height), Constraint::Fill(1)])
            .split(*column);
        form_panel::render_form_panel(f, rows[0], state, index);
        result_panel::render_result_panel(f, rows[1], state, form.action);
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}
