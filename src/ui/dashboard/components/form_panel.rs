//! Form panel component
//!
//! Renders one form's fields and its button

use super::super::form::Form;
use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Rows a form panel needs: a label and a value line per field, the button, borders.
pub fn form_height(form: &Form) -> u16 {
    (form.fields.len() as u16) * 2 + 3
}

pub fn render_form_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    index: usize,
) {
    let Some(form) = state.forms.get(index) else {
        return;
    };
    let focused_form = state.focus.form == index;
    let mut lines = Vec::new();

    for (slot, field) in form.fields.iter().enumerate() {
        let focused = focused_form && state.focus.slot == slot;
        lines.push(Line::from(Span::styled(
            field.label,
            Style::default().fg(Color::DarkGray),
        )));
        let cursor = if focused { "▏" } else { "" };
        let style = if focused {
            Style::default().fg(Color::White).bg(Color::Rgb(40, 48, 56))
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}{}", field.value, cursor), style),
        ]));
    }

    let button_focused = focused_form && state.focus.on_button(&state.forms);
    let button_style = if button_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", form.button),
        button_style,
    )));

    let border_color = if focused_form {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(form.action.to_string().to_uppercase())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
