//! Dashboard header component
//!
//! Renders the title and the backend the forms talk to

use super::super::state::DashboardState;
use crate::dispatcher::Action;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render header with title, backend URL and in-flight request count.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let version = env!("CARGO_PKG_VERSION");
    let title = Line::from(Span::styled(
        format!("CODEPULSE AI v{}", version),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    let pending: usize = [Action::FileReview, Action::FolderReview, Action::BugFix]
        .iter()
        .map(|a| state.in_flight(*a))
        .sum();
    let status = if pending > 0 {
        Span::styled(
            format!(
                "{} {} request(s) in flight",
                SPINNER[state.tick % SPINNER.len()],
                pending
            ),
            Style::default().fg(Color::LightYellow),
        )
    } else {
        Span::styled("idle", Style::default().fg(Color::DarkGray))
    };

    let backend = Line::from(vec![
        Span::styled(
            format!("Backend: {}  ", state.environment.backend_url()),
            Style::default().fg(Color::LightBlue),
        ),
        status,
    ]);

    let header = Paragraph::new(vec![title, backend])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(header, area);
}
