//! Splash screen shown while the dashboard starts.

use crate::environment::Environment;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
   ██████╗ ██████╗ ██████╗ ███████╗██████╗ ██╗   ██╗██╗     ███████╗███████╗
  ██╔════╝██╔═══██╗██╔══██╗██╔════╝██╔══██╗██║   ██║██║     ██╔════╝██╔════╝
  ██║     ██║   ██║██║  ██║█████╗  ██████╔╝██║   ██║██║     ███████╗█████╗
  ██║     ██║   ██║██║  ██║██╔══╝  ██╔═══╝ ██║   ██║██║     ╚════██║██╔══╝
  ╚██████╗╚██████╔╝██████╔╝███████╗██║     ╚██████╔╝███████╗███████║███████╗
   ╚═════╝ ╚═════╝ ╚═════╝ ╚══════╝╚═╝      ╚═════╝ ╚══════╝╚══════╝╚══════╝
"#;

/// Top to bottom shading of the logo rows.
const LOGO_SHADES: [Color; 3] = [Color::LightCyan, Color::Cyan, Color::Blue];

fn splash_lines(environment: &Environment) -> Vec<Line<'static>> {
    let logo: Vec<&str> = LOGO_NAME.trim_matches('\n').lines().collect();
    let band = logo.len().div_ceil(LOGO_SHADES.len()).max(1);

    let mut lines: Vec<Line> = logo
        .iter()
        .enumerate()
        .map(|(row, text)| {
            let shade = LOGO_SHADES[(row / band).min(LOGO_SHADES.len() - 1)];
            Line::styled(
                text.to_string(),
                Style::default().fg(shade).add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::styled(
        format!("AI code review client v{}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::ITALIC),
    ));
    lines.push(Line::from(vec![
        Span::styled("backend ", Style::default().fg(Color::DarkGray)),
        Span::styled(environment.backend_url(), Style::default().fg(Color::White)),
    ]));
    lines.push(Line::styled(
        "press any key",
        Style::default().fg(Color::DarkGray),
    ));
    lines
}

pub fn render_splash(f: &mut Frame, environment: &Environment) {
    let lines = splash_lines(environment);
    let [area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(f.area());

    f.render_widget(Paragraph::new(lines).centered(), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn splash_names_the_backend() {
        let lines = splash_lines(&Environment::Local);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l == "backend http://localhost:8000"));
        assert_eq!(lines[0].style.fg, Some(Color::LightCyan));
    }

    #[test]
    fn splash_renders_in_a_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|f| render_splash(f, &Environment::Local))
            .unwrap();
    }
}
