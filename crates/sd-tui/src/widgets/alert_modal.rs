use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::Alert;
use crate::widgets::centered_rect;

/// Blocking error dialog. Rendered on top of everything; the app swallows
/// all keys except Enter/Esc while it is up.
pub fn render(frame: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.push(Line::from(alert.message.clone()));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to dismiss",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(format!(" {} ", alert.title))
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
