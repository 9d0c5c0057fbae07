use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Shared "coming soon" panel for the views that only reserve a slot.
pub fn render(frame: &mut Frame, area: Rect, name: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{name} - Coming soon"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This area is reserved; nothing is wired up behind it yet.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let panel = Paragraph::new(lines).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {name} ")),
    );
    frame.render_widget(panel, area);
}
