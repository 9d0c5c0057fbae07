use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Shows the effective configuration: connection summary on top, the
/// loaded TOML below it.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let backend_line = if app.backend_enabled {
        Line::from(vec![
            Span::raw("Backend: "),
            Span::styled(
                app.connection_label(),
                if app.api_connected {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                },
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw("Backend: "),
            Span::styled(
                "LOCAL (fixture data only)",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };
    let summary = vec![
        Line::from(vec![
            Span::raw("Operator: "),
            Span::styled(
                app.operator.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        backend_line,
    ];
    frame.render_widget(
        Paragraph::new(summary).block(Block::default().borders(Borders::ALL).title(" Session ")),
        rows[0],
    );

    let toml = Paragraph::new(app.config_toml.clone()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Configuration (~/.servicedesk/config.toml) "),
    );
    frame.render_widget(toml, rows[1]);
}
