use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::App;

const FEATURES: &[(&str, &str)] = &[
    (
        "Chat Support",
        "Enable end users to create and track tickets directly through Teams chat",
    ),
    (
        "Microsoft 365 Copilot",
        "AI-powered assistance for ticket resolution and knowledge base queries",
    ),
    (
        "Real-time Notifications",
        "Instant notifications for ticket updates and assignments",
    ),
    (
        "Team Collaboration",
        "Collaborate on tickets with team members in dedicated channels",
    ),
    (
        "Dashboard Integration",
        "Access ServiceDesk dashboard directly within Teams interface",
    ),
    (
        "Workflow Automation",
        "Automated ticket routing and escalation through Teams",
    ),
];

const TAB_FEATURES: &[&str] = &[
    "Dashboard - Real-time overview of tickets and metrics",
    "Scheduler - Maintenance windows and team schedules",
    "Tech Availability Chart - Live technician status and workload",
    "Tasks - Team task management and assignments",
    "Reminders - Important follow-ups and deadlines",
    "Announcements - Team communications and updates",
];

/// Static preview of the Teams channel integration. Everything here is
/// canned; there is no live Teams connection behind it.
pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let status = vec![
        Line::from(vec![
            Span::styled(
                "Microsoft 365 Copilot Integration",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                "Connected and Active",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("(Live)", Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(
            "Teams as an additional channel for IT support.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(status).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Microsoft Teams Integration "),
        ),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let feature_items: Vec<ListItem> = FEATURES
        .iter()
        .map(|(title, description)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("[x] ", Style::default().fg(Color::Green)),
                    Span::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled("  Active", Style::default().fg(Color::Green)),
                ]),
                Line::from(Span::styled(
                    format!("    {description}"),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    frame.render_widget(
        List::new(feature_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Integration Features "),
        ),
        columns[0],
    );

    let tab_items: Vec<ListItem> = TAB_FEATURES
        .iter()
        .map(|feature| {
            ListItem::new(Line::from(vec![
                Span::styled("- ", Style::default().fg(Color::Cyan)),
                Span::raw(*feature),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(tab_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ServiceDesk Teams Tab "),
        ),
        columns[1],
    );
}
