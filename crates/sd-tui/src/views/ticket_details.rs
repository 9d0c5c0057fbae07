use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use sd_core::types::TicketStatus;

use crate::app::App;
use crate::views::{priority_color, status_color};

pub fn render(frame: &mut Frame, app: &App, area: Rect, ticket_id: &str) {
    let Some(ticket) = app.store.get(ticket_id) else {
        let block = Block::default().borders(Borders::ALL).title(" Ticket ");
        let message = Paragraph::new(format!(
            "Ticket {ticket_id} is no longer in the list.\n\nPress Esc to go back."
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(message, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let field = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{name:<13}"),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(value),
        ])
    };

    let details = vec![
        Line::from(Span::styled(
            ticket.id.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Type", ticket.kind.label().to_string()),
        Line::from(vec![
            Span::styled("Status       ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} {}", ticket.status.glyph(), ticket.status.label()),
                Style::default().fg(status_color(&ticket.status)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Priority     ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} {}", ticket.priority.glyph(), ticket.priority.label()),
                Style::default().fg(priority_color(&ticket.priority)),
            ),
        ]),
        field("Assignee", ticket.assignee.clone()),
        field("Requester", ticket.requester.clone()),
        field("Category", ticket.category.clone()),
        field(
            "Subcategory",
            ticket.subcategory.clone().unwrap_or_else(|| "-".to_string()),
        ),
        field(
            "Created",
            ticket.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ),
        field(
            "Updated",
            ticket.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        ),
    ];
    frame.render_widget(
        Paragraph::new(details).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", ticket.id)),
        ),
        columns[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(columns[1]);

    frame.render_widget(
        Paragraph::new(ticket.description.clone())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Description ")),
        right[0],
    );

    let resolved_or_closed = matches!(
        ticket.status,
        TicketStatus::Resolved | TicketStatus::Closed
    );
    let actions = [
        ('t', "Take ticket (assign to you)", true),
        ('v', "Mark resolved", !resolved_or_closed),
        ('c', "Close ticket", ticket.status == TicketStatus::Resolved),
        ('o', "Reopen ticket", resolved_or_closed),
    ];
    let lines: Vec<Line> = actions
        .iter()
        .map(|(key, label, enabled)| {
            let style = if *enabled {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(
                    format!("[{key}] "),
                    if *enabled {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    },
                ),
                Span::styled(*label, style),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quick Actions "),
        ),
        right[1],
    );
}
