use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use sd_core::types::Severity;

use crate::app::App;
use crate::views::{incident_status_color, priority_color, status_color};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_stats(frame, app, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_recent_tickets(frame, app, body[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[1]);
    render_incidents(frame, app, side[0]);
    render_announcements(frame, app, side[1]);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let cards = [
        ("Total", app.stats.total_tickets, Color::Cyan),
        ("Open", app.stats.open_tickets, Color::Yellow),
        ("In Progress", app.stats.in_progress_tickets, Color::Blue),
        ("Resolved Today", app.stats.resolved_today, Color::Green),
        ("Critical", app.stats.critical_tickets, Color::Red),
    ];

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20); 5])
        .split(area);

    for ((title, value, color), slot) in cards.iter().zip(slots.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        )))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(*color))
                .title(format!(" {title} ")),
        );
        frame.render_widget(card, *slot);
    }
}

fn render_recent_tickets(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recent Tickets ");
    let tickets = app.store.tickets();
    if tickets.is_empty() {
        frame.render_widget(
            Paragraph::new("No tickets yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }
    let items: Vec<ListItem> = tickets
        .iter()
        .take(5)
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", t.status.glyph()),
                    Style::default().fg(status_color(&t.status)),
                ),
                Span::styled(
                    format!("{:<8}", t.id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(t.title.clone()),
                Span::styled(
                    format!("  {} {}", t.priority.glyph(), t.priority.label()),
                    Style::default().fg(priority_color(&t.priority)),
                ),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_incidents(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Major Incidents ");
    let active: Vec<_> = app.incidents.iter().filter(|i| i.is_active()).collect();
    if active.is_empty() {
        frame.render_widget(
            Paragraph::new("No active major incidents.")
                .style(Style::default().fg(Color::Green))
                .block(block),
            area,
        );
        return;
    }
    let items: Vec<ListItem> = active
        .iter()
        .map(|incident| {
            let severity_style = match incident.severity {
                Severity::Critical => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                Severity::High => Style::default().fg(Color::Yellow),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", incident.status.glyph()),
                    Style::default().fg(incident_status_color(&incident.status)),
                ),
                Span::styled(format!("{} ", incident.severity.label()), severity_style),
                Span::raw(incident.title.clone()),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_announcements(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Announcements ");
    let items: Vec<ListItem> = app
        .announcements
        .iter()
        .filter(|a| a.active)
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", a.category.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(a.title.clone()),
            ]))
        })
        .collect();
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing posted.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }
    frame.render_widget(List::new(items).block(block), area);
}
