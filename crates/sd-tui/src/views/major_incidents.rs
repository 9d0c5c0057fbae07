use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use sd_core::types::Severity;

use crate::app::App;
use crate::views::incident_status_color;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_summary(frame, app, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_list(frame, app, body[0]);
    render_detail(frame, app, body[1]);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.incidents.iter().filter(|i| i.is_active()).count();
    let critical = app
        .incidents
        .iter()
        .filter(|i| i.is_active() && i.severity == Severity::Critical)
        .count();
    let impacted: u32 = app
        .incidents
        .iter()
        .filter(|i| i.is_active())
        .map(|i| i.impacted_users)
        .sum();

    let cards = [
        ("Active", active.to_string(), Color::Red),
        ("Critical", critical.to_string(), Color::Magenta),
        ("Impacted Users", impacted.to_string(), Color::Yellow),
        ("Avg Resolution", "2.5h".to_string(), Color::Cyan),
        ("Resolved Today", "3".to_string(), Color::Green),
    ];

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20); 5])
        .split(area);

    for ((title, value, color), slot) in cards.iter().zip(slots.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            value.clone(),
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

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let incidents = app.filtered_incidents();
    let filter = app
        .incident_filter
        .as_ref()
        .map(|f| f.label())
        .unwrap_or("All");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Major Incidents ({})  filter: {} ", incidents.len(), filter));

    if incidents.is_empty() {
        let empty = Paragraph::new("No major incidents match the current filter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["", "ID", "Title", "Severity", "Status", "Users"]).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let table_rows: Vec<Row> = incidents
        .iter()
        .map(|incident| {
            let severity_style = match incident.severity {
                Severity::Critical => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                Severity::High => Style::default().fg(Color::Yellow),
            };
            Row::new(vec![
                Cell::from(Span::styled(
                    incident.status.glyph(),
                    Style::default().fg(incident_status_color(&incident.status)),
                )),
                Cell::from(incident.id.clone()),
                Cell::from(incident.title.clone()),
                Cell::from(Span::styled(incident.severity.label(), severity_style)),
                Cell::from(incident.status.label()),
                Cell::from(incident.impacted_users.to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(13),
        Constraint::Length(6),
    ];
    let table = Table::new(table_rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let incidents = app.filtered_incidents();
    let block = Block::default().borders(Borders::ALL).title(" Detail ");
    let Some(incident) = incidents.get(app.selected) else {
        frame.render_widget(
            Paragraph::new("Select an incident.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            incident.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "started {}  commander: {}",
                incident.started_at.format("%Y-%m-%d %H:%M"),
                incident.incident_commander
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("channel: {}", incident.communication_channel),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(eta) = &incident.estimated_resolution {
        lines.push(Line::from(Span::styled(
            format!("estimated resolution: {}", eta.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Affected services",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!("  {}", incident.affected_services.join(", "))));

    if !incident.workarounds.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Workarounds",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for workaround in &incident.workarounds {
            lines.push(Line::from(format!("  - {workaround}")));
        }
    }

    if !incident.updates.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Latest updates",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        // Newest first, capped at three like the briefing page.
        let mut updates: Vec<_> = incident.updates.iter().collect();
        updates.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        for update in updates.iter().take(3) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} {}  ", update.timestamp.format("%H:%M"), update.author),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(update.message.clone()),
            ]));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
