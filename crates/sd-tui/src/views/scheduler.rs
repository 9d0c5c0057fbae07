use chrono::Utc;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use sd_core::types::ScheduleEvent;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let now = Utc::now();

    let today: Vec<&ScheduleEvent> = app.schedule.iter().filter(|e| e.is_today(now)).collect();
    render_pane(frame, panes[0], " Today ", &today);

    let mut upcoming: Vec<&ScheduleEvent> =
        app.schedule.iter().filter(|e| e.is_upcoming(now)).collect();
    upcoming.sort_by(|a, b| a.start.cmp(&b.start));
    upcoming.truncate(5);
    render_pane(frame, panes[1], " Upcoming ", &upcoming);

    render_table(frame, app, rows[1]);
}

fn render_pane(frame: &mut Frame, area: Rect, title: &str, events: &[&ScheduleEvent]) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    if events.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing scheduled.").style(Style::default().fg(Color::DarkGray)).block(block),
            area,
        );
        return;
    }
    let items: Vec<ListItem> = events
        .iter()
        .map(|event| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", event.start.format("%H:%M")),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("[{}] ", event.kind.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(event.title.clone()),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let events = app.filtered_events();
    let filter = app
        .event_filter
        .as_ref()
        .map(|f| f.label())
        .unwrap_or("All");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Schedule ({})  filter: {} ", events.len(), filter));

    if events.is_empty() {
        frame.render_widget(
            Paragraph::new("No events match the current filter.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec!["Kind", "Title", "Start", "End", "Assignee", "Location"]).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let table_rows: Vec<Row> = events
        .iter()
        .map(|event| {
            Row::new(vec![
                Cell::from(event.kind.label()),
                Cell::from(event.title.clone()),
                Cell::from(event.start.format("%m-%d %H:%M").to_string()),
                Cell::from(event.end.format("%m-%d %H:%M").to_string()),
                Cell::from(event.assignee.clone()),
                Cell::from(event.location.clone().unwrap_or_else(|| "-".to_string())),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(11),
        Constraint::Min(20),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(14),
        Constraint::Length(18),
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
