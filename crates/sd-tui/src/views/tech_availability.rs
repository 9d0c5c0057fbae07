use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use sd_core::types::TechStatus;

use crate::app::App;
use crate::views::tech_status_color;
use crate::widgets::gauge_bar;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_summary(frame, app, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    render_roster(frame, app, body[0]);
    render_detail(frame, app, body[1]);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let count = |status: TechStatus| {
        app.technicians
            .iter()
            .filter(|t| t.status == status)
            .count()
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" Available {} ", count(TechStatus::Available)),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" Busy {} ", count(TechStatus::Busy)),
            Style::default().fg(Color::Red),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" Away {} ", count(TechStatus::Away)),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" Offline {} ", count(TechStatus::Offline)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Tech Availability "),
        ),
        area,
    );
}

fn render_roster(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Roster ");
    if app.technicians.is_empty() {
        frame.render_widget(
            Paragraph::new("No technicians on the roster.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec!["", "Name", "Status", "Current Task", "Load"]).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let table_rows: Vec<Row> = app
        .technicians
        .iter()
        .map(|tech| {
            Row::new(vec![
                Cell::from(Span::styled(
                    tech.status.glyph(),
                    Style::default().fg(tech_status_color(&tech.status)),
                )),
                Cell::from(tech.name.clone()),
                Cell::from(Span::styled(
                    tech.status.label(),
                    Style::default().fg(tech_status_color(&tech.status)),
                )),
                Cell::from(
                    tech.current_task
                        .clone()
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Cell::from(format!("{}%", tech.workload)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Length(14),
        Constraint::Length(9),
        Constraint::Min(18),
        Constraint::Length(5),
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
    let block = Block::default().borders(Borders::ALL).title(" Technician ");
    let Some(tech) = app.technicians.get(app.selected) else {
        frame.render_widget(
            Paragraph::new("Select a technician.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            tech.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {}", tech.status.glyph(), tech.status.label()),
            Style::default().fg(tech_status_color(&tech.status)),
        )),
    ];
    lines.push(match &tech.current_task {
        Some(task) => Line::from(format!("working on: {task}")),
        None => Line::from(Span::styled(
            "no current task",
            Style::default().fg(Color::DarkGray),
        )),
    });
    lines.push(match &tech.next_available {
        Some(at) => Line::from(format!("next available: {}", at.format("%H:%M"))),
        None => Line::from(""),
    });
    frame.render_widget(Paragraph::new(lines), sections[0]);

    gauge_bar::render_gauge(
        frame,
        sections[1],
        "workload",
        u16::from(tech.workload),
        gauge_bar::workload_color(tech.workload),
    );

    let footer = match &app.assign_input {
        Some(buffer) => Line::from(vec![
            Span::styled(
                "Assign ticket id: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{buffer}_")),
        ]),
        None => Line::from(Span::styled(
            "[s] cycle status   [a] assign a ticket",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(vec![Line::from(""), footer]), sections[2]);
}
