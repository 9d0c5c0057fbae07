use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::App;
use crate::views::{priority_color, status_color};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let tickets = app.filtered_tickets();
    let filter = app
        .ticket_filter
        .as_ref()
        .map(|f| f.label())
        .unwrap_or("All");
    let title = format!(
        " Tickets ({}/{})  filter: {} ",
        tickets.len(),
        app.store.len(),
        filter
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    if tickets.is_empty() {
        let empty = Paragraph::new("No tickets match the current filter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["", "ID", "Title", "Status", "Priority", "Assignee", "Category"])
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let rows: Vec<Row> = tickets
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(Span::styled(
                    t.status.glyph(),
                    Style::default().fg(status_color(&t.status)),
                )),
                Cell::from(t.id.clone()),
                Cell::from(t.title.clone()),
                Cell::from(t.status.label()),
                Cell::from(Span::styled(
                    format!("{} {}", t.priority.glyph(), t.priority.label()),
                    Style::default().fg(priority_color(&t.priority)),
                )),
                Cell::from(t.assignee.clone()),
                Cell::from(t.category.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Min(24),
        Constraint::Length(11),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}
