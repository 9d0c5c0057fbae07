use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::App;
use crate::views::task_status_color;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let tasks = app.filtered_tasks();
    let filter = app
        .task_filter
        .as_ref()
        .map(|f| f.label())
        .unwrap_or("All");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Tasks ({})  filter: {} ", tasks.len(), filter));

    if tasks.is_empty() {
        frame.render_widget(
            Paragraph::new("No tasks match the current filter.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec!["", "ID", "Title", "Assignee", "Due", "Priority", "Ticket"]).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = tasks
        .iter()
        .map(|task| {
            Row::new(vec![
                Cell::from(Span::styled(
                    task.status.glyph(),
                    Style::default().fg(task_status_color(&task.status)),
                )),
                Cell::from(task.id.clone()),
                Cell::from(task.title.clone()),
                Cell::from(task.assignee.clone()),
                Cell::from(task.due_date.format("%m-%d %H:%M").to_string()),
                Cell::from(task.priority.label()),
                Cell::from(
                    task.related_ticket
                        .clone()
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Min(24),
        Constraint::Length(14),
        Constraint::Length(11),
        Constraint::Length(8),
        Constraint::Length(8),
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
