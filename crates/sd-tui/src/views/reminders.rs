use chrono::Utc;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let reminders = app.filtered_reminders();
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Reminders ({})  filter: {} ",
        reminders.len(),
        app.reminder_filter.label()
    ));

    if reminders.is_empty() {
        frame.render_widget(
            Paragraph::new("No reminders match the current filter.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let now = Utc::now();
    let items: Vec<ListItem> = reminders
        .iter()
        .map(|reminder| {
            let overdue = reminder.is_overdue(now);
            let mark = if reminder.completed { "[x]" } else { "[ ]" };
            let mut spans = vec![
                Span::styled(
                    format!("{mark} "),
                    if reminder.completed {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    },
                ),
                Span::styled(
                    format!("[{}] ", reminder.kind.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    reminder.title.clone(),
                    if overdue {
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
                Span::styled(
                    format!(
                        "  due {}  ({})",
                        reminder.due_date.format("%m-%d %H:%M"),
                        reminder.assignee
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if overdue {
                spans.push(Span::styled(
                    "  OVERDUE",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
