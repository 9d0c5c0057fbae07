use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use sd_core::types::AnnouncementPriority;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let announcements = app.filtered_announcements();
    let filter = app
        .announcement_filter
        .as_ref()
        .map(|f| f.label())
        .unwrap_or("All");
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Announcements ({})  filter: {} ",
        announcements.len(),
        filter
    ));

    if announcements.is_empty() {
        frame.render_widget(
            Paragraph::new("No announcements match the current filter.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            rows[0],
        );
    } else {
        let items: Vec<ListItem> = announcements
            .iter()
            .map(|a| {
                let priority_style = match a.priority {
                    AnnouncementPriority::High => {
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                    }
                    AnnouncementPriority::Medium => Style::default().fg(Color::Yellow),
                    AnnouncementPriority::Low => Style::default().fg(Color::DarkGray),
                };
                let mut spans = vec![
                    Span::styled(format!("[{}] ", a.priority.label()), priority_style),
                    Span::styled(
                        format!("[{}] ", a.category.label()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(a.title.clone()),
                    Span::styled(
                        format!(
                            "  {} by {}",
                            a.created_at.format("%Y-%m-%d"),
                            a.author
                        ),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if !a.active {
                    spans.push(Span::styled(
                        "  (archived)",
                        Style::default().fg(Color::DarkGray),
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
        frame.render_stateful_widget(list, rows[0], &mut state);
    }

    let detail_block = Block::default().borders(Borders::ALL).title(" Content ");
    match announcements.get(app.selected) {
        Some(a) => {
            let lines = vec![
                Line::from(Span::styled(
                    a.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "{} | {} | posted {} by {}",
                        a.category.label(),
                        a.priority.label(),
                        a.created_at.format("%Y-%m-%d %H:%M"),
                        a.author
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from(a.content.clone()),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(detail_block),
                rows[1],
            );
        }
        None => frame.render_widget(
            Paragraph::new("Select an announcement.")
                .style(Style::default().fg(Color::DarkGray))
                .block(detail_block),
            rows[1],
        ),
    }
}
