use chrono::Utc;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use sd_core::types::TaskStatus;

use crate::app::{App, View};
use crate::views;
use crate::widgets;

/// Top-level frame: tab bar, active view, status bar, then any modals.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tab_bar(frame, app, chunks[0]);
    render_content(frame, app, chunks[1]);
    widgets::status_bar::render(frame, app, chunks[2]);

    if app.show_help {
        widgets::help_modal::render(frame);
    }
    if let Some(alert) = &app.alert {
        widgets::alert_modal::render(frame, alert);
    }
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = (0..View::TAB_COUNT)
        .filter_map(View::at_tab)
        .map(|view| {
            let mut spans = vec![
                Span::styled(
                    view.hotkey().to_string(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(":"),
                Span::raw(view.title()),
            ];
            if let Some(count) = badge(app, &view) {
                spans.push(Span::styled(
                    format!("({count})"),
                    Style::default().fg(Color::Yellow),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.view.tab_index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(" servicedesk ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(tabs, area);
}

/// Badge counts for the tabs where a number carries signal.
fn badge(app: &App, view: &View) -> Option<usize> {
    match view {
        View::Tickets => Some(app.store.len()),
        View::MajorIncidents => Some(app.incidents.iter().filter(|i| i.is_active()).count()),
        View::Tasks => Some(
            app.tasks
                .iter()
                .filter(|t| t.status != TaskStatus::Completed)
                .count(),
        ),
        View::Reminders => {
            let now = Utc::now();
            let overdue = app.reminders.iter().filter(|r| r.is_overdue(now)).count();
            (overdue > 0).then_some(overdue)
        }
        _ => None,
    }
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    match &app.view {
        View::Dashboard => views::dashboard::render(frame, app, area),
        View::Tickets => views::tickets::render(frame, app, area),
        View::TicketDetails { ticket_id } => {
            views::ticket_details::render(frame, app, area, ticket_id)
        }
        View::CreateTicket => views::create_ticket::render(frame, app, area),
        View::MajorIncidents => views::major_incidents::render(frame, app, area),
        View::Scheduler => views::scheduler::render(frame, app, area),
        View::TechAvailability => views::tech_availability::render(frame, app, area),
        View::Tasks => views::tasks::render(frame, app, area),
        View::Reminders => views::reminders::render(frame, app, area),
        View::Announcements => views::announcements::render(frame, app, area),
        View::Copilot => views::copilot::render(frame, app, area),
        View::Teams => views::teams::render(frame, app, area),
        View::Agents => views::placeholder::render(frame, area, "Agents"),
        View::Reports => views::placeholder::render(frame, area, "Reports"),
        View::Automation => views::placeholder::render(frame, area, "Automation"),
        View::Settings => views::settings::render(frame, app, area),
    }
}
