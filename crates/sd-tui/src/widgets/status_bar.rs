use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, View};
use crate::widgets::truncate_to_width;

/// One-line footer: key hints (or the command line) on the left, operator,
/// connection indicator and wall clock on the right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let clock = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let indicator = app.connection_label();
    let indicator_style = match indicator {
        "LIVE" => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        "OFFLINE" => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Gray),
    };

    let right_width = UnicodeWidthStr::width(app.operator.as_str())
        + 2
        + indicator.len()
        + 2
        + clock.len()
        + 1;

    let left = left_text(app);
    let left_budget = (area.width as usize).saturating_sub(right_width + 2);
    let left = truncate_to_width(&left, left_budget);
    let pad = (area.width as usize)
        .saturating_sub(1 + UnicodeWidthStr::width(left.as_str()) + right_width);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::raw(left),
        Span::raw(" ".repeat(pad)),
        Span::styled(
            app.operator.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(indicator, indicator_style),
        Span::raw("  "),
        Span::raw(clock),
        Span::raw(" "),
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}

fn left_text(app: &App) -> String {
    if let Some(buf) = &app.command_input {
        return format!(":{buf}_");
    }
    if let Some(feedback) = &app.command_feedback {
        return feedback.clone();
    }
    hints(app).to_string()
}

/// Context-sensitive hint line for the current view.
fn hints(app: &App) -> &'static str {
    match &app.view {
        View::Tickets => "[f] filter  [Enter] details  [j/k] move  [:] cmd  [?] help",
        View::TicketDetails { .. } => "[t] take  [v] resolve  [c] close  [o] reopen  [Esc] back",
        View::CreateTicket => "[Up/Down] field  [Left/Right] choice  [Enter] submit  [Esc] cancel",
        View::TechAvailability => {
            if app.assign_input.is_some() {
                "type a ticket id  [Enter] assign  [Esc] cancel"
            } else {
                "[s] status  [a] assign  [j/k] move  [?] help"
            }
        }
        View::MajorIncidents
        | View::Scheduler
        | View::Tasks
        | View::Reminders
        | View::Announcements => "[f] filter  [j/k] move  [:] cmd  [?] help",
        View::Copilot => {
            if app.copilot.input_focused {
                "[Enter] send  [Tab] suggestion  [Esc] actions"
            } else {
                "[i] type  [j/k] action  [Enter] run"
            }
        }
        _ => "[1-0 TARUS] views  [Tab] next  [?] help  [q] quit",
    }
}
