use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::widgets::centered_rect;

/// Key reference overlay, toggled with `?`.
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        section("Views"),
        help_line("1-9, 0", "jump to the first ten views"),
        help_line("T A R U S", "Teams / Agents / Reports / Automation / Settings"),
        help_line("Tab / Shift-Tab", "next / previous view"),
        Line::from(""),
        section("Lists"),
        help_line("j / k, Down / Up", "move the selection"),
        help_line("f", "cycle the view's filter"),
        help_line("Enter", "open the selected ticket"),
        help_line("Esc / Backspace", "back to the ticket list"),
        Line::from(""),
        section("Ticket details"),
        help_line("t", "take the ticket (assign to you)"),
        help_line("v", "mark resolved"),
        help_line("c", "close (resolved tickets only)"),
        help_line("o", "reopen (resolved or closed)"),
        Line::from(""),
        section("Tech availability"),
        help_line("s", "cycle the technician's status"),
        help_line("a", "assign a ticket by id"),
        Line::from(""),
        section("Copilot"),
        help_line("Enter", "send the message / run the action"),
        help_line("Tab", "cycle suggested prompts"),
        help_line("Esc / i", "leave / focus the input"),
        Line::from(""),
        section("General"),
        help_line(":", "open the command line"),
        help_line("r", "refresh from the backend"),
        help_line("?", "toggle this help"),
        help_line("q, Ctrl-C", "quit"),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn help_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<18}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(desc),
    ])
}
