use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use sd_core::types::MessageAuthor;

use crate::app::App;
use crate::widgets::wrap_text;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    render_transcript(frame, app, rows[0]);
    render_input(frame, app, rows[1]);
}

fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Copilot ");
    let inner = block.inner(area);
    let wrap_width = usize::from(inner.width).saturating_sub(2).max(10);

    // Action buttons are live only on the newest reply that carries any.
    let live_actions = app
        .copilot
        .messages
        .iter()
        .rposition(|m| m.author == MessageAuthor::Assistant && !m.actions.is_empty());

    let mut lines: Vec<Line> = Vec::new();
    for (index, message) in app.copilot.messages.iter().enumerate() {
        let (name, name_style) = match message.author {
            MessageAuthor::User => (
                "You",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            MessageAuthor::Assistant => (
                "Copilot",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{name} "), name_style),
            Span::styled(
                message.timestamp.format("%H:%M").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for text_line in wrap_text(&message.text, wrap_width) {
            lines.push(Line::from(format!("  {text_line}")));
        }

        if !message.suggestions.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Try one of these (Tab cycles them into the input):",
                Style::default().fg(Color::DarkGray),
            )));
            for suggestion in &message.suggestions {
                lines.push(Line::from(Span::styled(
                    format!("   - {suggestion}"),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        if !message.actions.is_empty() {
            let live = live_actions == Some(index);
            for (action_index, action) in message.actions.iter().enumerate() {
                let selected =
                    live && !app.copilot.input_focused && action_index == app.selected;
                let style = if selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else if live {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                lines.push(Line::from(Span::styled(
                    format!("  [{}] {} - {}", action.id, action.title, action.description),
                    style,
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if app.copilot.is_typing() {
        lines.push(Line::from(Span::styled(
            "  Copilot is typing...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // Pin the newest lines to the bottom of the pane.
    let scroll = lines.len().saturating_sub(usize::from(inner.height));
    let transcript = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(transcript, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let (title, border_style, text) = if app.copilot.input_focused {
        (
            " Message (Enter sends, Esc for actions) ",
            Style::default().fg(Color::Green),
            format!("{}_", app.copilot.input),
        )
    } else {
        (
            " Message ([i] to type) ",
            Style::default().fg(Color::DarkGray),
            app.copilot.input.clone(),
        )
    };
    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(input, area);
}
