use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, FormField};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let mut lines: Vec<Line> = vec![Line::from("")];

    for field in FormField::ORDER {
        let focused = form.field == field;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        if field == FormField::Submit {
            let button_style = if focused {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled("[ Create Ticket ]", button_style),
            ]));
            continue;
        }

        let value = match field {
            FormField::Title => text_value(&form.title, focused),
            FormField::Description => text_value(&form.description, focused),
            FormField::Kind => choice_value(form.kind.label().to_string()),
            FormField::Priority => choice_value(format!(
                "{} {}",
                form.priority.glyph(),
                form.priority.label()
            )),
            FormField::Category => choice_value(form.category_label().to_string()),
            FormField::Subcategory => text_value(&form.subcategory, focused),
            FormField::Requester => text_value(&form.requester, focused),
            FormField::Assignee => choice_value(form.assignee_label().to_string()),
            FormField::Submit => String::new(),
        };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<13}", field.label()), label_style),
            Span::raw(value),
        ]));
    }

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Up/Down move, Left/Right change a choice, Enter on the last row submits.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Create Ticket ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn text_value(buffer: &str, focused: bool) -> String {
    if focused {
        format!("{buffer}_")
    } else if buffer.is_empty() {
        "(empty)".to_string()
    } else {
        buffer.to_string()
    }
}

fn choice_value(value: String) -> String {
    format!("< {value} >")
}
