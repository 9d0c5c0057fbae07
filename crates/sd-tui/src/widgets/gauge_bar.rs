use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// One-line workload gauge: ` Jane [██████░░░░] 65% `.
///
/// The filled run takes `color`; the rest is dark gray. Values above 100
/// are clamped.
pub fn render_gauge(frame: &mut Frame, area: Rect, label: &str, percent: u16, color: Color) {
    let percent = percent.min(100);
    if area.height == 0 {
        return;
    }

    let label_part = format!(" {label}");
    let pct_part = format!(" {percent}%");
    // " label" + " [" + bar + "]" + " nn%"
    let overhead = label_part.len() + 2 + 1 + pct_part.len();
    let bar_width = (area.width as usize).saturating_sub(overhead);
    if bar_width == 0 {
        return;
    }

    let filled = bar_width * percent as usize / 100;
    let empty = bar_width.saturating_sub(filled);

    let line = Line::from(vec![
        Span::styled(label_part, Style::default().fg(Color::White)),
        Span::raw(" ["),
        Span::styled("\u{2588}".repeat(filled), Style::default().fg(color)),
        Span::styled("\u{2591}".repeat(empty), Style::default().fg(Color::DarkGray)),
        Span::raw("]"),
        Span::styled(pct_part, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Color for a workload percentage: green while light, yellow when loaded,
/// red near capacity.
pub fn workload_color(percent: u8) -> Color {
    match percent {
        0..=59 => Color::Green,
        60..=84 => Color::Yellow,
        _ => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(width: u16, label: &str, percent: u16) {
        let backend = ratatui::backend::TestBackend::new(width, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_gauge(frame, area, label, percent, Color::Green);
            })
            .unwrap();
    }

    #[test]
    fn clamps_out_of_range_values() {
        draw(60, "overload", 400);
    }

    #[test]
    fn handles_zero_and_full() {
        draw(60, "idle", 0);
        draw(60, "maxed", 100);
    }

    #[test]
    fn survives_narrow_areas() {
        for width in 0..12 {
            draw(width, "tight", 50);
        }
    }

    #[test]
    fn workload_color_bands() {
        assert_eq!(workload_color(0), Color::Green);
        assert_eq!(workload_color(45), Color::Green);
        assert_eq!(workload_color(65), Color::Yellow);
        assert_eq!(workload_color(90), Color::Red);
    }
}
