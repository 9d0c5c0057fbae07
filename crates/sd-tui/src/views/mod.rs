use ratatui::style::Color;

use sd_core::types::{IncidentStatus, Priority, TaskStatus, TechStatus, TicketStatus};

pub mod announcements;
pub mod copilot;
pub mod create_ticket;
pub mod dashboard;
pub mod major_incidents;
pub mod placeholder;
pub mod reminders;
pub mod scheduler;
pub mod settings;
pub mod tasks;
pub mod teams;
pub mod tech_availability;
pub mod ticket_details;
pub mod tickets;

// Shared glyph colors so a status reads the same on every screen.

pub fn status_color(status: &TicketStatus) -> Color {
    match status {
        TicketStatus::Open => Color::Yellow,
        TicketStatus::InProgress => Color::Cyan,
        TicketStatus::Resolved => Color::Green,
        TicketStatus::Closed => Color::DarkGray,
    }
}

pub fn priority_color(priority: &Priority) -> Color {
    match priority {
        Priority::Low => Color::DarkGray,
        Priority::Medium => Color::Cyan,
        Priority::High => Color::Yellow,
        Priority::Critical => Color::Red,
    }
}

pub fn tech_status_color(status: &TechStatus) -> Color {
    match status {
        TechStatus::Available => Color::Green,
        TechStatus::Busy => Color::Red,
        TechStatus::Away => Color::Yellow,
        TechStatus::Offline => Color::DarkGray,
    }
}

pub fn incident_status_color(status: &IncidentStatus) -> Color {
    match status {
        IncidentStatus::Active => Color::Red,
        IncidentStatus::Investigating => Color::Yellow,
        IncidentStatus::Identified => Color::Cyan,
        IncidentStatus::Monitoring => Color::Blue,
        IncidentStatus::Resolved => Color::Green,
    }
}

pub fn task_status_color(status: &TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::Yellow,
        TaskStatus::InProgress => Color::Cyan,
        TaskStatus::Completed => Color::Green,
    }
}
