use std::time::{Duration, Instant};

use sd_core::types::TicketStatus;

use crate::app::{App, View};

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Everything the command line understands. The same set backs the
/// interactive `:` prompt and headless stdin, so a scripted session and a
/// human session can do exactly the same things.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SwitchView(String),
    NextView,
    PrevView,
    Up,
    Down,
    Select(usize),
    Back,
    Filter,
    Create(String),
    Assign { id: String, assignee: String },
    Status { id: String, status: String },
    Ask(String),
    Tick(u64),
    Refresh,
    State,
    Tickets,
    Selected,
    Quit,
    Help,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a `:verb [args]` line. Returns None for anything unrecognized.
pub fn parse_command(input: &str) -> Option<AppCommand> {
    let rest = input.trim().strip_prefix(':')?;
    let mut parts = rest.splitn(2, ' ');
    let verb = parts.next()?.trim();
    let arg = parts.next().map(str::trim).unwrap_or("");

    match verb {
        "view" | "v" => (!arg.is_empty()).then(|| AppCommand::SwitchView(arg.to_string())),
        "next" | "n" => Some(AppCommand::NextView),
        "prev" | "p" => Some(AppCommand::PrevView),
        "up" | "k" => Some(AppCommand::Up),
        "down" | "j" => Some(AppCommand::Down),
        "select" | "sel" => arg.parse().ok().map(AppCommand::Select),
        "back" | "b" => Some(AppCommand::Back),
        "filter" | "f" => Some(AppCommand::Filter),
        "create" => (!arg.is_empty()).then(|| AppCommand::Create(arg.to_string())),
        "assign" => {
            let mut pieces = arg.splitn(2, ' ');
            let id = pieces.next()?.trim();
            let assignee = pieces.next()?.trim();
            (!id.is_empty() && !assignee.is_empty()).then(|| AppCommand::Assign {
                id: id.to_string(),
                assignee: assignee.to_string(),
            })
        }
        "status" => {
            let mut pieces = arg.splitn(2, ' ');
            let id = pieces.next()?.trim();
            let status = pieces.next()?.trim();
            (!id.is_empty() && !status.is_empty()).then(|| AppCommand::Status {
                id: id.to_string(),
                status: status.to_string(),
            })
        }
        "ask" => (!arg.is_empty()).then(|| AppCommand::Ask(arg.to_string())),
        "tick" => arg.parse().ok().map(AppCommand::Tick),
        "refresh" | "r" => Some(AppCommand::Refresh),
        "state" => Some(AppCommand::State),
        "tickets" => Some(AppCommand::Tickets),
        "selected" => Some(AppCommand::Selected),
        "quit" | "q" | "exit" => Some(AppCommand::Quit),
        "help" | "h" | "?" => Some(AppCommand::Help),
        _ => None,
    }
}

/// Parse the JSON command form: `{"cmd": "view", "args": ["tickets"]}`.
pub fn parse_json_command(input: &str) -> Option<AppCommand> {
    let value: serde_json::Value = serde_json::from_str(input.trim()).ok()?;
    let cmd = value.get("cmd")?.as_str()?;
    let arg_str =
        |i: usize| -> Option<String> { Some(value.get("args")?.get(i)?.as_str()?.to_string()) };
    let arg_u64 = |i: usize| -> Option<u64> { value.get("args")?.get(i)?.as_u64() };

    match cmd {
        "view" => arg_str(0).map(AppCommand::SwitchView),
        "next" => Some(AppCommand::NextView),
        "prev" => Some(AppCommand::PrevView),
        "up" => Some(AppCommand::Up),
        "down" => Some(AppCommand::Down),
        "select" => arg_u64(0).map(|n| AppCommand::Select(n as usize)),
        "back" => Some(AppCommand::Back),
        "filter" => Some(AppCommand::Filter),
        "create" => arg_str(0).map(AppCommand::Create),
        "assign" => Some(AppCommand::Assign {
            id: arg_str(0)?,
            assignee: arg_str(1)?,
        }),
        "status" => Some(AppCommand::Status {
            id: arg_str(0)?,
            status: arg_str(1)?,
        }),
        "ask" => arg_str(0).map(AppCommand::Ask),
        "tick" => arg_u64(0).map(AppCommand::Tick),
        "refresh" => Some(AppCommand::Refresh),
        "state" => Some(AppCommand::State),
        "tickets" => Some(AppCommand::Tickets),
        "selected" => Some(AppCommand::Selected),
        "quit" => Some(AppCommand::Quit),
        "help" => Some(AppCommand::Help),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Apply a command to the app. Query commands return a JSON payload for
/// stdout; mutations return None.
pub fn execute_command(app: &mut App, command: AppCommand) -> Option<String> {
    match command {
        AppCommand::SwitchView(name) => {
            if let Some(view) = View::from_command_name(&name) {
                app.set_view(view);
            }
            None
        }
        AppCommand::NextView => {
            app.next_view();
            None
        }
        AppCommand::PrevView => {
            app.prev_view();
            None
        }
        AppCommand::Up => {
            if app.selected > 0 {
                app.selected -= 1;
            }
            None
        }
        AppCommand::Down => {
            let len = app.current_list_len();
            if len > 0 && app.selected + 1 < len {
                app.selected += 1;
            }
            None
        }
        AppCommand::Select(index) => {
            if index < app.current_list_len() {
                app.selected = index;
            }
            None
        }
        AppCommand::Back => {
            if matches!(app.view, View::TicketDetails { .. }) {
                app.set_view(View::Tickets);
            }
            None
        }
        AppCommand::Filter => {
            app.cycle_filter();
            None
        }
        AppCommand::Create(title) => {
            app.quick_create(&title);
            None
        }
        AppCommand::Assign { id, assignee } => {
            app.assign_ticket(&id.to_uppercase(), &assignee);
            None
        }
        AppCommand::Status { id, status } => {
            match parse_status(&status) {
                Some(parsed) => app.change_ticket_status(&id.to_uppercase(), parsed),
                None => app.raise_alert(
                    "Unknown Status",
                    format!("No such ticket status: {status}"),
                ),
            }
            None
        }
        AppCommand::Ask(text) => {
            app.set_view(View::Copilot);
            app.submit_copilot(&text);
            None
        }
        AppCommand::Tick(ms) => {
            app.tick(Instant::now() + Duration::from_millis(ms));
            None
        }
        AppCommand::Refresh => {
            app.refresh();
            None
        }
        AppCommand::State => Some(serialize_state(app)),
        AppCommand::Tickets => Some(serialize_tickets(app)),
        AppCommand::Selected => Some(serialize_selected(app)),
        AppCommand::Quit => {
            app.should_quit = true;
            None
        }
        AppCommand::Help => {
            app.show_help = true;
            None
        }
    }
}

fn parse_status(raw: &str) -> Option<TicketStatus> {
    match raw.trim().to_lowercase().replace('-', "_").as_str() {
        "open" => Some(TicketStatus::Open),
        "in_progress" | "inprogress" => Some(TicketStatus::InProgress),
        "resolved" => Some(TicketStatus::Resolved),
        "closed" => Some(TicketStatus::Closed),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Query payloads
// ---------------------------------------------------------------------------

fn serialize_state(app: &App) -> String {
    serde_json::json!({
        "event": "state",
        "view": app.view.name(),
        "selected": app.selected,
        "list_len": app.current_list_len(),
        "connection": app.connection_label(),
        "tickets": app.store.len(),
        "filter": current_filter_label(app),
        "alert": app.alert.as_ref().map(|a| a.title.clone()),
    })
    .to_string()
}

fn current_filter_label(app: &App) -> Option<&'static str> {
    match &app.view {
        View::Tickets => Some(
            app.ticket_filter
                .as_ref()
                .map(|f| f.label())
                .unwrap_or("All"),
        ),
        View::MajorIncidents => Some(
            app.incident_filter
                .as_ref()
                .map(|f| f.label())
                .unwrap_or("All"),
        ),
        View::Scheduler => Some(
            app.event_filter
                .as_ref()
                .map(|f| f.label())
                .unwrap_or("All"),
        ),
        View::Tasks => Some(
            app.task_filter
                .as_ref()
                .map(|f| f.label())
                .unwrap_or("All"),
        ),
        View::Reminders => Some(app.reminder_filter.label()),
        View::Announcements => Some(
            app.announcement_filter
                .as_ref()
                .map(|f| f.label())
                .unwrap_or("All"),
        ),
        _ => None,
    }
}

fn serialize_tickets(app: &App) -> String {
    let rows: Vec<serde_json::Value> = app
        .store
        .tickets()
        .iter()
        .map(|t| {
            serde_json::json!({
                "id": t.id,
                "title": t.title,
                "status": t.status.label(),
                "priority": t.priority.label(),
                "assignee": t.assignee,
            })
        })
        .collect();
    serde_json::json!({
        "event": "tickets",
        "count": rows.len(),
        "tickets": rows,
    })
    .to_string()
}

fn serialize_selected(app: &App) -> String {
    let item = match &app.view {
        View::Tickets => app.filtered_tickets().get(app.selected).map(|t| {
            serde_json::json!({
                "id": t.id,
                "title": t.title,
                "status": t.status.label(),
            })
        }),
        View::TicketDetails { ticket_id } => app.store.get(ticket_id).map(|t| {
            serde_json::json!({
                "id": t.id,
                "title": t.title,
                "status": t.status.label(),
            })
        }),
        View::MajorIncidents => app.filtered_incidents().get(app.selected).map(|i| {
            serde_json::json!({
                "id": i.id,
                "title": i.title,
                "status": i.status.label(),
            })
        }),
        View::Scheduler => app.filtered_events().get(app.selected).map(|e| {
            serde_json::json!({
                "id": e.id,
                "title": e.title,
                "kind": e.kind.label(),
            })
        }),
        View::TechAvailability => app.technicians.get(app.selected).map(|t| {
            serde_json::json!({
                "id": t.id,
                "name": t.name,
                "status": t.status.label(),
            })
        }),
        View::Tasks => app.filtered_tasks().get(app.selected).map(|t| {
            serde_json::json!({
                "id": t.id,
                "title": t.title,
                "status": t.status.label(),
            })
        }),
        View::Reminders => app.filtered_reminders().get(app.selected).map(|r| {
            serde_json::json!({
                "id": r.id,
                "title": r.title,
                "completed": r.completed,
            })
        }),
        View::Announcements => app.filtered_announcements().get(app.selected).map(|a| {
            serde_json::json!({
                "id": a.id,
                "title": a.title,
                "category": a.category.label(),
            })
        }),
        View::Copilot => app.last_actions().get(app.selected).map(|a| {
            serde_json::json!({
                "id": a.id,
                "title": a.title,
            })
        }),
        _ => None,
    };
    serde_json::json!({
        "event": "selected",
        "view": app.view.name(),
        "item": item,
    })
    .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
