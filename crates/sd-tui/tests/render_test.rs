//! Render tests for every view in the dashboard.
//!
//! Each test draws the full UI into a 120x40 test backend (a comfortable
//! wide terminal) and checks that the expected content shows up in the
//! buffer. Smaller and larger terminal sizes get a no-panic sweep at the
//! end.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use sd_core::config::Config;

// Include binary-crate modules via path for testing.
#[path = "../src/api_client.rs"]
mod api_client;
#[path = "../src/app.rs"]
mod app;
#[path = "../src/command.rs"]
mod command;
#[path = "../src/ui.rs"]
mod ui;
#[path = "../src/views/mod.rs"]
mod views;
#[path = "../src/widgets/mod.rs"]
mod widgets;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Standard terminal size for render tests: 120 cols x 40 rows.
const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

/// Tab hotkeys in slot order, as shown in the tab bar.
const HOTKEYS: [char; 15] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'T', 'A', 'R', 'U', 'S',
];

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a fresh App on fixture data, no backend.
fn demo_app() -> app::App {
    app::App::new(Config::default(), true)
}

/// Render the full UI into a test backend and return the buffer content as
/// a single string (all rows joined with newlines).
fn render_to_string(app: &app::App) -> String {
    render_sized(app, WIDTH, HEIGHT)
}

fn render_sized(app: &app::App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Switch to a tab slot by pressing its hotkey, then render.
fn render_view(slot: usize) -> String {
    let mut app = demo_app();
    switch_to(&mut app, slot);
    render_to_string(&app)
}

fn switch_to(app: &mut app::App, slot: usize) {
    app.on_key(key(KeyCode::Char(HOTKEYS[slot])));
}

fn assert_contains(output: &str, needle: &str) {
    assert!(
        output.contains(needle),
        "Expected to find {:?} in rendered output.\nFull output:\n{}",
        needle,
        output
    );
}

fn assert_contains_all(output: &str, needles: &[&str]) {
    for needle in needles {
        assert_contains(output, needle);
    }
}

// ===========================================================================
// Tab bar and status bar
// ===========================================================================

#[test]
fn render_tab_bar_shows_app_title() {
    let output = render_view(0);
    assert_contains(&output, " servicedesk ");
}

#[test]
fn render_tab_bar_shows_hotkey_titles() {
    let output = render_view(0);
    assert_contains_all(&output, &["1:Dashboard", "2:Tickets(5)", "4:Incidents(2)"]);
}

#[test]
fn render_tab_bar_counts_open_work() {
    let output = render_view(0);
    // 2 tasks not completed, 1 reminder overdue
    assert_contains_all(&output, &["7:Tasks(2)", "8:Reminders(1)"]);
}

#[test]
fn render_status_bar_shows_operator_and_mode() {
    let output = render_view(0);
    assert_contains(&output, "John Doe");
    assert_contains(&output, "LOCAL");
}

#[test]
fn render_status_bar_shows_command_line_while_typing() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char(':')));
    app.on_key(key(KeyCode::Char('v')));
    app.on_key(key(KeyCode::Char('i')));
    let output = render_to_string(&app);
    assert_contains(&output, ":vi_");
}

// ===========================================================================
// Dashboard
// ===========================================================================

#[test]
fn render_dashboard_shows_kpi_cards() {
    let output = render_view(0);
    assert_contains_all(
        &output,
        &["Total", "Open", "In Progress", "Resolved Today", "Critical"],
    );
    // 45 total tickets from the demo stats
    assert_contains(&output, "45");
}

#[test]
fn render_dashboard_lists_recent_tickets() {
    let output = render_view(0);
    assert_contains_all(&output, &[" Recent Tickets ", "INC-001", "Email server down"]);
}

#[test]
fn render_dashboard_shows_active_incidents_and_announcements() {
    let output = render_view(0);
    assert_contains_all(
        &output,
        &[
            " Major Incidents ",
            "Email Server Outage",
            " Announcements ",
            "Scheduled Maintenance Window",
        ],
    );
}

#[test]
fn render_dashboard_empty_store_shows_placeholder() {
    let mut app = demo_app();
    app.store.replace_all(vec![]);
    let output = render_to_string(&app);
    assert_contains(&output, "No tickets yet.");
}

// ===========================================================================
// Tickets
// ===========================================================================

#[test]
fn render_tickets_table_with_counts() {
    let output = render_view(1);
    assert_contains(&output, " Tickets (5/5)  filter: All ");
    assert_contains_all(&output, &["ID", "Title", "Status", "Priority", "Assignee"]);
}

#[test]
fn render_tickets_rows_from_fixture_data() {
    let output = render_view(1);
    assert_contains_all(
        &output,
        &[
            "INC-001",
            "Email server down - urgent",
            "In Progress",
            "SR-002",
            "New user account setup",
            "Sarah Wilson",
        ],
    );
}

#[test]
fn render_tickets_selection_marker_on_first_row() {
    let output = render_view(1);
    assert_contains(&output, "> ");
}

#[test]
fn render_tickets_filter_shrinks_the_list() {
    let mut app = demo_app();
    switch_to(&mut app, 1);
    app.on_key(key(KeyCode::Char('f')));
    let output = render_to_string(&app);
    assert_contains(&output, " Tickets (2/5)  filter: Open ");
    assert_contains(&output, "VPN connection issues");
}

#[test]
fn render_tickets_empty_store_shows_placeholder() {
    let mut app = demo_app();
    switch_to(&mut app, 1);
    app.store.replace_all(vec![]);
    let output = render_to_string(&app);
    assert_contains(&output, "No tickets match the current filter.");
}

// ===========================================================================
// Ticket details
// ===========================================================================

#[test]
fn render_details_shows_fields_and_description() {
    let mut app = demo_app();
    switch_to(&mut app, 1);
    app.on_key(key(KeyCode::Enter));
    let output = render_to_string(&app);
    assert_contains_all(
        &output,
        &[
            " INC-001 ",
            "Email server down - urgent",
            " Description ",
            " Quick Actions ",
            "Requester",
        ],
    );
}

#[test]
fn render_details_quick_actions_reflect_status() {
    let mut app = demo_app();
    switch_to(&mut app, 1);
    app.on_key(key(KeyCode::Enter));
    let output = render_to_string(&app);
    assert_contains_all(
        &output,
        &["[t] Take ticket", "[v] Mark resolved", "[c] Close ticket"],
    );
}

#[test]
fn render_details_missing_ticket_fallback() {
    let mut app = demo_app();
    app.view = app::View::TicketDetails {
        ticket_id: "INC-999".to_string(),
    };
    let output = render_to_string(&app);
    assert_contains(&output, "Ticket INC-999 is no longer in the list.");
}

// ===========================================================================
// Create ticket
// ===========================================================================

#[test]
fn render_create_form_fields() {
    let output = render_view(2);
    assert_contains_all(
        &output,
        &[
            " Create Ticket ",
            "Title",
            "Description",
            "Type",
            "Priority",
            "Category",
            "Requester",
            "[ Create Ticket ]",
        ],
    );
}

#[test]
fn render_create_form_shows_choice_values() {
    let output = render_view(2);
    assert_contains_all(&output, &["< Incident >", "< = Medium >", "< Hardware >"]);
}

#[test]
fn render_create_form_shows_validation_error() {
    let mut app = demo_app();
    switch_to(&mut app, 2);
    // Jump straight to Submit and trigger validation with empty fields.
    for _ in 0..8 {
        app.on_key(key(KeyCode::Down));
    }
    app.on_key(key(KeyCode::Enter));
    let output = render_to_string(&app);
    assert_contains(&output, "Title, description and requester are required.");
}

// ===========================================================================
// Major incidents
// ===========================================================================

#[test]
fn render_incidents_summary_cards() {
    let output = render_view(3);
    assert_contains_all(
        &output,
        &[" Active ", " Impacted Users ", " Avg Resolution ", "2.5h"],
    );
    // 1250 + 350 impacted users across the two active incidents
    assert_contains(&output, "1600");
}

#[test]
fn render_incidents_list_and_detail() {
    let output = render_view(3);
    assert_contains_all(
        &output,
        &[
            "MAJ-001",
            "Email Server Outage - Exchange Online",
            "Jane Smith",
            "Affected services",
            "Workarounds",
            "Latest updates",
        ],
    );
}

#[test]
fn render_incidents_detail_follows_selection() {
    let mut app = demo_app();
    switch_to(&mut app, 3);
    app.on_key(key(KeyCode::Char('j')));
    let output = render_to_string(&app);
    assert_contains(&output, "Network Connectivity Issues - Building A");
    assert_contains(&output, "Sarah Wilson");
}

// ===========================================================================
// Scheduler
// ===========================================================================

#[test]
fn render_scheduler_today_and_upcoming_panes() {
    let output = render_view(4);
    assert_contains_all(&output, &[" Today ", " Upcoming ", "Security Training"]);
}

#[test]
fn render_scheduler_full_table() {
    let output = render_view(4);
    assert_contains_all(
        &output,
        &[
            " Schedule (3)  filter: All ",
            "Server Maintenance",
            "On-Call Shift",
            "Data Center",
        ],
    );
}

// ===========================================================================
// Tech availability
// ===========================================================================

#[test]
fn render_techs_summary_counts() {
    let output = render_view(5);
    assert_contains_all(
        &output,
        &[" Available 2 ", " Busy 1 ", " Away 1 ", " Offline 0 "],
    );
}

#[test]
fn render_techs_roster_and_detail() {
    let output = render_view(5);
    assert_contains_all(
        &output,
        &[
            " Roster ",
            "John Doe",
            "Available",
            "Email server maintenance",
            "65%",
            "workload",
        ],
    );
}

#[test]
fn render_techs_assign_prompt_when_active() {
    let mut app = demo_app();
    switch_to(&mut app, 5);
    app.on_key(key(KeyCode::Char('a')));
    app.on_key(key(KeyCode::Char('S')));
    app.on_key(key(KeyCode::Char('R')));
    let output = render_to_string(&app);
    assert_contains(&output, "Assign ticket id: SR_");
}

// ===========================================================================
// Tasks
// ===========================================================================

#[test]
fn render_tasks_table() {
    let output = render_view(6);
    assert_contains_all(
        &output,
        &[
            "T-001",
            "Update server security patches",
            "T-002",
            "Backup system verification",
            "INC-001",
        ],
    );
}

#[test]
fn render_tasks_filter_cycles_to_pending() {
    let mut app = demo_app();
    switch_to(&mut app, 6);
    app.on_key(key(KeyCode::Char('f')));
    let output = render_to_string(&app);
    assert_contains(&output, "filter: Pending ");
    assert_contains(&output, "Backup system verification");
    assert!(!output.contains("Network performance analysis"));
}

// ===========================================================================
// Reminders
// ===========================================================================

#[test]
fn render_reminders_marks_overdue() {
    let output = render_view(7);
    assert_contains_all(
        &output,
        &["Follow up on VPN issue", "OVERDUE", "[ ] ", "Monthly server maintenance"],
    );
}

// ===========================================================================
// Announcements
// ===========================================================================

#[test]
fn render_announcements_list_and_content() {
    let output = render_view(8);
    assert_contains_all(
        &output,
        &[
            "Scheduled Maintenance Window",
            "New Security Policy Update",
            " Content ",
            "The email servers will undergo maintenance",
        ],
    );
}

// ===========================================================================
// Copilot
// ===========================================================================

#[test]
fn render_copilot_greeting_and_suggestions() {
    let output = render_view(9);
    assert_contains_all(
        &output,
        &[
            "Copilot",
            "Microsoft 365 Copilot assistant",
            "Create a new incident ticket",
            "Find resolution for VPN problems",
        ],
    );
}

#[test]
fn render_copilot_input_box_focused() {
    let output = render_view(9);
    assert_contains(&output, " Message (Enter sends, Esc for actions) ");
}

#[test]
fn render_copilot_typing_indicator_while_pending() {
    let mut app = demo_app();
    switch_to(&mut app, 9);
    for c in "help".chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
    app.on_key(key(KeyCode::Enter));
    let output = render_to_string(&app);
    assert_contains(&output, "Copilot is typing...");
}

#[test]
fn render_copilot_action_buttons_after_reply() {
    let mut app = demo_app();
    switch_to(&mut app, 9);
    for c in "email is down".chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
    app.on_key(key(KeyCode::Enter));
    app.tick(std::time::Instant::now() + std::time::Duration::from_secs(60));
    let output = render_to_string(&app);
    assert_contains_all(
        &output,
        &["[1] Create Email Incident", "[2] Search Email Solutions"],
    );
}

// ===========================================================================
// Teams
// ===========================================================================

#[test]
fn render_teams_integration_status() {
    let output = render_view(10);
    assert_contains_all(
        &output,
        &[
            " Microsoft Teams Integration ",
            "Connected and Active",
            "Chat Support",
            "Microsoft 365 Copilot",
            "Workflow Automation",
        ],
    );
}

#[test]
fn render_teams_tab_feature_list() {
    let output = render_view(10);
    assert_contains_all(
        &output,
        &[
            " ServiceDesk Teams Tab ",
            "Dashboard - Real-time overview of tickets",
            "Tech Availability Chart - Live technician",
        ],
    );
}

// ===========================================================================
// Placeholders and settings
// ===========================================================================

#[test]
fn render_placeholder_views() {
    for (slot, name) in [(11, "Agents"), (12, "Reports"), (13, "Automation")] {
        let output = render_view(slot);
        assert_contains(&output, &format!("{name} - Coming soon"));
    }
}

#[test]
fn render_settings_shows_session_and_config() {
    let output = render_view(14);
    assert_contains_all(
        &output,
        &[
            " Session ",
            "Operator: ",
            "LOCAL (fixture data only)",
            " Configuration (~/.servicedesk/config.toml) ",
            "tick_ms",
        ],
    );
}

// ===========================================================================
// Modals
// ===========================================================================

#[test]
fn render_help_modal_over_content() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('?')));
    let output = render_to_string(&app);
    assert_contains_all(
        &output,
        &[" Help ", "Views", "Ticket details", "cycle suggested prompts"],
    );
}

#[test]
fn render_alert_modal_over_content() {
    let mut app = demo_app();
    app.raise_alert("Unknown Ticket", "No ticket with id INC-999 in the current list.");
    let output = render_to_string(&app);
    assert_contains_all(
        &output,
        &[" Unknown Ticket ", "INC-999", "Press Enter to dismiss"],
    );
}

// ===========================================================================
// Size sweeps
// ===========================================================================

#[test]
fn render_all_views_on_a_small_terminal() {
    for slot in 0..app::View::TAB_COUNT {
        let mut app = demo_app();
        switch_to(&mut app, slot);
        let output = render_sized(&app, 80, 24);
        assert!(!output.is_empty());
    }
}

#[test]
fn render_all_views_on_a_large_terminal() {
    for slot in 0..app::View::TAB_COUNT {
        let mut app = demo_app();
        switch_to(&mut app, slot);
        let output = render_sized(&app, 200, 50);
        assert!(!output.is_empty());
    }
}

#[test]
fn render_details_and_modals_on_a_small_terminal() {
    let mut app = demo_app();
    switch_to(&mut app, 1);
    app.on_key(key(KeyCode::Enter));
    let _ = render_sized(&app, 80, 24);
    app.on_key(key(KeyCode::Char('?')));
    let _ = render_sized(&app, 80, 24);
}
