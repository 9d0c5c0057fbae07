//! Key-driven state machine tests: everything a user can do from the
//! keyboard, checked against app state rather than pixels.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use sd_core::config::Config;
use sd_core::types::{MessageAuthor, TechStatus, TicketStatus};

// We reference types from the binary crate by including modules directly.
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

use app::{App, View};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn demo_app() -> App {
    App::new(Config::default(), true)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
}

/// A tick far enough in the future that any pending reply is due.
fn later() -> Instant {
    Instant::now() + Duration::from_secs(60)
}

// ---------------------------------------------------------------------------
// Startup and navigation
// ---------------------------------------------------------------------------

#[test]
fn test_app_new_creates_valid_state() {
    let app = demo_app();
    assert_eq!(app.view, View::Dashboard);
    assert!(!app.should_quit);
    assert!(!app.show_help);
    assert_eq!(app.store.len(), 5);
    assert_eq!(app.technicians.len(), 4);
    assert_eq!(app.incidents.len(), 2);
    assert_eq!(app.operator, "John Doe");
    assert_eq!(app.connection_label(), "LOCAL");
}

#[test]
fn test_digit_keys_switch_views() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    assert_eq!(app.view, View::Tickets);
    app.on_key(key(KeyCode::Char('5')));
    assert_eq!(app.view, View::Scheduler);
    app.on_key(key(KeyCode::Char('0')));
    assert_eq!(app.view, View::Copilot);
}

#[test]
fn test_uppercase_keys_reach_the_tail_views() {
    let mut app = demo_app();
    for (c, view) in [
        ('T', View::Teams),
        ('A', View::Agents),
        ('R', View::Reports),
        ('U', View::Automation),
        ('S', View::Settings),
    ] {
        app.on_key(key(KeyCode::Char(c)));
        assert_eq!(app.view, view);
    }
}

#[test]
fn test_view_names_match_the_config_vocabulary() {
    // `ui.default_view` validation and `View::from_command_name` must accept
    // the same spellings, or a validated config could still fall back to the
    // dashboard at startup.
    assert_eq!(sd_core::config::VIEW_NAMES.len(), View::TAB_COUNT);
    for slot in 0..View::TAB_COUNT {
        let view = View::at_tab(slot).unwrap();
        assert!(
            sd_core::config::VIEW_NAMES.contains(&view.name()),
            "tab {slot} name {:?} missing from the config vocabulary",
            view.name()
        );
    }
    for name in sd_core::config::VIEW_NAMES {
        let view = View::from_command_name(name)
            .unwrap_or_else(|| panic!("view name {name:?} does not resolve"));
        assert_eq!(view.name(), *name);
        assert!(sd_core::config::is_view_name(name));
    }
    for alias in sd_core::config::VIEW_NAME_ALIASES {
        assert!(
            View::from_command_name(alias).is_some(),
            "alias {alias:?} does not resolve"
        );
        assert!(sd_core::config::is_view_name(alias));
    }
}

#[test]
fn test_tab_cycles_and_wraps() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.view, View::Tickets);
    for _ in 0..(View::TAB_COUNT - 1) {
        app.on_key(key(KeyCode::Tab));
    }
    assert_eq!(app.view, View::Dashboard);
    app.on_key(key(KeyCode::BackTab));
    assert_eq!(app.view, View::Settings);
}

#[test]
fn test_switching_views_resets_selection() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    app.on_key(key(KeyCode::Char('j')));
    app.on_key(key(KeyCode::Char('j')));
    assert_eq!(app.selected, 2);
    app.on_key(key(KeyCode::Char('4')));
    assert_eq!(app.selected, 0);
}

#[test]
fn test_q_quits_and_ctrl_c_quits_through_modals() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);

    let mut app = demo_app();
    app.raise_alert("Backend Error", "boom");
    app.on_key(ctrl('c'));
    assert!(app.should_quit);
}

// ---------------------------------------------------------------------------
// List selection and filters
// ---------------------------------------------------------------------------

#[test]
fn test_selection_clamps_at_both_ends() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    for _ in 0..10 {
        app.on_key(key(KeyCode::Char('j')));
    }
    assert_eq!(app.selected, 4);
    for _ in 0..10 {
        app.on_key(key(KeyCode::Char('k')));
    }
    assert_eq!(app.selected, 0);
    app.on_key(key(KeyCode::Down));
    assert_eq!(app.selected, 1);
    app.on_key(key(KeyCode::Up));
    assert_eq!(app.selected, 0);
}

#[test]
fn test_filter_cycles_through_statuses_and_back() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    assert_eq!(app.ticket_filter, None);
    let expected = [
        Some(TicketStatus::Open),
        Some(TicketStatus::InProgress),
        Some(TicketStatus::Resolved),
        Some(TicketStatus::Closed),
        None,
    ];
    for want in expected {
        app.on_key(key(KeyCode::Char('f')));
        assert_eq!(app.ticket_filter, want);
    }
}

#[test]
fn test_filter_resets_selection() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    app.on_key(key(KeyCode::Char('j')));
    app.on_key(key(KeyCode::Char('f')));
    assert_eq!(app.selected, 0);
}

#[test]
fn test_filtered_tickets_match_the_filter() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    app.on_key(key(KeyCode::Char('f')));
    let open: Vec<&str> = app.filtered_tickets().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(open, vec!["SR-002", "INC-003"]);
}

// ---------------------------------------------------------------------------
// Ticket details and quick actions
// ---------------------------------------------------------------------------

#[test]
fn test_enter_opens_details_for_selected_ticket() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    app.on_key(key(KeyCode::Char('j')));
    app.on_key(key(KeyCode::Enter));
    assert_eq!(
        app.view,
        View::TicketDetails {
            ticket_id: "SR-002".to_string()
        }
    );
}

#[test]
fn test_esc_and_backspace_leave_details() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Esc));
    assert_eq!(app.view, View::Tickets);

    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Backspace));
    assert_eq!(app.view, View::Tickets);
}

#[test]
fn test_take_assigns_the_ticket_to_the_operator() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    app.on_key(key(KeyCode::Char('j')));
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Char('t')));
    assert_eq!(app.store.get("SR-002").unwrap().assignee, "John Doe");
}

#[test]
fn test_resolve_close_reopen_lifecycle() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    // INC-003 is Open; walk it through resolve -> close -> reopen.
    app.on_key(key(KeyCode::Char('j')));
    app.on_key(key(KeyCode::Char('j')));
    app.on_key(key(KeyCode::Enter));

    app.on_key(key(KeyCode::Char('v')));
    assert_eq!(
        app.store.get("INC-003").unwrap().status,
        TicketStatus::Resolved
    );

    app.on_key(key(KeyCode::Char('c')));
    assert_eq!(
        app.store.get("INC-003").unwrap().status,
        TicketStatus::Closed
    );

    app.on_key(key(KeyCode::Char('o')));
    assert_eq!(app.store.get("INC-003").unwrap().status, TicketStatus::Open);
}

#[test]
fn test_close_requires_resolved_first() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    app.on_key(key(KeyCode::Enter));
    // INC-001 is In Progress: close must be a no-op.
    app.on_key(key(KeyCode::Char('c')));
    assert_eq!(
        app.store.get("INC-001").unwrap().status,
        TicketStatus::InProgress
    );
}

#[test]
fn test_resolve_is_a_noop_on_resolved_tickets() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    for _ in 0..3 {
        app.on_key(key(KeyCode::Char('j')));
    }
    app.on_key(key(KeyCode::Enter));
    // SR-004 is already Resolved.
    app.on_key(key(KeyCode::Char('v')));
    assert_eq!(
        app.store.get("SR-004").unwrap().status,
        TicketStatus::Resolved
    );
}

// ---------------------------------------------------------------------------
// Create ticket form
// ---------------------------------------------------------------------------

#[test]
fn test_form_submit_creates_a_ticket_and_lands_on_the_list() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('3')));
    type_text(&mut app, "Broken mouse");
    app.on_key(key(KeyCode::Down));
    type_text(&mut app, "Left button does nothing");
    // Description -> Kind -> Priority -> Category -> Subcategory -> Requester
    for _ in 0..5 {
        app.on_key(key(KeyCode::Down));
    }
    type_text(&mut app, "Mike Johnson");
    // Requester -> Assignee -> Submit
    app.on_key(key(KeyCode::Down));
    app.on_key(key(KeyCode::Down));
    app.on_key(key(KeyCode::Enter));

    assert_eq!(app.view, View::Tickets);
    assert_eq!(app.store.len(), 6);
    let head = &app.store.tickets()[0];
    assert_eq!(head.id, "INC-006");
    assert_eq!(head.title, "Broken mouse");
    assert_eq!(head.status, TicketStatus::Open);
    assert_eq!(head.assignee, "Unassigned");
    assert_eq!(head.category, "Hardware");
    assert_eq!(app.selected, 0);
}

#[test]
fn test_form_validation_blocks_empty_submissions() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('3')));
    for _ in 0..8 {
        app.on_key(key(KeyCode::Down));
    }
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.view, View::CreateTicket);
    assert_eq!(app.store.len(), 5);
    assert!(app.form.error.is_some());
}

#[test]
fn test_form_choices_cycle_with_left_right() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('3')));
    app.on_key(key(KeyCode::Down));
    app.on_key(key(KeyCode::Down));
    // Kind field
    app.on_key(key(KeyCode::Right));
    assert_eq!(app.form.kind, sd_core::types::TicketKind::ServiceRequest);
    app.on_key(key(KeyCode::Right));
    assert_eq!(app.form.kind, sd_core::types::TicketKind::Incident);
    // Priority field
    app.on_key(key(KeyCode::Down));
    app.on_key(key(KeyCode::Right));
    assert_eq!(app.form.priority, sd_core::types::Priority::High);
    app.on_key(key(KeyCode::Left));
    assert_eq!(app.form.priority, sd_core::types::Priority::Medium);
}

#[test]
fn test_form_typing_never_triggers_navigation() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('3')));
    // 'q', digits and uppercase hotkeys are all plain text here.
    type_text(&mut app, "q2TS0");
    assert_eq!(app.view, View::CreateTicket);
    assert!(!app.should_quit);
    assert_eq!(app.form.title, "q2TS0");
}

#[test]
fn test_form_esc_returns_to_tickets() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('3')));
    app.on_key(key(KeyCode::Esc));
    assert_eq!(app.view, View::Tickets);
}

// ---------------------------------------------------------------------------
// Copilot
// ---------------------------------------------------------------------------

#[test]
fn test_entering_copilot_greets_and_focuses_input() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('0')));
    assert_eq!(app.copilot.messages.len(), 1);
    assert_eq!(app.copilot.messages[0].author, MessageAuthor::Assistant);
    assert!(app.copilot.input_focused);
    assert!(app.copilot.pending.is_none());
}

#[test]
fn test_submit_schedules_a_single_delayed_reply() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('0')));
    type_text(&mut app, "my outlook is broken");
    app.on_key(key(KeyCode::Enter));

    assert_eq!(app.copilot.messages.len(), 2);
    assert!(app.copilot.is_typing());
    assert!(app.copilot.input.is_empty());

    // Before the deadline nothing is delivered.
    app.tick(Instant::now());
    assert_eq!(app.copilot.messages.len(), 2);

    app.tick(later());
    assert_eq!(app.copilot.messages.len(), 3);
    assert!(!app.copilot.is_typing());
    let reply = app.copilot.messages.last().unwrap();
    assert_eq!(reply.author, MessageAuthor::Assistant);
    assert!(reply.text.contains("email"));
    assert_eq!(reply.actions.len(), 2);

    // A second tick delivers nothing further.
    app.tick(later());
    assert_eq!(app.copilot.messages.len(), 3);
}

#[test]
fn test_empty_submit_is_rejected() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('0')));
    app.on_key(key(KeyCode::Enter));
    type_text(&mut app, "   ");
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.copilot.messages.len(), 1);
    assert!(app.copilot.pending.is_none());
}

#[test]
fn test_leaving_copilot_cancels_the_pending_reply() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('0')));
    type_text(&mut app, "hello");
    app.on_key(key(KeyCode::Enter));
    assert!(app.copilot.is_typing());

    app.on_key(key(KeyCode::Esc));
    app.on_key(key(KeyCode::Char('1')));
    assert_eq!(app.view, View::Dashboard);
    assert!(app.copilot.pending.is_none());
    assert!(app.copilot.messages.is_empty());

    // Ticking after the deadline must not resurrect the reply.
    app.tick(later());
    assert!(app.copilot.messages.is_empty());

    // Re-entering starts a fresh conversation.
    app.on_key(key(KeyCode::Char('0')));
    assert_eq!(app.copilot.messages.len(), 1);
}

#[test]
fn test_tab_prefills_suggestions_in_turn() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('0')));
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.copilot.input, "Create a new incident ticket");
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.copilot.input, "Search for email server issues");

    // Edited input stops the cycling.
    app.on_key(key(KeyCode::Char('!')));
    let edited = app.copilot.input.clone();
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.copilot.input, edited);
}

#[test]
fn test_action_buttons_run_from_the_action_list() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('0')));
    type_text(&mut app, "email trouble");
    app.on_key(key(KeyCode::Enter));
    app.tick(later());

    // Unfocus the input and run the second action.
    app.on_key(key(KeyCode::Esc));
    assert!(!app.copilot.input_focused);
    app.on_key(key(KeyCode::Char('j')));
    assert_eq!(app.selected, 1);
    app.on_key(key(KeyCode::Enter));

    let ack = app.copilot.messages.last().unwrap();
    assert_eq!(ack.author, MessageAuthor::Assistant);
    assert!(ack.text.contains("Search Email Solutions"));

    // The action list still points at the actions-bearing reply.
    assert_eq!(app.last_actions().len(), 2);

    // 'i' puts the cursor back in the input box.
    app.on_key(key(KeyCode::Char('i')));
    assert!(app.copilot.input_focused);
}

// ---------------------------------------------------------------------------
// Tech availability
// ---------------------------------------------------------------------------

#[test]
fn test_s_cycles_the_selected_technician_status() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('6')));
    app.on_key(key(KeyCode::Char('s')));
    assert_eq!(app.technicians[0].status, TechStatus::Busy);
    app.on_key(key(KeyCode::Char('s')));
    assert_eq!(app.technicians[0].status, TechStatus::Away);
}

#[test]
fn test_assign_mode_assigns_to_the_selected_technician() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('6')));
    app.on_key(key(KeyCode::Char('j')));
    // Jane Smith is selected; hand her INC-003 (typed in lowercase).
    app.on_key(key(KeyCode::Char('a')));
    assert!(app.assign_input.is_some());
    type_text(&mut app, "inc-003");
    app.on_key(key(KeyCode::Enter));

    assert_eq!(app.assign_input, None);
    assert_eq!(app.store.get("INC-003").unwrap().assignee, "Jane Smith");
    assert!(app.alert.is_none());
}

#[test]
fn test_assign_mode_esc_cancels() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('6')));
    app.on_key(key(KeyCode::Char('a')));
    type_text(&mut app, "INC-001");
    app.on_key(key(KeyCode::Esc));
    assert_eq!(app.assign_input, None);
    assert_eq!(app.store.get("INC-001").unwrap().assignee, "John Doe");
}

#[test]
fn test_assign_unknown_id_raises_an_alert() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('6')));
    app.on_key(key(KeyCode::Char('a')));
    type_text(&mut app, "INC-999");
    app.on_key(key(KeyCode::Enter));
    assert!(app.alert.is_some());
}

// ---------------------------------------------------------------------------
// Alert modal
// ---------------------------------------------------------------------------

#[test]
fn test_alert_blocks_keys_until_dismissed() {
    let mut app = demo_app();
    app.raise_alert("Unknown Ticket", "No ticket with id INC-999 in the current list.");

    app.on_key(key(KeyCode::Char('2')));
    assert_eq!(app.view, View::Dashboard);
    assert!(app.alert.is_some());

    app.on_key(key(KeyCode::Enter));
    assert!(app.alert.is_none());

    app.on_key(key(KeyCode::Char('2')));
    assert_eq!(app.view, View::Tickets);
}

// ---------------------------------------------------------------------------
// Help modal
// ---------------------------------------------------------------------------

#[test]
fn test_help_toggles_and_blocks_other_keys() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('?')));
    assert!(app.show_help);

    app.on_key(key(KeyCode::Char('2')));
    assert_eq!(app.view, View::Dashboard);

    app.on_key(key(KeyCode::Esc));
    assert!(!app.show_help);
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[test]
fn test_colon_opens_the_command_line_and_runs_commands() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char(':')));
    assert_eq!(app.command_input.as_deref(), Some(""));
    type_text(&mut app, "view tickets");
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.command_input, None);
    assert_eq!(app.view, View::Tickets);
}

#[test]
fn test_unknown_commands_report_feedback() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char(':')));
    type_text(&mut app, "frobnicate");
    app.on_key(key(KeyCode::Enter));
    assert_eq!(
        app.command_feedback.as_deref(),
        Some("unknown command: :frobnicate")
    );
    // The next keypress clears the feedback.
    app.on_key(key(KeyCode::Char('2')));
    assert_eq!(app.command_feedback, None);
}

#[test]
fn test_command_line_esc_cancels() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char(':')));
    type_text(&mut app, "quit");
    app.on_key(key(KeyCode::Esc));
    assert_eq!(app.command_input, None);
    assert!(!app.should_quit);
}

#[test]
fn test_command_create_prepends_a_ticket() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char(':')));
    type_text(&mut app, "create Projector lamp burnt out");
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.store.len(), 6);
    assert_eq!(app.store.tickets()[0].title, "Projector lamp burnt out");
}

#[test]
fn test_command_backspace_edits_the_buffer() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char(':')));
    type_text(&mut app, "qx");
    app.on_key(key(KeyCode::Backspace));
    app.on_key(key(KeyCode::Enter));
    assert!(app.should_quit);
}

// ---------------------------------------------------------------------------
// Refresh
// ---------------------------------------------------------------------------

#[test]
fn test_refresh_without_a_backend_changes_nothing() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('r')));
    assert_eq!(app.store.len(), 5);
    assert!(!app.api_connected);
    assert_eq!(app.connection_label(), "LOCAL");
}

#[test]
fn test_snapshot_failure_flips_the_indicator_only() {
    let mut app = App::new(
        Config {
            backend: sd_core::config::BackendConfig {
                url: "https://example.supabase.co".to_string(),
                anon_key: "anon".to_string(),
                ..Default::default()
            },
            ..Default::default()
        },
        false,
    );
    assert!(app.backend_enabled);

    let refused = || api_client::BackendError {
        status: 0,
        message: "connection refused".to_string(),
    };
    app.apply_snapshot(api_client::Snapshot {
        tickets: Err(refused()),
        technicians: Err(refused()),
    });
    assert!(!app.api_connected);
    assert_eq!(app.connection_label(), "OFFLINE");
    // Fixture data stays in place; failures never clear the lists.
    assert_eq!(app.store.len(), 5);
    assert!(app.alert.is_none());
}

#[test]
fn test_snapshot_success_replaces_tables_and_clamps_selection() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('2')));
    for _ in 0..4 {
        app.on_key(key(KeyCode::Char('j')));
    }
    assert_eq!(app.selected, 4);

    let two = sd_core::fixtures::demo_tickets()
        .into_iter()
        .take(2)
        .collect::<Vec<_>>();
    let roster = vec![api_client::TechnicianRow {
        id: "9".to_string(),
        name: "Pat Lee".to_string(),
        status: "available".to_string(),
    }
    .into_technician()];
    app.apply_snapshot(api_client::Snapshot {
        tickets: Ok(two),
        technicians: Ok(roster),
    });
    assert!(app.api_connected);
    assert_eq!(app.store.len(), 2);
    assert_eq!(app.selected, 1);
    // The roster is replaced wholesale; nothing is merged from the old one.
    assert_eq!(app.technicians.len(), 1);
    assert_eq!(app.technicians[0].name, "Pat Lee");
    assert_eq!(app.technicians[0].workload, 0);
    assert!(app.technicians[0].current_task.is_none());
}
