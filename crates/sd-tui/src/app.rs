use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use sd_core::config::Config;
use sd_core::copilot::{self, CopilotReply};
use sd_core::fixtures;
use sd_core::store::TicketStore;
use sd_core::types::{
    Announcement, AnnouncementCategory, CopilotAction, CopilotMessage, DashboardStats, EventKind,
    IncidentStatus, MajorIncident, MessageAuthor, Priority, Reminder, ScheduleEvent, TaskItem,
    TaskStatus, TechStatus, Technician, Ticket, TicketDraft, TicketKind, TicketStatus,
};

use crate::api_client::{ApiClient, BackendError, Snapshot};

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Every screen the dashboard can show. `TicketDetails` carries the id of
/// the ticket it was opened for and is reached by selecting a ticket, not
/// by hotkey; all other variants occupy a fixed tab-bar slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Tickets,
    TicketDetails { ticket_id: String },
    CreateTicket,
    MajorIncidents,
    Scheduler,
    TechAvailability,
    Tasks,
    Reminders,
    Announcements,
    Copilot,
    Teams,
    Agents,
    Reports,
    Automation,
    Settings,
}

impl View {
    /// Number of tab-bar slots (TicketDetails shares the Tickets slot).
    pub const TAB_COUNT: usize = 15;

    pub fn at_tab(index: usize) -> Option<View> {
        match index {
            0 => Some(View::Dashboard),
            1 => Some(View::Tickets),
            2 => Some(View::CreateTicket),
            3 => Some(View::MajorIncidents),
            4 => Some(View::Scheduler),
            5 => Some(View::TechAvailability),
            6 => Some(View::Tasks),
            7 => Some(View::Reminders),
            8 => Some(View::Announcements),
            9 => Some(View::Copilot),
            10 => Some(View::Teams),
            11 => Some(View::Agents),
            12 => Some(View::Reports),
            13 => Some(View::Automation),
            14 => Some(View::Settings),
            _ => None,
        }
    }

    pub fn tab_index(&self) -> usize {
        match self {
            View::Dashboard => 0,
            View::Tickets | View::TicketDetails { .. } => 1,
            View::CreateTicket => 2,
            View::MajorIncidents => 3,
            View::Scheduler => 4,
            View::TechAvailability => 5,
            View::Tasks => 6,
            View::Reminders => 7,
            View::Announcements => 8,
            View::Copilot => 9,
            View::Teams => 10,
            View::Agents => 11,
            View::Reports => 12,
            View::Automation => 13,
            View::Settings => 14,
        }
    }

    /// Hotkey shown in the tab bar: digits for the first ten slots, then
    /// shifted letters.
    pub fn hotkey(&self) -> char {
        match self.tab_index() {
            0 => '1',
            1 => '2',
            2 => '3',
            3 => '4',
            4 => '5',
            5 => '6',
            6 => '7',
            7 => '8',
            8 => '9',
            9 => '0',
            10 => 'T',
            11 => 'A',
            12 => 'R',
            13 => 'U',
            _ => 'S',
        }
    }

    /// Short title for the tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Tickets | View::TicketDetails { .. } => "Tickets",
            View::CreateTicket => "Create",
            View::MajorIncidents => "Incidents",
            View::Scheduler => "Schedule",
            View::TechAvailability => "Techs",
            View::Tasks => "Tasks",
            View::Reminders => "Reminders",
            View::Announcements => "Announce",
            View::Copilot => "Copilot",
            View::Teams => "Teams",
            View::Agents => "Agents",
            View::Reports => "Reports",
            View::Automation => "Autom",
            View::Settings => "Settings",
        }
    }

    /// Canonical name accepted by the `:view` command and `ui.default_view`.
    pub fn name(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Tickets => "tickets",
            View::TicketDetails { .. } => "details",
            View::CreateTicket => "create",
            View::MajorIncidents => "incidents",
            View::Scheduler => "scheduler",
            View::TechAvailability => "techs",
            View::Tasks => "tasks",
            View::Reminders => "reminders",
            View::Announcements => "announcements",
            View::Copilot => "copilot",
            View::Teams => "teams",
            View::Agents => "agents",
            View::Reports => "reports",
            View::Automation => "automation",
            View::Settings => "settings",
        }
    }

    /// Resolve a view name (plus a few aliases). TicketDetails is not
    /// addressable by name; it needs a ticket id.
    pub fn from_command_name(name: &str) -> Option<View> {
        match name.trim().to_lowercase().as_str() {
            "dashboard" | "dash" => Some(View::Dashboard),
            "tickets" => Some(View::Tickets),
            "create" | "new" => Some(View::CreateTicket),
            "incidents" | "major" => Some(View::MajorIncidents),
            "scheduler" | "schedule" => Some(View::Scheduler),
            "techs" | "availability" => Some(View::TechAvailability),
            "tasks" => Some(View::Tasks),
            "reminders" => Some(View::Reminders),
            "announcements" | "announce" => Some(View::Announcements),
            "copilot" | "assistant" => Some(View::Copilot),
            "teams" => Some(View::Teams),
            "agents" => Some(View::Agents),
            "reports" => Some(View::Reports),
            "automation" => Some(View::Automation),
            "settings" | "config" => Some(View::Settings),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Create-ticket form
// ---------------------------------------------------------------------------

pub const CATEGORIES: &[&str] = &[
    "Hardware",
    "Software",
    "Network",
    "Email",
    "User Management",
    "Security",
];

/// Index 0 leaves the draft unassigned.
pub const ASSIGNEE_CHOICES: &[&str] = &["Auto-assign", "John Doe", "Jane Smith", "Sarah Wilson"];

const PRIORITY_ORDER: &[Priority] = &[
    Priority::Low,
    Priority::Medium,
    Priority::High,
    Priority::Critical,
];

const TASK_FILTER_ORDER: &[TaskStatus] = &[
    TaskStatus::Pending,
    TaskStatus::InProgress,
    TaskStatus::Completed,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Kind,
    Priority,
    Category,
    Subcategory,
    Requester,
    Assignee,
    Submit,
}

impl FormField {
    pub const ORDER: [FormField; 9] = [
        FormField::Title,
        FormField::Description,
        FormField::Kind,
        FormField::Priority,
        FormField::Category,
        FormField::Subcategory,
        FormField::Requester,
        FormField::Assignee,
        FormField::Submit,
    ];

    pub fn next(self) -> FormField {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> FormField {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Kind => "Type",
            FormField::Priority => "Priority",
            FormField::Category => "Category",
            FormField::Subcategory => "Subcategory",
            FormField::Requester => "Requester",
            FormField::Assignee => "Assignee",
            FormField::Submit => "Submit",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::Title | FormField::Description | FormField::Subcategory | FormField::Requester
        )
    }
}

#[derive(Debug, Clone)]
pub struct TicketForm {
    pub field: FormField,
    pub title: String,
    pub description: String,
    pub kind: TicketKind,
    pub priority: Priority,
    pub category: usize,
    pub subcategory: String,
    pub requester: String,
    pub assignee: usize,
    pub error: Option<String>,
}

impl Default for TicketForm {
    fn default() -> Self {
        Self {
            field: FormField::Title,
            title: String::new(),
            description: String::new(),
            kind: TicketKind::Incident,
            priority: Priority::Medium,
            category: 0,
            subcategory: String::new(),
            requester: String::new(),
            assignee: 0,
            error: None,
        }
    }
}

impl TicketForm {
    /// The text buffer under the cursor, if the cursor is on a text field.
    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Subcategory => Some(&mut self.subcategory),
            FormField::Requester => Some(&mut self.requester),
            _ => None,
        }
    }

    pub fn category_label(&self) -> &'static str {
        CATEGORIES.get(self.category).copied().unwrap_or("Hardware")
    }

    pub fn assignee_label(&self) -> &'static str {
        ASSIGNEE_CHOICES
            .get(self.assignee)
            .copied()
            .unwrap_or("Auto-assign")
    }

    /// Left/Right on a choice field steps through its options.
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.field {
            FormField::Kind => {
                self.kind = match self.kind {
                    TicketKind::Incident => TicketKind::ServiceRequest,
                    TicketKind::ServiceRequest => TicketKind::Incident,
                };
            }
            FormField::Priority => {
                let i = PRIORITY_ORDER
                    .iter()
                    .position(|p| *p == self.priority)
                    .unwrap_or(0);
                self.priority = PRIORITY_ORDER[step(i, PRIORITY_ORDER.len(), forward)].clone();
            }
            FormField::Category => self.category = step(self.category, CATEGORIES.len(), forward),
            FormField::Assignee => {
                self.assignee = step(self.assignee, ASSIGNEE_CHOICES.len(), forward)
            }
            _ => {}
        }
    }

    /// Validate and convert into a draft. Title, description and requester
    /// are required; choice fields always hold a valid value.
    pub fn draft(&self) -> Result<TicketDraft, String> {
        let title = self.title.trim();
        let description = self.description.trim();
        let requester = self.requester.trim();
        if title.is_empty() || description.is_empty() || requester.is_empty() {
            return Err("Title, description and requester are required.".to_string());
        }
        let subcategory = {
            let s = self.subcategory.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        let assignee = (self.assignee > 0).then(|| self.assignee_label().to_string());
        Ok(TicketDraft {
            title: title.to_string(),
            description: description.to_string(),
            kind: self.kind.clone(),
            priority: self.priority.clone(),
            category: self.category_label().to_string(),
            subcategory,
            requester: requester.to_string(),
            assignee,
        })
    }
}

fn step(i: usize, len: usize, forward: bool) -> usize {
    if forward {
        (i + 1) % len
    } else {
        (i + len - 1) % len
    }
}

// ---------------------------------------------------------------------------
// Copilot panel
// ---------------------------------------------------------------------------

/// A reply waiting for its deadline. Exactly one may be outstanding; it is
/// dropped, never delivered, when the panel is torn down.
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub deadline: Instant,
    pub reply: CopilotReply,
}

#[derive(Debug, Default)]
pub struct CopilotPanel {
    pub messages: Vec<CopilotMessage>,
    pub input: String,
    pub input_focused: bool,
    pub suggestion_index: usize,
    pub pending: Option<PendingReply>,
}

impl CopilotPanel {
    /// A new conversation: greeting bubble, input focused.
    pub fn fresh() -> Self {
        Self {
            messages: vec![copilot::greeting()],
            input_focused: true,
            ..Self::default()
        }
    }

    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }
}

// ---------------------------------------------------------------------------
// Filters and modals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl ReminderFilter {
    pub fn next(self) -> ReminderFilter {
        match self {
            ReminderFilter::All => ReminderFilter::Pending,
            ReminderFilter::Pending => ReminderFilter::Completed,
            ReminderFilter::Completed => ReminderFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReminderFilter::All => "All",
            ReminderFilter::Pending => "Pending",
            ReminderFilter::Completed => "Completed",
        }
    }
}

/// Blocking error dialog. While set, only dismissal keys are handled.
#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub view: View,
    pub should_quit: bool,
    pub show_help: bool,
    /// Selection into the current view's primary list; reset on view change.
    pub selected: usize,

    // Data
    pub store: TicketStore,
    pub stats: DashboardStats,
    pub technicians: Vec<Technician>,
    pub tasks: Vec<TaskItem>,
    pub reminders: Vec<Reminder>,
    pub announcements: Vec<Announcement>,
    pub schedule: Vec<ScheduleEvent>,
    pub incidents: Vec<MajorIncident>,
    pub operator: String,

    // Per-view filter state (persists across view switches)
    pub ticket_filter: Option<TicketStatus>,
    pub incident_filter: Option<IncidentStatus>,
    pub event_filter: Option<EventKind>,
    pub task_filter: Option<TaskStatus>,
    pub reminder_filter: ReminderFilter,
    pub announcement_filter: Option<AnnouncementCategory>,

    pub form: TicketForm,
    pub copilot: CopilotPanel,
    /// Some while the availability panel is collecting a ticket id.
    pub assign_input: Option<String>,
    /// Some while the `:` command line is open.
    pub command_input: Option<String>,
    /// Output of the last command, shown in the status bar until a key.
    pub command_feedback: Option<String>,
    pub alert: Option<Alert>,

    // Backend
    pub api: Option<ApiClient>,
    pub backend_enabled: bool,
    pub api_connected: bool,

    pub config_toml: String,
    reply_delay: Duration,
}

impl App {
    pub fn new(config: Config, offline: bool) -> Self {
        let operator = fixtures::demo_users()
            .first()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Operator".to_string());
        let backend_enabled = !offline && config.backend.enabled();
        let api = backend_enabled.then(|| {
            ApiClient::new(
                &config.backend.resolved_url(),
                &config.backend.resolved_key(),
            )
        });
        let view =
            View::from_command_name(&config.ui.default_view).unwrap_or(View::Dashboard);
        let copilot = if view == View::Copilot {
            CopilotPanel::fresh()
        } else {
            CopilotPanel::default()
        };
        let config_toml = config
            .to_toml()
            .unwrap_or_else(|_| "(unable to render configuration)".to_string());

        Self {
            view,
            should_quit: false,
            show_help: false,
            selected: 0,
            store: TicketStore::new(fixtures::demo_tickets()),
            stats: fixtures::demo_stats(),
            technicians: fixtures::demo_technicians(),
            tasks: fixtures::demo_tasks(),
            reminders: fixtures::demo_reminders(),
            announcements: fixtures::demo_announcements(),
            schedule: fixtures::demo_schedule_events(),
            incidents: fixtures::demo_major_incidents(),
            operator,
            ticket_filter: None,
            incident_filter: None,
            event_filter: None,
            task_filter: None,
            reminder_filter: ReminderFilter::All,
            announcement_filter: None,
            form: TicketForm::default(),
            copilot,
            assign_input: None,
            command_input: None,
            command_feedback: None,
            alert: None,
            api,
            backend_enabled,
            api_connected: false,
            config_toml,
            reply_delay: Duration::from_millis(config.copilot.reply_delay_ms),
        }
    }

    // -- navigation ---------------------------------------------------------

    /// Switch views. Resets the selection, leaves assign mode, and tears the
    /// copilot panel down on the way out (cancelling any pending reply) or
    /// builds a fresh one on the way in.
    pub fn set_view(&mut self, view: View) {
        if self.view == view {
            return;
        }
        let leaving_copilot = self.view == View::Copilot;
        self.selected = 0;
        self.assign_input = None;
        if leaving_copilot {
            self.copilot = CopilotPanel::default();
        }
        if view == View::Copilot {
            self.copilot = CopilotPanel::fresh();
        }
        self.view = view;
    }

    pub fn next_view(&mut self) {
        let i = (self.view.tab_index() + 1) % View::TAB_COUNT;
        if let Some(view) = View::at_tab(i) {
            self.set_view(view);
        }
    }

    pub fn prev_view(&mut self) {
        let i = (self.view.tab_index() + View::TAB_COUNT - 1) % View::TAB_COUNT;
        if let Some(view) = View::at_tab(i) {
            self.set_view(view);
        }
    }

    // -- key handling -------------------------------------------------------

    /// Modal precedence: alert > help > command mode > copilot input > view
    /// capture (form, assign mode) > global keys > view keys.
    pub fn on_key(&mut self, key: KeyEvent) {
        self.command_feedback = None;

        // Ctrl-C force-quits from anywhere, modals included.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        if self.command_input.is_some() {
            self.on_command_key(key);
            return;
        }

        if self.view == View::Copilot && self.copilot.input_focused {
            self.on_copilot_input_key(key);
            return;
        }

        // The form owns the keyboard so typing never triggers navigation.
        if self.view == View::CreateTicket {
            self.on_create_key(key);
            return;
        }

        if self.view == View::TechAvailability && self.assign_input.is_some() {
            self.on_assign_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char(c @ '1'..='9') => {
                let i = (c as usize) - ('1' as usize);
                if let Some(view) = View::at_tab(i) {
                    self.set_view(view);
                }
            }
            KeyCode::Char('0') => {
                if let Some(view) = View::at_tab(9) {
                    self.set_view(view);
                }
            }
            KeyCode::Char('T') => self.set_view(View::Teams),
            KeyCode::Char('A') => self.set_view(View::Agents),
            KeyCode::Char('R') => self.set_view(View::Reports),
            KeyCode::Char('U') => self.set_view(View::Automation),
            KeyCode::Char('S') => self.set_view(View::Settings),

            KeyCode::Tab => self.next_view(),
            KeyCode::BackTab => self.prev_view(),

            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.current_list_len();
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }

            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(':') => self.command_input = Some(String::new()),
            KeyCode::Char('r') => self.refresh(),

            _ => self.on_view_key(key),
        }
    }

    fn on_view_key(&mut self, key: KeyEvent) {
        let view = self.view.clone();
        match view {
            View::Dashboard => {}
            View::Tickets => {
                if key.code == KeyCode::Enter {
                    let id = self
                        .filtered_tickets()
                        .get(self.selected)
                        .map(|t| t.id.clone());
                    if let Some(ticket_id) = id {
                        self.set_view(View::TicketDetails { ticket_id });
                    }
                }
            }
            View::TicketDetails { ticket_id } => match key.code {
                KeyCode::Esc | KeyCode::Backspace => self.set_view(View::Tickets),
                KeyCode::Char('t') => self.take_ticket(&ticket_id),
                KeyCode::Char('v') => self.resolve_ticket(&ticket_id),
                KeyCode::Char('c') => self.close_ticket(&ticket_id),
                KeyCode::Char('o') => self.reopen_ticket(&ticket_id),
                _ => {}
            },
            // Captured before the global keys; nothing reaches here.
            View::CreateTicket => {}
            View::MajorIncidents => {}
            View::Scheduler => {}
            View::TechAvailability => match key.code {
                KeyCode::Char('s') => self.cycle_tech_status(),
                KeyCode::Char('a') => self.assign_input = Some(String::new()),
                _ => {}
            },
            View::Tasks => {}
            View::Reminders => {}
            View::Announcements => {}
            View::Copilot => match key.code {
                KeyCode::Enter => self.run_copilot_action(),
                KeyCode::Char('i') => self.copilot.input_focused = true,
                _ => {}
            },
            View::Teams => {}
            View::Agents => {}
            View::Reports => {}
            View::Automation => {}
            View::Settings => {}
        }
    }

    fn on_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.command_input = None,
            KeyCode::Backspace => {
                if let Some(buf) = &mut self.command_input {
                    buf.pop();
                }
            }
            KeyCode::Enter => {
                let text = self.command_input.take().unwrap_or_default();
                let text = text.trim().to_string();
                if text.is_empty() {
                    return;
                }
                let line = format!(":{text}");
                match crate::command::parse_command(&line) {
                    Some(cmd) => {
                        self.command_feedback = crate::command::execute_command(self, cmd);
                    }
                    None => {
                        self.command_feedback = Some(format!("unknown command: :{text}"));
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(buf) = &mut self.command_input {
                    buf.push(c);
                }
            }
            _ => {}
        }
    }

    fn on_copilot_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.copilot.input_focused = false,
            KeyCode::Tab => self.cycle_suggestion(),
            KeyCode::Backspace => {
                self.copilot.input.pop();
            }
            KeyCode::Enter => {
                let text = self.copilot.input.clone();
                self.submit_copilot(&text);
            }
            KeyCode::Char(c) => self.copilot.input.push(c),
            _ => {}
        }
    }

    fn on_create_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.next_view(),
            KeyCode::BackTab => self.prev_view(),
            KeyCode::Esc => self.set_view(View::Tickets),
            KeyCode::Up => self.form.field = self.form.field.prev(),
            KeyCode::Down => self.form.field = self.form.field.next(),
            KeyCode::Left => self.form.cycle_choice(false),
            KeyCode::Right => self.form.cycle_choice(true),
            KeyCode::Backspace => {
                if let Some(buf) = self.form.text_mut() {
                    buf.pop();
                }
            }
            KeyCode::Enter => {
                if self.form.field == FormField::Submit {
                    self.submit_ticket_form();
                } else {
                    self.form.field = self.form.field.next();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buf) = self.form.text_mut() {
                    buf.push(c);
                }
            }
            _ => {}
        }
    }

    fn on_assign_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.assign_input = None,
            KeyCode::Backspace => {
                if let Some(buf) = &mut self.assign_input {
                    buf.pop();
                }
            }
            KeyCode::Enter => self.apply_assignment(),
            KeyCode::Char(c) => {
                if let Some(buf) = &mut self.assign_input {
                    buf.push(c);
                }
            }
            _ => {}
        }
    }

    // -- filters ------------------------------------------------------------

    /// Advance the current view's filter one step; no-op on unfiltered views.
    pub fn cycle_filter(&mut self) {
        match self.view {
            View::Tickets => {
                self.ticket_filter =
                    cycle_option(self.ticket_filter.take(), TicketStatus::filter_order());
            }
            View::MajorIncidents => {
                self.incident_filter =
                    cycle_option(self.incident_filter.take(), IncidentStatus::filter_order());
            }
            View::Scheduler => {
                self.event_filter =
                    cycle_option(self.event_filter.take(), EventKind::filter_order());
            }
            View::Tasks => {
                self.task_filter = cycle_option(self.task_filter.take(), TASK_FILTER_ORDER);
            }
            View::Reminders => self.reminder_filter = self.reminder_filter.next(),
            View::Announcements => {
                self.announcement_filter = cycle_option(
                    self.announcement_filter.take(),
                    AnnouncementCategory::filter_order(),
                );
            }
            _ => return,
        }
        self.selected = 0;
    }

    pub fn filtered_tickets(&self) -> Vec<&Ticket> {
        self.store
            .tickets()
            .iter()
            .filter(|t| {
                self.ticket_filter
                    .as_ref()
                    .map_or(true, |f| &t.status == f)
            })
            .collect()
    }

    pub fn filtered_incidents(&self) -> Vec<&MajorIncident> {
        self.incidents
            .iter()
            .filter(|i| {
                self.incident_filter
                    .as_ref()
                    .map_or(true, |f| &i.status == f)
            })
            .collect()
    }

    pub fn filtered_events(&self) -> Vec<&ScheduleEvent> {
        self.schedule
            .iter()
            .filter(|e| self.event_filter.as_ref().map_or(true, |f| &e.kind == f))
            .collect()
    }

    pub fn filtered_tasks(&self) -> Vec<&TaskItem> {
        self.tasks
            .iter()
            .filter(|t| self.task_filter.as_ref().map_or(true, |f| &t.status == f))
            .collect()
    }

    pub fn filtered_reminders(&self) -> Vec<&Reminder> {
        self.reminders
            .iter()
            .filter(|r| match self.reminder_filter {
                ReminderFilter::All => true,
                ReminderFilter::Pending => !r.completed,
                ReminderFilter::Completed => r.completed,
            })
            .collect()
    }

    pub fn filtered_announcements(&self) -> Vec<&Announcement> {
        self.announcements
            .iter()
            .filter(|a| {
                self.announcement_filter
                    .as_ref()
                    .map_or(true, |f| &a.category == f)
            })
            .collect()
    }

    /// Length of the primary list the selection moves over.
    pub fn current_list_len(&self) -> usize {
        match &self.view {
            View::Dashboard => 0,
            View::Tickets => self.filtered_tickets().len(),
            View::TicketDetails { .. } => 0,
            View::CreateTicket => 0,
            View::MajorIncidents => self.filtered_incidents().len(),
            View::Scheduler => self.filtered_events().len(),
            View::TechAvailability => self.technicians.len(),
            View::Tasks => self.filtered_tasks().len(),
            View::Reminders => self.filtered_reminders().len(),
            View::Announcements => self.filtered_announcements().len(),
            View::Copilot => self.last_actions().len(),
            View::Teams
            | View::Agents
            | View::Reports
            | View::Automation
            | View::Settings => 0,
        }
    }

    // -- ticket actions -----------------------------------------------------

    fn take_ticket(&mut self, id: &str) {
        let operator = self.operator.clone();
        if !self.backend_assign(id, &operator) {
            return;
        }
        self.store.assign(id, operator);
    }

    fn resolve_ticket(&mut self, id: &str) {
        let current = self.ticket_status(id);
        if matches!(
            current,
            Some(TicketStatus::Resolved) | Some(TicketStatus::Closed) | None
        ) {
            return;
        }
        self.set_ticket_status_checked(id, TicketStatus::Resolved);
    }

    fn close_ticket(&mut self, id: &str) {
        if self.ticket_status(id) != Some(TicketStatus::Resolved) {
            return;
        }
        self.set_ticket_status_checked(id, TicketStatus::Closed);
    }

    fn reopen_ticket(&mut self, id: &str) {
        if !matches!(
            self.ticket_status(id),
            Some(TicketStatus::Resolved) | Some(TicketStatus::Closed)
        ) {
            return;
        }
        self.set_ticket_status_checked(id, TicketStatus::Open);
    }

    fn ticket_status(&self, id: &str) -> Option<TicketStatus> {
        self.store.get(id).map(|t| t.status.clone())
    }

    fn set_ticket_status_checked(&mut self, id: &str, status: TicketStatus) {
        if !self.backend_status(id, status.clone()) {
            return;
        }
        self.store.set_status(id, status);
    }

    fn submit_ticket_form(&mut self) {
        match self.form.draft() {
            Err(message) => self.form.error = Some(message),
            Ok(draft) => {
                let created = self.store.create(draft).clone();
                if let Some(api) = &self.api {
                    if let Err(err) = api.insert_ticket(&created) {
                        self.alert_backend(err);
                    }
                }
                self.form = TicketForm::default();
                // Land on the ticket list with the new record at the head.
                self.ticket_filter = None;
                self.set_view(View::Tickets);
                self.selected = 0;
            }
        }
    }

    /// One-line create used by the headless `create` verb: incident, medium
    /// priority, requested by the current operator.
    pub fn quick_create(&mut self, title: &str) {
        let draft = TicketDraft {
            title: title.to_string(),
            description: String::new(),
            kind: TicketKind::Incident,
            priority: Priority::Medium,
            category: "General".to_string(),
            subcategory: None,
            requester: self.operator.clone(),
            assignee: None,
        };
        let created = self.store.create(draft).clone();
        if let Some(api) = &self.api {
            if let Err(err) = api.insert_ticket(&created) {
                self.alert_backend(err);
            }
        }
    }

    /// Assign a ticket by id, backend first. Unknown ids raise the alert
    /// modal instead of mutating anything.
    pub fn assign_ticket(&mut self, id: &str, assignee: &str) {
        if self.store.get(id).is_none() {
            self.raise_alert(
                "Unknown Ticket",
                format!("No ticket with id {id} in the current list."),
            );
            return;
        }
        if !self.backend_assign(id, assignee) {
            return;
        }
        self.store.assign(id, assignee);
    }

    /// Status change by id, used by the headless `status` verb.
    pub fn change_ticket_status(&mut self, id: &str, status: TicketStatus) {
        if self.store.get(id).is_none() {
            self.raise_alert(
                "Unknown Ticket",
                format!("No ticket with id {id} in the current list."),
            );
            return;
        }
        self.set_ticket_status_checked(id, status);
    }

    // -- tech availability --------------------------------------------------

    fn cycle_tech_status(&mut self) {
        let Some(tech) = self.technicians.get(self.selected) else {
            return;
        };
        let id = tech.id.clone();
        let next = tech.status.next();
        if !self.backend_tech_status(&id, next.clone()) {
            return;
        }
        if let Some(tech) = self.technicians.get_mut(self.selected) {
            tech.status = next;
        }
    }

    fn apply_assignment(&mut self) {
        let Some(buf) = self.assign_input.take() else {
            return;
        };
        let id = buf.trim().to_uppercase();
        if id.is_empty() {
            return;
        }
        let Some(name) = self.technicians.get(self.selected).map(|t| t.name.clone()) else {
            return;
        };
        self.assign_ticket(&id, &name);
    }

    // -- copilot ------------------------------------------------------------

    /// Submit a chat message: append the user bubble and schedule the canned
    /// reply. Empty or whitespace-only input is rejected before the engine
    /// is invoked.
    pub fn submit_copilot(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.copilot.messages.push(CopilotMessage::user(text));
        let reply = copilot::respond(text);
        self.copilot.pending = Some(PendingReply {
            deadline: Instant::now() + self.reply_delay,
            reply,
        });
        self.copilot.input.clear();
    }

    fn cycle_suggestion(&mut self) {
        let panel = &mut self.copilot;
        let untouched = panel.input.is_empty()
            || copilot::SUGGESTIONS.contains(&panel.input.as_str());
        if !untouched {
            return;
        }
        if let Some(s) = copilot::SUGGESTIONS.get(panel.suggestion_index) {
            panel.input = s.to_string();
        }
        panel.suggestion_index = (panel.suggestion_index + 1) % copilot::SUGGESTIONS.len();
    }

    /// Actions offered by the most recent reply that carried any.
    pub fn last_actions(&self) -> &[CopilotAction] {
        self.copilot
            .messages
            .iter()
            .rev()
            .find(|m| m.author == MessageAuthor::Assistant && !m.actions.is_empty())
            .map(|m| m.actions.as_slice())
            .unwrap_or(&[])
    }

    fn run_copilot_action(&mut self) {
        let ack = self
            .last_actions()
            .get(self.selected)
            .map(copilot::action_acknowledgement);
        if let Some(text) = ack {
            self.copilot.messages.push(CopilotMessage::assistant(text));
        }
    }

    /// Deliver the pending reply once its deadline has passed. Called every
    /// event-loop iteration with `Instant::now()`; tests pass a fabricated
    /// instant instead.
    pub fn tick(&mut self, now: Instant) {
        let due = self
            .copilot
            .pending
            .as_ref()
            .is_some_and(|p| p.deadline <= now);
        if !due {
            return;
        }
        if let Some(pending) = self.copilot.pending.take() {
            let message = CopilotMessage::assistant(pending.reply.text)
                .with_actions(pending.reply.actions);
            self.copilot.messages.push(message);
            if self.view == View::Copilot {
                self.selected = 0;
            }
        }
    }

    // -- backend ------------------------------------------------------------

    /// Fetch both tables synchronously and apply. No-op without a backend.
    pub fn refresh(&mut self) {
        let snapshot = match &self.api {
            Some(api) => api.fetch_snapshot(),
            None => return,
        };
        self.apply_snapshot(snapshot);
    }

    /// Apply a refresh-worker snapshot. Each table lands independently;
    /// failures flip the indicator to OFFLINE and log, they never alert.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        let ok = snapshot.is_ok();
        match snapshot.tickets {
            Ok(tickets) => self.store.replace_all(tickets),
            Err(err) => warn!(%err, "ticket refresh failed"),
        }
        match snapshot.technicians {
            Ok(technicians) => self.technicians = technicians,
            Err(err) => warn!(%err, "technician refresh failed"),
        }
        self.api_connected = ok;
        let len = self.current_list_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Connection indicator for the status bar.
    pub fn connection_label(&self) -> &'static str {
        if !self.backend_enabled {
            "LOCAL"
        } else if self.api_connected {
            "LIVE"
        } else {
            "OFFLINE"
        }
    }

    // Backend writes go first; on failure the alert is raised and the local
    // mutation is skipped. Returns whether the caller may proceed.

    fn backend_assign(&mut self, id: &str, assignee: &str) -> bool {
        let result = match &self.api {
            Some(api) => api.assign_ticket(id, assignee),
            None => return true,
        };
        match result {
            Ok(()) => true,
            Err(err) => {
                self.alert_backend(err);
                false
            }
        }
    }

    fn backend_status(&mut self, id: &str, status: TicketStatus) -> bool {
        let result = match &self.api {
            Some(api) => api.set_ticket_status(id, status),
            None => return true,
        };
        match result {
            Ok(()) => true,
            Err(err) => {
                self.alert_backend(err);
                false
            }
        }
    }

    fn backend_tech_status(&mut self, id: &str, status: TechStatus) -> bool {
        let result = match &self.api {
            Some(api) => api.set_technician_status(id, status),
            None => return true,
        };
        match result {
            Ok(()) => true,
            Err(err) => {
                self.alert_backend(err);
                false
            }
        }
    }

    // -- alerts -------------------------------------------------------------

    pub fn raise_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.alert = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
    }

    fn alert_backend(&mut self, err: BackendError) {
        warn!(%err, "backend write failed");
        self.raise_alert("Backend Error", err.to_string());
    }
}

/// One step through `None -> order[0] -> ... -> order[last] -> None`.
fn cycle_option<T: Clone + PartialEq>(current: Option<T>, order: &[T]) -> Option<T> {
    match current {
        None => order.first().cloned(),
        Some(cur) => match order.iter().position(|s| *s == cur) {
            Some(i) if i + 1 < order.len() => Some(order[i + 1].clone()),
            _ => None,
        },
    }
}
