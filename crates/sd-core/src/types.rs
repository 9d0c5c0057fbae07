use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel assignee for tickets nobody owns yet.
pub const UNASSIGNED: &str = "Unassigned";

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn glyph(&self) -> &'static str {
        match self {
            TicketStatus::Open => "o",
            TicketStatus::InProgress => ">",
            TicketStatus::Resolved => "*",
            TicketStatus::Closed => "x",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    /// The display order used by list filters.
    pub fn filter_order() -> &'static [TicketStatus] {
        &[
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
    }
}

// ---------------------------------------------------------------------------
// TicketKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketKind {
    Incident,
    ServiceRequest,
}

impl TicketKind {
    /// Prefix used when allocating ticket ids ("INC-007", "SR-002").
    pub fn id_prefix(&self) -> &'static str {
        match self {
            TicketKind::Incident => "INC",
            TicketKind::ServiceRequest => "SR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketKind::Incident => "Incident",
            TicketKind::ServiceRequest => "Service Request",
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn glyph(&self) -> &'static str {
        match self {
            Priority::Low => "-",
            Priority::Medium => "=",
            Priority::High => "^",
            Priority::Critical => "!",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

// ---------------------------------------------------------------------------
// Ticket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: TicketKind,
    pub priority: Priority,
    pub status: TicketStatus,
    pub assignee: String,
    pub requester: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category: String,
    pub subcategory: Option<String>,
}

impl Ticket {
    /// Open or actively worked tickets count against the open backlog.
    pub fn is_open_like(&self) -> bool {
        matches!(self.status, TicketStatus::Open | TicketStatus::InProgress)
    }

    pub fn is_unassigned(&self) -> bool {
        self.assignee == UNASSIGNED
    }
}

/// Form payload for creating a ticket. The store allocates the id and
/// stamps the timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub kind: TicketKind,
    pub priority: Priority,
    pub category: String,
    pub subcategory: Option<String>,
    pub requester: String,
    pub assignee: Option<String>,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Agent,
    Admin,
    Requester,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: Option<String>,
}

// ---------------------------------------------------------------------------
// DashboardStats
// ---------------------------------------------------------------------------

/// Headline counters rendered on the dashboard. Held as fixture data, not
/// derived from the ticket list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_tickets: u64,
    pub open_tickets: u64,
    pub in_progress_tickets: u64,
    pub resolved_today: u64,
    pub critical_tickets: u64,
}

// ---------------------------------------------------------------------------
// TechStatus / Technician
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechStatus {
    Available,
    Busy,
    Away,
    Offline,
}

impl TechStatus {
    pub fn glyph(&self) -> &'static str {
        match self {
            TechStatus::Available => "+",
            TechStatus::Busy => "@",
            TechStatus::Away => "~",
            TechStatus::Offline => "x",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TechStatus::Available => "Available",
            TechStatus::Busy => "Busy",
            TechStatus::Away => "Away",
            TechStatus::Offline => "Offline",
        }
    }

    /// Map a free-form backend status string onto the enum. Rosters edited
    /// by hand use labels like "On Site" or "Unavailable"; unknown values
    /// land on Offline.
    pub fn parse(raw: &str) -> TechStatus {
        match raw.trim().to_lowercase().as_str() {
            "available" => TechStatus::Available,
            "busy" | "on site" => TechStatus::Busy,
            "away" => TechStatus::Away,
            _ => TechStatus::Offline,
        }
    }

    /// Cycle order used by the availability panel's status toggle.
    pub fn next(&self) -> TechStatus {
        match self {
            TechStatus::Available => TechStatus::Busy,
            TechStatus::Busy => TechStatus::Away,
            TechStatus::Away => TechStatus::Offline,
            TechStatus::Offline => TechStatus::Available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technician {
    pub id: String,
    pub name: String,
    pub status: TechStatus,
    pub current_task: Option<String>,
    pub next_available: Option<DateTime<Utc>>,
    /// Percentage 0-100, set by the roster rather than derived from tasks.
    pub workload: u8,
}

// ---------------------------------------------------------------------------
// TaskItem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn glyph(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "o",
            TaskStatus::InProgress => ">",
            TaskStatus::Completed => "*",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

/// A work item on a technician's plate. `related_ticket` is an informal
/// cross-reference by id, never joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub due_date: DateTime<Utc>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub related_ticket: Option<String>,
}

// ---------------------------------------------------------------------------
// Reminder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    TicketFollowup,
    Maintenance,
    Meeting,
    General,
}

impl ReminderKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReminderKind::TicketFollowup => "Ticket Follow-up",
            ReminderKind::Maintenance => "Maintenance",
            ReminderKind::Meeting => "Meeting",
            ReminderKind::General => "General",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub kind: ReminderKind,
    pub completed: bool,
    pub assignee: String,
}

impl Reminder {
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date < now
    }
}

// ---------------------------------------------------------------------------
// Announcement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementPriority {
    Low,
    Medium,
    High,
}

impl AnnouncementPriority {
    pub fn label(&self) -> &'static str {
        match self {
            AnnouncementPriority::Low => "Low",
            AnnouncementPriority::Medium => "Medium",
            AnnouncementPriority::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementCategory {
    Maintenance,
    Policy,
    SystemUpdate,
    General,
}

impl AnnouncementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AnnouncementCategory::Maintenance => "Maintenance",
            AnnouncementCategory::Policy => "Policy",
            AnnouncementCategory::SystemUpdate => "System Update",
            AnnouncementCategory::General => "General",
        }
    }

    pub fn filter_order() -> &'static [AnnouncementCategory] {
        &[
            AnnouncementCategory::Maintenance,
            AnnouncementCategory::Policy,
            AnnouncementCategory::SystemUpdate,
            AnnouncementCategory::General,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub priority: AnnouncementPriority,
    pub category: AnnouncementCategory,
    pub active: bool,
}

// ---------------------------------------------------------------------------
// ScheduleEvent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Maintenance,
    Meeting,
    Training,
    OnCall,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Maintenance => "Maintenance",
            EventKind::Meeting => "Meeting",
            EventKind::Training => "Training",
            EventKind::OnCall => "On Call",
        }
    }

    pub fn filter_order() -> &'static [EventKind] {
        &[
            EventKind::Maintenance,
            EventKind::Meeting,
            EventKind::Training,
            EventKind::OnCall,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: EventKind,
    pub assignee: String,
    pub location: Option<String>,
}

impl ScheduleEvent {
    pub fn is_today(&self, now: DateTime<Utc>) -> bool {
        self.start.date_naive() == now.date_naive()
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start > now
    }
}

// ---------------------------------------------------------------------------
// Major incidents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Active,
    Investigating,
    Identified,
    Monitoring,
    Resolved,
}

impl IncidentStatus {
    pub fn glyph(&self) -> &'static str {
        match self {
            IncidentStatus::Active => "!",
            IncidentStatus::Investigating => "?",
            IncidentStatus::Identified => "i",
            IncidentStatus::Monitoring => "~",
            IncidentStatus::Resolved => "*",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Active => "Active",
            IncidentStatus::Investigating => "Investigating",
            IncidentStatus::Identified => "Identified",
            IncidentStatus::Monitoring => "Monitoring",
            IncidentStatus::Resolved => "Resolved",
        }
    }

    pub fn filter_order() -> &'static [IncidentStatus] {
        &[
            IncidentStatus::Active,
            IncidentStatus::Investigating,
            IncidentStatus::Identified,
            IncidentStatus::Monitoring,
            IncidentStatus::Resolved,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    StatusChange,
    Assignment,
    Comment,
    Resolution,
    Escalation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Internal,
    Public,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentUpdate {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub message: String,
    pub kind: UpdateKind,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorIncident {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub affected_services: Vec<String>,
    pub impacted_users: u32,
    pub started_at: DateTime<Utc>,
    pub estimated_resolution: Option<DateTime<Utc>>,
    pub incident_commander: String,
    pub communication_channel: String,
    pub updates: Vec<IncidentUpdate>,
    pub workarounds: Vec<String>,
    /// Informal cross-references to ticket ids, never joined.
    pub related_tickets: Vec<String>,
}

impl MajorIncident {
    pub fn is_active(&self) -> bool {
        self.status != IncidentStatus::Resolved
    }
}

// ---------------------------------------------------------------------------
// Copilot chat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageAuthor {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    CreateTicket,
    SearchKb,
    AssignTicket,
    Escalate,
}

/// A button offered under an assistant reply. Executing one only appends a
/// canned acknowledgement; the kind stays data so callers can tell the
/// buttons apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopilotAction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ActionKind,
}

/// One bubble in the assistant chat. Transient: the conversation lives in
/// the panel state and is dropped on navigation away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotMessage {
    pub id: Uuid,
    pub author: MessageAuthor,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub suggestions: Vec<String>,
    pub actions: Vec<CopilotAction>,
}

impl CopilotMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: MessageAuthor::User,
            text: text.into(),
            timestamp: Utc::now(),
            suggestions: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: MessageAuthor::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
            suggestions: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_actions(mut self, actions: Vec<CopilotAction>) -> Self {
        self.actions = actions;
        self
    }
}
