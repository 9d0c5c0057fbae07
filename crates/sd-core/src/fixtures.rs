//! Demo data for offline mode. Ids, names and counts mirror the seeded
//! service desk; timestamps are offsets from now so the "today", "overdue"
//! and "upcoming" panes stay populated whenever the app runs.

use chrono::{DateTime, Duration, Utc};

use crate::types::{
    Announcement, AnnouncementCategory, AnnouncementPriority, DashboardStats, EventKind,
    IncidentStatus, IncidentUpdate, MajorIncident, Priority, Reminder, ReminderKind,
    ScheduleEvent, Severity, TaskItem, TaskPriority, TaskStatus, TechStatus, Technician, Ticket,
    TicketKind, TicketStatus, UpdateKind, User, UserRole, Visibility,
};

fn hours_ago(h: i64) -> DateTime<Utc> {
    Utc::now() - Duration::hours(h)
}

fn hours_from_now(h: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(h)
}

fn days_ago(d: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(d)
}

fn days_from_now(d: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(d)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub fn demo_users() -> Vec<User> {
    vec![
        User { id: "1".into(), name: "John Doe".into(), email: "john.doe@company.com".into(), role: UserRole::Agent, department: Some("IT Support".into()) },
        User { id: "2".into(), name: "Jane Smith".into(), email: "jane.smith@company.com".into(), role: UserRole::Admin, department: Some("IT Support".into()) },
        User { id: "3".into(), name: "Mike Johnson".into(), email: "mike.johnson@company.com".into(), role: UserRole::Requester, department: Some("Sales".into()) },
        User { id: "4".into(), name: "Sarah Wilson".into(), email: "sarah.wilson@company.com".into(), role: UserRole::Agent, department: Some("IT Support".into()) },
    ]
}

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

pub fn demo_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "INC-001".into(),
            title: "Email server down - urgent".into(),
            description: "The email server is not responding. Multiple users affected.".into(),
            kind: TicketKind::Incident,
            priority: Priority::Critical,
            status: TicketStatus::InProgress,
            assignee: "John Doe".into(),
            requester: "Mike Johnson".into(),
            created_at: hours_ago(2),
            updated_at: hours_ago(1),
            category: "Email".into(),
            subcategory: Some("Server Issues".into()),
        },
        Ticket {
            id: "SR-002".into(),
            title: "New user account setup".into(),
            description: "Please create a new user account for the new hire in marketing department.".into(),
            kind: TicketKind::ServiceRequest,
            priority: Priority::Medium,
            status: TicketStatus::Open,
            assignee: "Sarah Wilson".into(),
            requester: "Jane Smith".into(),
            created_at: hours_ago(3),
            updated_at: hours_ago(3),
            category: "User Management".into(),
            subcategory: Some("Account Creation".into()),
        },
        Ticket {
            id: "INC-003".into(),
            title: "VPN connection issues".into(),
            description: "Unable to connect to VPN from home office. Getting timeout errors.".into(),
            kind: TicketKind::Incident,
            priority: Priority::High,
            status: TicketStatus::Open,
            assignee: "John Doe".into(),
            requester: "Mike Johnson".into(),
            created_at: hours_ago(4),
            updated_at: hours_ago(4),
            category: "Network".into(),
            subcategory: Some("VPN".into()),
        },
        Ticket {
            id: "SR-004".into(),
            title: "Software license renewal".into(),
            description: "Need to renew Office 365 licenses for the entire development team.".into(),
            kind: TicketKind::ServiceRequest,
            priority: Priority::Medium,
            status: TicketStatus::Resolved,
            assignee: "Sarah Wilson".into(),
            requester: "Jane Smith".into(),
            created_at: days_ago(1),
            updated_at: hours_ago(2),
            category: "Software".into(),
            subcategory: Some("Licensing".into()),
        },
        Ticket {
            id: "INC-005".into(),
            title: "Printer not working".into(),
            description: "Office printer on 3rd floor is showing paper jam error but no paper is stuck.".into(),
            kind: TicketKind::Incident,
            priority: Priority::Low,
            status: TicketStatus::Closed,
            assignee: "John Doe".into(),
            requester: "Mike Johnson".into(),
            created_at: days_ago(2),
            updated_at: hours_ago(20),
            category: "Hardware".into(),
            subcategory: Some("Printers".into()),
        },
    ]
}

pub fn demo_stats() -> DashboardStats {
    DashboardStats {
        total_tickets: 45,
        open_tickets: 12,
        in_progress_tickets: 8,
        resolved_today: 5,
        critical_tickets: 2,
    }
}

// ---------------------------------------------------------------------------
// Technicians
// ---------------------------------------------------------------------------

pub fn demo_technicians() -> Vec<Technician> {
    vec![
        Technician {
            id: "1".into(),
            name: "John Doe".into(),
            status: TechStatus::Available,
            current_task: Some("Email server maintenance".into()),
            next_available: None,
            workload: 65,
        },
        Technician {
            id: "2".into(),
            name: "Jane Smith".into(),
            status: TechStatus::Busy,
            current_task: Some("Critical incident resolution".into()),
            next_available: Some(hours_from_now(3)),
            workload: 90,
        },
        Technician {
            id: "3".into(),
            name: "Sarah Wilson".into(),
            status: TechStatus::Available,
            current_task: Some("User account setup".into()),
            next_available: None,
            workload: 45,
        },
        Technician {
            id: "4".into(),
            name: "Mike Johnson".into(),
            status: TechStatus::Away,
            current_task: None,
            next_available: Some(hours_from_now(1)),
            workload: 0,
        },
    ]
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

pub fn demo_tasks() -> Vec<TaskItem> {
    vec![
        TaskItem {
            id: "T-001".into(),
            title: "Update server security patches".into(),
            description: "Apply latest security updates to production servers".into(),
            assignee: "John Doe".into(),
            due_date: days_from_now(2),
            priority: TaskPriority::High,
            status: TaskStatus::InProgress,
            related_ticket: Some("INC-001".into()),
        },
        TaskItem {
            id: "T-002".into(),
            title: "Backup system verification".into(),
            description: "Verify backup systems are functioning correctly".into(),
            assignee: "Sarah Wilson".into(),
            due_date: days_from_now(1),
            priority: TaskPriority::Medium,
            status: TaskStatus::Pending,
            related_ticket: None,
        },
        TaskItem {
            id: "T-003".into(),
            title: "Network performance analysis".into(),
            description: "Analyze network performance metrics from last week".into(),
            assignee: "Jane Smith".into(),
            due_date: hours_ago(2),
            priority: TaskPriority::Low,
            status: TaskStatus::Completed,
            related_ticket: None,
        },
    ]
}

// ---------------------------------------------------------------------------
// Reminders
// ---------------------------------------------------------------------------

pub fn demo_reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: "R-001".into(),
            title: "Follow up on VPN issue".into(),
            description: "Check if VPN connection issue has been resolved".into(),
            due_date: hours_ago(1),
            kind: ReminderKind::TicketFollowup,
            completed: false,
            assignee: "John Doe".into(),
        },
        Reminder {
            id: "R-002".into(),
            title: "Monthly server maintenance".into(),
            description: "Scheduled maintenance window for all servers".into(),
            due_date: days_from_now(7),
            kind: ReminderKind::Maintenance,
            completed: false,
            assignee: "Jane Smith".into(),
        },
        Reminder {
            id: "R-003".into(),
            title: "Team standup meeting".into(),
            description: "Weekly team standup and progress review".into(),
            due_date: days_from_now(1),
            kind: ReminderKind::Meeting,
            completed: false,
            assignee: "Sarah Wilson".into(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

pub fn demo_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "A-001".into(),
            title: "Scheduled Maintenance Window".into(),
            content: "The email servers will undergo maintenance on January 15th from 2:00 AM to 4:00 AM. Users may experience brief interruptions.".into(),
            author: "Jane Smith".into(),
            created_at: days_ago(1),
            priority: AnnouncementPriority::High,
            category: AnnouncementCategory::Maintenance,
            active: true,
        },
        Announcement {
            id: "A-002".into(),
            title: "New Security Policy Update".into(),
            content: "Please review the updated security policy document. All staff must complete the security training by January 20th.".into(),
            author: "Admin Team".into(),
            created_at: days_ago(2),
            priority: AnnouncementPriority::Medium,
            category: AnnouncementCategory::Policy,
            active: true,
        },
        Announcement {
            id: "A-003".into(),
            title: "Microsoft Teams Integration Live".into(),
            content: "The new Microsoft Teams integration is now live! You can now create and manage tickets directly from Teams.".into(),
            author: "IT Support".into(),
            created_at: days_ago(3),
            priority: AnnouncementPriority::Medium,
            category: AnnouncementCategory::SystemUpdate,
            active: true,
        },
    ]
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

pub fn demo_schedule_events() -> Vec<ScheduleEvent> {
    // The training session starts "now" so the Today pane always has an
    // entry regardless of when the demo runs.
    vec![
        ScheduleEvent {
            id: "S-001".into(),
            title: "Server Maintenance".into(),
            description: "Routine maintenance on production servers".into(),
            start: days_from_now(7),
            end: days_from_now(7) + Duration::hours(2),
            kind: EventKind::Maintenance,
            assignee: "John Doe".into(),
            location: Some("Data Center".into()),
        },
        ScheduleEvent {
            id: "S-002".into(),
            title: "Security Training".into(),
            description: "Mandatory security awareness training session".into(),
            start: Utc::now(),
            end: hours_from_now(2),
            kind: EventKind::Training,
            assignee: "All Staff".into(),
            location: Some("Conference Room A".into()),
        },
        ScheduleEvent {
            id: "S-003".into(),
            title: "On-Call Shift".into(),
            description: "Weekend on-call support coverage".into(),
            start: days_from_now(3),
            end: days_from_now(3) + Duration::hours(14),
            kind: EventKind::OnCall,
            assignee: "Sarah Wilson".into(),
            location: None,
        },
    ]
}

// ---------------------------------------------------------------------------
// Major incidents
// ---------------------------------------------------------------------------

pub fn demo_major_incidents() -> Vec<MajorIncident> {
    vec![
        MajorIncident {
            id: "MAJ-001".into(),
            title: "Email Server Outage - Exchange Online".into(),
            description: "Complete email service disruption affecting all users across the organization".into(),
            severity: Severity::Critical,
            status: IncidentStatus::Investigating,
            affected_services: vec![
                "Exchange Online".into(),
                "Outlook Web App".into(),
                "Mobile Email".into(),
            ],
            impacted_users: 1250,
            started_at: hours_ago(2),
            estimated_resolution: Some(hours_from_now(3)),
            incident_commander: "Jane Smith".into(),
            communication_channel: "Teams: Major Incidents".into(),
            updates: vec![
                IncidentUpdate {
                    id: "UPD-001".into(),
                    timestamp: hours_ago(2) + Duration::minutes(15),
                    author: "Jane Smith".into(),
                    message: "Initial investigation shows potential DNS resolution issues. Escalating to Microsoft support.".into(),
                    kind: UpdateKind::Escalation,
                    visibility: Visibility::Public,
                },
                IncidentUpdate {
                    id: "UPD-002".into(),
                    timestamp: hours_ago(1),
                    author: "John Doe".into(),
                    message: "Workaround identified: Users can access email via mobile apps using cellular data.".into(),
                    kind: UpdateKind::Comment,
                    visibility: Visibility::Public,
                },
            ],
            workarounds: vec![
                "Use mobile email apps with cellular data connection".into(),
                "Access Outlook Web App via VPN if available".into(),
                "Use Teams chat for urgent communications".into(),
            ],
            related_tickets: vec!["INC-001".into(), "INC-006".into(), "INC-007".into()],
        },
        MajorIncident {
            id: "MAJ-002".into(),
            title: "Network Connectivity Issues - Building A".into(),
            description: "Intermittent network connectivity affecting Building A users".into(),
            severity: Severity::High,
            status: IncidentStatus::Identified,
            affected_services: vec![
                "WiFi Network".into(),
                "Ethernet Connections".into(),
                "VPN Access".into(),
            ],
            impacted_users: 350,
            started_at: hours_ago(3),
            estimated_resolution: Some(hours_from_now(1)),
            incident_commander: "Sarah Wilson".into(),
            communication_channel: "Teams: Network Issues".into(),
            updates: vec![IncidentUpdate {
                id: "UPD-003".into(),
                timestamp: hours_ago(1),
                author: "Sarah Wilson".into(),
                message: "Root cause identified: Faulty network switch in Building A server room. Replacement in progress.".into(),
                kind: UpdateKind::StatusChange,
                visibility: Visibility::Public,
            }],
            workarounds: vec![
                "Use mobile hotspot for critical work".into(),
                "Relocate to Building B conference rooms temporarily".into(),
                "Use cellular data for Teams calls".into(),
            ],
            related_tickets: vec!["INC-003".into(), "INC-008".into()],
        },
    ]
}
