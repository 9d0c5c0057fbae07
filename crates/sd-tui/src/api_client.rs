//! Blocking HTTP client for the hosted ticket backend.
//!
//! Speaks the PostgREST dialect the hosted tables expose: every request
//! carries the anon key as both `apikey` and bearer token, writes add
//! `Prefer: return=representation`. All methods use `reqwest::blocking` so
//! the refresh worker can run on a plain `std::thread` without an async
//! runtime.

use serde::{Deserialize, Serialize};

use chrono::{DateTime, Utc};
use sd_core::types::{
    Priority, TechStatus, Technician, Ticket, TicketKind, TicketStatus, UNASSIGNED,
};

/// The one way a backend call fails. Transport errors (DNS, refused,
/// timeout) carry status 0; HTTP errors carry the raw status and whatever
/// body the server returned.
#[derive(Debug, Clone, thiserror::Error)]
#[error("backend request failed (HTTP {status}): {message}")]
pub struct BackendError {
    pub status: u16,
    pub message: String,
}

impl BackendError {
    fn transport(err: reqwest::Error) -> Self {
        BackendError {
            status: 0,
            message: err.to_string(),
        }
    }
}

/// Reusable blocking client + base URL + anon key.
pub struct ApiClient {
    client: reqwest::blocking::Client,
    base: String,
    key: String,
}

// ── Row types (matching the hosted table columns) ──

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketRow {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    pub status: String,
    pub assigned_to: String,
    pub requester: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub created: String,
    pub updated: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicianRow {
    pub id: String,
    pub name: String,
    pub status: String,
}

impl TicketRow {
    pub fn into_ticket(self) -> Ticket {
        let created_at = parse_timestamp(&self.created);
        Ticket {
            id: self.id,
            title: self.title,
            description: self.description,
            kind: parse_kind(&self.kind),
            priority: parse_priority(&self.priority),
            status: parse_status(&self.status),
            assignee: if self.assigned_to.trim().is_empty() {
                UNASSIGNED.to_string()
            } else {
                self.assigned_to
            },
            requester: self.requester,
            created_at,
            updated_at: if self.updated.trim().is_empty() {
                created_at
            } else {
                parse_timestamp(&self.updated)
            },
            category: self.category,
            subcategory: self.subcategory.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn from_ticket(ticket: &Ticket) -> TicketRow {
        TicketRow {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            kind: ticket.kind.label().to_string(),
            priority: ticket.priority.label().to_string(),
            status: ticket.status.label().to_string(),
            assigned_to: ticket.assignee.clone(),
            requester: ticket.requester.clone(),
            category: ticket.category.clone(),
            subcategory: ticket.subcategory.clone(),
            created: ticket.created_at.to_rfc3339(),
            updated: ticket.updated_at.to_rfc3339(),
        }
    }
}

impl TechnicianRow {
    /// The roster select only carries id/name/status; the remaining fields
    /// stay at their defaults.
    pub fn into_technician(self) -> Technician {
        Technician {
            id: self.id,
            name: self.name,
            status: TechStatus::parse(&self.status),
            current_task: None,
            next_available: None,
            workload: 0,
        }
    }
}

// ── Snapshot sent over the flume channel ──

/// One refresh cycle's worth of backend state. Each table fetch fails
/// independently; the UI decides what a partial snapshot means for the
/// connection indicator.
#[derive(Debug)]
pub struct Snapshot {
    pub tickets: Result<Vec<Ticket>, BackendError>,
    pub technicians: Result<Vec<Technician>, BackendError>,
}

impl Snapshot {
    pub fn is_ok(&self) -> bool {
        self.tickets.is_ok() && self.technicians.is_ok()
    }
}

impl ApiClient {
    pub fn new(base: &str, key: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            client,
            base: base.trim_end_matches('/').to_string(),
            key: key.to_string(),
        }
    }

    fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, BackendError> {
        let url = format!("{}{}", self.base, path);
        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .header("Content-Type", "application/json")
            .send()
            .map_err(BackendError::transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError {
                status: status.as_u16(),
                message: error_body(resp),
            });
        }
        resp.json::<T>().map_err(|e| BackendError {
            status: status.as_u16(),
            message: format!("parse: {e}"),
        })
    }

    fn write(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<(), BackendError> {
        let url = format!("{}{}", self.base, path);
        let resp = self
            .client
            .request(method, &url)
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .map_err(BackendError::transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError {
                status: status.as_u16(),
                message: error_body(resp),
            });
        }
        Ok(())
    }

    pub fn fetch_tickets(&self) -> Result<Vec<Ticket>, BackendError> {
        let rows: Vec<TicketRow> = self.get("/rest/v1/tickets?select=*&order=created.desc")?;
        Ok(rows.into_iter().map(TicketRow::into_ticket).collect())
    }

    pub fn insert_ticket(&self, ticket: &Ticket) -> Result<(), BackendError> {
        let row = TicketRow::from_ticket(ticket);
        let body = serde_json::to_value(row).map_err(|e| BackendError {
            status: 0,
            message: format!("serialize: {e}"),
        })?;
        self.write(reqwest::Method::POST, "/rest/v1/tickets", &body)
    }

    pub fn update_ticket(&self, id: &str, patch: &serde_json::Value) -> Result<(), BackendError> {
        let path = format!("/rest/v1/tickets?id=eq.{id}");
        self.write(reqwest::Method::PATCH, &path, patch)
    }

    /// Assignment also flips the hosted status to "Assigned", matching how
    /// the roster table is maintained by hand.
    pub fn assign_ticket(&self, id: &str, assignee: &str) -> Result<(), BackendError> {
        self.update_ticket(
            id,
            &serde_json::json!({ "assigned_to": assignee, "status": "Assigned" }),
        )
    }

    pub fn set_ticket_status(&self, id: &str, status: TicketStatus) -> Result<(), BackendError> {
        self.update_ticket(id, &serde_json::json!({ "status": status.label() }))
    }

    pub fn fetch_technicians(&self) -> Result<Vec<Technician>, BackendError> {
        let rows: Vec<TechnicianRow> =
            self.get("/rest/v1/technicians?select=id,name,status&order=name.asc")?;
        Ok(rows
            .into_iter()
            .map(TechnicianRow::into_technician)
            .collect())
    }

    pub fn set_technician_status(&self, id: &str, status: TechStatus) -> Result<(), BackendError> {
        let path = format!("/rest/v1/technicians?id=eq.{id}");
        self.write(
            reqwest::Method::PATCH,
            &path,
            &serde_json::json!({ "status": status.label() }),
        )
    }

    /// Fetch both tables for one refresh cycle.
    pub fn fetch_snapshot(&self) -> Snapshot {
        Snapshot {
            tickets: self.fetch_tickets(),
            technicians: self.fetch_technicians(),
        }
    }
}

fn error_body(resp: reqwest::blocking::Response) -> String {
    let text = resp.text().unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        return "(empty response body)".to_string();
    }
    // Keep the alert modal readable when the server dumps a page of HTML.
    let mut message: String = text.chars().take(200).collect();
    if message.len() < text.len() {
        message.push('…');
    }
    message
}

// ── String → domain mapping for hand-edited table values ──

fn parse_status(raw: &str) -> TicketStatus {
    match raw.trim().to_lowercase().as_str() {
        "in_progress" | "in progress" | "assigned" => TicketStatus::InProgress,
        "resolved" => TicketStatus::Resolved,
        "closed" => TicketStatus::Closed,
        _ => TicketStatus::Open,
    }
}

fn parse_priority(raw: &str) -> Priority {
    match raw.trim().to_lowercase().as_str() {
        "low" => Priority::Low,
        "high" => Priority::High,
        "critical" => Priority::Critical,
        _ => Priority::Medium,
    }
}

fn parse_kind(raw: &str) -> TicketKind {
    match raw.trim().to_lowercase().as_str() {
        "service_request" | "service request" | "request" | "sr" => TicketKind::ServiceRequest,
        _ => TicketKind::Incident,
    }
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
