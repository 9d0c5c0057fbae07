use chrono::Utc;
use tracing::info;

use crate::types::{Ticket, TicketDraft, TicketKind, TicketStatus, UNASSIGNED};

// ---------------------------------------------------------------------------
// TicketStore
// ---------------------------------------------------------------------------

/// Owns the ticket list. Panels hold `&TicketStore` for rendering; every
/// mutation goes through `create`, `assign` or `set_status` so there is a
/// single place that stamps `updated_at`.
///
/// The list is ordered newest-first; `create` prepends.
#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Allocate an id, stamp timestamps and prepend the new ticket.
    /// Returns a reference to the stored record.
    pub fn create(&mut self, draft: TicketDraft) -> &Ticket {
        let now = Utc::now();
        let ticket = Ticket {
            id: self.next_id(&draft.kind),
            title: draft.title,
            description: draft.description,
            kind: draft.kind,
            priority: draft.priority,
            status: TicketStatus::Open,
            assignee: draft.assignee.unwrap_or_else(|| UNASSIGNED.to_string()),
            requester: draft.requester,
            created_at: now,
            updated_at: now,
            category: draft.category,
            subcategory: draft.subcategory,
        };
        info!(id = %ticket.id, "ticket created");
        self.tickets.insert(0, ticket);
        &self.tickets[0]
    }

    /// Set the assignee. Unknown ids are a no-op returning `false`.
    pub fn assign(&mut self, id: &str, assignee: impl Into<String>) -> bool {
        match self.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                ticket.assignee = assignee.into();
                ticket.updated_at = Utc::now();
                info!(id = %id, assignee = %ticket.assignee, "ticket assigned");
                true
            }
            None => false,
        }
    }

    /// Set the status directly. Callers decide which transitions to offer;
    /// the store does not validate them.
    pub fn set_status(&mut self, id: &str, status: TicketStatus) -> bool {
        match self.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                ticket.status = status;
                ticket.updated_at = Utc::now();
                info!(id = %id, status = ticket.status.label(), "ticket status changed");
                true
            }
            None => false,
        }
    }

    /// Replace the whole list, e.g. when a backend snapshot lands.
    pub fn replace_all(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
    }

    /// Next id for the given kind: one past the highest numeric suffix
    /// already present, zero-padded to three digits ("INC-006").
    fn next_id(&self, kind: &TicketKind) -> String {
        let prefix = kind.id_prefix();
        let highest = self
            .tickets
            .iter()
            .filter_map(|t| t.id.strip_prefix(prefix)?.strip_prefix('-'))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{}-{:03}", prefix, highest + 1)
    }
}
