//! Canned-response engine behind the assistant panel.
//!
//! `respond` is a pure keyword classifier over the lowercased input. The
//! match arms are ordered and first-match-wins: an input mentioning both
//! email and VPN gets the email reply. Callers reject empty or
//! whitespace-only input before calling in; the engine itself never fails.

use crate::types::{ActionKind, CopilotAction, CopilotMessage};

// ---------------------------------------------------------------------------
// Canned copy
// ---------------------------------------------------------------------------

const GREETING: &str = "Hello! I'm your Microsoft 365 Copilot assistant. I can help you with \
     ticket management, knowledge base searches, and incident resolution. How can I assist \
     you today?";

const EMAIL_RESPONSE: &str = "I found several solutions for email issues. Based on recent \
     tickets, the most common resolution is to restart Outlook and clear the cache. I can \
     also check if there are any ongoing email server incidents. Would you like me to create \
     a ticket or search for more specific solutions?";

const VPN_RESPONSE: &str = "VPN connection issues are often related to network configuration \
     or certificate problems. I found 3 knowledge base articles that might help. The quickest \
     solution is usually to disconnect and reconnect the VPN, or try a different server \
     location. Should I create a ticket for this issue?";

const CREATE_RESPONSE: &str = "I can help you create a new ticket. Based on your description, \
     I suggest categorizing this as an incident with medium priority. I'll pre-fill the form \
     with relevant information. What type of issue are you experiencing?";

const FALLBACK_RESPONSE: &str = "I understand you need assistance. Let me search our \
     knowledge base and recent tickets for relevant solutions. I can also help you create a \
     ticket, assign it to the right technician, or escalate if needed. What specific action \
     would you like me to take?";

/// Prompts offered under the greeting bubble.
pub const SUGGESTIONS: [&str; 4] = [
    "Create a new incident ticket",
    "Search for email server issues",
    "Show me critical tickets",
    "Find resolution for VPN problems",
];

// ---------------------------------------------------------------------------
// Reply
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopilotReply {
    pub text: String,
    pub actions: Vec<CopilotAction>,
}

/// Classify `input` and return the canned reply plus its action buttons.
pub fn respond(input: &str) -> CopilotReply {
    let lower = input.to_lowercase();

    let text = if lower.contains("email") || lower.contains("outlook") {
        EMAIL_RESPONSE
    } else if lower.contains("vpn") || lower.contains("connection") {
        VPN_RESPONSE
    } else if lower.contains("create") || lower.contains("ticket") {
        CREATE_RESPONSE
    } else {
        FALLBACK_RESPONSE
    };

    CopilotReply {
        text: text.to_string(),
        actions: actions_for(&lower),
    }
}

/// The opening assistant message, carrying the four canned suggestions.
pub fn greeting() -> CopilotMessage {
    CopilotMessage::assistant(GREETING)
        .with_suggestions(SUGGESTIONS.iter().map(|s| s.to_string()).collect())
}

/// Acknowledgement appended when the user "executes" an action button.
/// The buttons are deliberately inert; this is all that happens.
pub fn action_acknowledgement(action: &CopilotAction) -> String {
    format!(
        "I'm executing the action: {}. {}",
        action.title, action.description
    )
}

// ---------------------------------------------------------------------------
// Action lists
// ---------------------------------------------------------------------------

fn actions_for(lower: &str) -> Vec<CopilotAction> {
    if lower.contains("email") || lower.contains("outlook") {
        return vec![
            CopilotAction {
                id: "1".to_string(),
                title: "Create Email Incident".to_string(),
                description: "Create a new incident ticket for email issues".to_string(),
                kind: ActionKind::CreateTicket,
            },
            CopilotAction {
                id: "2".to_string(),
                title: "Search Email Solutions".to_string(),
                description: "Search knowledge base for email troubleshooting".to_string(),
                kind: ActionKind::SearchKb,
            },
        ];
    }

    vec![
        CopilotAction {
            id: "1".to_string(),
            title: "Create New Ticket".to_string(),
            description: "Create a ticket based on this conversation".to_string(),
            kind: ActionKind::CreateTicket,
        },
        CopilotAction {
            id: "2".to_string(),
            title: "Search Knowledge Base".to_string(),
            description: "Find relevant articles and solutions".to_string(),
            kind: ActionKind::SearchKb,
        },
    ]
}
