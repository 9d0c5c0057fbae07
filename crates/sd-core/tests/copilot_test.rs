use sd_core::copilot::{self, CopilotReply};
use sd_core::types::{ActionKind, MessageAuthor};

fn titles(reply: &CopilotReply) -> Vec<&str> {
    reply.actions.iter().map(|a| a.title.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Branch selection
// ---------------------------------------------------------------------------

#[test]
fn email_keyword_selects_email_branch() {
    let reply = copilot::respond("my email is not syncing");
    assert!(reply.text.contains("restart Outlook and clear the cache"));
    assert_eq!(
        titles(&reply),
        vec!["Create Email Incident", "Search Email Solutions"]
    );
}

#[test]
fn outlook_keyword_is_case_insensitive() {
    let reply = copilot::respond("OUTLOOK keeps crashing on startup");
    assert!(reply.text.contains("email issues"));
    assert_eq!(reply.actions.len(), 2);
    assert_eq!(reply.actions[0].kind, ActionKind::CreateTicket);
    assert_eq!(reply.actions[1].kind, ActionKind::SearchKb);
}

#[test]
fn vpn_keyword_selects_vpn_branch() {
    let reply = copilot::respond("the vpn drops every hour");
    assert!(reply.text.contains("VPN connection issues"));
    // Non-email branches carry the generic action pair.
    assert_eq!(titles(&reply), vec!["Create New Ticket", "Search Knowledge Base"]);
}

#[test]
fn connection_keyword_selects_vpn_branch() {
    let reply = copilot::respond("My Connection is flaky today");
    assert!(reply.text.contains("VPN connection issues"));
}

#[test]
fn create_question_selects_ticket_guidance() {
    let reply = copilot::respond("How do I create a ticket?");
    assert!(reply.text.contains("help you create a new ticket"));
}

#[test]
fn ticket_substring_matches_like_the_web_ui() {
    // Plain substring containment, so "ticketing" also hits the branch.
    let reply = copilot::respond("question about the ticketing system");
    assert!(reply.text.contains("help you create a new ticket"));
}

#[test]
fn unmatched_input_falls_back() {
    let reply = copilot::respond("printer jam");
    assert!(reply.text.contains("search our knowledge base"));
    assert_eq!(reply.actions.len(), 2);
    assert_eq!(titles(&reply), vec!["Create New Ticket", "Search Knowledge Base"]);
}

#[test]
fn email_wins_over_vpn_when_both_present() {
    let reply = copilot::respond("email fails whenever the vpn is up");
    assert!(reply.text.contains("email issues"));
    assert_eq!(titles(&reply)[0], "Create Email Incident");
}

#[test]
fn vpn_wins_over_create_when_both_present() {
    let reply = copilot::respond("please create a fix for my vpn");
    assert!(reply.text.contains("VPN connection issues"));
}

// ---------------------------------------------------------------------------
// Greeting and acknowledgements
// ---------------------------------------------------------------------------

#[test]
fn greeting_carries_four_suggestions() {
    let msg = copilot::greeting();
    assert_eq!(msg.author, MessageAuthor::Assistant);
    assert_eq!(msg.suggestions.len(), 4);
    assert_eq!(msg.suggestions[0], "Create a new incident ticket");
    assert!(msg.actions.is_empty());
    // Product copy keeps the hosted suite's branding.
    assert!(msg.text.contains("Microsoft 365 Copilot assistant"));
    assert!(msg.text.contains("How can I assist you today?"));
}

#[test]
fn action_acknowledgement_names_the_action() {
    let reply = copilot::respond("outlook is down");
    let ack = copilot::action_acknowledgement(&reply.actions[0]);
    assert_eq!(
        ack,
        "I'm executing the action: Create Email Incident. Create a new incident ticket for email issues"
    );
}
