use super::*;

// =============================================================
// Conversation defaults
// =============================================================

#[test]
fn conversation_starts_with_single_greeting() {
    let convo = Conversation::default();
    assert_eq!(convo.len(), 1);
    let greeting = convo.last().unwrap();
    assert_eq!(greeting.speaker(), Speaker::Assistant);
    assert_eq!(greeting.text(), GREETING);
}

#[test]
fn conversation_starts_idle() {
    let convo = Conversation::default();
    assert_eq!(convo.status(), RequestStatus::Idle);
    assert!(!convo.is_pending());
}

// =============================================================
// Turn construction
// =============================================================

#[test]
fn user_turn_is_trimmed() {
    let turn = Turn::user("  What should I pack?\n").unwrap();
    assert_eq!(turn.text(), "What should I pack?");
    assert_eq!(turn.speaker(), Speaker::User);
}

#[test]
fn blank_user_turn_is_rejected() {
    assert!(Turn::user("").is_none());
    assert!(Turn::user(" \t\n").is_none());
}

#[test]
fn assistant_turn_is_verbatim() {
    let turn = Turn::assistant("  spaced  ");
    assert_eq!(turn.text(), "  spaced  ");
}

// =============================================================
// append / set_status
// =============================================================

#[test]
fn append_preserves_arrival_order() {
    let mut convo = Conversation::default();
    convo.append(Turn::user("one").unwrap());
    convo.append(Turn::assistant("two"));
    convo.append(Turn::user("three").unwrap());
    let texts: Vec<&str> = convo.turns().iter().map(Turn::text).collect();
    assert_eq!(texts, vec![GREETING, "one", "two", "three"]);
}

#[test]
fn set_status_transitions_and_is_idempotent() {
    let mut convo = Conversation::default();
    convo.set_status(RequestStatus::Pending);
    convo.set_status(RequestStatus::Pending);
    assert!(convo.is_pending());
    convo.set_status(RequestStatus::Idle);
    assert_eq!(convo.status(), RequestStatus::Idle);
}

// =============================================================
// can_send
// =============================================================

#[test]
fn can_send_rejects_blank_drafts() {
    let convo = Conversation::default();
    assert!(!convo.can_send(""));
    assert!(!convo.can_send("   "));
    assert!(convo.can_send("When do we reach Munnar?"));
}

#[test]
fn can_send_rejects_while_pending() {
    let mut convo = Conversation::default();
    convo.set_status(RequestStatus::Pending);
    assert!(!convo.can_send("anything"));
    assert_eq!(convo.len(), 1);
}
