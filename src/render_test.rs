use super::*;
use crate::state::conversation::{GREETING, RequestStatus};

#[test]
fn collapsed_panel_shows_only_launcher() {
    let convo = Conversation::default();
    let out = panel(Visibility::Collapsed, &convo, "");
    assert_eq!(out, format!("{LAUNCHER}\n"));
    assert!(!out.contains(GREETING));
}

#[test]
fn expanded_panel_lists_turns_in_order() {
    let mut convo = Conversation::default();
    convo.append(Turn::user("When do we leave?").unwrap());
    convo.append(Turn::assistant("07:30 PM on Day 1."));
    let out = panel(Visibility::Expanded, &convo, "");

    assert!(out.starts_with(&format!("-- {TITLE} ")));
    let greeting_at = out.find(GREETING).unwrap();
    let question_at = out.find("  you | When do we leave?").unwrap();
    let answer_at = out.find("guide | 07:30 PM on Day 1.").unwrap();
    assert!(greeting_at < question_at && question_at < answer_at);
}

#[test]
fn placeholder_shown_for_empty_draft() {
    let convo = Conversation::default();
    let out = panel(Visibility::Expanded, &convo, "");
    assert!(out.contains(&format!("> {PLACEHOLDER}  [----]")));
}

#[test]
fn draft_enables_send_marker() {
    let convo = Conversation::default();
    let out = panel(Visibility::Expanded, &convo, "Kochi?");
    assert!(out.contains("> Kochi?  [send]"));
}

#[test]
fn pending_shows_typing_indicator_and_disables_send() {
    let mut convo = Conversation::default();
    convo.append(Turn::user("hi").unwrap());
    convo.set_status(RequestStatus::Pending);
    let out = panel(Visibility::Expanded, &convo, "again");
    assert!(out.contains(&format!("guide | {TYPING}")));
    assert!(out.contains("> again  [----]"));
}

#[test]
fn multiline_turn_aligns_continuation() {
    let out = turn_block(&Turn::assistant("Day 2:\nMunnar"));
    assert_eq!(out, "guide | Day 2:\n      | Munnar\n");
}
