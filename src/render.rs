//! Plain-text rendering of the guide panel.
//!
//! The terminal front end redraws the whole panel after every change; these
//! functions are pure so the layout is testable without a terminal.

use crate::state::conversation::{Conversation, Speaker, Turn};
use crate::state::ui::Visibility;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

pub const TITLE: &str = "IV Assistant";
pub const PLACEHOLDER: &str = "Ask about timing, places...";
pub const LAUNCHER: &str = "[ IV Assistant ]  /open to chat";
pub const TYPING: &str = "...";

const RULE_WIDTH: usize = 48;

fn label(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::User => "you",
        Speaker::Assistant => "guide",
    }
}

fn write_turn(out: &mut String, speaker: Speaker, text: &str) {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or("");
    out.push_str(&format!("{:>5} | {first}\n", label(speaker)));
    for line in lines {
        out.push_str(&format!("{:>5} | {line}\n", ""));
    }
}

/// One rendered turn, continuation lines aligned under the first.
#[must_use]
pub fn turn_block(turn: &Turn) -> String {
    let mut out = String::new();
    write_turn(&mut out, turn.speaker(), turn.text());
    out
}

/// The whole panel: launcher only when collapsed, otherwise header, turns,
/// typing indicator while pending, and the input line.
#[must_use]
pub fn panel(visibility: Visibility, conversation: &Conversation, draft: &str) -> String {
    if !visibility.is_expanded() {
        return format!("{LAUNCHER}\n");
    }

    let mut out = String::new();
    let header = format!("-- {TITLE} ");
    out.push_str(&header);
    out.push_str(&"-".repeat(RULE_WIDTH.saturating_sub(header.len())));
    out.push('\n');
    for t in conversation.turns() {
        out.push_str(&turn_block(t));
    }
    if conversation.is_pending() {
        write_turn(&mut out, Speaker::Assistant, TYPING);
    }
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    let input = if draft.is_empty() { PLACEHOLDER } else { draft };
    let send = if conversation.can_send(draft) { "[send]" } else { "[----]" };
    out.push_str(&format!("> {input}  {send}\n"));
    out
}
