//! Conversation store — ordered turns plus the in-flight request flag.
//!
//! DESIGN
//! ======
//! Pure data, no I/O. The only mutations are `append` and `set_status`;
//! turns are never reordered or removed. Rendering concerns such as
//! scroll-follow observe `len()` instead of being triggered from here.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

/// Assistant greeting every conversation starts with.
pub const GREETING: &str = "Hello! I am your AI Guide for Inteleza '26. Ask me anything about the trip!";

/// Who said a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One immutable message in the conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    speaker: Speaker,
    text: String,
}

impl Turn {
    /// Build a user turn from raw input. Returns `None` when the text is
    /// blank after trimming.
    #[must_use]
    pub fn user(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self { speaker: Speaker::User, text: text.to_string() })
    }

    /// Build an assistant turn. Text is kept verbatim.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::Assistant, text: text.into() }
    }

    #[must_use]
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Whether a send is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
}

/// Ordered turns and the request flag for one widget instance.
#[derive(Clone, Debug)]
pub struct Conversation {
    turns: Vec<Turn>,
    status: RequestStatus,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::with_greeting(GREETING)
    }
}

impl Conversation {
    /// Start a conversation seeded with a single assistant greeting.
    #[must_use]
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self { turns: vec![Turn::assistant(greeting)], status: RequestStatus::Idle }
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn set_status(&mut self, status: RequestStatus) {
        if self.status != status {
            self.status = status;
        }
    }

    /// True iff nothing is in flight and `draft` has non-whitespace content.
    /// Gates every send and enables the submit affordance.
    #[must_use]
    pub fn can_send(&self, draft: &str) -> bool {
        self.status == RequestStatus::Idle && !draft.trim().is_empty()
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false in practice: the greeting is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    #[must_use]
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}
