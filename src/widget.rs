//! Guide widget for sending questions and displaying replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the conversation store and the guide gateway to whatever view is
//! drawing the panel. The view reads turns, status, visibility, and the
//! draft; it acts only through `toggle_visibility`, `update_draft`, and
//! `submit_draft`.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::services::guide::{GuideGateway, SharedConversation};
use crate::state::conversation::{Conversation, RequestStatus, Turn};
use crate::state::lock;
use crate::state::ui::{UiState, Visibility};

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

/// Follows the newest turn.
///
/// Reacts to conversation length changes rather than to appends, so the
/// store never needs to know a view exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollFollower {
    seen: usize,
}

impl ScrollFollower {
    /// Index of the newest turn if the conversation length changed since the
    /// previous call.
    pub fn observe(&mut self, conversation: &Conversation) -> Option<usize> {
        let len = conversation.len();
        if len == self.seen {
            return None;
        }
        self.seen = len;
        len.checked_sub(1)
    }
}

/// One mounted instance of the guide panel.
pub struct GuideWidget {
    conversation: SharedConversation,
    gateway: Arc<GuideGateway>,
    ui: UiState,
    scroll: ScrollFollower,
}

impl GuideWidget {
    /// Mount a collapsed widget with a fresh greeting-seeded conversation.
    #[must_use]
    pub fn mount(gateway: Arc<GuideGateway>) -> Self {
        Self {
            conversation: Arc::new(Mutex::new(Conversation::default())),
            gateway,
            ui: UiState::default(),
            scroll: ScrollFollower::default(),
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.ui.visibility = self.ui.visibility.toggled();
    }

    /// Launcher button.
    pub fn open(&mut self) {
        self.ui.visibility = Visibility::Expanded;
    }

    /// Close button in the panel header.
    pub fn close(&mut self) {
        self.ui.visibility = Visibility::Collapsed;
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.ui.visibility
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.ui.draft = text.into();
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.ui.draft
    }

    /// Whether the send affordance is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        lock(&self.conversation).can_send(&self.ui.draft)
    }

    /// Send the current draft.
    ///
    /// The user turn and pending flag are applied before this returns; the
    /// round trip runs on a spawned task whose handle is returned. Returns
    /// `None` and leaves the draft alone when the draft cannot be sent.
    /// Must be called from within a tokio runtime.
    pub fn submit_draft(&mut self) -> Option<JoinHandle<()>> {
        let pending = GuideGateway::begin_turn(&self.conversation, &self.ui.draft)?;
        self.ui.draft.clear();
        let gateway = Arc::clone(&self.gateway);
        Some(tokio::spawn(async move { gateway.finish_turn(pending).await }))
    }

    #[must_use]
    pub fn status(&self) -> RequestStatus {
        lock(&self.conversation).status()
    }

    #[must_use]
    pub fn turns(&self) -> Vec<Turn> {
        lock(&self.conversation).turns().to_vec()
    }

    /// Copy of the conversation for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Conversation {
        lock(&self.conversation).clone()
    }

    /// Newest turn index to scroll to, if the list grew since last asked.
    pub fn scroll_target(&mut self) -> Option<usize> {
        let convo = lock(&self.conversation);
        self.scroll.observe(&convo)
    }
}
