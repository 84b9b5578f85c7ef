//! Guide service — one user turn in, one assistant turn out.
//!
//! DESIGN
//! ======
//! `GuideGateway` owns a lazily-built `GuideSession` (model + persona +
//! exchange history) and mediates exactly one LLM round trip per user turn.
//! A send raises the conversation's pending flag and hands back a
//! `PendingTurn`; dropping that value is what lowers the flag, so every exit
//! path (reply, failure, timeout, panic, task abort) returns to idle.
//!
//! Errors never leave this module. They are logged with their code and
//! replaced by a fixed assistant turn.

use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::llm::config::parse_u64;
use crate::llm::types::{LlmError, Message};
use crate::llm::{LlmChat, LlmClient};
use crate::state::conversation::{Conversation, RequestStatus, Turn};
use crate::state::lock;

use super::persona::build_persona;

/// Reply shown whenever the service cannot be reached or fails.
pub const FALLBACK_REPLY: &str = "Systems offline. Please try again later.";
/// Reply shown when the service answers without usable text.
pub const EMPTY_REPLY: &str = "Sorry, I couldn't process that.";

pub const DEFAULT_GUIDE_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_GUIDE_REPLY_TIMEOUT_SECS: u64 = 30;

/// Conversation shared between the widget and in-flight sends.
pub type SharedConversation = Arc<Mutex<Conversation>>;

/// Builds the LLM client a session is bound to.
pub type SessionFactory = Box<dyn Fn() -> Result<Arc<dyn LlmChat>, LlmError> + Send + Sync>;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("assistant session unavailable")]
    SessionUnavailable,
    #[error("no reply within {0:?}")]
    TimedOut(Duration),
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl GuideError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SessionUnavailable => "E_SESSION_UNAVAILABLE",
            Self::TimedOut(_) => "E_TIMED_OUT",
            Self::Llm(e) => e.error_code(),
        }
    }

    /// Whether asking the same question again could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        match self {
            Self::SessionUnavailable => false,
            Self::TimedOut(_) => true,
            Self::Llm(e) => e.retryable(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideConfig {
    pub persona: String,
    pub max_tokens: u32,
    pub reply_timeout: Duration,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            persona: build_persona(),
            max_tokens: DEFAULT_GUIDE_MAX_TOKENS,
            reply_timeout: Duration::from_secs(DEFAULT_GUIDE_REPLY_TIMEOUT_SECS),
        }
    }
}

impl GuideConfig {
    /// Build guide settings from environment variables.
    ///
    /// - `GUIDE_MAX_TOKENS`: default 1024
    /// - `GUIDE_REPLY_TIMEOUT_SECS`: default 30, zero falls back to the default
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_tokens = lookup("GUIDE_MAX_TOKENS")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_GUIDE_MAX_TOKENS);
        let timeout_secs = match parse_u64(&lookup, "GUIDE_REPLY_TIMEOUT_SECS", DEFAULT_GUIDE_REPLY_TIMEOUT_SECS) {
            0 => DEFAULT_GUIDE_REPLY_TIMEOUT_SECS,
            secs => secs,
        };
        Self { max_tokens, reply_timeout: Duration::from_secs(timeout_secs), ..Self::default() }
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Established context with the language service.
///
/// Holds every completed exchange and replays it on each call, so the
/// service sees one continuous conversation.
pub struct GuideSession {
    llm: Arc<dyn LlmChat>,
    persona: String,
    history: Mutex<Vec<Message>>,
}

impl GuideSession {
    fn new(llm: Arc<dyn LlmChat>, persona: String) -> Self {
        Self { llm, persona, history: Mutex::new(Vec::new()) }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.llm.model()
    }

    #[must_use]
    pub fn persona(&self) -> &str {
        &self.persona
    }

    /// Number of messages recorded from completed exchanges.
    #[must_use]
    pub fn history_len(&self) -> usize {
        lock(&self.history).len()
    }

    /// Send `text` with the accumulated history. Returns the reply text, or
    /// `None` when the service produced nothing usable.
    async fn exchange(&self, max_tokens: u32, text: &str) -> Result<Option<String>, LlmError> {
        let mut messages = lock(&self.history).clone();
        messages.push(Message::user(text));

        let response = self.llm.chat(max_tokens, &self.persona, &messages).await?;
        info!(
            model = %response.model,
            stop_reason = %response.stop_reason,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "guide: LLM response"
        );

        // Only complete exchanges are kept so the history alternates.
        if let Some(reply) = &response.text {
            let mut history = lock(&self.history);
            history.push(Message::user(text));
            history.push(Message::assistant(reply.clone()));
        }
        Ok(response.text)
    }
}

// =============================================================================
// PENDING TURN
// =============================================================================

/// A user turn that has been appended and is awaiting its reply.
///
/// The conversation stays `Pending` exactly as long as this value lives.
pub struct PendingTurn {
    conversation: SharedConversation,
    text: String,
}

impl PendingTurn {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Drop for PendingTurn {
    fn drop(&mut self) {
        lock(&self.conversation).set_status(RequestStatus::Idle);
    }
}

// =============================================================================
// GATEWAY
// =============================================================================

pub struct GuideGateway {
    config: GuideConfig,
    factory: SessionFactory,
    session: OnceLock<GuideSession>,
}

impl GuideGateway {
    pub fn new(
        config: GuideConfig,
        factory: impl Fn() -> Result<Arc<dyn LlmChat>, LlmError> + Send + Sync + 'static,
    ) -> Self {
        Self { config, factory: Box::new(factory), session: OnceLock::new() }
    }

    /// Gateway backed by the environment-configured Gemini client.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GuideConfig::from_env(), || {
            let client: Arc<dyn LlmChat> = Arc::new(LlmClient::from_env()?);
            Ok(client)
        })
    }

    #[must_use]
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Return the session, building it on first demand.
    ///
    /// Once built it is returned unchanged forever. A failed build is logged
    /// and leaves the slot empty; the next call tries again.
    pub fn ensure_session(&self) -> Option<&GuideSession> {
        if let Some(session) = self.session.get() {
            return Some(session);
        }
        match (self.factory)() {
            Ok(llm) => {
                info!(model = llm.model(), "guide: session established");
                if self
                    .session
                    .set(GuideSession::new(llm, self.config.persona.clone()))
                    .is_err()
                {
                    debug!("guide: session raced, keeping the first one");
                }
                self.session.get()
            }
            Err(e) => {
                warn!(
                    error = %e,
                    error_code = e.error_code(),
                    retryable = e.retryable(),
                    "guide: session init failed"
                );
                None
            }
        }
    }

    /// Append the user turn and raise the pending flag.
    ///
    /// Returns `None` without touching the conversation when `draft` is blank
    /// or a send is already in flight.
    #[must_use]
    pub fn begin_turn(conversation: &SharedConversation, draft: &str) -> Option<PendingTurn> {
        let mut convo = lock(conversation);
        if !convo.can_send(draft) {
            return None;
        }
        let turn = Turn::user(draft)?;
        let text = turn.text().to_string();
        convo.append(turn);
        convo.set_status(RequestStatus::Pending);
        Some(PendingTurn { conversation: Arc::clone(conversation), text })
    }

    /// Obtain the reply for `pending`, append it, and return to idle.
    pub async fn finish_turn(&self, pending: PendingTurn) {
        let reply = match self.request_reply(pending.text()).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(
                    error = %e,
                    error_code = e.error_code(),
                    retryable = e.retryable(),
                    "guide: send failed, using fallback reply"
                );
                FALLBACK_REPLY.to_string()
            }
        };
        lock(&pending.conversation).append(Turn::assistant(reply));
        drop(pending);
    }

    /// Full send: user turn, one round trip, one assistant turn.
    ///
    /// Returns `false` (and changes nothing) when `can_send(text)` does not
    /// hold.
    pub async fn send_turn(&self, conversation: &SharedConversation, text: &str) -> bool {
        let Some(pending) = Self::begin_turn(conversation, text) else {
            debug!("guide: send rejected");
            return false;
        };
        self.finish_turn(pending).await;
        true
    }

    async fn request_reply(&self, text: &str) -> Result<String, GuideError> {
        let session = self.ensure_session().ok_or(GuideError::SessionUnavailable)?;
        let timeout = self.config.reply_timeout;
        let reply = tokio::time::timeout(timeout, session.exchange(self.config.max_tokens, text))
            .await
            .map_err(|_| GuideError::TimedOut(timeout))??;
        Ok(reply.unwrap_or_else(|| EMPTY_REPLY.to_string()))
    }
}

#[cfg(test)]
#[path = "guide_test.rs"]
mod tests;
