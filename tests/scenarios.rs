//! End-to-end widget scenarios against a scripted model.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tripguide::llm::LlmChat;
use tripguide::llm::types::{ChatResponse, LlmError, Message};
use tripguide::services::guide::{FALLBACK_REPLY, GuideConfig, GuideGateway};
use tripguide::state::conversation::{RequestStatus, Speaker};
use tripguide::state::ui::Visibility;
use tripguide::widget::GuideWidget;

struct ScriptedLlm {
    fail: AtomicBool,
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl LlmChat for ScriptedLlm {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn chat(&self, _max_tokens: u32, _system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(LlmError::ApiRequest("network unreachable".into()));
        }
        let question = messages.last().map(|m| m.text.as_str()).unwrap_or_default();
        Ok(ChatResponse {
            text: Some(format!("Guide says: {question}")),
            model: "scripted".into(),
            stop_reason: "end_turn".into(),
            input_tokens: 1,
            output_tokens: 1,
        })
    }
}

fn mount(fail: bool) -> (GuideWidget, Arc<ScriptedLlm>) {
    let llm = Arc::new(ScriptedLlm { fail: AtomicBool::new(fail), calls: AtomicUsize::new(0) });
    let for_factory = Arc::clone(&llm);
    let gateway = GuideGateway::new(GuideConfig::default(), move || {
        let client: Arc<dyn LlmChat> = for_factory.clone();
        Ok(client)
    });
    (GuideWidget::mount(Arc::new(gateway)), llm)
}

async fn ask(widget: &mut GuideWidget, text: &str) {
    widget.update_draft(text);
    let handle = widget.submit_draft().expect("draft should be sendable");
    handle.await.expect("send task should finish");
}

#[tokio::test]
async fn scenario_a_question_gets_a_reply() {
    let (mut widget, _) = mount(false);
    assert_eq!(widget.turns().len(), 1);

    ask(&mut widget, "What should I pack for Munnar?").await;

    let turns = widget.turns();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[2].speaker(), Speaker::Assistant);
    assert_eq!(turns[2].text(), "Guide says: What should I pack for Munnar?");
    assert_eq!(widget.status(), RequestStatus::Idle);
}

#[tokio::test]
async fn scenario_b_failing_service_yields_apology() {
    let (mut widget, _) = mount(true);

    ask(&mut widget, "Is the boat ride included?").await;

    let turns = widget.turns();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[2].text(), FALLBACK_REPLY);
    assert_eq!(widget.status(), RequestStatus::Idle);
}

#[tokio::test]
async fn scenario_c_back_to_back_submit_sends_once() {
    let (mut widget, llm) = mount(false);

    widget.update_draft("When is the campfire?");
    let first = widget.submit_draft().expect("first submit");
    widget.update_draft("And the shopping?");
    assert!(widget.submit_draft().is_none());

    first.await.expect("send task should finish");
    assert_eq!(widget.turns().len(), 3);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn scenario_d_double_toggle_changes_nothing() {
    let (mut widget, _) = mount(false);
    ask(&mut widget, "hello").await;
    let before = widget.turns();

    widget.toggle_visibility();
    widget.toggle_visibility();

    assert_eq!(widget.visibility(), Visibility::Collapsed);
    assert_eq!(widget.turns(), before);
    assert_eq!(widget.status(), RequestStatus::Idle);
}

#[tokio::test]
async fn every_completed_send_adds_two_turns() {
    let (mut widget, llm) = mount(false);
    for (i, q) in ["Day 1?", "Day 2?", "Day 3?", "Day 4?"].iter().enumerate() {
        llm.fail.store(i % 2 == 1, Ordering::SeqCst);
        ask(&mut widget, q).await;
        assert_eq!(widget.turns().len(), 1 + 2 * (i + 1));
        assert_eq!(widget.status(), RequestStatus::Idle);
    }
}

#[tokio::test]
async fn blank_submissions_change_nothing() {
    let (mut widget, llm) = mount(false);
    for draft in ["", "   ", "\n\t"] {
        widget.update_draft(draft);
        assert!(widget.submit_draft().is_none());
    }
    assert_eq!(widget.turns().len(), 1);
    assert_eq!(widget.status(), RequestStatus::Idle);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
}
