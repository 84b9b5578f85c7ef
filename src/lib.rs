//! Trip guide — the conversational assistant for the Inteleza '26 site.
//!
//! ARCHITECTURE
//! ============
//! - `state`: conversation store and panel chrome, pure data.
//! - `services`: the guide gateway and its persona.
//! - `llm`: Gemini transport behind the `LlmChat` trait.
//! - `widget` / `render`: the binding a view drives, and a text view.

pub mod llm;
pub mod render;
pub mod services;
pub mod state;
pub mod widget;
