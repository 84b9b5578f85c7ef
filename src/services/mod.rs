//! Domain services used by the widget.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the conversation-with-the-model logic so the widget
//! stays focused on state binding and rendering.

pub mod guide;
pub mod persona;
