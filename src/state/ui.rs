//! Local widget chrome state (panel visibility, draft input).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the conversation store so
//! opening, closing, and typing never touch turns or the request flag.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Whether the chat panel is showing or only its launcher button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Collapsed,
    Expanded,
}

impl Visibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// UI state for the guide panel.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub visibility: Visibility,
    pub draft: String,
}
