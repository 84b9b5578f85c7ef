use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_collapsed() {
    let state = UiState::default();
    assert_eq!(state.visibility, Visibility::Collapsed);
    assert!(!state.visibility.is_expanded());
}

#[test]
fn ui_state_default_empty_draft() {
    assert!(UiState::default().draft.is_empty());
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Visibility::Collapsed.toggled(), Visibility::Expanded);
    assert_eq!(Visibility::Expanded.toggled(), Visibility::Collapsed);
}

#[test]
fn toggled_twice_is_identity() {
    let v = Visibility::default();
    assert_eq!(v.toggled().toggled(), v);
}
