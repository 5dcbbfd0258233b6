//! Widget state transitions.
//!
//! `WidgetState` lives in `helpdesk-types`; this module adds the transition
//! logic through an extension trait since inherent impls must live in the
//! defining crate.
//!
//! ```text
//! Closed --Open--> Open(Expanded) <--ToggleMinimize--> Open(Minimized)
//! Open(_) --Close--> Closed
//! ```
//!
//! Events that do not apply to the current state leave it unchanged.

use helpdesk_types::widget::{OpenView, WidgetEvent, WidgetState};

pub trait WidgetStateExt {
    /// State after `event`.
    fn apply(self, event: WidgetEvent) -> WidgetState;

    /// Whether the input box is visible, i.e. the widget is open and expanded.
    fn accepts_input(&self) -> bool;

    fn is_open(&self) -> bool;
}

impl WidgetStateExt for WidgetState {
    fn apply(self, event: WidgetEvent) -> WidgetState {
        match (self, event) {
            (WidgetState::Closed, WidgetEvent::Open) => WidgetState::Open(OpenView::Expanded),
            (WidgetState::Open(_), WidgetEvent::Close) => WidgetState::Closed,
            (WidgetState::Open(OpenView::Expanded), WidgetEvent::ToggleMinimize) => {
                WidgetState::Open(OpenView::Minimized)
            }
            (WidgetState::Open(OpenView::Minimized), WidgetEvent::ToggleMinimize) => {
                WidgetState::Open(OpenView::Expanded)
            }
            (state, _) => state,
        }
    }

    fn accepts_input(&self) -> bool {
        matches!(self, WidgetState::Open(OpenView::Expanded))
    }

    fn is_open(&self) -> bool {
        matches!(self, WidgetState::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_expands() {
        let state = WidgetState::Closed.apply(WidgetEvent::Open);
        assert_eq!(state, WidgetState::Open(OpenView::Expanded));
        assert!(state.accepts_input());
    }

    #[test]
    fn test_minimize_toggles() {
        let minimized = WidgetState::Open(OpenView::Expanded).apply(WidgetEvent::ToggleMinimize);
        assert_eq!(minimized, WidgetState::Open(OpenView::Minimized));
        assert!(minimized.is_open());
        assert!(!minimized.accepts_input());

        let expanded = minimized.apply(WidgetEvent::ToggleMinimize);
        assert_eq!(expanded, WidgetState::Open(OpenView::Expanded));
    }

    #[test]
    fn test_close_from_any_open_state() {
        for view in [OpenView::Expanded, OpenView::Minimized] {
            assert_eq!(
                WidgetState::Open(view).apply(WidgetEvent::Close),
                WidgetState::Closed
            );
        }
    }

    #[test]
    fn test_inapplicable_events_are_ignored() {
        assert_eq!(WidgetState::Closed.apply(WidgetEvent::Close), WidgetState::Closed);
        assert_eq!(
            WidgetState::Closed.apply(WidgetEvent::ToggleMinimize),
            WidgetState::Closed
        );
        let minimized = WidgetState::Open(OpenView::Minimized);
        assert_eq!(minimized.apply(WidgetEvent::Open), minimized);
    }
}
