//! Chat widget state types.
//!
//! The transition logic lives in `helpdesk-core::widget`; this module only
//! defines the states and events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an open widget is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenView {
    Expanded,
    Minimized,
}

/// Visibility state of the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "view", rename_all = "snake_case")]
pub enum WidgetState {
    Closed,
    Open(OpenView),
}

impl Default for WidgetState {
    fn default() -> Self {
        WidgetState::Closed
    }
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetState::Closed => write!(f, "closed"),
            WidgetState::Open(OpenView::Expanded) => write!(f, "open (expanded)"),
            WidgetState::Open(OpenView::Minimized) => write!(f, "open (minimized)"),
        }
    }
}

/// User-driven events on the widget chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetEvent {
    Open,
    Close,
    ToggleMinimize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        assert_eq!(WidgetState::default(), WidgetState::Closed);
    }

    #[test]
    fn test_display() {
        assert_eq!(WidgetState::Closed.to_string(), "closed");
        assert_eq!(
            WidgetState::Open(OpenView::Minimized).to_string(),
            "open (minimized)"
        );
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&WidgetState::Open(OpenView::Expanded)).unwrap();
        assert_eq!(json, r#"{"state":"open","view":"expanded"}"#);
    }
}
