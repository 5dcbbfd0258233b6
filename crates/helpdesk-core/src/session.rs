//! Assistant session: one linear conversation behind a chat widget.
//!
//! Owns the conversation context, the widget state, and the
//! `awaiting_response` flag. At most one submission is resolved at a time;
//! a second submission while one is in flight is rejected with
//! [`SubmitError::Busy`], so turns are appended strictly in resolution order.
//!
//! The session is `Send + Sync` and meant to be shared behind an `Arc`. The
//! mutexes are only held for short, synchronous sections, never across the
//! remote call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use helpdesk_types::chat::ConversationTurn;
use helpdesk_types::config::DEFAULT_CONTEXT_WINDOW;
use helpdesk_types::error::SubmitError;
use helpdesk_types::widget::{WidgetEvent, WidgetState};

use crate::context::ConversationContext;
use crate::resolver::{Resolution, ResponseResolver};
use crate::widget::WidgetStateExt;

/// Clears the in-flight flag when dropped, including when the submit future is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct AssistantSession {
    resolver: ResponseResolver,
    use_remote: bool,
    is_configured: bool,
    context_window: usize,
    context: Mutex<ConversationContext>,
    widget: Mutex<WidgetState>,
    awaiting_response: AtomicBool,
}

impl AssistantSession {
    /// New session with a closed widget and an empty conversation.
    pub fn new(resolver: ResponseResolver, use_remote: bool, is_configured: bool) -> Self {
        Self {
            resolver,
            use_remote,
            is_configured,
            context_window: DEFAULT_CONTEXT_WINDOW,
            context: Mutex::new(ConversationContext::new()),
            widget: Mutex::new(WidgetState::Closed),
            awaiting_response: AtomicBool::new(false),
        }
    }

    /// Number of recent turns handed to the resolver with each submission.
    pub fn with_context_window(mut self, context_window: usize) -> Self {
        self.context_window = context_window;
        self
    }

    pub fn resolver(&self) -> &ResponseResolver {
        &self.resolver
    }

    pub fn widget_state(&self) -> WidgetState {
        *self.lock_widget()
    }

    /// Apply a widget event and return the resulting state.
    pub fn apply(&self, event: WidgetEvent) -> WidgetState {
        let mut state = self.lock_widget();
        let current = *state;
        let next = current.apply(event);
        if next != current {
            tracing::debug!(from = %current, to = %next, "Widget state changed");
        }
        *state = next;
        next
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response.load(Ordering::Acquire)
    }

    /// Snapshot of the conversation so far.
    pub fn context(&self) -> ConversationContext {
        self.lock_context().clone()
    }

    /// Resolve a user submission and record both turns.
    ///
    /// Rejected when the widget is not open and expanded, when the text is
    /// blank, or while another submission is still being resolved. Fallback
    /// answers are recorded exactly like remote ones.
    pub async fn submit(&self, user_text: &str) -> Result<Resolution, SubmitError> {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            return Err(SubmitError::EmptyMessage);
        }
        if !self.widget_state().accepts_input() {
            return Err(SubmitError::Closed);
        }
        let _in_flight = InFlight::acquire(&self.awaiting_response).ok_or(SubmitError::Busy)?;

        let history = self
            .lock_context()
            .recent_window(self.context_window)
            .to_vec();
        let resolution = self
            .resolver
            .resolve_tagged(user_text, &history, self.use_remote, self.is_configured)
            .await;

        let mut context = self.lock_context();
        context.append(ConversationTurn::user(user_text));
        context.append(ConversationTurn::assistant(resolution.text()));
        tracing::debug!(
            turns = context.len(),
            fallback = resolution.is_fallback(),
            "Recorded exchange"
        );

        Ok(resolution)
    }

    fn lock_context(&self) -> MutexGuard<'_, ConversationContext> {
        self.context.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_widget(&self) -> MutexGuard<'_, WidgetState> {
        self.widget.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
