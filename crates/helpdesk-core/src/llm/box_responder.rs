//! BoxRemoteResponder -- object-safe dynamic dispatch wrapper for RemoteResponder.
//!
//! 1. Define an object-safe `RemoteResponderDyn` trait with boxed futures
//! 2. Blanket-impl `RemoteResponderDyn` for all `T: RemoteResponder`
//! 3. `BoxRemoteResponder` wraps `Box<dyn RemoteResponderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use helpdesk_types::chat::ConversationTurn;
use helpdesk_types::error::RemoteCallError;

use super::responder::RemoteResponder;

/// Object-safe version of [`RemoteResponder`] with a boxed future.
pub trait RemoteResponderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn respond_boxed<'a>(
        &'a self,
        user_text: &'a str,
        history: &'a [ConversationTurn],
    ) -> Pin<Box<dyn Future<Output = Result<String, RemoteCallError>> + Send + 'a>>;
}

impl<T: RemoteResponder> RemoteResponderDyn for T {
    fn name(&self) -> &str {
        RemoteResponder::name(self)
    }

    fn respond_boxed<'a>(
        &'a self,
        user_text: &'a str,
        history: &'a [ConversationTurn],
    ) -> Pin<Box<dyn Future<Output = Result<String, RemoteCallError>> + Send + 'a>> {
        Box::pin(self.respond(user_text, history))
    }
}

/// Type-erased remote responder.
///
/// `RemoteResponder` uses RPITIT and cannot be a trait object directly, so the
/// resolver holds one of these instead.
pub struct BoxRemoteResponder {
    inner: Box<dyn RemoteResponderDyn + Send + Sync>,
}

impl BoxRemoteResponder {
    pub fn new<T: RemoteResponder + 'static>(responder: T) -> Self {
        Self {
            inner: Box::new(responder),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn respond(
        &self,
        user_text: &str,
        history: &[ConversationTurn],
    ) -> Result<String, RemoteCallError> {
        self.inner.respond_boxed(user_text, history).await
    }
}

impl std::fmt::Debug for BoxRemoteResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxRemoteResponder")
            .field("name", &self.name())
            .finish()
    }
}
