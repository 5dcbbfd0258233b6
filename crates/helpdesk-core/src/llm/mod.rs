//! Remote language-model abstractions for the assistant.
//!
//! - `RemoteResponder`: RPITIT trait for concrete chat-completion backends
//! - `BoxRemoteResponder`: object-safe wrapper for dynamic dispatch
//! - `prompt`: the fixed system prompt and request message assembly

pub mod box_responder;
pub mod prompt;
pub mod responder;
