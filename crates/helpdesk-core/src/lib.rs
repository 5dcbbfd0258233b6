//! Response-resolution core for the Helpdesk assistant.
//!
//! This crate decides what to answer for each user utterance: a remote
//! language-model reply when one is available, otherwise the deterministic
//! rule-based answer. It defines the [`llm::responder::RemoteResponder`] port
//! that `helpdesk-infra` implements and never performs IO itself.

pub mod context;
pub mod intent;
pub mod llm;
pub mod markup;
pub mod resolver;
pub mod session;
pub mod widget;
