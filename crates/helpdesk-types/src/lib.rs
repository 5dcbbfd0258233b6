//! Shared domain types for the Helpdesk assistant.
//!
//! Chat transcript messages, conversation turns, assistant configuration,
//! widget state, and the error types shared by the core and infra layers.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod widget;
