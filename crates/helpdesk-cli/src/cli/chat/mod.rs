//! Interactive CLI chat for the Helpdesk assistant.
//!
//! The terminal plays the part of the chat widget: slash commands open,
//! close and minimize it, and the transcript is kept here as displayed
//! messages. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
pub mod transcript;
