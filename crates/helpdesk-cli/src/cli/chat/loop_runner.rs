//! Main chat loop.
//!
//! Builds a session from the configuration, opens the assistant and reads
//! lines until the user exits. Each non-command line is submitted to the
//! session; the answer is printed and both messages join the transcript.

use console::style;
use tracing::info;

use helpdesk_core::widget::WidgetStateExt;
use helpdesk_infra::build_session;
use helpdesk_types::chat::ChatMessage;
use helpdesk_types::config::AssistantConfig;
use helpdesk_types::error::SubmitError;
use helpdesk_types::widget::{OpenView, WidgetEvent, WidgetState};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer;
use super::transcript::Transcript;

/// Prompt text for the current widget state.
fn prompt_for(state: WidgetState) -> String {
    match state {
        WidgetState::Open(OpenView::Expanded) => format!("  {} ", style("You >").green().bold()),
        WidgetState::Open(OpenView::Minimized) => format!("  {} ", style("[minimized] >").dim()),
        WidgetState::Closed => format!("  {} ", style("[closed] >").dim()),
    }
}

/// How to get back to a state that accepts questions.
fn reopen_hint(state: WidgetState) -> &'static str {
    match state {
        WidgetState::Closed => "Type /open to bring it back.",
        WidgetState::Open(OpenView::Minimized) => "Type /minimize to restore it.",
        WidgetState::Open(OpenView::Expanded) => "Try again.",
    }
}

fn answer_source(config: &AssistantConfig) -> &'static str {
    if config.use_remote && config.is_configured() {
        "remote model, built-in help as fallback"
    } else {
        "built-in help"
    }
}

/// Run the interactive chat loop.
pub async fn run_chat_loop(config: &AssistantConfig) -> anyhow::Result<()> {
    let session = build_session(config);
    let mut transcript = Transcript::new();

    print_welcome_banner(answer_source(config));
    let state = session.apply(WidgetEvent::Open);
    info!(state = %state, "Chat session started");

    let (mut chat_input, _writer) = ChatInput::new(prompt_for(state))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::History => transcript.print(),
                        ChatCommand::Widget(event) => {
                            let state = session.apply(event);
                            chat_input.update_prompt(&prompt_for(state));
                            println!("\n  {} Assistant is {state}.\n", style("*").cyan().bold());
                        }
                        ChatCommand::Unknown(name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                let spinner = session
                    .widget_state()
                    .accepts_input()
                    .then(|| renderer::thinking_spinner("thinking..."));
                let result = session.submit(&text).await;
                if let Some(spinner) = spinner {
                    spinner.finish_and_clear();
                }

                match result {
                    Ok(resolution) => {
                        transcript.push(ChatMessage::user(text.as_str()));
                        println!();
                        println!(
                            "  {} {}",
                            style("Assistant").cyan().bold(),
                            renderer::render_answer(resolution.text())
                        );
                        println!();
                        transcript.push(ChatMessage::assistant(resolution.into_text()));
                    }
                    Err(SubmitError::Closed) => {
                        let state = session.widget_state();
                        println!(
                            "\n  {} The assistant is {state}. {}\n",
                            style("!").yellow().bold(),
                            reopen_hint(state)
                        );
                    }
                    Err(err) => {
                        println!("\n  {} {err}\n", style("!").yellow().bold());
                    }
                }
            }
        }
    }

    chat_input.flush();
    if !transcript.is_empty() {
        info!(messages = transcript.messages().len(), "Chat session ended");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_source() {
        let mut config = AssistantConfig::default();
        assert_eq!(answer_source(&config), "built-in help");

        config.remote.endpoint = Some("https://example.openai.azure.com".to_string());
        config.remote.api_key = Some("key".to_string());
        assert_eq!(answer_source(&config), "remote model, built-in help as fallback");

        config.use_remote = false;
        assert_eq!(answer_source(&config), "built-in help");
    }

    #[test]
    fn test_reopen_hint_names_a_command_that_applies() {
        let closed = WidgetState::Closed;
        assert!(reopen_hint(closed).contains("/open"));
        assert!(!reopen_hint(closed).contains("/minimize"));
        assert!(closed.apply(WidgetEvent::Open).accepts_input());

        let minimized = WidgetState::Open(OpenView::Minimized);
        assert!(reopen_hint(minimized).contains("/minimize"));
        assert!(minimized.apply(WidgetEvent::ToggleMinimize).accepts_input());
    }

    #[test]
    fn test_prompt_reflects_widget_state() {
        let closed = console::strip_ansi_codes(&prompt_for(WidgetState::Closed)).to_string();
        assert!(closed.contains("[closed]"));
        let open = prompt_for(WidgetState::Open(OpenView::Expanded));
        assert!(console::strip_ansi_codes(&open).contains("You >"));
    }
}
