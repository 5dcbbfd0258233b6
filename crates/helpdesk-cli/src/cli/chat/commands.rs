//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and drive the widget state or show session info.

use console::style;

use helpdesk_types::widget::WidgetEvent;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Exit the chat session.
    Exit,
    /// Show the transcript for this session.
    History,
    /// Open, close or minimize the assistant.
    Widget(WidgetEvent),
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/open" => Some(ChatCommand::Widget(WidgetEvent::Open)),
        "/close" => Some(ChatCommand::Widget(WidgetEvent::Close)),
        "/minimize" | "/min" | "/restore" => Some(ChatCommand::Widget(WidgetEvent::ToggleMinimize)),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    let rows = [
        ("/help", "Show this help message"),
        ("/open", "Open the assistant"),
        ("/close", "Close the assistant (conversation is kept)"),
        ("/minimize", "Minimize or restore the assistant"),
        ("/history", "Show the conversation so far"),
        ("/exit", "End the chat session"),
    ];

    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    for (name, description) in rows {
        println!("  {:<10} {}", style(name).cyan(), description);
    }
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/Quit"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_widget_commands() {
        assert_eq!(parse("/open"), Some(ChatCommand::Widget(WidgetEvent::Open)));
        assert_eq!(parse(" /close "), Some(ChatCommand::Widget(WidgetEvent::Close)));
        assert_eq!(
            parse("/minimize"),
            Some(ChatCommand::Widget(WidgetEvent::ToggleMinimize))
        );
        assert_eq!(
            parse("/restore"),
            Some(ChatCommand::Widget(WidgetEvent::ToggleMinimize))
        );
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("how do I upload files?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo bar"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
