//! Welcome banner for chat sessions.

use console::style;

/// Print the banner shown when a chat session starts.
///
/// `mode` describes where answers come from (remote model or built-in rules).
pub fn print_welcome_banner(mode: &str) {
    println!();
    println!("  {} {}", style("?").cyan().bold(), style("Helpdesk Assistant").cyan().bold());
    println!(
        "  {}",
        style("Ask about code conversion, documentation, quality analysis and more.").dim()
    );
    println!();
    println!("  {}  {}", style("Answers:").bold(), style(mode).dim());
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
