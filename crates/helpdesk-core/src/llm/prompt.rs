//! System prompt and request message assembly.
//!
//! Every remote request is laid out as:
//! ```text
//! [system: SYSTEM_PROMPT]
//! [last `window` turns of history, oldest first]
//! [user: user_text]
//! ```

use helpdesk_types::chat::ConversationTurn;

use crate::context::recent_window;

/// Instructions sent as the first message of every remote request.
pub const SYSTEM_PROMPT: &str = "You are the in-app help assistant for a legacy code \
modernization platform. Answer questions about how to use the platform's tools:

- Code Language Converter: converts COBOL, Fortran, Visual Basic 6, PL/I and RPG into \
Python, Java, C# or C++. Users upload source files (.cob, .cbl, .cpy, .f, .f90, .bas, ...), \
choose source and target languages, and click Convert.
- Database Schema Converter: converts DDL, VSAM and IMS record layouts into PostgreSQL, \
MySQL, SQL Server or Oracle schemas with migration scripts.
- Documentation Generator: produces Markdown, HTML or PDF documentation from source code.
- Code Quality Analyzer: reports complexity, maintainability, dead code and technical debt.
- Business Logic Extractor: finds business rules in legacy code and explains them in plain language.
- Project Migration: plans and tracks the migration of a whole codebase, module by module.

Guidelines:
- Be concise and practical. Prefer numbered steps for procedures.
- Use **double asterisks** to emphasize tool names and buttons, and plain newlines for \
line breaks. Do not use other markdown.
- If a question is unrelated to the platform, say so briefly and suggest what you can help with.
- Never invent features that are not listed above.";

/// Assemble the message sequence for one remote request.
///
/// Only the most recent `window` turns of `history` are included, regardless of role.
pub fn build_messages(
    system_prompt: &str,
    history: &[ConversationTurn],
    window: usize,
    user_text: &str,
) -> Vec<ConversationTurn> {
    let recent = recent_window(history, window);

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(ConversationTurn::system(system_prompt));
    messages.extend(recent.iter().cloned());
    messages.push(ConversationTurn::user(user_text));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_types::chat::MessageRole;

    fn history(count: usize) -> Vec<ConversationTurn> {
        (0..count)
            .map(|i| ConversationTurn::user(format!("q{i}")))
            .collect()
    }

    #[test]
    fn test_layout_is_system_history_user() {
        let messages = build_messages(SYSTEM_PROMPT, &history(2), 6, "new question");

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].content, "q0");
        assert_eq!(messages[2].content, "q1");
        assert_eq!(messages[3].role, MessageRole::User);
        assert_eq!(messages[3].content, "new question");
    }

    #[test]
    fn test_history_is_truncated_to_window() {
        let messages = build_messages("sys", &history(10), 6, "latest");

        assert_eq!(messages.len(), 8);
        assert_eq!(messages[1].content, "q4");
        assert_eq!(messages[6].content, "q9");
    }

    #[test]
    fn test_empty_history() {
        let messages = build_messages("sys", &[], 6, "hi");
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_system_prompt_names_the_tools() {
        assert!(SYSTEM_PROMPT.contains("Code Language Converter"));
        assert!(SYSTEM_PROMPT.contains("Business Logic Extractor"));
    }
}
