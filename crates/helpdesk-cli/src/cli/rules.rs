//! Rule table introspection: `helpdesk rules [--explain <text>]`.

use console::style;

use helpdesk_core::intent::IntentMatcher;

use super::chat::renderer;

/// List rule names in evaluation order, or show which rule answers `explain`.
pub fn rules(explain: Option<&str>, json: bool) -> anyhow::Result<()> {
    let matcher = IntentMatcher::default();

    if let Some(text) = explain {
        let rule = matcher.matching_rule(text);
        if json {
            let output = serde_json::json!({
                "text": text,
                "rule": rule.name,
                "answer": rule.response,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!();
            println!(
                "  {} {}",
                style("Matched rule:").bold(),
                style(rule.name).cyan()
            );
            println!();
            println!("  {}", renderer::render_answer(rule.response));
            println!();
        }
        return Ok(());
    }

    let names = matcher.rule_names();
    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("Rules (first match wins):").bold());
    println!();
    for (i, name) in names.iter().enumerate() {
        println!("  {:>3}  {}", style(i + 1).dim(), style(name).cyan());
    }
    println!();
    Ok(())
}
