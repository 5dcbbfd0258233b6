//! One-shot question: `helpdesk ask <text>`.

use console::style;

use helpdesk_core::markup;
use helpdesk_core::resolver::Resolution;
use helpdesk_infra::build_resolver;
use helpdesk_types::config::AssistantConfig;

use super::chat::renderer;

/// Resolve a single question with no prior history and print the answer.
pub async fn ask(config: &AssistantConfig, text: &str, json: bool) -> anyhow::Result<()> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("Question must not be empty");
    }

    let resolver = build_resolver(config);
    let spinner = (!json).then(|| renderer::thinking_spinner("thinking..."));
    let resolution = resolver
        .resolve_tagged(text, &[], config.use_remote, config.is_configured())
        .await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if json {
        let rule = resolution
            .is_fallback()
            .then(|| resolver.matcher().matching_rule(text).name);
        let output = answer_json(text, &resolution, rule);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!();
        println!("  {}", renderer::render_answer(resolution.text()));
        if resolution.is_fallback() && config.use_remote && config.is_configured() {
            println!();
            println!(
                "  {}",
                style("(remote model unavailable, answered from built-in help)").dim()
            );
        }
        println!();
    }

    Ok(())
}

/// JSON shape for `ask --json`: the raw answer plus its parsed markup segments.
fn answer_json(question: &str, resolution: &Resolution, rule: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "question": question,
        "answer": resolution.text(),
        "segments": markup::parse(resolution.text()),
        "source": source_label(resolution),
        "rule": rule,
    })
}

pub fn source_label(resolution: &Resolution) -> &'static str {
    match resolution {
        Resolution::Remote(_) => "remote",
        Resolution::Fallback(_) => "rules",
    }
}
