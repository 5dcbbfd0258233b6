//! `helpdesk config`: print the effective configuration.

use console::style;

use helpdesk_types::config::AssistantConfig;

/// Print the effective configuration with the API key masked.
pub fn show_config(config: &AssistantConfig, json: bool) -> anyhow::Result<()> {
    let display = AssistantConfig {
        remote: config.remote.redacted(),
        ..config.clone()
    };

    if json {
        let mut output = serde_json::to_value(&display)?;
        output["configured"] = serde_json::Value::Bool(config.is_configured());
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let unset = || style("(not set)").dim().to_string();
    let remote = &display.remote;

    println!();
    println!("  {}", style("Helpdesk configuration").bold());
    println!();
    println!(
        "  {:<16} {}",
        "endpoint",
        remote.endpoint.clone().unwrap_or_else(unset)
    );
    println!(
        "  {:<16} {}",
        "api_key",
        remote.api_key.clone().unwrap_or_else(unset)
    );
    println!(
        "  {:<16} {}",
        "deployment",
        remote.deployment_name.clone().unwrap_or_else(unset)
    );
    println!("  {:<16} {}", "api_version", remote.api_version);
    println!("  {:<16} {}", "temperature", remote.temperature);
    println!("  {:<16} {}", "max_tokens", remote.max_tokens);
    println!("  {:<16} {}", "context_window", display.context_window);
    println!("  {:<16} {}", "use_remote", display.use_remote);
    println!();

    let status = if !config.use_remote {
        style("remote disabled, answering from built-in rules").yellow()
    } else if config.is_configured() {
        style("remote model configured").green()
    } else {
        style("remote model not configured, answering from built-in rules").yellow()
    };
    println!("  {status}");
    if let Err(err) = config.validate() {
        println!("  {} {err}", style("!").red().bold());
    }
    println!();
    Ok(())
}
