use orcalite_core::config::AppConfig;

/// Prints the effective configuration after defaults, file, environment,
/// and flag overrides have been applied.
pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("[api]");
    println!("base_url = \"{}\"", config.api.base_url);
    println!("list_success_status = {}", config.api.list_success_status);
    println!("timeout_secs = {}", config.api.timeout_secs);
    println!("refresh_pause_secs = {}", config.api.refresh_pause_secs);
    println!("reset_items_on_failure = {}", config.api.reset_items_on_failure);
    println!();
    println!("[logging]");
    println!("level = \"{}\"", config.logging.level);
    let format = match config.logging.format {
        orcalite_core::config::LogFormat::Compact => "compact",
        orcalite_core::config::LogFormat::Pretty => "pretty",
        orcalite_core::config::LogFormat::Json => "json",
    };
    println!("format = \"{format}\"");
    Ok(())
}
