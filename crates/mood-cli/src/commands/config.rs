use anyhow::{Context, Result};
use colored::Colorize;
use mood_infrastructure::ConfigService;
use tracing::debug;

pub fn run(service: &ConfigService) -> Result<()> {
    let path = service.path();
    debug!(path = %path.display(), "Reading configuration");

    let config = service
        .get_config()
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    let source = if path.exists() { "file" } else { "defaults" };

    println!("{} {} ({})", "# Config:".dimmed(), path.display(), source);
    print!("{}", config.to_toml_string()?);
    Ok(())
}
