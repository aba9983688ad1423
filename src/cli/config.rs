//! Config command handlers

use crate::cli::ConfigInitArgs;
use crate::config::{ConfigError, FeedwatchConfig, EXAMPLE_CONFIG};
use std::fs;

/// Render the example config with the `[poller]` values given on the command line.
///
/// Only the first assignment of each key is rewritten, which is the one in
/// `[poller]`. Comments and layout are kept. The result is parsed and
/// validated before it is returned.
pub fn render_config(args: &ConfigInitArgs) -> Result<String, ConfigError> {
    let mut overrides: Vec<(&str, String)> = Vec::new();
    if let Some(ref base_url) = args.base_url {
        overrides.push(("base_url", toml::Value::String(base_url.clone()).to_string()));
    }
    if let Some(ref path) = args.path {
        overrides.push(("resource_path", toml::Value::String(path.clone()).to_string()));
    }
    if let Some(interval_ms) = args.interval_ms {
        overrides.push(("interval_ms", interval_ms.to_string()));
    }

    let mut rendered = String::with_capacity(EXAMPLE_CONFIG.len());
    for line in EXAMPLE_CONFIG.lines() {
        let key = line.split('=').next().map(str::trim).unwrap_or_default();
        match overrides.iter().position(|(k, _)| *k == key) {
            Some(i) => {
                let (k, value) = overrides.remove(i);
                rendered.push_str(&format!("{} = {}", k, value));
            }
            None => rendered.push_str(line),
        }
        rendered.push('\n');
    }

    let config: FeedwatchConfig = toml::from_str(&rendered).map_err(|e| ConfigError::Parse {
        path: args.output.clone(),
        message: e.to_string(),
    })?;
    config.validate()?;

    Ok(rendered)
}

/// Handle `feedwatch config init` command
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    let content = render_config(args)?;
    fs::write(&args.output, content)?;

    println!("✓ Configuration file created: {}", args.output.display());
    if args.base_url.is_none() {
        println!("  Edit base_url to point at your feed.");
    }

    Ok(())
}
