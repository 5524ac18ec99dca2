//! `kn config` -- show, read and edit configuration.

use anyhow::{Context, Result, bail};
use kaneo_config::KaneoConfig;
use kaneo_config::config::KEYS;

use crate::cli::{ConfigArgs, ConfigCommands};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

/// Execute the `kn config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommands::Show(show_args) => {
            let config = ctx.config()?;
            let pairs = key_values(&config, show_args.reveal);

            if ctx.json {
                let map: serde_json::Map<String, serde_json::Value> = pairs
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                    .collect();
                output_json(&map);
            } else {
                println!("# {}", ctx.config_path.display());
                let rows: Vec<Vec<String>> = pairs
                    .into_iter()
                    .map(|(k, v)| vec![k.to_string(), display_value(v)])
                    .collect();
                output_table(&["KEY", "VALUE"], &rows);
            }
        }

        ConfigCommands::Get(get_args) => {
            let config = ctx.config()?;
            let Some(value) = config.get(&get_args.key, get_args.reveal) else {
                bail!(
                    "unknown config key '{}' (expected one of: {})",
                    get_args.key,
                    KEYS.join(", ")
                );
            };

            if ctx.json {
                output_json(&serde_json::json!({
                    "key": get_args.key,
                    "value": value,
                }));
            } else {
                println!("{}", value);
            }
        }

        ConfigCommands::Set(set_args) => {
            // Only the file layer is edited; environment overrides stay out of it.
            let mut config = kaneo_config::load_file(&ctx.config_path).with_context(|| {
                format!("failed to read config file {}", ctx.config_path.display())
            })?;
            config.set(&set_args.key, &set_args.value)?;
            kaneo_config::save_config(&ctx.config_path, &config).with_context(|| {
                format!("failed to write config file {}", ctx.config_path.display())
            })?;
            tracing::debug!(key = %set_args.key, path = %ctx.config_path.display(), "config updated");

            let shown = config.get(&set_args.key, false).unwrap_or_default();
            if ctx.json {
                output_json(&serde_json::json!({
                    "key": set_args.key,
                    "value": shown,
                }));
            } else {
                println!("Set {} = {}", set_args.key, shown);
            }
        }

        ConfigCommands::Path => {
            if ctx.json {
                output_json(&serde_json::json!({
                    "path": ctx.config_path.display().to_string(),
                    "exists": ctx.config_path.exists(),
                }));
            } else {
                println!("{}", ctx.config_path.display());
            }
        }
    }

    Ok(())
}

fn key_values(config: &KaneoConfig, reveal: bool) -> Vec<(&'static str, String)> {
    KEYS.iter()
        .map(|key| (*key, config.get(key, reveal).unwrap_or_default()))
        .collect()
}

fn display_value(value: String) -> String {
    if value.is_empty() {
        "(unset)".to_string()
    } else {
        value
    }
}
