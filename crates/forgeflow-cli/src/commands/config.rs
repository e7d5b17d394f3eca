use clap::Subcommand;
use forgeflow_core::Config;
use serde::Serialize;

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value, unquoted
    Get {
        /// Dot-separated key, e.g. "log.filter" or "display.progress_style"
        key: String,
    },
    /// Change one value and save
    Set { key: String, value: String },
    /// Print the whole configuration
    List,
    /// Overwrite the configuration with defaults
    Reset,
}

#[derive(Serialize)]
struct Entry<'a> {
    key: &'a str,
    value: Option<String>,
}

pub fn run(action: ConfigAction) -> CliResult {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            tracing::info!(%key, "config updated");
            print_json(&Entry {
                key: &key,
                value: config.get(&key),
            })
        }
        ConfigAction::List => print_json(&Config::load()?),
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            print_json(&config)
        }
    }
}
