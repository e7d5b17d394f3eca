use clap::Args;
use forgeflow_core::storage::ProgressStyle;
use forgeflow_core::{CategoryFilter, Config};

use super::{print_json, CliResult, Session};

#[derive(Args)]
pub struct ProgressArgs {
    /// Category filter (all, abs, chest, back, legs, arms, shoulders, glutes, cardio, other)
    #[arg(long, default_value = "all")]
    filter: CategoryFilter,
}

pub fn run(args: ProgressArgs, config: &Config) -> CliResult {
    let session = Session::open(config)?;
    let summary = session.state.progress(&session.window, args.filter);

    match config.display.progress_style {
        ProgressStyle::Compact => {
            println!("{summary}");
            Ok(())
        }
        ProgressStyle::Json => print_json(&summary),
    }
}
