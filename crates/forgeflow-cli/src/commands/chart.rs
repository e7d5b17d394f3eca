use clap::Args;
use forgeflow_core::{CategoryFilter, Config, TimeView};

use super::{print_json, CliResult, Session};

#[derive(Args)]
pub struct ChartArgs {
    /// Time view: weekly, monthly or yearly (defaults to the saved preference)
    #[arg(long)]
    view: Option<TimeView>,
    /// Category filter (defaults to the saved preference)
    #[arg(long)]
    filter: Option<CategoryFilter>,
}

pub fn run(args: ChartArgs, config: &Config) -> CliResult {
    let session = Session::open(config)?;
    let prefs = session.state.preferences;
    let series = session.state.chart(
        &session.window,
        args.view.unwrap_or(prefs.time_view),
        args.filter.unwrap_or(prefs.filter),
    );
    print_json(&series)
}
