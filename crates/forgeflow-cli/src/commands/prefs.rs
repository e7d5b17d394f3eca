use clap::Subcommand;
use forgeflow_core::{CategoryFilter, ChartType, Command, Config, TimeView};

use super::{print_json, CliResult, Session};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show display preferences
    Show,
    /// Update display preferences
    Set {
        /// Chart type: bar, line or pie
        #[arg(long)]
        chart_type: Option<ChartType>,
        /// Time view: weekly, monthly or yearly
        #[arg(long)]
        time_view: Option<TimeView>,
        /// Category filter
        #[arg(long)]
        filter: Option<CategoryFilter>,
    },
}

pub fn run(action: PrefsAction, config: &Config) -> CliResult {
    let mut session = Session::open(config)?;

    match action {
        PrefsAction::Show => print_json(&session.state.preferences),
        PrefsAction::Set {
            chart_type,
            time_view,
            filter,
        } => {
            let outcome = session.apply(Command::SetPreferences {
                chart_type,
                time_view,
                filter,
            })?;
            print_json(&outcome)
        }
    }
}
