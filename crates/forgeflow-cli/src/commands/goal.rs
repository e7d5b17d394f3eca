use clap::Subcommand;
use forgeflow_core::{Command, Config, Goal, GoalPeriod};

use super::{print_json, CliResult, Session};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Set the target number of workouts per period
    Set {
        /// Target workout count
        value: u32,
        /// Period: weekly or monthly
        #[arg(long, default_value = "weekly")]
        period: GoalPeriod,
    },
    /// Remove the goal
    Clear,
    /// Show progress toward the goal
    Show,
}

pub fn run(action: GoalAction, config: &Config) -> CliResult {
    let mut session = Session::open(config)?;

    match action {
        GoalAction::Set { value, period } => {
            session.apply(Command::SetGoal(Goal::new(value, period)))?;
        }
        GoalAction::Clear => {
            session.apply(Command::SetGoal(Goal::default()))?;
        }
        GoalAction::Show => {}
    }

    let progress = session.state.goal_progress(&session.window);
    eprintln!("{progress}");
    print_json(&progress)
}
