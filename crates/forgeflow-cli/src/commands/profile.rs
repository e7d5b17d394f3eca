use clap::Subcommand;
use forgeflow_core::{
    suggest_random, BodyPart, Command, Config, FitnessLevel, SuggestionProfile, TrainingGoal,
};

use super::{print_json, CliResult, Session};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Save the suggestion profile
    Set {
        /// Training goal: "Build Muscle", "Build Endurance" or "Build Strength"
        #[arg(long)]
        goal: TrainingGoal,
        /// Fitness level: beginner, intermediate or advanced
        #[arg(long)]
        level: FitnessLevel,
        /// Focus body part (repeatable)
        #[arg(long = "body-part")]
        body_parts: Vec<BodyPart>,
    },
    /// Show the saved profile
    Show,
}

pub fn run(action: ProfileAction, config: &Config) -> CliResult {
    let mut session = Session::open(config)?;

    match action {
        ProfileAction::Set {
            goal,
            level,
            body_parts,
        } => {
            let outcome = session.apply(Command::SaveProfile(SuggestionProfile {
                goal: Some(goal),
                level: Some(level),
                body_parts,
            }))?;
            print_json(&outcome)
        }
        ProfileAction::Show => print_json(&session.state.profile),
    }
}

pub fn suggest(config: &Config) -> CliResult {
    let session = Session::open(config)?;
    println!("{}", suggest_random(&session.state.profile));
    Ok(())
}
