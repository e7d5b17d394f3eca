//! Workout management commands for CLI.

use clap::{Args, Subcommand};
use forgeflow_core::{random_quote, Command, Config, TimeUnit, WorkoutDetails};

use super::{print_json, CliResult, Session};

/// Exercise fields rendered into the workout description.
#[derive(Args, Debug, Default)]
pub struct DetailArgs {
    /// Number of sets
    #[arg(long)]
    sets: Option<u32>,
    /// Reps per set
    #[arg(long)]
    reps: Option<u32>,
    /// Weight in kg
    #[arg(long)]
    weight: Option<f64>,
    /// Distance in km
    #[arg(long)]
    distance: Option<f64>,
    /// Duration value
    #[arg(long)]
    time: Option<u32>,
    /// Duration unit: seconds or minutes
    #[arg(long, default_value = "seconds")]
    time_unit: TimeUnit,
}

impl DetailArgs {
    fn apply_to(self, details: &mut WorkoutDetails) {
        details.sets = self.sets.or(details.sets);
        details.reps = self.reps.or(details.reps);
        details.weight_kg = self.weight.or(details.weight_kg);
        details.distance_km = self.distance.or(details.distance_km);
        if let Some(value) = self.time {
            details.duration = Some((value, self.time_unit));
        }
    }
}

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Log a new workout
    Add {
        /// Exercise name
        exercise: String,
        #[command(flatten)]
        details: DetailArgs,
    },
    /// Edit a workout; omitted fields keep their current value
    Edit {
        /// Workout index
        index: usize,
        /// New exercise name
        #[arg(long)]
        exercise: Option<String>,
        #[command(flatten)]
        details: DetailArgs,
    },
    /// Mark a workout complete
    Done {
        /// Workout index
        index: usize,
    },
    /// Mark a workout incomplete
    Undo {
        /// Workout index
        index: usize,
    },
    /// Delete a workout
    Delete {
        /// Workout index
        index: usize,
    },
    /// List workouts
    List,
    /// Clear all workouts, keeping completed ones in progress counts
    Clear,
}

pub fn run(action: WorkoutAction, config: &Config) -> CliResult {
    let mut session = Session::open(config)?;

    let command = match action {
        WorkoutAction::Add { exercise, details } => {
            let mut rendered = WorkoutDetails::new(exercise);
            details.apply_to(&mut rendered);
            Command::AddWorkout {
                text: rendered.to_string(),
            }
        }
        WorkoutAction::Edit {
            index,
            exercise,
            details,
        } => {
            let mut rendered = session
                .state
                .workouts
                .get(index)
                .map(|w| WorkoutDetails::parse(&w.text))
                .unwrap_or_default();
            if let Some(exercise) = exercise {
                rendered.exercise = exercise;
            }
            details.apply_to(&mut rendered);
            Command::EditWorkout {
                index,
                text: rendered.to_string(),
            }
        }
        WorkoutAction::Done { index } => Command::SetCompleted {
            index,
            completed: true,
        },
        WorkoutAction::Undo { index } => Command::SetCompleted {
            index,
            completed: false,
        },
        WorkoutAction::Delete { index } => Command::DeleteWorkout { index },
        WorkoutAction::Clear => Command::ClearWorkouts,
        WorkoutAction::List => {
            let snapshot = session.state.snapshot(&session.window);
            return print_json(&snapshot.workouts);
        }
    };

    let logged = matches!(command, Command::AddWorkout { .. });
    let outcome = session.apply(command)?;
    if logged {
        eprintln!("{}", random_quote());
    }
    print_json(&outcome)
}
