//! Canned workout suggestions.
//!
//! A static lookup of goal x level x body part. One of the selected body
//! parts is picked at random.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const NO_GOAL: &str = "No goal set. Smash through!";
pub const NO_BODY_PARTS: &str = "Log workouts for tailored suggestions!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingGoal {
    #[serde(rename = "Build Muscle")]
    BuildMuscle,
    #[serde(rename = "Build Endurance")]
    BuildEndurance,
    #[serde(rename = "Build Strength")]
    BuildStrength,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPart {
    Abs,
    Chest,
    Back,
    Legs,
    Arms,
    Shoulders,
    Glutes,
}

impl FromStr for TrainingGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.to_lowercase().chars().filter(|c| c.is_alphanumeric()).collect();
        match key.as_str() {
            "buildmuscle" | "muscle" => Ok(TrainingGoal::BuildMuscle),
            "buildendurance" | "endurance" => Ok(TrainingGoal::BuildEndurance),
            "buildstrength" | "strength" => Ok(TrainingGoal::BuildStrength),
            _ => Err(format!("unknown training goal: {s}")),
        }
    }
}

impl FromStr for FitnessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            other => Err(format!("unknown fitness level: {other}")),
        }
    }
}

impl FromStr for BodyPart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abs" => Ok(BodyPart::Abs),
            "chest" => Ok(BodyPart::Chest),
            "back" => Ok(BodyPart::Back),
            "legs" => Ok(BodyPart::Legs),
            "arms" => Ok(BodyPart::Arms),
            "shoulders" => Ok(BodyPart::Shoulders),
            "glutes" => Ok(BodyPart::Glutes),
            other => Err(format!("unknown body part: {other}")),
        }
    }
}

/// Stored goal/level/body-part selection used for suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionProfile {
    #[serde(default)]
    pub goal: Option<TrainingGoal>,
    #[serde(default)]
    pub level: Option<FitnessLevel>,
    #[serde(default)]
    pub body_parts: Vec<BodyPart>,
}

type Plan = [&'static str; 3];
type LevelTable = [Plan; 7];

const MUSCLE_BEGINNER: LevelTable = [
    ["3x10 crunches", "3x12 leg raises", "2x30s plank"],
    ["3x10 push-ups", "3x12 incline push-ups", "2x15 chest dips"],
    ["3x8 bent-over rows (light)", "3x10 reverse flys", "2x12 supermans"],
    ["3x10 bodyweight squats", "3x12 lunges", "2x15 calf raises"],
    ["3x10 bicep curls (light)", "3x12 tricep dips", "2x15 hammer curls"],
    ["3x10 shoulder press (light)", "3x12 lateral raises", "2x15 front raises"],
    ["3x10 glute bridges", "3x12 donkey kicks", "2x15 fire hydrants"],
];

const INTERMEDIATE: LevelTable = [
    ["4x12 hanging leg raises", "3x15 bicycle crunches", "3x45s plank"],
    ["4x8 bench press (moderate)", "3x12 dumbbell flys", "3x10 push-ups"],
    ["4x8 pull-ups", "3x10 bent-over rows", "3x12 deadlifts (moderate)"],
    ["4x8 squats (moderate)", "3x12 lunges", "3x10 step-ups"],
    ["4x8 bicep curls", "3x12 tricep pushdowns", "3x10 skull crushers"],
    ["4x8 overhead press", "3x12 lateral raises", "3x10 rear delt flys"],
    ["4x8 hip thrusts", "3x12 glute kickbacks", "3x15 sumo squats"],
];

const ADVANCED: LevelTable = [
    ["5x15 weighted crunches", "4x20 cable woodchoppers", "3x60s plank"],
    ["5x5 bench press (heavy)", "4x10 incline dumbbell press", "3x12 cable flys"],
    ["5x5 deadlifts (heavy)", "4x8 weighted pull-ups", "3x12 barbell rows"],
    ["5x5 barbell squats (heavy)", "4x10 lunges (weighted)", "3x12 leg press"],
    ["5x5 barbell curls", "4x10 weighted dips", "3x12 concentration curls"],
    ["5x5 military press", "4x10 Arnold press", "3x12 upright rows"],
    ["5x5 hip thrusts (heavy)", "4x10 single-leg glute bridges", "3x12 barbell sumo squats"],
];

const ENDURANCE_BEGINNER: LevelTable = [
    ["3x15 bicycle crunches", "3x20 mountain climbers", "2x30s hollow hold"],
    ["3x15 push-ups", "3x20 chest dips", "2x30s isometric chest press"],
    ["3x15 supermans", "3x20 bodyweight rows", "2x30s plank rows"],
    ["2km jog", "3x15 bodyweight squats", "3x20 walking lunges"],
    ["3x15 arm circles", "3x20 tricep dips", "2x30s shadow boxing"],
    ["3x15 shoulder taps", "3x20 front raises (light)", "2x30s lateral hold"],
    ["3x15 glute bridges", "3x20 donkey kicks", "2x30s squat hold"],
];

const ENDURANCE_INTERMEDIATE: LevelTable = [
    ["4x20 mountain climbers", "3x30 Russian twists", "3x45s plank"],
    ["4x12 push-ups", "3x15 incline push-ups", "3x20 burpees"],
    ["4x12 bodyweight rows", "3x15 supermans", "3x20 plank rows"],
    ["5km run", "3x20 lunges", "3x15 jump squats"],
    ["4x12 bicep curls (light)", "3x15 tricep pushdowns", "3x20 shadow boxing"],
    ["4x12 lateral raises", "3x15 shoulder press (light)", "3x20 Y-raises"],
    ["4x12 glute kickbacks", "3x15 sumo squats", "3x20 fire hydrants"],
];

const ENDURANCE_ADVANCED: LevelTable = [
    ["5x25 mountain climbers", "4x30 weighted Russian twists", "3x60s plank with leg lift"],
    ["5x15 clapping push-ups", "4x20 incline dumbbell press", "3x25 burpees"],
    ["5x10 pull-ups", "4x15 deadlifts (moderate)", "3x20 bent-over rows"],
    ["10km run", "4x20 jump lunges", "3x15 pistol squats"],
    ["5x15 weighted dips", "4x20 hammer curls", "3x25 shadow boxing"],
    ["5x10 overhead press", "4x15 rear delt flys", "3x20 lateral raises"],
    ["5x10 hip thrusts (moderate)", "4x15 single-leg glute bridges", "3x20 sumo squats"],
];

/// Strength beginners swap the loaded rows for bodyweight back work.
const STRENGTH_BEGINNER: LevelTable = [
    MUSCLE_BEGINNER[0],
    MUSCLE_BEGINNER[1],
    ["3x8 bodyweight rows", "3x10 supermans", "2x12 reverse flys"],
    MUSCLE_BEGINNER[3],
    MUSCLE_BEGINNER[4],
    MUSCLE_BEGINNER[5],
    MUSCLE_BEGINNER[6],
];

fn plan(goal: TrainingGoal, level: FitnessLevel, part: BodyPart) -> &'static Plan {
    let table = match (goal, level) {
        (TrainingGoal::BuildMuscle, FitnessLevel::Beginner) => &MUSCLE_BEGINNER,
        (TrainingGoal::BuildStrength, FitnessLevel::Beginner) => &STRENGTH_BEGINNER,
        (TrainingGoal::BuildEndurance, FitnessLevel::Beginner) => &ENDURANCE_BEGINNER,
        (TrainingGoal::BuildEndurance, FitnessLevel::Intermediate) => &ENDURANCE_INTERMEDIATE,
        (TrainingGoal::BuildEndurance, FitnessLevel::Advanced) => &ENDURANCE_ADVANCED,
        (_, FitnessLevel::Intermediate) => &INTERMEDIATE,
        (_, FitnessLevel::Advanced) => &ADVANCED,
    };
    &table[part as usize]
}

/// Exercises for one body part, joined for display.
pub fn exercises_for(goal: TrainingGoal, level: FitnessLevel, part: BodyPart) -> String {
    plan(goal, level, part).join(", ")
}

/// Suggestion text for a profile, picking a body part with `rng`.
pub fn suggest<R: Rng + ?Sized>(profile: &SuggestionProfile, rng: &mut R) -> String {
    let (Some(goal), Some(level)) = (profile.goal, profile.level) else {
        return NO_GOAL.to_string();
    };
    match profile.body_parts.choose(rng) {
        Some(part) => exercises_for(goal, level, *part),
        None => NO_BODY_PARTS.to_string(),
    }
}

/// [`suggest`] with the thread-local RNG.
pub fn suggest_random(profile: &SuggestionProfile) -> String {
    suggest(profile, &mut rand::thread_rng())
}
