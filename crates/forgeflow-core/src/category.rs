//! Keyword-based workout categories.
//!
//! Classification scans the lowercased workout text against a static ordered
//! table; the first category with a matching keyword wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Body-area category derived from a workout description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Abs,
    Chest,
    Back,
    Legs,
    Arms,
    Shoulders,
    Glutes,
    Cardio,
    Other,
}

/// Ordered keyword table. Order matters: "leg raise" must hit `Abs` before
/// "raise" reaches `Shoulders`, and "leg press" must hit `Legs` before "press".
const KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Abs, &["crunch", "plank", "leg raise"]),
    (Category::Chest, &["push-up", "bench", "chest"]),
    (Category::Back, &["pull-up", "row", "deadlift"]),
    (Category::Legs, &["squat", "lunge", "leg press"]),
    (Category::Arms, &["curl", "dip", "tricep"]),
    (Category::Shoulders, &["press", "raise", "shoulder"]),
    (Category::Glutes, &["glute", "hip thrust", "kickback"]),
    (Category::Cardio, &["run", "jog", "burpee"]),
];

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Abs,
        Category::Chest,
        Category::Back,
        Category::Legs,
        Category::Arms,
        Category::Shoulders,
        Category::Glutes,
        Category::Cardio,
        Category::Other,
    ];

    /// Classify free-form workout text.
    pub fn classify(text: &str) -> Category {
        let lower = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Abs => "abs",
            Category::Chest => "chest",
            Category::Back => "back",
            Category::Legs => "legs",
            Category::Arms => "arms",
            Category::Shoulders => "shoulders",
            Category::Glutes => "glutes",
            Category::Cardio => "cardio",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Category restriction used by counters and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    #[serde(untagged)]
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
