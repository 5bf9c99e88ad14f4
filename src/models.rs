use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Training goal categories for the four-way emphasis split
///
/// Declaration order is the fixed iteration order used by the allocation
/// engine when redistributing weight between categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Strength,
    Hypertrophy,
    Endurance,
    Cardio,
}

impl GoalCategory {
    /// All categories in iteration order
    pub const ALL: [GoalCategory; 4] = [
        GoalCategory::Strength,
        GoalCategory::Hypertrophy,
        GoalCategory::Endurance,
        GoalCategory::Cardio,
    ];

    /// Position of this category in iteration order
    pub fn index(&self) -> usize {
        match self {
            GoalCategory::Strength => 0,
            GoalCategory::Hypertrophy => 1,
            GoalCategory::Endurance => 2,
            GoalCategory::Cardio => 3,
        }
    }

    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "hypertrophy" | "hyper" => Ok(Self::Hypertrophy),
            "endurance" => Ok(Self::Endurance),
            "cardio" => Ok(Self::Cardio),
            _ => anyhow::bail!("Unknown goal category: {}", s),
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalCategory::Strength => write!(f, "Strength"),
            GoalCategory::Hypertrophy => write!(f, "Hypertrophy"),
            GoalCategory::Endurance => write!(f, "Endurance"),
            GoalCategory::Cardio => write!(f, "Cardio"),
        }
    }
}

/// Four-way percentage allocation of training emphasis
///
/// Invariant: the four weights always sum to exactly 100, each in [0, 100].
/// The allocation is only ever mutated through `AllocationEngine::adjust`,
/// which consumes a snapshot and returns a new value, so no caller can
/// observe a state that violates the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalAllocation {
    /// Strength emphasis weight (percent)
    pub strength: u8,

    /// Hypertrophy emphasis weight (percent)
    pub hypertrophy: u8,

    /// Endurance emphasis weight (percent)
    pub endurance: u8,

    /// Cardio emphasis weight (percent)
    pub cardio: u8,
}

impl Default for GoalAllocation {
    fn default() -> Self {
        GoalAllocation {
            strength: 25,
            hypertrophy: 25,
            endurance: 25,
            cardio: 25,
        }
    }
}

impl GoalAllocation {
    /// Weight of a single category
    pub fn get(&self, category: GoalCategory) -> u8 {
        match category {
            GoalCategory::Strength => self.strength,
            GoalCategory::Hypertrophy => self.hypertrophy,
            GoalCategory::Endurance => self.endurance,
            GoalCategory::Cardio => self.cardio,
        }
    }

    /// All four weights in iteration order
    pub fn as_array(&self) -> [u8; 4] {
        [self.strength, self.hypertrophy, self.endurance, self.cardio]
    }

    /// Build from weights in iteration order
    pub fn from_array(values: [u8; 4]) -> Self {
        GoalAllocation {
            strength: values[0],
            hypertrophy: values[1],
            endurance: values[2],
            cardio: values[3],
        }
    }

    /// Sum of all four weights
    pub fn total(&self) -> u32 {
        self.as_array().iter().map(|v| u32::from(*v)).sum()
    }

    /// True when the sum-to-100 invariant holds
    pub fn is_valid(&self) -> bool {
        self.total() == 100
    }
}

/// Read-only snapshot of the signals available for one scoring call
///
/// Absent fields are first-class: a `None` changes how the scorers weight
/// the remaining signals, it is never substituted with zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputBundle {
    /// Weekly session target from the active plan
    pub target_sessions_per_week: Option<u32>,

    /// Sessions completed in the current week (Monday-based)
    pub completed_this_week: Option<u32>,

    /// Elapsed rest time since the last completed session, fractional days
    pub rest_days: Option<f64>,

    /// Whether any session has ever been completed
    pub has_any_completed_session: bool,

    /// Step count for the scoring window
    pub steps: Option<u32>,

    /// Active energy burned in kilocalories
    pub active_energy_kcal: Option<u32>,

    /// Active (exercise) minutes
    pub active_minutes: Option<u32>,

    /// Sleep duration in hours for the most recent night
    pub sleep_hours: Option<f64>,

    /// Resting heart rate in beats per minute
    pub resting_heart_rate: Option<f64>,

    /// Heart rate variability in milliseconds
    pub heart_rate_variability: Option<f64>,
}

/// One exercise slot inside a planned session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExerciseSlot {
    /// Exercise name, when the plan carries one
    pub name: Option<String>,

    /// Number of planned sets
    pub target_sets: u32,

    /// Target reps expression: a bare integer ("10") or a range ("8-12").
    /// The minimum bound is what counts toward the planned total.
    pub target_reps: String,

    /// Reps actually logged against this slot
    pub completed_reps: u32,
}

/// A dated planned workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSession {
    /// Day the session is scheduled for
    pub date: NaiveDate,

    /// Ordered exercise slots
    pub slots: Vec<PlannedExerciseSlot>,
}

/// Record of a completed workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedSession {
    /// When the session was completed
    pub completed_at: DateTime<Utc>,

    /// Session duration, when logged
    pub duration_minutes: Option<u32>,
}

/// Aggregate output of one full scoring pass over a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedScores {
    /// Activity composite (0-100)
    pub activity: u8,

    /// Recovery composite (0-100)
    pub recovery: u8,

    /// Sleep quality (0.0-1.0); absent when no sleep data was available
    pub sleep_quality: Option<f64>,

    /// Today's workout completion fraction; uncapped, absent when there is
    /// no planned session today
    pub workout_progress: Option<f64>,
}
