//! Activity scoring
//!
//! Blends the weekly workout-completion ratio with optional daily movement
//! signals (steps, active energy, active minutes) into a 0-100 score.
//!
//! Each movement signal is normalized against its goal and contributes up
//! to one third of the biometric component. An absent signal is skipped
//! outright: its third is missing from the total, not redistributed over
//! the signals that are present. With only steps available the biometric
//! component therefore tops out at 33, which keeps scores comparable with
//! historical values.

use serde::{Deserialize, Serialize};

/// Activity scoring configuration: signal goals and blend weights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityConfig {
    /// Daily step goal (default: 10000)
    pub steps_goal: u32,

    /// Daily active energy goal in kilocalories (default: 500)
    pub energy_goal_kcal: u32,

    /// Daily active minutes goal (default: 30)
    pub active_minutes_goal: u32,

    /// Weight of the workout-completion component, percent (default: 40)
    pub workout_weight: u32,

    /// Weight of the movement-signal component, percent (default: 60)
    pub biometric_weight: u32,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        ActivityConfig {
            steps_goal: 10_000,
            energy_goal_kcal: 500,
            active_minutes_goal: 30,
            workout_weight: 40,
            biometric_weight: 60,
        }
    }
}

/// Activity scorer
pub struct ActivityScorer;

impl ActivityScorer {
    /// Activity score (0-100) for the current week.
    ///
    /// All arithmetic is integer division to match historical score values
    /// exactly.
    pub fn activity(
        completed_this_week: u32,
        target_sessions_per_week: u32,
        steps: Option<u32>,
        active_kcal: Option<u32>,
        active_minutes: Option<u32>,
        config: &ActivityConfig,
    ) -> u8 {
        let workout = Self::workout_score(completed_this_week, target_sessions_per_week);
        let biometric = Self::biometric_score(steps, active_kcal, active_minutes, config);

        let combined = (workout * u64::from(config.workout_weight)
            + biometric * u64::from(config.biometric_weight))
            / 100;
        combined.min(100) as u8
    }

    /// Weekly completion component: sessions done against the target,
    /// capped at 100. A missing or zero target counts as a target of one.
    pub fn workout_score(completed_this_week: u32, target_sessions_per_week: u32) -> u64 {
        let target = u64::from(target_sessions_per_week.max(1));
        (u64::from(completed_this_week) * 100 / target).min(100)
    }

    /// Movement-signal component: each present signal is normalized against
    /// its goal and contributes up to a third. Absent signals are skipped.
    pub fn biometric_score(
        steps: Option<u32>,
        active_kcal: Option<u32>,
        active_minutes: Option<u32>,
        config: &ActivityConfig,
    ) -> u64 {
        let mut score = 0;
        if let Some(steps) = steps {
            score += Self::signal_score(steps, config.steps_goal) / 3;
        }
        if let Some(kcal) = active_kcal {
            score += Self::signal_score(kcal, config.energy_goal_kcal) / 3;
        }
        if let Some(minutes) = active_minutes {
            score += Self::signal_score(minutes, config.active_minutes_goal) / 3;
        }
        score
    }

    /// Single signal against its goal, capped at 100
    fn signal_score(value: u32, goal: u32) -> u64 {
        (u64::from(value) * 100 / u64::from(goal.max(1))).min(100)
    }
}
