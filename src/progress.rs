//! Workout completion tracking
//!
//! Computes today's session completion fraction from planned versus logged
//! reps. The fraction is deliberately uncapped: logging more reps than
//! planned yields values above 1.0, and any visual capping is a display
//! concern that stays out of this module.

use crate::models::{PlannedExerciseSlot, PlannedSession};
use tracing::debug;

/// Fallback minimum reps when a target-reps expression cannot be parsed
pub const DEFAULT_MIN_REPS: u32 = 10;

/// Planned-versus-logged progress calculations
pub struct ProgressTracker;

impl ProgressTracker {
    /// Minimum-bound reps of a target expression.
    ///
    /// "8-12" parses as 8, "10" as 10, anything else falls back to
    /// [`DEFAULT_MIN_REPS`] rather than failing the whole computation.
    pub fn min_reps_of(expression: &str) -> u32 {
        let parsed = match expression.split_once('-') {
            Some((low, _)) => low.trim().parse::<u32>(),
            None => expression.trim().parse::<u32>(),
        };

        parsed.unwrap_or_else(|_| {
            debug!(expression, "unparseable target reps, using default");
            DEFAULT_MIN_REPS
        })
    }

    /// Total planned reps across all slots: sets times minimum target reps
    pub fn total_planned_reps(slots: &[PlannedExerciseSlot]) -> u32 {
        slots
            .iter()
            .map(|slot| slot.target_sets * Self::min_reps_of(&slot.target_reps))
            .sum()
    }

    /// Completion fraction of `completed_reps` against the planned total.
    ///
    /// `None` when nothing is planned; otherwise uncapped.
    pub fn progress(slots: &[PlannedExerciseSlot], completed_reps: u32) -> Option<f64> {
        let planned = Self::total_planned_reps(slots);
        if planned == 0 {
            return None;
        }
        Some(f64::from(completed_reps) / f64::from(planned))
    }

    /// Completion fraction for today's session, summing the reps logged
    /// against each slot. `None` when there is no session open today.
    pub fn session_progress(session: Option<&PlannedSession>) -> Option<f64> {
        let session = session?;
        let completed: u32 = session.slots.iter().map(|slot| slot.completed_reps).sum();
        Self::progress(&session.slots, completed)
    }
}
