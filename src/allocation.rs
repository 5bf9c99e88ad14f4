//! Goal allocation engine
//!
//! Maintains the four-way training-emphasis split (strength / hypertrophy /
//! endurance / cardio) under single-category edits. When one weight is set,
//! the remaining three are rescaled proportionally so the allocation keeps
//! summing to exactly 100.
//!
//! # Redistribution algorithm
//!
//! For an edit of one category to a clamped value `v`:
//! 1. The other three categories must together reach `100 - v`.
//! 2. Each is moved by `round(needed_delta * share)` where `share` is its
//!    fraction of the pre-edit other-category total, clamped to [0, 100].
//! 3. The whole rounding remainder lands on the last non-edited category in
//!    iteration order.
//! 4. Any residual left after that goes back onto the edited category.
//!
//! The remainder placement in step 3 is a historical tie-break and is load
//! bearing for reproducibility: callers compare allocations value-for-value
//! across sessions.

use crate::models::{GoalAllocation, GoalCategory};
use thiserror::Error;
use tracing::warn;

/// Allocation parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("Expected four comma-separated weights, got {0}")]
    InvalidWeightCount(usize),
    #[error("Invalid weight value: {0}")]
    InvalidWeight(String),
    #[error("Weights sum to {0}, expected 100")]
    InvalidTotal(u32),
}

/// Stateless engine for goal allocation edits
pub struct AllocationEngine;

impl AllocationEngine {
    /// Set one category to `requested` and rescale the others so the
    /// allocation still sums to 100.
    ///
    /// `requested` is clamped to [0, 100]; a request equal to the current
    /// value returns the input unchanged. The returned allocation always
    /// satisfies the sum-to-100 invariant; a violation would be an internal
    /// bug and panics rather than handing a broken allocation downstream.
    pub fn adjust(
        current: &GoalAllocation,
        changed: GoalCategory,
        requested: i32,
    ) -> GoalAllocation {
        let clamped = requested.clamp(0, 100);
        let delta = clamped - i32::from(current.get(changed));
        if delta == 0 {
            return *current;
        }

        let mut values: [i32; 4] = current.as_array().map(i32::from);
        let changed_idx = changed.index();
        values[changed_idx] = clamped;

        // The three non-edited categories, in iteration order.
        let mut others = [0usize; 3];
        let mut n = 0;
        for (i, category) in GoalCategory::ALL.iter().enumerate() {
            if category.index() != changed_idx {
                others[n] = i;
                n += 1;
            }
        }

        let other_total: i32 = others.iter().map(|i| values[*i]).sum();
        let target_total = 100 - clamped;

        if other_total == 0 {
            // Nothing to scale proportionally: split equally, with the
            // first `target_total mod 3` categories taking one extra unit.
            let base = target_total / 3;
            let extra = target_total % 3;
            for (slot, idx) in others.iter().enumerate() {
                values[*idx] = base + if (slot as i32) < extra { 1 } else { 0 };
            }
        } else {
            let needed_delta = target_total - other_total;
            let mut applied = 0;
            for idx in &others {
                let share = f64::from(values[*idx]) / f64::from(other_total);
                let adjustment = (f64::from(needed_delta) * share).round() as i32;
                let updated = (values[*idx] + adjustment).clamp(0, 100);
                applied += updated - values[*idx];
                values[*idx] = updated;
            }

            // Entire rounding remainder onto the last non-edited category.
            let remainder = needed_delta - applied;
            let last = others[2];
            values[last] = (values[last] + remainder).clamp(0, 100);
        }

        // Corrective step: the edited category absorbs whatever residual
        // rounding left behind.
        let sum: i32 = values.iter().sum();
        if sum != 100 {
            let residual = 100 - sum;
            values[changed_idx] = (values[changed_idx] + residual).clamp(0, 100);
        }

        // Rounding overshoot can strand a unit when both the remainder
        // target and the edited category sit on a clamp boundary. Spread
        // what is left over whichever categories still have room, reverse
        // iteration order, so the invariant survives.
        let mut residual: i32 = 100 - values.iter().sum::<i32>();
        if residual != 0 {
            warn!(
                residual,
                ?current,
                %changed,
                requested,
                "allocation residual escaped the corrective step"
            );
            for idx in (0..4).rev() {
                if residual == 0 {
                    break;
                }
                let updated = (values[idx] + residual).clamp(0, 100);
                residual -= updated - values[idx];
                values[idx] = updated;
            }
        }

        let result = GoalAllocation::from_array(values.map(|v| v as u8));
        assert!(
            result.is_valid(),
            "allocation invariant violated after adjust: {:?} (from {:?}, {} -> {})",
            result,
            current,
            changed,
            requested
        );
        result
    }

    /// Parse a "25,25,25,25" weight list (iteration order) into a valid
    /// allocation.
    pub fn parse_weights(s: &str) -> Result<GoalAllocation, AllocationError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(AllocationError::InvalidWeightCount(parts.len()));
        }

        let mut values = [0u8; 4];
        for (i, part) in parts.iter().enumerate() {
            values[i] = part
                .parse::<u8>()
                .ok()
                .filter(|v| *v <= 100)
                .ok_or_else(|| AllocationError::InvalidWeight(part.to_string()))?;
        }

        let allocation = GoalAllocation::from_array(values);
        if !allocation.is_valid() {
            return Err(AllocationError::InvalidTotal(allocation.total()));
        }
        Ok(allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation(strength: u8, hypertrophy: u8, endurance: u8, cardio: u8) -> GoalAllocation {
        GoalAllocation {
            strength,
            hypertrophy,
            endurance,
            cardio,
        }
    }

    #[test]
    fn test_proportional_redistribution() {
        // 25/25/25/25, strength to 40: others each scaled by 25/75
        let result = AllocationEngine::adjust(
            &GoalAllocation::default(),
            GoalCategory::Strength,
            40,
        );
        assert_eq!(result, allocation(40, 20, 20, 20));
        assert!(result.is_valid());
    }

    #[test]
    fn test_edit_to_full_forces_others_to_zero() {
        let result = AllocationEngine::adjust(
            &GoalAllocation::default(),
            GoalCategory::Strength,
            100,
        );
        assert_eq!(result, allocation(100, 0, 0, 0));
    }

    #[test]
    fn test_no_op_returns_input_unchanged() {
        let current = allocation(40, 30, 20, 10);
        let result = AllocationEngine::adjust(&current, GoalCategory::Hypertrophy, 30);
        assert_eq!(result, current);
    }

    #[test]
    fn test_requested_value_is_clamped() {
        let result = AllocationEngine::adjust(
            &GoalAllocation::default(),
            GoalCategory::Cardio,
            250,
        );
        assert_eq!(result, allocation(0, 0, 0, 100));

        let result = AllocationEngine::adjust(
            &GoalAllocation::default(),
            GoalCategory::Cardio,
            -10,
        );
        assert_eq!(result.cardio, 0);
        assert!(result.is_valid());
    }

    #[test]
    fn test_equal_split_when_others_are_zero() {
        // Lowering from 100 leaves nothing to scale; the freed weight is
        // split equally among the other three.
        let result = AllocationEngine::adjust(
            &allocation(100, 0, 0, 0),
            GoalCategory::Strength,
            70,
        );
        assert_eq!(result, allocation(70, 10, 10, 10));
    }

    #[test]
    fn test_equal_split_extra_units_go_first() {
        // 29 = 9*3 + 2: the first two non-edited categories take the extras
        let result = AllocationEngine::adjust(
            &allocation(100, 0, 0, 0),
            GoalCategory::Strength,
            71,
        );
        assert_eq!(result, allocation(71, 10, 10, 9));
    }

    #[test]
    fn test_remainder_lands_on_last_category() {
        // needed_delta -10 over others 33/33/34 rounds to -3/-3/-3; the
        // leftover -1 must land on endurance (last non-edited category).
        let result = AllocationEngine::adjust(
            &allocation(33, 33, 34, 0),
            GoalCategory::Cardio,
            10,
        );
        assert_eq!(result, allocation(30, 30, 30, 10));
    }

    #[test]
    fn test_skewed_allocation_scales_proportionally() {
        let result = AllocationEngine::adjust(
            &allocation(90, 10, 0, 0),
            GoalCategory::Cardio,
            50,
        );
        assert_eq!(result, allocation(45, 5, 0, 50));
    }

    #[test]
    fn test_raising_others_toward_target() {
        // Dropping strength to 0 pushes the whole freed weight onto the
        // others in proportion to their current values.
        let result = AllocationEngine::adjust(
            &allocation(60, 20, 20, 0),
            GoalCategory::Strength,
            0,
        );
        assert_eq!(result, allocation(0, 50, 50, 0));
        assert!(result.is_valid());
    }

    #[test]
    fn test_rounding_overshoot_at_boundary_keeps_invariant() {
        // Both half-shares round up (58.5 -> 59, 1.5 -> 2), overshooting
        // needed_delta by one while cardio (remainder target) and strength
        // (edited) are pinned at zero. The stranded unit must still come
        // out of some category.
        let result = AllocationEngine::adjust(
            &allocation(60, 39, 1, 0),
            GoalCategory::Strength,
            0,
        );
        assert_eq!(result.total(), 100);
        assert_eq!(result.strength, 0);
    }

    #[test]
    fn test_sequence_of_edits_keeps_invariant() {
        let mut current = GoalAllocation::default();
        let edits = [
            (GoalCategory::Strength, 80),
            (GoalCategory::Cardio, 45),
            (GoalCategory::Hypertrophy, 0),
            (GoalCategory::Endurance, 100),
            (GoalCategory::Strength, 33),
            (GoalCategory::Cardio, 1),
        ];
        for (category, value) in edits {
            current = AllocationEngine::adjust(&current, category, value);
            assert!(current.is_valid(), "invariant broken after {:?}", category);
        }
    }

    #[test]
    fn test_parse_weights() {
        assert_eq!(
            AllocationEngine::parse_weights("25, 25, 25, 25").unwrap(),
            GoalAllocation::default()
        );
        assert_eq!(
            AllocationEngine::parse_weights("40,20,20,20").unwrap(),
            allocation(40, 20, 20, 20)
        );
    }

    #[test]
    fn test_parse_weights_rejects_bad_input() {
        assert_eq!(
            AllocationEngine::parse_weights("25,25,25"),
            Err(AllocationError::InvalidWeightCount(3))
        );
        assert_eq!(
            AllocationEngine::parse_weights("25,25,25,abc"),
            Err(AllocationError::InvalidWeight("abc".to_string()))
        );
        assert_eq!(
            AllocationEngine::parse_weights("40,30,20,20"),
            Err(AllocationError::InvalidTotal(110))
        );
    }
}
