//! Metrics provider seam and score derivation
//!
//! The scoring core never performs I/O: a caller-owned gather phase reads
//! whatever sources it has (device health store, remote API, local logs),
//! possibly concurrently, and hands the engine one immutable
//! [`ScoreInputBundle`]. The [`MetricsProvider`] trait is the narrow
//! read-only seam that gather runs against; anything about permissions,
//! retries, or staleness stays on the provider side of the boundary.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::activity::{ActivityConfig, ActivityScorer};
use crate::models::{
    CompletedSession, DerivedScores, PlannedSession, ScoreInputBundle,
};
use crate::progress::ProgressTracker;
use crate::recovery::RecoveryScorer;
use crate::sleep::SleepQualityScorer;

/// Read-only access to the signals the scorers consume
pub trait MetricsProvider {
    /// Step count for a day, when the source has one
    fn steps(&self, day: NaiveDate) -> Option<u32>;

    /// Active energy burned for a day, kilocalories
    fn active_energy_kcal(&self, day: NaiveDate) -> Option<u32>;

    /// Active (exercise) minutes for a day
    fn active_minutes(&self, day: NaiveDate) -> Option<u32>;

    /// Sleep duration in hours for the night ending on a day
    fn sleep_hours(&self, day: NaiveDate) -> Option<f64>;

    /// Resting heart rate for a day, beats per minute
    fn resting_heart_rate(&self, day: NaiveDate) -> Option<f64>;

    /// Heart rate variability for a day, milliseconds
    fn heart_rate_variability(&self, day: NaiveDate) -> Option<f64>;

    /// All completed sessions, any order
    fn completed_sessions(&self) -> Vec<CompletedSession>;

    /// The planned session scheduled for a day, if any
    fn planned_session(&self, day: NaiveDate) -> Option<PlannedSession>;

    /// Weekly session target from the active plan
    fn weekly_session_target(&self) -> Option<u32>;
}

/// Fractional days elapsed from `from` to `now`, floored at zero
pub fn rest_days_between(from: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    ((now - from).num_seconds() as f64 / 86_400.0).max(0.0)
}

/// Monday of the week containing `day`
fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// Assemble one immutable scoring snapshot from a provider.
///
/// `now` anchors the week window and the rest-time computation; passing it
/// in keeps the gather phase deterministic and testable.
pub fn gather(provider: &dyn MetricsProvider, now: DateTime<Utc>) -> ScoreInputBundle {
    let today = now.date_naive();
    let completed = provider.completed_sessions();

    let last_completed = completed.iter().map(|s| s.completed_at).max();
    let start = week_start(today);
    let completed_this_week = completed
        .iter()
        .filter(|s| {
            let day = s.completed_at.date_naive();
            day >= start && day <= today
        })
        .count() as u32;

    ScoreInputBundle {
        target_sessions_per_week: provider.weekly_session_target(),
        completed_this_week: Some(completed_this_week),
        rest_days: last_completed.map(|at| rest_days_between(at, now)),
        has_any_completed_session: last_completed.is_some(),
        steps: provider.steps(today),
        active_energy_kcal: provider.active_energy_kcal(today),
        active_minutes: provider.active_minutes(today),
        sleep_hours: provider.sleep_hours(today),
        resting_heart_rate: provider.resting_heart_rate(today),
        heart_rate_variability: provider.heart_rate_variability(today),
    }
}

/// Run every scorer over one snapshot.
///
/// Pure and synchronous; the bundle is read, never written.
pub fn derive_scores(
    bundle: &ScoreInputBundle,
    session: Option<&PlannedSession>,
    config: &ActivityConfig,
) -> DerivedScores {
    let activity = ActivityScorer::activity(
        bundle.completed_this_week.unwrap_or(0),
        bundle.target_sessions_per_week.unwrap_or(0),
        bundle.steps,
        bundle.active_energy_kcal,
        bundle.active_minutes,
        config,
    );

    let recovery = RecoveryScorer::recovery(
        bundle.rest_days.unwrap_or(999.0),
        bundle.has_any_completed_session,
        bundle.sleep_hours,
        bundle.resting_heart_rate,
    );

    let sleep_quality = bundle.sleep_hours.and_then(|hours| {
        SleepQualityScorer::score(
            hours,
            bundle.heart_rate_variability,
            bundle.resting_heart_rate,
        )
    });

    DerivedScores {
        activity,
        recovery,
        sleep_quality,
        workout_progress: ProgressTracker::session_progress(session),
    }
}

/// Load a score snapshot from a JSON file (CLI and test harness support;
/// live callers hand bundles over in memory)
pub fn load_bundle<P: AsRef<Path>>(path: P) -> crate::error::Result<ScoreInputBundle> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a planned session from a JSON file
pub fn load_session<P: AsRef<Path>>(path: P) -> crate::error::Result<PlannedSession> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Biometric readings for one day; every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyBiometrics {
    pub steps: Option<u32>,
    pub active_energy_kcal: Option<u32>,
    pub active_minutes: Option<u32>,
    pub sleep_hours: Option<f64>,
    pub resting_heart_rate: Option<f64>,
    pub heart_rate_variability: Option<f64>,
}

/// In-memory provider backing tests and file-fed CLI runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryProvider {
    pub weekly_target: Option<u32>,
    pub completed: Vec<CompletedSession>,
    pub planned: Vec<PlannedSession>,
    pub biometrics: BTreeMap<NaiveDate, DailyBiometrics>,
}

impl MetricsProvider for InMemoryProvider {
    fn steps(&self, day: NaiveDate) -> Option<u32> {
        self.biometrics.get(&day).and_then(|b| b.steps)
    }

    fn active_energy_kcal(&self, day: NaiveDate) -> Option<u32> {
        self.biometrics.get(&day).and_then(|b| b.active_energy_kcal)
    }

    fn active_minutes(&self, day: NaiveDate) -> Option<u32> {
        self.biometrics.get(&day).and_then(|b| b.active_minutes)
    }

    fn sleep_hours(&self, day: NaiveDate) -> Option<f64> {
        self.biometrics.get(&day).and_then(|b| b.sleep_hours)
    }

    fn resting_heart_rate(&self, day: NaiveDate) -> Option<f64> {
        self.biometrics.get(&day).and_then(|b| b.resting_heart_rate)
    }

    fn heart_rate_variability(&self, day: NaiveDate) -> Option<f64> {
        self.biometrics.get(&day).and_then(|b| b.heart_rate_variability)
    }

    fn completed_sessions(&self) -> Vec<CompletedSession> {
        self.completed.clone()
    }

    fn planned_session(&self, day: NaiveDate) -> Option<PlannedSession> {
        self.planned.iter().find(|s| s.date == day).cloned()
    }

    fn weekly_session_target(&self) -> Option<u32> {
        self.weekly_target
    }
}
