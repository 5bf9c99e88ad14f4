//! Sleep quality scoring
//!
//! Normalizes sleep duration, optionally blended with overnight HRV and
//! resting heart rate, into a 0.0-1.0 quality score.
//!
//! # Sleep Science Background
//!
//! Adults recover best on 7-9 hours of sleep; the duration component
//! plateaus across that window and ramps down on either side. HRV and
//! resting heart rate, when a wearable supplies them, refine the picture:
//! higher overnight HRV and a lower resting heart rate both indicate
//! stronger parasympathetic recovery.
//!
//! With no biometric signals the score is the duration component alone.
//! When at least one is present the blend is duration 50% + HRV 25% +
//! resting HR 25%, with each absent signal's share simply missing from the
//! total rather than redistributed.

/// Sleep quality scorer
pub struct SleepQualityScorer;

impl SleepQualityScorer {
    /// Score one night of sleep into [0.0, 1.0].
    ///
    /// Returns `None` when `sleep_hours` is zero or negative (no usable
    /// sleep sample). With neither HRV nor resting HR present the result is
    /// the duration component alone; otherwise the weighted blend.
    pub fn score(sleep_hours: f64, hrv: Option<f64>, resting_hr: Option<f64>) -> Option<f64> {
        if sleep_hours <= 0.0 {
            return None;
        }

        let duration = Self::duration_score(sleep_hours);
        if hrv.is_none() && resting_hr.is_none() {
            return Some(duration / 100.0);
        }

        let mut score = duration * 0.5;
        if let Some(hrv) = hrv {
            score += Self::hrv_score(hrv) * 0.25;
        }
        if let Some(hr) = resting_hr {
            score += Self::resting_hr_score(hr) * 0.25;
        }
        Some((score / 100.0).clamp(0.0, 1.0))
    }

    /// Duration component (0-100).
    ///
    /// - 7.0-9.0h: 100
    /// - 6.0-7.0h: 80 - (7 - h) * 20
    /// - 9.0-10.0h: 100 - (h - 9) * 10
    /// - below 6.0h: max(0, 80 - (6 - h) * 20)
    /// - above 10.0h: max(0, 90 - (h - 10) * 10)
    pub fn duration_score(hours: f64) -> f64 {
        if (7.0..=9.0).contains(&hours) {
            100.0
        } else if (6.0..7.0).contains(&hours) {
            80.0 - (7.0 - hours) * 20.0
        } else if hours > 9.0 && hours <= 10.0 {
            100.0 - (hours - 9.0) * 10.0
        } else if hours < 6.0 {
            (80.0 - (6.0 - hours) * 20.0).max(0.0)
        } else {
            (90.0 - (hours - 10.0) * 10.0).max(0.0)
        }
    }

    /// HRV component (0-100), keyed at 40/50/60 ms.
    ///
    /// 60ms and above scores 100; the ladder steps down through 80 at 50ms
    /// and 60 at 40ms, interpolated linearly between keys.
    pub fn hrv_score(hrv: f64) -> f64 {
        if hrv >= 60.0 {
            100.0
        } else if hrv >= 50.0 {
            80.0 + (hrv - 50.0) * 2.0
        } else if hrv >= 40.0 {
            60.0 + (hrv - 40.0) * 2.0
        } else {
            (60.0 - (40.0 - hrv) * 2.0).max(0.0)
        }
    }

    /// Resting heart rate component (0-100), keyed at 55/60/65/70 bpm.
    ///
    /// Lower is better: 55bpm and below scores 100, stepping down 3 points
    /// per bpm through 85/70/55 at the 60/65/70 keys and on toward zero.
    pub fn resting_hr_score(hr: f64) -> f64 {
        if hr <= 55.0 {
            100.0
        } else if hr <= 60.0 {
            100.0 - (hr - 55.0) * 3.0
        } else if hr <= 65.0 {
            85.0 - (hr - 60.0) * 3.0
        } else if hr <= 70.0 {
            70.0 - (hr - 65.0) * 3.0
        } else {
            (55.0 - (hr - 70.0) * 3.0).max(0.0)
        }
    }
}
