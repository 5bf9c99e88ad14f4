//! Recovery scoring
//!
//! Blends elapsed rest time since the last completed session with optional
//! biometric recovery signals into a 0-100 score.
//!
//! # Blending order
//!
//! The biometric blend is a chain, not a weighted sum: starting from a
//! neutral 50, each present signal folds into the running value
//! (sleep bucket, then resting-HR bucket, then a rest-intensity
//! adjustment). Every step reuses the prior blended value, so the sequence
//! sleep -> HR -> rest-intensity is load bearing and must not be reordered.
//! All blends are integer arithmetic: `(r*70 + bucket*30) / 100` truncates.
//!
//! An athlete with no completed session ever has no meaningful rest
//! interval; recovery then reduces to the biometric blend evaluated at an
//! effectively infinite rest time.

/// Recovery scorer
pub struct RecoveryScorer;

impl RecoveryScorer {
    /// Rest time stand-in when no session has ever been completed
    const NO_SESSION_REST_DAYS: f64 = 999.0;

    /// Neutral starting point for the biometric blend
    const BLEND_BASELINE: i32 = 50;

    /// Recovery score (0-100) from rest time and optional biometrics.
    ///
    /// `rest_days` is fractional days since the last completed session and
    /// is ignored when `has_any_completed_session` is false.
    pub fn recovery(
        rest_days: f64,
        has_any_completed_session: bool,
        sleep_hours: Option<f64>,
        resting_hr: Option<f64>,
    ) -> u8 {
        if !has_any_completed_session {
            return Self::biometric_blend(Self::NO_SESSION_REST_DAYS, sleep_hours, resting_hr);
        }

        let base = i32::from(Self::base_recovery(rest_days));
        let blend = i32::from(Self::biometric_blend(rest_days, sleep_hours, resting_hr));
        ((base * 50 + blend * 50) / 100).min(100) as u8
    }

    /// Step function of rest time: more rest, more recovered.
    ///
    /// >= 3 days: 100, >= 2: 85, >= 1: 60, >= 0.5: 30, else 10.
    pub fn base_recovery(rest_days: f64) -> u8 {
        if rest_days >= 3.0 {
            100
        } else if rest_days >= 2.0 {
            85
        } else if rest_days >= 1.0 {
            60
        } else if rest_days >= 0.5 {
            30
        } else {
            10
        }
    }

    /// Chained biometric blend (0-100).
    ///
    /// Starts at a neutral 50 and folds in, strictly in order: sleep bucket
    /// (30% pull), resting-HR bucket (20% pull), then a rest-intensity
    /// bucket (30% pull) keyed on how recently the athlete trained.
    pub fn biometric_blend(
        rest_days: f64,
        sleep_hours: Option<f64>,
        resting_hr: Option<f64>,
    ) -> u8 {
        let mut r = Self::BLEND_BASELINE;

        if let Some(hours) = sleep_hours {
            r = (r * 70 + Self::sleep_bucket(hours) * 30) / 100;
        }

        if let Some(hr) = resting_hr {
            r = (r * 80 + Self::hr_bucket(hr) * 20) / 100;
        }

        let rest_bucket = if rest_days < 1.0 {
            30
        } else if rest_days < 2.0 {
            60
        } else {
            90
        };
        r = (r * 70 + rest_bucket * 30) / 100;

        r.clamp(0, 100) as u8
    }

    /// Sleep duration bucket: >= 7.5h: 100, >= 6h: 80, >= 5h: 60, else 40
    fn sleep_bucket(hours: f64) -> i32 {
        if hours >= 7.5 {
            100
        } else if hours >= 6.0 {
            80
        } else if hours >= 5.0 {
            60
        } else {
            40
        }
    }

    /// Resting heart rate bucket, lower is better:
    /// <= 55: 100, <= 60: 85, <= 65: 70, <= 70: 55, else 40
    fn hr_bucket(hr: f64) -> i32 {
        if hr <= 55.0 {
            100
        } else if hr <= 60.0 {
            85
        } else if hr <= 65.0 {
            70
        } else if hr <= 70.0 {
            55
        } else {
            40
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_trained_no_biometrics() {
        // Baseline 50, no sleep or HR folds, rest >= 2 days bucket 90:
        // (50*70 + 90*30) / 100 = 62
        assert_eq!(RecoveryScorer::recovery(0.0, false, None, None), 62);
    }

    #[test]
    fn test_base_recovery_steps() {
        assert_eq!(RecoveryScorer::base_recovery(3.5), 100);
        assert_eq!(RecoveryScorer::base_recovery(3.0), 100);
        assert_eq!(RecoveryScorer::base_recovery(2.5), 85);
        assert_eq!(RecoveryScorer::base_recovery(1.0), 60);
        assert_eq!(RecoveryScorer::base_recovery(0.75), 30);
        assert_eq!(RecoveryScorer::base_recovery(0.2), 10);
    }

    #[test]
    fn test_blend_chain_order() {
        // Sleep then HR then rest-intensity, each step reusing the prior
        // value: 50 -> (50*70+100*30)/100 = 65 -> (65*80+100*20)/100 = 72
        // -> (72*70+60*30)/100 = 68
        assert_eq!(
            RecoveryScorer::biometric_blend(1.5, Some(8.0), Some(50.0)),
            68
        );
    }

    #[test]
    fn test_blend_without_sleep_skips_that_step() {
        // 50 -> HR fold (50*80+100*20)/100 = 60 -> rest fold
        // (60*70+90*30)/100 = 69
        assert_eq!(RecoveryScorer::biometric_blend(4.0, None, Some(52.0)), 69);
    }

    #[test]
    fn test_recovery_combines_base_and_blend() {
        // base 60 (1.5 rest days), blend 68 (chain above):
        // (60*50 + 68*50) / 100 = 64
        assert_eq!(
            RecoveryScorer::recovery(1.5, true, Some(8.0), Some(50.0)),
            64
        );
    }

    #[test]
    fn test_fully_rested_with_good_biometrics() {
        // base 100; blend: 50 -> 65 (sleep 100) -> 72 (HR 100) -> 77
        // ((72*70+90*30)/100 = 77); combined (100*50+77*50)/100 = 88
        assert_eq!(
            RecoveryScorer::recovery(3.0, true, Some(8.0), Some(50.0)),
            88
        );
    }

    #[test]
    fn test_short_rest_pulls_blend_down() {
        // 50 -> sleep 40 bucket: (50*70+40*30)/100 = 47 -> rest < 1 day
        // bucket 30: (47*70+30*30)/100 = 41
        assert_eq!(RecoveryScorer::biometric_blend(0.4, Some(4.0), None), 41);

        // base 10, combined (10*50+41*50)/100 = 25
        assert_eq!(RecoveryScorer::recovery(0.4, true, Some(4.0), None), 25);
    }

    #[test]
    fn test_never_trained_with_biometrics() {
        // No completed session ever: the blend alone is the score.
        // 50 -> (50*70+80*30)/100 = 59 -> (59*80+85*20)/100 = 64
        // -> (64*70+90*30)/100 = 71
        assert_eq!(
            RecoveryScorer::recovery(0.0, false, Some(6.5), Some(58.0)),
            71
        );
    }

    #[test]
    fn test_output_bounds_under_extremes() {
        for rest_days in [0.0, 0.49, 0.5, 1.0, 2.0, 3.0, 365.0] {
            for sleep in [None, Some(0.0), Some(2.0), Some(12.0)] {
                for hr in [None, Some(30.0), Some(200.0)] {
                    let score = RecoveryScorer::recovery(rest_days, true, sleep, hr);
                    assert!(score <= 100);
                    let score = RecoveryScorer::recovery(rest_days, false, sleep, hr);
                    assert!(score <= 100);
                }
            }
        }
    }
}
