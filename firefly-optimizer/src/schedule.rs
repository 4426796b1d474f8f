//! Randomization step size per generation.

use crate::error::{FireflyError, Result};

/// How the random step size `alpha` evolves over a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlphaSchedule {
    /// The same `alpha` every generation.
    Constant(f64),
    /// `alpha_g = min + g * (max - min) / max_generations`, for `g` counted
    /// from zero. Passing `min > max` gives a decreasing schedule.
    Linear {
        /// Value at generation 0
        min: f64,
        /// Value the schedule approaches at the last generation
        max: f64,
    },
}

impl Default for AlphaSchedule {
    fn default() -> Self {
        AlphaSchedule::Constant(0.2)
    }
}

impl AlphaSchedule {
    /// Step size for the 0-based `generation` of a run of `max_generations`.
    pub fn alpha(&self, generation: usize, max_generations: usize) -> f64 {
        match *self {
            AlphaSchedule::Constant(a) => a,
            AlphaSchedule::Linear { min, max } => {
                if max_generations == 0 {
                    min
                } else {
                    min + generation as f64 * (max - min) / max_generations as f64
                }
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            AlphaSchedule::Constant(a) => check_non_negative("alpha", a),
            AlphaSchedule::Linear { min, max } => {
                check_non_negative("alpha_min", min)?;
                check_non_negative("alpha_max", max)
            }
        }
    }
}

pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FireflyError::InvalidParameter {
            name,
            value,
            reason: "must be finite and >= 0",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant() {
        let s = AlphaSchedule::Constant(0.3);
        assert_eq!(s.alpha(0, 10), 0.3);
        assert_eq!(s.alpha(9, 10), 0.3);
    }

    #[test]
    fn test_linear_endpoints() {
        let s = AlphaSchedule::Linear { min: 0.1, max: 0.5 };
        assert_eq!(s.alpha(0, 4), 0.1);
        assert!((s.alpha(2, 4) - 0.3).abs() < 1e-12);
        assert!((s.alpha(3, 4) - 0.4).abs() < 1e-12);
        assert_eq!(s.alpha(0, 0), 0.1);
    }

    #[test]
    fn test_decreasing_schedule() {
        let s = AlphaSchedule::Linear { min: 0.5, max: 0.1 };
        assert!(s.alpha(1, 4) < s.alpha(0, 4));
        assert!(s.alpha(3, 4) > 0.1);
    }

    #[test]
    fn test_validation() {
        assert!(AlphaSchedule::Constant(0.0).validate().is_ok());
        assert!(AlphaSchedule::Constant(-0.1).validate().is_err());
        assert!(
            AlphaSchedule::Linear {
                min: 0.1,
                max: f64::NAN
            }
            .validate()
            .is_err()
        );
    }
}
