use bon::Builder;
use itertools::Itertools;

use crate::error::{Error, Result};
use crate::PROBABILITY_TOLERANCE;

/// Construction-time checks applied to coin and die parameters.
///
/// Disabling validation reproduces the permissive behaviour where
/// out-of-range parameters are accepted and sample degenerately. Side
/// counts are always checked.
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct Validation {
    #[builder(default = true)]
    enabled: bool,
    #[builder(default = PROBABILITY_TOLERANCE)]
    tolerance: f64,
}

impl Default for Validation {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Validation {
    #[must_use]
    pub fn disabled() -> Self {
        Self::builder().enabled(false).build()
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub(crate) fn check_heads_probability(&self, value: f64) -> Result<()> {
        if self.enabled && !(0.0..=1.0).contains(&value) {
            return Err(Error::HeadsProbability(value));
        }
        Ok(())
    }

    pub(crate) fn check_probabilities(&self, probabilities: &[f64]) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if let Some((index, &value)) = probabilities
            .iter()
            .find_position(|p| !p.is_finite() || **p < 0.0)
        {
            return Err(Error::Probability { index, value });
        }

        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() > self.tolerance {
            return Err(Error::ProbabilitySum { sum });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let v = Validation::default();
        assert!(v.enabled());
        assert_eq!(v.tolerance(), PROBABILITY_TOLERANCE);
    }

    #[test]
    fn heads_probability_range() {
        let v = Validation::default();
        assert!(v.check_heads_probability(0.0).is_ok());
        assert!(v.check_heads_probability(1.0).is_ok());
        assert_eq!(
            v.check_heads_probability(-0.1),
            Err(Error::HeadsProbability(-0.1))
        );
        assert!(v.check_heads_probability(f64::NAN).is_err());
        assert!(Validation::disabled().check_heads_probability(7.0).is_ok());
    }

    #[test]
    fn probabilities_negative() {
        let err = Validation::default()
            .check_probabilities(&[0.5, -0.5, 1.0])
            .unwrap_err();
        assert_eq!(
            err,
            Error::Probability {
                index: 1,
                value: -0.5
            }
        );
    }

    #[test]
    fn probabilities_sum() {
        let v = Validation::default();
        assert!(v.check_probabilities(&[0.1, 0.3, 0.6]).is_ok());
        assert!(matches!(
            v.check_probabilities(&[0.1, 0.3]),
            Err(Error::ProbabilitySum { .. })
        ));
    }

    #[test]
    fn custom_tolerance() {
        let loose = Validation::builder().tolerance(0.05).build();
        assert!(loose.check_probabilities(&[0.5, 0.48]).is_ok());
        assert!(Validation::default()
            .check_probabilities(&[0.5, 0.48])
            .is_err());
    }
}
