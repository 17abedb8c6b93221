use crate::parameters::PolicyRampParameters;
use escm_core::{FloatValue, Year};
use serde::{Deserialize, Serialize};

/// Gradual implementation of policies over time
///
/// The same ramp applies to every lever; there is no per-policy phase-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRamp {
    parameters: PolicyRampParameters,
}

impl PolicyRamp {
    pub fn new() -> Self {
        Self::from_parameters(PolicyRampParameters::default())
    }

    pub fn from_parameters(parameters: PolicyRampParameters) -> Self {
        Self { parameters }
    }

    /// Policy strength in `[0, 1]` for a given year
    ///
    /// Zero before and at the ramp start, then rising linearly until it
    /// saturates at one.
    pub fn strength(&self, year: Year) -> FloatValue {
        if year < self.parameters.start_year {
            return 0.0;
        }
        let elapsed = (year - self.parameters.start_year) as FloatValue;
        (elapsed / self.parameters.ramp_years).min(1.0)
    }

    pub fn parameters(&self) -> &PolicyRampParameters {
        &self.parameters
    }
}

impl Default for PolicyRamp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_before_start() {
        let ramp = PolicyRamp::new();
        assert_eq!(ramp.strength(2000), 0.0);
        assert_eq!(ramp.strength(2023), 0.0);
        assert_eq!(ramp.strength(2024), 0.0);
    }

    #[test]
    fn linear_phase_in() {
        let ramp = PolicyRamp::new();
        assert!((ramp.strength(2025) - 0.1).abs() < 1e-12);
        assert!((ramp.strength(2029) - 0.5).abs() < 1e-12);
        assert!((ramp.strength(2033) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn saturates_at_one() {
        let ramp = PolicyRamp::new();
        assert_eq!(ramp.strength(2034), 1.0);
        assert_eq!(ramp.strength(2100), 1.0);
    }

    #[test]
    fn monotonic() {
        let ramp = PolicyRamp::new();
        let strengths: Vec<_> = (2000..=2100).map(|y| ramp.strength(y)).collect();
        assert!(
            strengths.windows(2).all(|w| w[1] >= w[0]),
            "Policy strength should never decrease"
        );
        assert!(strengths.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn custom_ramp() {
        let ramp = PolicyRamp::from_parameters(PolicyRampParameters {
            start_year: 2030,
            ramp_years: 4.0,
        });
        assert_eq!(ramp.strength(2029), 0.0);
        assert_eq!(ramp.strength(2032), 0.5);
        assert_eq!(ramp.strength(2034), 1.0);
    }
}
