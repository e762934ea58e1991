//! Simulated annealing options and cooling schedules.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Temperature as a function of the elapsed step count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoolingSchedule {
    /// `T(t) = 1 / (1 + t)`.
    #[default]
    Inverse,

    /// `T(t) = max(floor, alpha^t)`.
    Geometric { alpha: f64, floor: f64 },

    /// `T(t) = initial * (1 - t / steps)`, reaching zero after `steps`.
    Linear { initial: f64, steps: usize },
}

impl CoolingSchedule {
    pub fn temperature(&self, step: usize) -> f64 {
        match *self {
            CoolingSchedule::Inverse => 1.0 / (1.0 + step as f64),
            CoolingSchedule::Geometric { alpha, floor } => {
                let exponent = i32::try_from(step).unwrap_or(i32::MAX);
                alpha.powi(exponent).max(floor)
            }
            CoolingSchedule::Linear { initial, steps } => {
                if step >= steps {
                    return 0.0;
                }
                initial * (1.0 - step as f64 / steps as f64)
            }
        }
    }
}

/// Options for a simulated annealing run.
///
/// # Examples
///
/// ```
/// use romania_paths::search::config::{AnnealingOptions, CoolingSchedule};
///
/// let options = AnnealingOptions::default()
///     .with_schedule(CoolingSchedule::Geometric { alpha: 0.99, floor: 0.01 })
///     .with_max_steps(500)
///     .with_seed(7);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingOptions {
    pub schedule: CoolingSchedule,

    /// Hard budget of annealing steps before falling back.
    pub max_steps: usize,

    /// Seed of the per-call random stream.
    pub seed: u64,
}

impl Default for AnnealingOptions {
    fn default() -> Self {
        Self {
            schedule: CoolingSchedule::default(),
            max_steps: 1000,
            seed: 42,
        }
    }
}

impl AnnealingOptions {
    pub fn with_schedule(mut self, schedule: CoolingSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_steps == 0 {
            return Err(SearchError::InvalidOptions(
                "max_steps must be positive".into(),
            ));
        }
        match self.schedule {
            CoolingSchedule::Inverse => {}
            CoolingSchedule::Geometric { alpha, floor } => {
                if !(alpha > 0.0 && alpha <= 1.0) {
                    return Err(SearchError::InvalidOptions(format!(
                        "geometric alpha must be in (0, 1], got {alpha}"
                    )));
                }
                if !(floor >= 0.0) {
                    return Err(SearchError::InvalidOptions(format!(
                        "geometric floor must not be negative, got {floor}"
                    )));
                }
            }
            CoolingSchedule::Linear { initial, steps } => {
                if !(initial > 0.0) || steps == 0 {
                    return Err(SearchError::InvalidOptions(format!(
                        "linear schedule needs a positive start and length, got {initial} over {steps}"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = AnnealingOptions::default();
        assert_eq!(options.schedule, CoolingSchedule::Inverse);
        assert_eq!(options.max_steps, 1000);
        assert_eq!(options.seed, 42);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn schedules() {
        assert_eq!(CoolingSchedule::Inverse.temperature(0), 1.0);
        assert_eq!(CoolingSchedule::Inverse.temperature(3), 0.25);

        let geometric = CoolingSchedule::Geometric {
            alpha: 0.5,
            floor: 0.1,
        };
        assert_eq!(geometric.temperature(1), 0.5);
        assert_eq!(geometric.temperature(10), 0.1);

        let linear = CoolingSchedule::Linear {
            initial: 10.0,
            steps: 4,
        };
        assert_eq!(linear.temperature(0), 10.0);
        assert_eq!(linear.temperature(2), 5.0);
        assert_eq!(linear.temperature(4), 0.0);
    }

    #[test]
    fn rejects_bad_options() {
        assert!(AnnealingOptions::default()
            .with_max_steps(0)
            .validate()
            .is_err());
        assert!(AnnealingOptions::default()
            .with_schedule(CoolingSchedule::Geometric {
                alpha: 1.5,
                floor: 0.0
            })
            .validate()
            .is_err());
        assert!(AnnealingOptions::default()
            .with_schedule(CoolingSchedule::Linear {
                initial: 1.0,
                steps: 0
            })
            .validate()
            .is_err());
    }

    #[test]
    fn reads_partial_json() {
        let options: AnnealingOptions =
            serde_json::from_str(r#"{ "seed": 7, "schedule": { "kind": "linear", "initial": 2.0, "steps": 50 } }"#)
                .unwrap();

        assert_eq!(options.seed, 7);
        assert_eq!(options.max_steps, 1000);
        assert_eq!(
            options.schedule,
            CoolingSchedule::Linear {
                initial: 2.0,
                steps: 50
            }
        );
    }
}
