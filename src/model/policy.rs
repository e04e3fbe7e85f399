use serde::Deserialize;
use thiserror::Error;

/// A grading policy under which no percentage can be computed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidPolicy {
    #[error("grading.max_mark must be a positive number, got {0}")]
    MaxMark(f64),
    #[error("grading.pass_mark must be between 0 and {max_mark}, got {pass_mark}")]
    PassMark { pass_mark: f64, max_mark: f64 },
}

/// Marks at or above `pass_mark` pass a subject. Every subject is marked out
/// of `max_mark`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradingPolicy {
    pub pass_mark: f64,
    pub max_mark: f64,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            pass_mark: 40.0,
            max_mark: 100.0,
        }
    }
}

impl GradingPolicy {
    pub fn check(&self) -> Result<(), InvalidPolicy> {
        let GradingPolicy {
            pass_mark,
            max_mark,
        } = *self;
        if !(max_mark.is_finite() && max_mark > 0.0) {
            return Err(InvalidPolicy::MaxMark(max_mark));
        }
        if !(pass_mark.is_finite() && (0.0..=max_mark).contains(&pass_mark)) {
            return Err(InvalidPolicy::PassMark {
                pass_mark,
                max_mark,
            });
        }
        Ok(())
    }

    pub fn passes(&self, mark: f64) -> bool {
        mark >= self.pass_mark
    }

    pub fn in_range(&self, mark: f64) -> bool {
        (0.0..=self.max_mark).contains(&mark)
    }
}

#[test]
fn test_pass_boundary_is_inclusive() {
    let policy = GradingPolicy::default();
    assert!(policy.passes(40.0));
    assert!(!policy.passes(39.99));
    assert!(policy.in_range(0.0));
    assert!(policy.in_range(100.0));
    assert!(!policy.in_range(100.01));
    assert!(!policy.in_range(-0.5));
}

#[test]
fn test_check_policy() {
    assert_eq!(GradingPolicy::default().check(), Ok(()));
    let zero = GradingPolicy {
        pass_mark: 0.0,
        max_mark: 0.0,
    };
    assert_eq!(zero.check(), Err(InvalidPolicy::MaxMark(0.0)));
    let nan = GradingPolicy {
        max_mark: f64::NAN,
        ..GradingPolicy::default()
    };
    assert!(matches!(nan.check(), Err(InvalidPolicy::MaxMark(m)) if m.is_nan()));
    let high_pass = GradingPolicy {
        pass_mark: 60.0,
        max_mark: 50.0,
    };
    assert_eq!(
        high_pass.check(),
        Err(InvalidPolicy::PassMark {
            pass_mark: 60.0,
            max_mark: 50.0
        })
    );
    let negative_pass = GradingPolicy {
        pass_mark: -1.0,
        ..GradingPolicy::default()
    };
    assert!(negative_pass.check().is_err());
}
