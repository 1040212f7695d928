use hourscope_types::{AnalysisResult, HOURS_PER_DAY};
use std::fmt;

use crate::histogram::{max_post_count, optimal_hours};

/// A broken invariant in an analysis payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Histogram does not have 24 buckets.
    BucketCount(usize),
    /// `max_post_count` differs from the histogram maximum.
    MaxMismatch { reported: u64, actual: u64 },
    /// `optimal_hours` is empty.
    NoOptimalHours,
    /// `optimal_hours` is not exactly the set of maximal hours, in order.
    OptimalHoursMismatch {
        reported: Vec<usize>,
        actual: Vec<usize>,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::BucketCount(n) => {
                write!(f, "expected {} hourly buckets, got {}", HOURS_PER_DAY, n)
            }
            Violation::MaxMismatch { reported, actual } => {
                write!(f, "max_post_count is {} but histogram peak is {}", reported, actual)
            }
            Violation::NoOptimalHours => write!(f, "optimal_hours is empty"),
            Violation::OptimalHoursMismatch { reported, actual } => write!(
                f,
                "optimal_hours {:?} does not match peak hours {:?}",
                reported, actual
            ),
        }
    }
}

/// Check a result against the histogram invariants.
///
/// Returns every violation found; an empty list means the payload is
/// consistent. Bucket-count problems short-circuit the remaining checks
/// since indices are meaningless without 24 buckets.
pub fn verify_result(result: &AnalysisResult) -> Vec<Violation> {
    let counts = &result.hourly_post_counts;
    if counts.len() != HOURS_PER_DAY {
        return vec![Violation::BucketCount(counts.len())];
    }

    let mut violations = Vec::new();

    let actual_max = max_post_count(counts);
    if result.max_post_count != actual_max {
        violations.push(Violation::MaxMismatch {
            reported: result.max_post_count,
            actual: actual_max,
        });
    }

    if result.optimal_hours.is_empty() {
        violations.push(Violation::NoOptimalHours);
    } else {
        let actual_hours = optimal_hours(counts);
        if result.optimal_hours != actual_hours {
            violations.push(Violation::OptimalHoursMismatch {
                reported: result.optimal_hours.clone(),
                actual: actual_hours,
            });
        }
    }

    violations
}
