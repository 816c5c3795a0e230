//! Synthetic CPU-bound workload for load generation.

use std::time::{Duration, Instant};

/// Iteration count used when the client does not supply one.
pub const DEFAULT_ITERATIONS: i64 = 100_000_000;

/// Label reported alongside compute results.
pub const COMPUTATION: &str = "sum of square roots";

/// Result of a timed workload run.
#[derive(Debug, Clone, Copy)]
pub struct TimedRun {
    /// Accumulated sum.
    pub result: f64,
    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
}

/// Accumulate `sqrt(i)` for `i` in `0..iterations`.
///
/// Non-positive counts run zero iterations and return 0.0. The count is
/// deliberately unbounded above: arbitrarily large values keep a thread busy
/// for arbitrarily long, which is the point of the endpoint.
pub fn sqrt_sum(iterations: i64) -> f64 {
    let mut sum = 0.0_f64;
    for i in 0..iterations.max(0) {
        sum += (i as f64).sqrt();
    }
    sum
}

/// Run [`sqrt_sum`] under a wall-clock timer.
pub fn timed_sqrt_sum(iterations: i64) -> TimedRun {
    let start = Instant::now();
    let result = sqrt_sum(iterations);
    TimedRun {
        result,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iterations_sum_to_zero() {
        assert_eq!(sqrt_sum(0), 0.0);
    }

    #[test]
    fn negative_count_runs_no_iterations() {
        assert_eq!(sqrt_sum(-5), 0.0);
    }

    #[test]
    fn small_sum_matches_by_hand() {
        // sqrt(0) + sqrt(1) + sqrt(2) + sqrt(3)
        let expected = 1.0 + 2.0_f64.sqrt() + 3.0_f64.sqrt();
        assert!((sqrt_sum(4) - expected).abs() < 1e-9);
    }

    #[test]
    fn sum_grows_with_iterations() {
        assert!(sqrt_sum(1000) > sqrt_sum(100));
    }

    #[test]
    fn timed_run_reports_finite_result() {
        let run = timed_sqrt_sum(10_000);
        assert!(run.result.is_finite());
        assert!(run.result > 0.0);
        // elapsed is a Duration, so non-negative by construction; just make
        // sure the timer produced something sane.
        assert!(run.elapsed < Duration::from_secs(60));
    }
}
