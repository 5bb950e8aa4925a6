use std::fmt;
use std::time::{Duration, Instant};

use crate::config::Algorithm;

/// Runs `f` and returns its output together with the wall-clock time it took.
pub fn measure_execution_time<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}

/// Outcome of one timed sort.
#[derive(Debug, Clone)]
pub struct SortReport {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub values: Vec<i64>,
    /// `None` prints the whole array.
    pub display_limit: Option<usize>,
}

impl SortReport {
    pub fn displayed(&self) -> &[i64] {
        match self.display_limit {
            Some(limit) => &self.values[..limit.min(self.values.len())],
            None => &self.values,
        }
    }
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Execution Time: {} nanoseconds", self.elapsed.as_nanos())?;
        write!(f, "Sorted Array: {:?}", self.displayed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(values: Vec<i64>, display_limit: Option<usize>) -> SortReport {
        SortReport {
            algorithm: Algorithm::Quick,
            elapsed: Duration::from_nanos(1234),
            values,
            display_limit,
        }
    }

    #[test]
    fn measure_returns_output() {
        let (sum, elapsed) = measure_execution_time(|| (1..=10).sum::<i32>());
        assert_eq!(sum, 55);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn display_format() {
        let text = report(vec![1, 2, 3], None).to_string();
        assert_eq!(text, "Execution Time: 1234 nanoseconds\nSorted Array: [1, 2, 3]");
    }

    #[test]
    fn display_limit_truncates() {
        let text = report(vec![1, 2, 3, 4], Some(2)).to_string();
        assert!(text.ends_with("Sorted Array: [1, 2]"));
    }

    #[test]
    fn display_limit_never_pads() {
        let r = report(vec![1, 2], Some(1000));
        assert_eq!(r.displayed(), &[1, 2]);
    }
}
