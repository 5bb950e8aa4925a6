pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod multicore_sort;
pub mod single_core_sort;
pub mod timing;

pub use config::{Algorithm, RunConfig};
pub use error::{Result, SortError};
pub use input::ParseMode;
pub use timing::SortReport;

/// Compares every report against the standard library sort of `data`.
/// Returns the algorithm name and whether it matched, in report order.
pub fn verify_reports(data: &[i64], reports: &[SortReport]) -> Vec<(Algorithm, bool)> {
    let mut expected = data.to_vec();
    expected.sort();
    reports
        .iter()
        .map(|report| (report.algorithm, report.values == expected))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn verify_flags_wrong_result() {
        let data = vec![3, 1, 2];
        let good = SortReport {
            algorithm: Algorithm::Quick,
            elapsed: Duration::ZERO,
            values: vec![1, 2, 3],
            display_limit: None,
        };
        let bad = SortReport {
            algorithm: Algorithm::Custom,
            values: vec![1, 3, 2],
            ..good.clone()
        };
        assert_eq!(
            verify_reports(&data, &[good, bad]),
            vec![(Algorithm::Quick, true), (Algorithm::Custom, false)]
        );
    }
}
