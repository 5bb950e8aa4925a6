use flume::Receiver;
use tracing::{debug, info};

mod threadpool;
pub use crate::multicore_sort::threadpool::ThreadPool;

use crate::config::{Algorithm, RunConfig};
use crate::error::{Result, SortError};
use crate::single_core_sort::{
    custom_sort, insertion_sort, max_selection_sort, quick_sort, quick_sort_with_cutoff,
    QUICKSORT_THRESHOLD,
};
use crate::timing::{measure_execution_time, SortReport};

// Trait aliasing for readibility
// https://stackoverflow.com/questions/26070559/is-there-any-way-to-create-a-type-alias-for-multiple-traits
pub trait SortTraits: Clone + PartialOrd + Send + 'static {}
impl<T: Clone + PartialOrd + Send + 'static> SortTraits for T {}

/// Size of the segments sorted independently by the hybrid sort.
pub const CHUNK_SIZE: usize = 4096;

/// Runs every configured algorithm as its own job on a thread pool.
/// Each job sorts a private copy of `data` and times only the sort itself.
/// Reports are returned in configuration order, whatever order they finish in.
pub fn run_sorts(data: &[i64], config: &RunConfig) -> Result<Vec<SortReport>> {
    config.validate()?;
    let threadpool = ThreadPool::new(config.pool_size)?;
    // Channel to collect the reports as the jobs finish
    let (report_write, report_read) = flume::unbounded();
    for (position, &algorithm) in config.algorithms.iter().enumerate() {
        let values = data.to_vec();
        let report_write = report_write.clone();
        let display_limit = algorithm.display_limit(config.segment_size);
        let hybrid_threads = config.hybrid_threads;
        threadpool.execute(move || {
            let (sorted, elapsed) =
                measure_execution_time(|| sort_with(algorithm, values, hybrid_threads));
            let report = sorted.map(|values| SortReport {
                algorithm,
                elapsed,
                values,
                display_limit,
            });
            // The receiver only disappears if the caller already gave up
            let _ = report_write.send((position, report));
        })?;
    }
    drop(report_write);
    collect_reports(report_read, config.algorithms.len())
}

type ReportMessage = (usize, Result<SortReport>);

/// Gathers `expected` reports by position. Ends once every sender is gone,
/// so a job that died without sending shows up as a gap.
fn collect_reports(report_read: Receiver<ReportMessage>, expected: usize) -> Result<Vec<SortReport>> {
    let mut reports: Vec<Option<SortReport>> = (0..expected).map(|_| None).collect();
    for (position, report) in report_read.iter() {
        let report = report?;
        info!(
            algorithm = %report.algorithm,
            elapsed_ns = report.elapsed.as_nanos() as u64,
            "sort finished"
        );
        reports[position] = Some(report);
    }
    reports
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or(SortError::WorkerLost)
}

fn sort_with(algorithm: Algorithm, mut values: Vec<i64>, hybrid_threads: usize) -> Result<Vec<i64>> {
    match algorithm {
        Algorithm::Quick => quick_sort(&mut values),
        Algorithm::Custom => custom_sort(&mut values),
        Algorithm::Hybrid => return hybrid_sort_parallel(&values, hybrid_threads),
    }
    Ok(values)
}

/// Sorts fixed-size chunks in parallel, each with one of three elementary
/// sorts, then merges the sorted chunks bottom-up.
pub fn hybrid_sort_parallel<T: SortTraits>(input: &[T], threads: usize) -> Result<Vec<T>> {
    if input.len() <= 1 {
        return Ok(input.to_vec());
    }
    let threadpool = ThreadPool::new(threads)?;
    let num_chunks = input.len().div_ceil(CHUNK_SIZE);
    debug!("hybrid sort: {num_chunks} chunks on {threads} threads");

    let (chunk_write, chunk_read) = flume::unbounded();
    for (chunk_id, chunk) in input.chunks(CHUNK_SIZE).enumerate() {
        let mut chunk = chunk.to_vec();
        let chunk_write = chunk_write.clone();
        threadpool.execute(move || {
            sort_chunk(&mut chunk, chunk_id);
            let _ = chunk_write.send((chunk_id, chunk));
        })?;
    }
    drop(chunk_write);

    // Wait until the tasks finish
    let mut sorted_chunks: Vec<Option<Vec<T>>> = (0..num_chunks).map(|_| None).collect();
    for (chunk_id, chunk) in chunk_read.iter() {
        sorted_chunks[chunk_id] = Some(chunk);
    }
    let mut values = Vec::with_capacity(input.len());
    for chunk in sorted_chunks {
        values.extend(chunk.ok_or(SortError::WorkerLost)?);
    }

    merge_chunks(&mut values, CHUNK_SIZE);
    Ok(values)
}

fn sort_chunk<T: SortTraits>(chunk: &mut [T], chunk_id: usize) {
    // Cycle through the sorters
    match chunk_id % 3 {
        0 => insertion_sort(chunk),
        1 => max_selection_sort(chunk),
        _ => quick_sort_with_cutoff(chunk, QUICKSORT_THRESHOLD),
    }
}

/// Merges consecutive sorted runs of length `run` into one sorted vector,
/// doubling the run length each round and reusing one helper buffer.
fn merge_chunks<T: SortTraits>(values: &mut Vec<T>, run: usize) {
    let length = values.len();
    let mut buffer = values.clone();
    let mut bin_size = run.max(1);
    while bin_size < length {
        for start in (0..length).step_by(2 * bin_size) {
            let mid = (start + bin_size).min(length);
            let end = (start + 2 * bin_size).min(length);
            merge_bins(&values[start..mid], &values[mid..end], &mut buffer[start..end]);
        }
        // Put merged bins from the buffer into the values
        std::mem::swap(values, &mut buffer);
        bin_size *= 2;
    }
}

/// Merges two sorted runs into `out`. Ties are taken from `left` first,
/// so equal elements keep their relative order.
fn merge_bins<T: SortTraits>(left: &[T], right: &[T], out: &mut [T]) {
    let (mut l, mut r) = (0, 0);
    for slot in out {
        let take_left = r >= right.len() || (l < left.len() && left[l] <= right[r]);
        if take_left {
            *slot = left[l].clone();
            l += 1;
        } else {
            *slot = right[r].clone();
            r += 1;
        }
    }
}
