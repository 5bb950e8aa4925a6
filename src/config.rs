use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::thread;

use crate::error::{Result, SortError};
use crate::input::ParseMode;

pub const DEFAULT_INPUT: &str = "listofnumbers.txt";
/// Number of elements printed for the quicksort result.
pub const SEGMENT_SIZE: usize = 1000;
pub const THREAD_POOL_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Quick,
    /// Bubble sort.
    Custom,
    Hybrid,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Quick => "quick sort",
            Algorithm::Custom => "custom sort",
            Algorithm::Hybrid => "hybrid sort",
        }
    }

    /// Quicksort output is cut to the segment size, the others print everything.
    pub fn display_limit(self, segment_size: usize) -> Option<usize> {
        match self {
            Algorithm::Quick => Some(segment_size),
            Algorithm::Custom | Algorithm::Hybrid => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub segment_size: usize,
    pub pool_size: usize,
    /// Worker count for the parallel hybrid sort.
    pub hybrid_threads: usize,
    pub algorithms: Vec<Algorithm>,
    pub parse_mode: ParseMode,
    pub verify: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            segment_size: SEGMENT_SIZE,
            pool_size: THREAD_POOL_SIZE,
            hybrid_threads: available_threads(),
            algorithms: vec![Algorithm::Quick, Algorithm::Custom],
            parse_mode: ParseMode::Strict,
            verify: false,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(SortError::Config("pool size must be at least 1".into()));
        }
        if self.hybrid_threads == 0 && self.algorithms.contains(&Algorithm::Hybrid) {
            return Err(SortError::Config(
                "hybrid sort needs at least 1 thread".into(),
            ));
        }
        if self.algorithms.is_empty() {
            return Err(SortError::Config("no sorting algorithm selected".into()));
        }
        Ok(())
    }
}

pub fn available_threads() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
