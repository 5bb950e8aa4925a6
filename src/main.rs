use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::Rng;
use tracing::{info, warn};

use hybrid_sort::{
    config::{self, Algorithm, RunConfig},
    input::{self, ParseMode},
    logger, multicore_sort, verify_reports, SortError, SortReport,
};

/// Times quicksort against bubble sort on a file of comma-separated integers
#[derive(Parser, Debug)]
#[command(name = "hybridsort", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File holding comma-separated integers
    #[arg(value_name = "FILE", default_value = config::DEFAULT_INPUT)]
    file: PathBuf,

    /// Number of elements printed for the quicksort result
    #[arg(long, default_value_t = config::SEGMENT_SIZE)]
    segment_size: usize,

    /// Worker threads running the sort jobs
    #[arg(long, default_value_t = config::THREAD_POOL_SIZE)]
    pool_size: usize,

    /// Threads used by the hybrid sort (defaults to available parallelism)
    #[arg(long)]
    threads: Option<usize>,

    /// Algorithms to run, in output order
    #[arg(long = "algorithm", value_enum, default_values_t = [AlgorithmArg::Quick, AlgorithmArg::Custom])]
    algorithms: Vec<AlgorithmArg>,

    /// Ignore any character that is not a digit, '-' or ','
    #[arg(long)]
    lenient: bool,

    /// Check every result against the standard library sort
    #[arg(long)]
    verify: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write random integers in the input format
    Generate {
        /// How many numbers to write
        #[arg(short, long)]
        count: usize,

        /// Smallest value (inclusive)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        min: i64,

        /// Largest value (inclusive)
        #[arg(long, default_value_t = 1_000_000, allow_negative_numbers = true)]
        max: i64,

        /// Output file
        #[arg(short, long, default_value = config::DEFAULT_INPUT)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Quick,
    Custom,
    Hybrid,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Quick => Algorithm::Quick,
            AlgorithmArg::Custom => Algorithm::Custom,
            AlgorithmArg::Hybrid => Algorithm::Hybrid,
        }
    }
}

impl Args {
    fn run_config(&self) -> RunConfig {
        let defaults = RunConfig::default();
        RunConfig {
            input: self.file.clone(),
            segment_size: self.segment_size,
            pool_size: self.pool_size,
            hybrid_threads: self.threads.unwrap_or(defaults.hybrid_threads),
            algorithms: self.algorithms.iter().copied().map(Algorithm::from).collect(),
            parse_mode: if self.lenient {
                ParseMode::Lenient
            } else {
                ParseMode::Strict
            },
            verify: self.verify,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    match &args.command {
        Some(Commands::Generate {
            count,
            min,
            max,
            output,
        }) => generate(*count, *min, *max, output),
        None => run(&args.run_config()),
    }
}

fn run(config: &RunConfig) -> Result<()> {
    config.validate()?;
    let data = input::read_numbers(&config.input, config.parse_mode)?;
    info!("sorting {} numbers from {}", data.len(), config.input.display());

    let reports = multicore_sort::run_sorts(&data, config).context("sorting failed")?;
    write_reports(&mut io::stdout().lock(), &data, &reports, config.verify)
}

/// Prints the reports framed by blank lines, followed by the verification
/// lines when `verify` is set. A failed verification is returned as an error
/// after everything has been printed.
fn write_reports(out: &mut impl Write, data: &[i64], reports: &[SortReport], verify: bool) -> Result<()> {
    writeln!(out)?;
    for report in reports {
        writeln!(out, "{report}")?;
    }

    let mut failed = None;
    if verify {
        for (algorithm, ok) in verify_reports(data, reports) {
            if ok {
                writeln!(out, "Verification ({algorithm}): Success")?;
            } else {
                writeln!(out, "Verification ({algorithm}): FAILED")?;
                warn!("{algorithm} produced an unsorted result");
                if failed.is_none() {
                    failed = Some(algorithm);
                }
            }
        }
    }
    writeln!(out)?;

    match failed {
        Some(algorithm) => Err(SortError::VerificationFailed {
            algorithm: algorithm.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

fn random_numbers(count: usize, min: i64, max: i64) -> Result<Vec<i64>> {
    anyhow::ensure!(count > 0, "--count must be at least 1");
    anyhow::ensure!(min <= max, "--min ({min}) must not exceed --max ({max})");
    let mut rng = rand::rng();
    Ok((0..count).map(|_| rng.random_range(min..=max)).collect())
}

fn generate(count: usize, min: i64, max: i64, output: &Path) -> Result<()> {
    let values = random_numbers(count, min, max)?;
    input::write_numbers(output, &values)
        .with_context(|| format!("writing {}", output.display()))?;
    info!("wrote {count} numbers to {}", output.display());
    Ok(())
}
