//! Monte Carlo π CLI
//!
//! Drives the sampling accumulator on a fixed cadence and prints a summary.

mod error;
mod report;
mod session;

use clap::Parser;
use monte_carlo_pi_core_rs::{Accumulator, AccumulatorConfig, DEFAULT_BATCH_SIZE, DEFAULT_RNG_SEED};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

use crate::error::CliError;
use crate::report::{group_thousands, Report};
use crate::session::{Session, SessionConfig, DEFAULT_INTERVAL_MS, DEFAULT_MAX_BATCHES};

#[derive(Parser, Debug)]
#[command(name = "mcpi")]
#[command(about = "Estimate π by sampling random points in the unit square", long_about = None)]
struct Args {
    /// Seed for the coordinate generator
    #[arg(short, long, default_value_t = DEFAULT_RNG_SEED)]
    seed: u64,

    /// Points generated per batch
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE as i64, allow_negative_numbers = true)]
    batch_size: i64,

    /// Delay between batches in ms (10-1000, or 0 to run unpaced)
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Stop after this many batches (default 100 when --samples is not given)
    #[arg(long)]
    batches: Option<usize>,

    /// Stop once this many points have been sampled
    #[arg(long)]
    samples: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        let max_batches = match (self.batches, self.samples) {
            (None, None) => Some(DEFAULT_MAX_BATCHES),
            (batches, _) => batches,
        };

        SessionConfig {
            batch_size: self.batch_size,
            interval: Duration::from_millis(self.interval_ms),
            max_batches,
            max_samples: self.samples,
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let session = Session::new(args.session_config())?;
    let mut accumulator = Accumulator::new(AccumulatorConfig { rng_seed: args.seed });

    info!(
        "Starting sampling run (seed={}, batch_size={}, interval={}ms)",
        args.seed, args.batch_size, args.interval_ms
    );

    let outcome = session.run(&mut accumulator, |result| {
        debug!(
            "Points: {} | π ≈ {:.6} | Accuracy: {:.2}%",
            group_thousands(result.total_count),
            result.pi_estimate,
            result.accuracy_percent()
        );
    })?;

    info!(
        "✓ Finished {} batches in {:.2}s",
        outcome.batches_run,
        outcome.wall_time.as_secs_f64()
    );

    let report = Report::from_accumulator(&accumulator, outcome.last_batch.as_ref());
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging; RUST_LOG overrides the verbosity flag
    let level = if args.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DEFAULT_INTERVAL;

    #[test]
    fn test_default_args_bound_by_batches() {
        let args = Args::parse_from(["mcpi"]);
        let config = args.session_config();

        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE as i64);
        assert_eq!(config.max_batches, Some(DEFAULT_MAX_BATCHES));
        assert_eq!(config.max_samples, None);
        assert_eq!(config.interval, DEFAULT_INTERVAL);
    }

    #[test]
    fn test_sample_limit_alone_leaves_batches_open() {
        let args = Args::parse_from(["mcpi", "--samples", "5000", "-i", "0"]);
        let config = args.session_config();

        assert_eq!(config.max_batches, None);
        assert_eq!(config.max_samples, Some(5000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_batch_size_parses() {
        let args = Args::parse_from(["mcpi", "--batch-size", "-3"]);
        assert_eq!(args.batch_size, -3);
    }

    #[test]
    fn test_interval_default_tracks_session_default() {
        let args = Args::parse_from(["mcpi"]);
        assert_eq!(args.interval_ms, DEFAULT_INTERVAL_MS);
        assert_eq!(Duration::from_millis(args.interval_ms), DEFAULT_INTERVAL);
    }

    #[test]
    fn test_zero_batch_flag_rejected() {
        let args = Args::parse_from(["mcpi", "-i", "0", "--batches", "0"]);
        assert!(matches!(run(&args), Err(CliError::InvalidSession(_))));
    }

    #[test]
    fn test_run_unpaced() {
        let args = Args::parse_from(["mcpi", "-i", "0", "--batches", "5", "--json"]);
        assert!(run(&args).is_ok());
    }
}
