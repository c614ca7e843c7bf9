// Brown noise generator
// Renders brown noise, low-pass filters it and writes a mono 16-bit WAV file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use brownian::{NoiseConfig, Pipeline, Reflection};

/// Brown noise generator
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sample rate in Hz
    sample_rate: u32,

    /// Duration in seconds
    duration: u32,

    /// Output file path (.wav)
    #[arg(value_name = "FILE")]
    output_file: PathBuf,

    /// Low-pass cutoff frequency in Hz (must be below half the sample rate)
    #[arg(short, long, default_value_t = brownian::config::DEFAULT_CUTOFF)]
    cutoff: f64,

    /// Butterworth filter order
    #[arg(short, long, default_value_t = brownian::config::DEFAULT_ORDER)]
    order: usize,

    /// Skip the low-pass filter
    #[arg(long)]
    no_filter: bool,

    /// Also write the unfiltered brown noise to this file
    #[arg(long, value_name = "FILE")]
    raw_output: Option<PathBuf>,

    /// Seed for a reproducible rendering
    #[arg(long)]
    seed: Option<u64>,

    /// How the random walk is kept inside [-1, 1]
    #[arg(long, value_enum, default_value_t = Reflection::Wrap)]
    reflection: Reflection,

    /// Log debug details
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> NoiseConfig {
        NoiseConfig {
            sample_rate: self.sample_rate,
            duration: self.duration,
            cutoff: self.cutoff,
            order: self.order,
            filter: !self.no_filter,
            reflection: self.reflection,
            seed: self.seed,
            output: self.output_file,
            raw_output: self.raw_output,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    );

    let config = args.into_config();
    let pipeline = Pipeline::new(config).context("invalid noise settings")?;
    let report = pipeline.run().context("failed to render noise")?;

    if let Some(raw) = &report.raw_output {
        println!("Unfiltered noise saved to: {}", raw.display());
    }
    println!(
        "Brown noise ({} samples at {} Hz) saved to: {} in {:?}",
        report.num_samples,
        report.sample_rate,
        report.output.display(),
        report.total_time()
    );

    Ok(())
}
