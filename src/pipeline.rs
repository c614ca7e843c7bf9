//! White noise → brown noise → low-pass → WAV.

use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::NoiseConfig;
use crate::error::Result;
use crate::export;
use crate::filters::Butterworth;
use crate::noise::{integrate_brown, white_noise};

/// A processing step, used to label timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    White,
    Brown,
    Filter,
    Export,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::White => "white noise",
            Stage::Brown => "brown noise",
            Stage::Filter => "low-pass filter",
            Stage::Export => "export",
        };
        f.write_str(name)
    }
}

/// The buffers produced by one rendering.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub white: Vec<f64>,
    pub brown: Vec<f64>,
    /// `None` when filtering is disabled
    pub filtered: Option<Vec<f64>>,
}

impl Rendering {
    /// The signal that goes to the main output file.
    pub fn output(&self) -> &[f64] {
        self.filtered.as_deref().unwrap_or(&self.brown)
    }
}

/// What a completed run wrote.
#[derive(Debug, Clone)]
pub struct Report {
    pub output: PathBuf,
    pub raw_output: Option<PathBuf>,
    pub sample_rate: u32,
    pub num_samples: usize,
    pub timings: Vec<(Stage, Duration)>,
}

impl Report {
    /// Wall time across all stages.
    pub fn total_time(&self) -> Duration {
        self.timings.iter().map(|(_, elapsed)| *elapsed).sum()
    }
}

/// A validated noise rendering job.
///
/// # Examples
///
/// ```no_run
/// use brownian::{NoiseConfig, Pipeline};
///
/// let config = NoiseConfig::new(44100, 1, "brown_noise.wav").with_seed(1);
/// let report = Pipeline::new(config)?.run()?;
/// println!("wrote {}", report.output.display());
/// # Ok::<(), brownian::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: NoiseConfig,
    num_samples: usize,
    filter: Option<Butterworth>,
}

impl Pipeline {
    /// Validates `config` and designs the filter.
    ///
    /// Nothing is allocated for the sample buffers until `render` or `run`.
    pub fn new(config: NoiseConfig) -> Result<Self> {
        let num_samples = config.num_samples()?;
        let filter = if config.filter {
            Some(config.design_filter()?)
        } else {
            None
        };
        Ok(Self {
            config,
            num_samples,
            filter,
        })
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Runs the three signal stages with the given generator.
    pub fn render<R: Rng>(&self, rng: &mut R) -> Rendering {
        self.render_timed(rng, &mut Vec::new())
    }

    fn render_timed<R: Rng>(&self, rng: &mut R, timings: &mut Vec<(Stage, Duration)>) -> Rendering {
        let white = timed(Stage::White, timings, || white_noise(rng, self.num_samples));
        let brown = timed(Stage::Brown, timings, || {
            integrate_brown(&white, self.config.reflection)
        });
        let filtered = self
            .filter
            .as_ref()
            .map(|filter| timed(Stage::Filter, timings, || filter.filter(&brown)));

        Rendering {
            white,
            brown,
            filtered,
        }
    }

    /// Renders and saves, seeding the generator from the configuration.
    pub fn run(&self) -> Result<Report> {
        let mut rng = match self.config.seed {
            Some(seed) => {
                log::debug!("seeding generator with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        self.run_with(&mut rng)
    }

    /// Renders with `rng` and saves the configured files.
    pub fn run_with<R: Rng>(&self, rng: &mut R) -> Result<Report> {
        let config = &self.config;
        log::info!(
            "rendering {} s of brown noise at {} Hz ({} samples)",
            config.duration,
            config.sample_rate,
            self.num_samples
        );

        let mut timings = Vec::with_capacity(4);
        let rendering = self.render_timed(rng, &mut timings);

        let started = Instant::now();
        export::export(&config.output, config.sample_rate, rendering.output())?;
        if let Some(raw) = &config.raw_output {
            export::export(raw, config.sample_rate, &rendering.brown)?;
        }
        let elapsed = started.elapsed();
        log::info!("{} finished in {:?}", Stage::Export, elapsed);
        timings.push((Stage::Export, elapsed));

        Ok(Report {
            output: config.output.clone(),
            raw_output: config.raw_output.clone(),
            sample_rate: config.sample_rate,
            num_samples: self.num_samples,
            timings,
        })
    }
}

fn timed<T>(stage: Stage, timings: &mut Vec<(Stage, Duration)>, f: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let value = f();
    let elapsed = started.elapsed();
    log::info!("{} finished in {:?}", stage, elapsed);
    timings.push((stage, elapsed));
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::noise::Reflection;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_render_lengths() {
        let pipeline = Pipeline::new(NoiseConfig::new(44100, 1, "unused.wav")).unwrap();
        let rendering = pipeline.render(&mut seeded(1));

        assert_eq!(rendering.white.len(), 44100);
        assert_eq!(rendering.brown.len(), 44100);
        assert_eq!(rendering.filtered.as_ref().map(Vec::len), Some(44100));
        assert_eq!(rendering.brown[0], rendering.white[0]);
    }

    #[test]
    fn test_render_without_filter_outputs_brown() {
        let config = NoiseConfig::new(8000, 1, "unused.wav").with_filter(false);
        let rendering = Pipeline::new(config).unwrap().render(&mut seeded(2));
        assert!(rendering.filtered.is_none());
        assert_eq!(rendering.output(), rendering.brown.as_slice());
    }

    #[test]
    fn test_render_is_reproducible() {
        let config = NoiseConfig::new(8000, 1, "unused.wav").with_cutoff(1000.0);
        let pipeline = Pipeline::new(config).unwrap();
        let a = pipeline.render(&mut seeded(9));
        let b = pipeline.render(&mut seeded(9));
        assert_eq!(a.output(), b.output());
    }

    #[test]
    fn test_reflection_is_passed_through() {
        let config = NoiseConfig::new(8000, 1, "unused.wav")
            .with_cutoff(1000.0)
            .with_reflection(Reflection::Clamp);
        let pipeline = Pipeline::new(config).unwrap();
        let rendering = pipeline.render(&mut seeded(4));
        assert_eq!(
            rendering.brown,
            integrate_brown(&rendering.white, Reflection::Clamp)
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(matches!(
            Pipeline::new(NoiseConfig::new(44100, 0, "unused.wav")),
            Err(Error::InvalidParameters(_))
        ));
        assert!(matches!(
            Pipeline::new(NoiseConfig::new(44100, 1, "unused.wav").with_cutoff(22050.0)),
            Err(Error::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_run_records_every_stage() {
        let dir = tempfile::tempdir().unwrap();
        let config = NoiseConfig::new(8000, 1, dir.path().join("out.wav"))
            .with_cutoff(1000.0)
            .with_seed(3);
        let report = Pipeline::new(config).unwrap().run().unwrap();

        let stages: Vec<Stage> = report.timings.iter().map(|(stage, _)| *stage).collect();
        assert_eq!(
            stages,
            vec![Stage::White, Stage::Brown, Stage::Filter, Stage::Export]
        );
        assert_eq!(report.num_samples, 8000);
        assert!(report.total_time() >= report.timings[0].1);
        assert!(report.output.exists());
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Filter.to_string(), "low-pass filter");
        assert_eq!(Stage::White.to_string(), "white noise");
    }
}
