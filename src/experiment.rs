//! Times both sorts over a growing series of input sizes.

use std::fmt;
use std::fs;
use std::hint::black_box;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::measure::{measure_duration, median, TimingSample};
use crate::patterns::{self, Pattern};
use crate::quicksort::{fixed_pivot, random_pivot};

/// By versioning the results files, we can catch compatibility issues early.
pub const RESULTS_VERSION: usize = 1;

pub const DEFAULT_SIZES: [usize; 5] = [100, 500, 1_000, 5_000, 10_000];

pub const DEFAULT_MAX_VALUE: i32 = 100_000;

// Pivot seeds come from their own stream, so the knobs that change how often pivots are drawn
// never shift the generated inputs.
const PIVOT_SEED_MASK: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    /// Last element as pivot.
    Deterministic,
    /// Uniformly random pivot.
    Randomized,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Deterministic, Algorithm::Randomized];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Deterministic => "Deterministic",
            Algorithm::Randomized => "Randomized",
        }
    }

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Deterministic => "Deterministic Quicksort",
            Algorithm::Randomized => "Randomized Quicksort",
        }
    }

    pub fn sort<R: Rng + ?Sized>(self, v: &[i32], rng: &mut R) -> Vec<i32> {
        match self {
            Algorithm::Deterministic => fixed_pivot::sort(v),
            Algorithm::Randomized => random_pivot::sort_with_rng(v, rng),
        }
    }

    pub fn count_comparisons<R: Rng + ?Sized>(self, v: &[i32], rng: &mut R) -> u64 {
        match self {
            Algorithm::Deterministic => fixed_pivot::sort_counting_comparisons(v).1,
            Algorithm::Randomized => random_pivot::sort_counting_comparisons(v, rng).1,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Input lengths, run in the given order.
    pub sizes: Vec<usize>,
    /// Inputs hold values in `0..=max_value`.
    pub max_value: i32,
    pub pattern: Pattern,
    /// Timed calls per algorithm and size. The median is recorded.
    pub repetitions: usize,
    /// `None` uses the per-process seed from [`patterns::random_init_seed`].
    pub seed: Option<u64>,
    /// Also runs one untimed, instrumented sort per algorithm and size.
    pub count_comparisons: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            max_value: DEFAULT_MAX_VALUE,
            pattern: Pattern::Random,
            repetitions: 1,
            seed: None,
            count_comparisons: false,
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::NoSizes);
        }
        if self.repetitions == 0 {
            return Err(Error::ZeroRepetitions);
        }
        if self.max_value < 0 {
            return Err(Error::NegativeMaxValue(self.max_value));
        }

        Ok(())
    }
}

/// What was measured for one input size, handed to the progress callback.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeReport {
    pub len: usize,
    /// One per algorithm, in [`Algorithm::ALL`] order.
    pub timings: Vec<TimingSample>,
    /// Filled when comparison counting is enabled, in [`Algorithm::ALL`] order.
    pub comparisons: Option<Vec<u64>>,
}

impl SizeReport {
    pub fn secs(&self, algorithm: Algorithm) -> Option<f64> {
        self.timings
            .iter()
            .find(|sample| sample.algorithm == algorithm)
            .map(TimingSample::secs)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub algorithm: Algorithm,
    /// Parallel to [`ExperimentResults::sizes`].
    pub seconds: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<Vec<u64>>,
}

/// The size → time series mapping for every algorithm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResults {
    pub version: usize,
    pub seed: u64,
    pub pattern: Pattern,
    pub max_value: i32,
    pub sizes: Vec<usize>,
    pub series: Vec<Series>,
}

impl ExperimentResults {
    fn new(config: &ExperimentConfig, seed: u64) -> Self {
        Self {
            version: RESULTS_VERSION,
            seed,
            pattern: config.pattern,
            max_value: config.max_value,
            sizes: Vec::with_capacity(config.sizes.len()),
            series: Algorithm::ALL
                .iter()
                .map(|&algorithm| Series {
                    algorithm,
                    seconds: Vec::with_capacity(config.sizes.len()),
                    comparisons: config.count_comparisons.then(Vec::new),
                })
                .collect(),
        }
    }

    fn push(&mut self, report: &SizeReport) {
        self.sizes.push(report.len);

        for (i, series) in self.series.iter_mut().enumerate() {
            series.seconds.push(report.timings[i].secs());

            if let (Some(counts), Some(measured)) = (&mut series.comparisons, &report.comparisons) {
                counts.push(measured[i]);
            }
        }
    }

    pub fn series(&self, algorithm: Algorithm) -> Option<&Series> {
        self.series
            .iter()
            .find(|series| series.algorithm == algorithm)
    }

    /// Deterministic time divided by randomized time, per size. Above 1.0 means the randomized
    /// pivot was faster.
    pub fn speedup(&self) -> Vec<(usize, f64)> {
        let (Some(det), Some(randomized)) = (
            self.series(Algorithm::Deterministic),
            self.series(Algorithm::Randomized),
        ) else {
            return Vec::new();
        };

        self.sizes
            .iter()
            .zip(det.seconds.iter().zip(&randomized.seconds))
            .map(|(&len, (&d, &r))| (len, if r > 0.0 { d / r } else { f64::NAN }))
            .collect()
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), "wrote results");

        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self> {
        let results: Self = serde_json::from_str(&fs::read_to_string(path)?)?;

        if results.version != RESULTS_VERSION {
            return Err(Error::VersionMismatch {
                found: results.version,
                expected: RESULTS_VERSION,
            });
        }

        Ok(results)
    }
}

/// Handed to the progress callback of [`run_experiments`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Progress<'a> {
    /// The input of this length is generated, timing starts next.
    Started(usize),
    Finished(&'a SizeReport),
}

/// Runs the experiment described by `config`, reporting to `on_progress` before and after every
/// input size.
///
/// Each size gets one generated input. Every algorithm sorts its own copy of it, and only the
/// sort call is inside the timed window. For a given seed the inputs do not depend on
/// `repetitions` or `count_comparisons`.
pub fn run_experiments(
    config: &ExperimentConfig,
    mut on_progress: impl FnMut(Progress<'_>),
) -> Result<ExperimentResults> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(patterns::random_init_seed);
    let mut input_rng = patterns::seeded_rng(seed);
    let mut pivot_seeds = patterns::seeded_rng(seed ^ PIVOT_SEED_MASK);
    let mut results = ExperimentResults::new(config, seed);

    info!(
        seed,
        pattern = %config.pattern,
        sizes = ?config.sizes,
        repetitions = config.repetitions,
        "starting experiment"
    );

    for &len in &config.sizes {
        let input = config.pattern.generate(len, config.max_value, &mut input_rng);
        let mut timing_rng = patterns::seeded_rng(pivot_seeds.gen());
        let mut counting_rng = patterns::seeded_rng(pivot_seeds.gen());

        on_progress(Progress::Started(len));

        let timings = Algorithm::ALL
            .iter()
            .map(|&algorithm| time_sort(algorithm, &input, config.repetitions, &mut timing_rng))
            .collect::<Vec<_>>();

        let comparisons = config.count_comparisons.then(|| {
            Algorithm::ALL
                .iter()
                .map(|&algorithm| algorithm.count_comparisons(&input, &mut counting_rng))
                .collect::<Vec<_>>()
        });

        let report = SizeReport {
            len,
            timings,
            comparisons,
        };

        info!(len, comparisons = ?report.comparisons, "finished size");
        on_progress(Progress::Finished(&report));
        results.push(&report);
    }

    Ok(results)
}

fn time_sort<R: Rng + ?Sized>(
    algorithm: Algorithm,
    input: &[i32],
    repetitions: usize,
    rng: &mut R,
) -> TimingSample {
    let mut durations = Vec::with_capacity(repetitions);

    for _ in 0..repetitions {
        let test_data = input.to_vec();

        let duration = measure_duration(|| {
            black_box(algorithm.sort(black_box(&test_data), rng));
        });
        debug!(%algorithm, len = input.len(), ?duration, "sample");

        durations.push(duration);
    }

    TimingSample {
        algorithm,
        len: input.len(),
        // validate() guarantees at least one repetition.
        elapsed: median(&mut durations).unwrap_or_default(),
    }
}
