use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pivot_sort_comp::analysis::{self, ComplexityAnalysis};
use pivot_sort_comp::experiment::{self, Algorithm, ExperimentConfig, Progress, SizeReport};
use pivot_sort_comp::patterns::Pattern;
use pivot_sort_comp::plot;

#[derive(Parser, Debug)]
#[command(name = "pivot-sort-comp")]
#[command(about = "Compare fixed-pivot and randomized-pivot quicksort", long_about = None)]
struct Args {
    /// Input sizes to time, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = experiment::DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Inputs hold values in 0..=max-value
    #[arg(long, default_value_t = experiment::DEFAULT_MAX_VALUE)]
    max_value: i32,

    /// Input shape: random, ascending, descending, all_equal, saw_mixed, pipe_organ
    #[arg(long, default_value = "random")]
    pattern: Pattern,

    /// Timed runs per algorithm and size, the median is reported
    #[arg(long, default_value_t = 1)]
    repetitions: usize,

    /// Seed for input generation and pivot selection
    #[arg(long, env = "OVERRIDE_SEED")]
    seed: Option<u64>,

    /// Also count element comparisons, in an extra untimed run
    #[arg(long)]
    count_comparisons: bool,

    /// Where to write the chart, .svg for SVG output
    #[arg(long, default_value = "quicksort_comparison.png")]
    plot: PathBuf,

    /// Skip writing the chart
    #[arg(long)]
    no_plot: bool,

    /// Also write the results as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip the complexity summary
    #[arg(long)]
    no_analysis: bool,
}

impl Args {
    fn experiment_config(&self) -> ExperimentConfig {
        ExperimentConfig {
            sizes: self.sizes.clone(),
            max_value: self.max_value,
            pattern: self.pattern,
            repetitions: self.repetitions,
            seed: self.seed,
            count_comparisons: self.count_comparisons,
        }
    }
}

fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::Started(len) => println!("\nTesting with input size: {len}"),
        Progress::Finished(report) => print_size_report(report),
    }
}

fn print_size_report(report: &SizeReport) {
    let secs = |algorithm| report.secs(algorithm).unwrap_or(f64::NAN);
    println!(
        "Deterministic QuickSort: {:.5}s | Randomized QuickSort: {:.5}s",
        secs(Algorithm::Deterministic),
        secs(Algorithm::Randomized)
    );

    if let Some(comparisons) = &report.comparisons {
        let n = report.len as u64;
        println!(
            "Comparisons: deterministic {} | randomized {} (worst case {}, expected random {:.0})",
            comparisons[0],
            comparisons[1],
            analysis::worst_case_comparisons(n),
            analysis::expected_comparisons(n)
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.experiment_config();
    config.validate().context("invalid experiment configuration")?;

    println!("Quicksort: fixed pivot vs randomized pivot\n");

    if !args.no_analysis {
        println!("{}", ComplexityAnalysis);
    }

    let results = experiment::run_experiments(&config, print_progress)
        .context("experiment failed")?;

    println!("\nSeed: {} Pattern: {}", results.seed, results.pattern);
    for (len, speedup) in results.speedup() {
        println!("n = {len:>8}: randomized is {speedup:.2}x the speed of deterministic");
    }

    if let Some(json_path) = &args.json {
        results
            .write_json(json_path)
            .with_context(|| format!("failed to write results to {}", json_path.display()))?;
        println!("Wrote results to file: {}", json_path.display());
    }

    if !args.no_plot {
        plot::draw_results(&results, &args.plot)
            .with_context(|| format!("failed to write plot to {}", args.plot.display()))?;
        println!("Wrote plot to file: {}", args.plot.display());
    }

    Ok(())
}
