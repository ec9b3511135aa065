//! Renders experiment results as an input size vs time line chart.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::{Error, Result};
use crate::experiment::{Algorithm, ExperimentResults};

const CHART_SIZE: (u32, u32) = (1024, 640);

const TITLE: &str = "Performance Comparison of Deterministic vs Randomized Quicksort";

/// Writes the chart to `path`. An `.svg` extension produces SVG, anything else a bitmap in the
/// format the extension names.
pub fn draw_results(results: &ExperimentResults, path: &Path) -> Result<()> {
    if results.sizes.is_empty() || results.series.is_empty() {
        return Err(Error::NothingToPlot);
    }

    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        draw(SVGBackend::new(path, CHART_SIZE).into_drawing_area(), results)?;
    } else {
        draw(BitMapBackend::new(path, CHART_SIZE).into_drawing_area(), results)?;
    }

    info!(path = %path.display(), "wrote plot");

    Ok(())
}

/// X and y ranges that fit every point with some headroom. A run where every time rounds to zero
/// still gets a non-empty y range.
pub fn axis_ranges(results: &ExperimentResults) -> (Range<usize>, Range<f64>) {
    let max_len = results.sizes.iter().copied().max().unwrap_or(0);
    let max_secs = results
        .series
        .iter()
        .flat_map(|series| series.seconds.iter().copied())
        .filter(|secs| secs.is_finite())
        .fold(0.0f64, f64::max);

    let x_end = max_len + (max_len / 20).max(1);
    let y_end = if max_secs > 0.0 { max_secs * 1.1 } else { 1e-6 };

    (0..x_end, 0.0..y_end)
}

fn series_color(algorithm: Algorithm) -> RGBColor {
    match algorithm {
        Algorithm::Deterministic => BLUE,
        Algorithm::Randomized => RED,
    }
}

fn plot_err(err: impl std::fmt::Display) -> Error {
    Error::Plot(err.to_string())
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    results: &ExperimentResults,
) -> Result<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_range, y_range) = axis_ranges(results);

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Input Size (n)")
        .y_desc("Time (seconds)")
        .y_label_formatter(&|secs| format!("{secs:.4}"))
        .draw()
        .map_err(plot_err)?;

    for series in &results.series {
        let color = series_color(series.algorithm);
        let points = results
            .sizes
            .iter()
            .copied()
            .zip(series.seconds.iter().copied())
            .collect::<Vec<_>>();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))
            .map_err(plot_err)?
            .label(series.algorithm.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

        // Markers on every measured size.
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 4, ShapeStyle::from(&color).filled())),
            )
            .map_err(plot_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{Series, RESULTS_VERSION};
    use crate::patterns::Pattern;

    fn results(sizes: Vec<usize>, det: Vec<f64>, randomized: Vec<f64>) -> ExperimentResults {
        ExperimentResults {
            version: RESULTS_VERSION,
            seed: 0,
            pattern: Pattern::Random,
            max_value: 100,
            sizes,
            series: vec![
                Series {
                    algorithm: Algorithm::Deterministic,
                    seconds: det,
                    comparisons: None,
                },
                Series {
                    algorithm: Algorithm::Randomized,
                    seconds: randomized,
                    comparisons: None,
                },
            ],
        }
    }

    #[test]
    fn ranges_cover_points() {
        let r = results(vec![100, 10_000, 500], vec![0.1, 2.0, 0.3], vec![0.1, 0.5, 0.2]);
        let (x, y) = axis_ranges(&r);

        assert_eq!(x, 0..10_500);
        assert_eq!(y.start, 0.0);
        assert!((y.end - 2.2).abs() < 1e-9);
    }

    #[test]
    fn ranges_never_empty() {
        let r = results(vec![0], vec![0.0], vec![0.0]);
        let (x, y) = axis_ranges(&r);

        assert!(x.end > x.start);
        assert!(y.end > y.start);
    }

    #[test]
    fn nothing_to_plot() {
        let r = results(Vec::new(), Vec::new(), Vec::new());
        let dir = tempfile::tempdir().unwrap();

        let err = draw_results(&r, &dir.path().join("plot.png")).unwrap_err();

        assert!(matches!(err, Error::NothingToPlot));
        assert!(!dir.path().join("plot.png").exists());
    }

    #[test]
    fn draws_png_and_svg() {
        let config = crate::experiment::ExperimentConfig {
            sizes: vec![10, 100, 400],
            seed: Some(21),
            ..Default::default()
        };
        let results = crate::experiment::run_experiments(&config, |_| {}).unwrap();
        let dir = tempfile::tempdir().unwrap();

        for name in ["plot.png", "plot.svg"] {
            let path = dir.path().join(name);
            draw_results(&results, &path).unwrap();

            assert!(std::fs::metadata(&path).unwrap().len() > 0, "{name}");
        }

        let svg = std::fs::read_to_string(dir.path().join("plot.svg")).unwrap();
        assert!(svg.starts_with("<svg"));
    }
}
