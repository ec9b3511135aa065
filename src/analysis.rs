//! The theoretical side of the comparison, printed next to the measurements.

use std::fmt;

/// Fixed summary of quicksort's time and space complexity.
#[derive(Copy, Clone, Debug, Default)]
pub struct ComplexityAnalysis;

impl fmt::Display for ComplexityAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== TIME COMPLEXITY ANALYSIS =====")?;
        writeln!(f, "Best Case: O(n log n)  -> When pivot splits array evenly")?;
        writeln!(f, "Average Case: O(n log n) -> On average, good pivot selection")?;
        writeln!(
            f,
            "Worst Case: O(n^2) -> When pivot always smallest/largest (e.g., sorted input)"
        )?;
        writeln!(f)?;
        writeln!(f, "===== SPACE COMPLEXITY =====")?;
        writeln!(f, "Space: O(log n) recursion depth on average, O(n) in the worst case")?;
        writeln!(f, "Each level copies its partitions, O(n) extra memory per level")?;
        writeln!(f)?;
        writeln!(f, "===== RANDOMIZED QUICKSORT ADVANTAGE =====")?;
        writeln!(
            f,
            "Randomization reduces the chance of worst-case partitioning by ensuring pivot choice is random."
        )
    }
}

/// Comparisons the fixed-pivot sort makes on sorted or all-equal input of length `n`.
pub fn worst_case_comparisons(n: u64) -> u64 {
    n * n.saturating_sub(1) / 2
}

/// Expected comparisons of the randomized sort on `n` distinct values, `2(n+1)H(n) - 4n`.
pub fn expected_comparisons(n: u64) -> f64 {
    let harmonic: f64 = (1..=n).map(|k| 1.0 / k as f64).sum();

    2.0 * (n as f64 + 1.0) * harmonic - 4.0 * n as f64
}
