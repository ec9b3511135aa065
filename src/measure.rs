//! This module implements functionality for measuring the duration of a single sort call.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::experiment::Algorithm;

/// One timed sort call, or the median of several.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    pub algorithm: Algorithm,
    pub len: usize,
    pub elapsed: Duration,
}

impl TimingSample {
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Measures the wall-clock time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration(test_fn: impl FnOnce()) -> Duration {
    let start = Instant::now();

    test_fn();

    start.elapsed()
}

/// Returns the median duration, the lower one of the two middle values for an even count.
pub fn median(durations: &mut [Duration]) -> Option<Duration> {
    if durations.is_empty() {
        return None;
    }

    durations.sort_unstable();

    Some(durations[(durations.len() - 1) / 2])
}
