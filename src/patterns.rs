use std::env;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Input shapes the experiment can be run on. Values are non-negative i32.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Uniform in `0..=max_value`.
    #[default]
    Random,
    Ascending,
    Descending,
    AllEqual,
    /// Runs of random values, each run sorted ascending or descending.
    SawMixed,
    PipeOrgan,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Random,
        Pattern::Ascending,
        Pattern::Descending,
        Pattern::AllEqual,
        Pattern::SawMixed,
        Pattern::PipeOrgan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Ascending => "ascending",
            Pattern::Descending => "descending",
            Pattern::AllEqual => "all_equal",
            Pattern::SawMixed => "saw_mixed",
            Pattern::PipeOrgan => "pipe_organ",
        }
    }

    /// Generates `len` values in `0..=max_value`, taking all randomness from `rng`.
    ///
    /// Panics on a negative `max_value` for the patterns that draw random values.
    pub fn generate<R: Rng + ?Sized>(self, len: usize, max_value: i32, rng: &mut R) -> Vec<i32> {
        match self {
            Pattern::Random => random_uniform(len, max_value, rng),
            Pattern::Ascending => ascending(len, max_value),
            Pattern::Descending => descending(len, max_value),
            Pattern::AllEqual => all_equal(len, max_value),
            Pattern::SawMixed => saw_mixed(len, max_value, rng),
            Pattern::PipeOrgan => pipe_organ(len, max_value, rng),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name() == s)
            .ok_or_else(|| Error::UnknownPattern {
                name: s.to_owned(),
                expected: Pattern::ALL.map(Pattern::name).join(", "),
            })
    }
}

// --- Public ---

pub fn random_uniform<R: Rng + ?Sized>(len: usize, max_value: i32, rng: &mut R) -> Vec<i32> {
    // :.:.:.::
    let dist = Uniform::new_inclusive(0, max_value);

    (0..len).map(|_| dist.sample(rng)).collect()
}

pub fn ascending(len: usize, max_value: i32) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len).map(|i| spread(i, len, max_value)).collect()
}

pub fn descending(len: usize, max_value: i32) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len).rev().map(|i| spread(i, len, max_value)).collect()
}

pub fn all_equal(len: usize, max_value: i32) -> Vec<i32> {
    // ......
    // ::::::

    vec![max_value / 2; len]
}

pub fn saw_mixed<R: Rng + ?Sized>(len: usize, max_value: i32, rng: &mut R) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let saw_count = ((len as f64).log2().round() as usize).max(1);
    let chunk_len = (len / saw_count).max(1);

    let mut vals = random_uniform(len, max_value, rng);
    for chunk in vals.chunks_mut(chunk_len) {
        if rng.gen::<bool>() {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ<R: Rng + ?Sized>(len: usize, max_value: i32, rng: &mut R) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_uniform(len, max_value, rng);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort();
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Seed used when a run does not ask for one. Stays the same for the whole process, and can be
/// pinned with the `OVERRIDE_SEED` env var.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| seed.parse().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// --- Private ---

// Maps position `i` of `len` evenly onto `0..=max_value`, so ascending input stays in range and
// keeps distinct values while len <= max_value + 1.
fn spread(i: usize, len: usize, max_value: i32) -> i32 {
    let max_value = max_value.max(0);
    if len <= max_value as usize + 1 {
        ((i as u64 * max_value as u64) / (len.max(2) - 1) as u64) as i32
    } else {
        ((i as u64 * (max_value as u64 + 1)) / len as u64) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_in_range() {
        let mut rng = seeded_rng(1);

        for pattern in Pattern::ALL {
            for len in [0, 1, 2, 17, 1000] {
                let v = pattern.generate(len, 100, &mut rng);

                assert_eq!(v.len(), len, "{pattern}");
                assert!(v.iter().all(|&x| (0..=100).contains(&x)), "{pattern}");
            }
        }
    }

    #[test]
    fn ascending_and_descending_are_monotone() {
        let asc = ascending(500, 100_000);
        let desc = descending(500, 100_000);

        assert!(asc.windows(2).all(|w| w[0] < w[1]));
        assert!(desc.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(asc.first(), Some(&0));
        assert_eq!(asc.last(), Some(&100_000));
    }

    #[test]
    fn ascending_more_values_than_range() {
        let asc = ascending(1000, 9);

        assert!(asc.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(asc.last(), Some(&9));
    }

    #[test]
    fn same_seed_same_input() {
        for pattern in Pattern::ALL {
            let a = pattern.generate(300, 1000, &mut seeded_rng(42));
            let b = pattern.generate(300, 1000, &mut seeded_rng(42));

            assert_eq!(a, b);
        }
    }

    #[test]
    fn parse_names() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>().unwrap(), pattern);
        }

        let err = "zigzag".parse::<Pattern>().unwrap_err();
        assert!(err.to_string().contains("all_equal"));
    }

    #[test]
    fn fixed_seed() {
        assert_eq!(random_init_seed(), random_init_seed());
    }
}
