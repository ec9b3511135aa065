use rand::Rng;

/// A sort under test. Implementations return a new sorted `Vec` and leave the input untouched.
pub trait Sort {
    fn name() -> String;

    /// Sorts using `rng` for every random decision the implementation makes. Implementations that
    /// make no random decisions ignore it.
    fn sort_with_rng<T, R>(v: &[T], rng: &mut R) -> Vec<T>
    where
        T: Ord + Clone,
        R: Rng + ?Sized;

    fn sort<T>(v: &[T]) -> Vec<T>
    where
        T: Ord + Clone,
    {
        Self::sort_with_rng(v, &mut rand::thread_rng())
    }
}

pub mod patterns;
