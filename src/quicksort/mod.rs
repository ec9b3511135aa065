pub mod fixed_pivot;
pub mod partition;
pub mod random_pivot;
