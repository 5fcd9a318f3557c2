use thiserror::Error;

/// An error returned while bringing a filter to its initialized state.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The injected random source could not produce seed material.
    #[error("random source failed while drawing seeds: {0}")]
    RandomSource(#[from] rand::Error),

    /// An explicit seed list did not hold one distinct seed per hash function.
    #[error("wrong number of distinct seeds (expected {expected}, found {found})")]
    SeedCount { expected: u64, found: u64 },
}
