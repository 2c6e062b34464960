//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, invalid input points, misaligned point sets, and cancelled runs.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("point {index} has a non-finite coordinate")]
    InvalidPoint { index: usize },

    #[error("point set length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("distribution cancelled after {completed_steps} of {total_steps} steps")]
    Cancelled {
        completed_steps: usize,
        total_steps: usize,
    },
}
