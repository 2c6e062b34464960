//! Geometry helpers consumed by the distributor and by callers seeding its parameters.
//!
//! - [`Bounds`]: axis-aligned bounds of a point set, recomputed on demand.
//! - [`scale_to_bounding_box`] / [`scale_uniform`]: in-place rescaling of point sets.
//! - [`median_pairwise_distance`] / [`median_size`]: statistics for default parameter seeding.
pub mod bounds;
pub mod scale;
pub mod stats;

pub use bounds::{bounds_of, Bounds};
pub use scale::{scale_to_bounding_box, scale_uniform};
pub use stats::{median, median_pairwise_distance, median_size, DEFAULT_PAIR_SAMPLE_CAP};
