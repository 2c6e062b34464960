#![forbid(unsafe_code)]
//! point_repulsion: Iterative point-repulsion distribution for spreading apart overlapping items.
//!
//! Modules:
//! - geometry: bounds, per-axis and uniform rescaling, median statistics
//! - distribute: configuration, relaxation steps, workload estimates, events, runner
//! - items: adapters between caller-defined items and point sets (seeding, translation deltas)
//!
//! For examples, see the `point_repulsion_examples` crate.
pub mod distribute;
pub mod error;
pub mod geometry;
pub mod items;

/// A point in the shared 2-D coordinate space.
pub type Point = glam::DVec2;

/// Convenient re-exports for common types. Import with `use point_repulsion::prelude::*;`.
pub mod prelude {
    pub use crate::distribute::cancel::CancelToken;
    pub use crate::distribute::config::{DistributionConfig, Rescale};
    pub use crate::distribute::events::{
        DistributeEvent, DistributeEventKind, EventSink, FnSink, MultiSink, ProgressSink,
        RunSummary, VecSink,
    };
    pub use crate::distribute::runner::{
        distribute, distribute_with_progress, PointDistributor,
    };
    pub use crate::distribute::workload::{Workload, WorkloadLevel};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{
        bounds_of, median, median_pairwise_distance, median_size, scale_to_bounding_box,
        scale_uniform, Bounds, DEFAULT_PAIR_SAMPLE_CAP,
    };
    pub use crate::items::{
        apply_translations, centers, seed_params, sizes, translations, Distributable, ItemFrame,
        SeededParams,
    };
    pub use crate::Point;
}
