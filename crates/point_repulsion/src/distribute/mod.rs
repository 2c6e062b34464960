//! Iterative point-repulsion distribution.
//!
//! A run performs `max_iterations` passes of `max_steps` synchronous relaxation steps
//! over a working copy of the input points, optionally rescaling between passes.
//! See [`runner::PointDistributor`] for the entry point.
pub mod cancel;
pub mod config;
pub mod events;
pub mod relax;
pub mod runner;
pub mod workload;
