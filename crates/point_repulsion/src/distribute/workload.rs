//! Up-front estimate of the work a run will perform.
//!
//! The relaxation is O(n² · steps · iterations). Callers use [`Workload::level`] to
//! decide whether to warn or ask for confirmation before starting a run; the levels
//! are advisory and never stop a run on their own.
use crate::distribute::config::DistributionConfig;

/// Operation count from which a run is reported as [`WorkloadLevel::Heavy`].
pub const HEAVY_OPERATIONS: u128 = 100_000_000;

/// Operation count from which a run is reported as [`WorkloadLevel::Extreme`].
pub const EXTREME_OPERATIONS: u128 = 1_000_000_000;

/// Advisory classification of a projected operation count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkloadLevel {
    Light,
    Heavy,
    Extreme,
}

/// Projected work for a run over `point_count` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    pub point_count: usize,
    pub max_steps: usize,
    pub max_iterations: usize,
    /// `point_count² × max_steps × max_iterations`, saturating.
    pub operations: u128,
}

impl Workload {
    pub fn estimate(point_count: usize, config: &DistributionConfig) -> Self {
        let n = point_count as u128;
        let operations = n
            .saturating_mul(n)
            .saturating_mul(config.max_steps as u128)
            .saturating_mul(config.max_iterations as u128);

        Self {
            point_count,
            max_steps: config.max_steps,
            max_iterations: config.max_iterations,
            operations,
        }
    }

    pub fn level(&self) -> WorkloadLevel {
        if self.operations >= EXTREME_OPERATIONS {
            WorkloadLevel::Extreme
        } else if self.operations >= HEAVY_OPERATIONS {
            WorkloadLevel::Heavy
        } else {
            WorkloadLevel::Light
        }
    }

    /// True when a caller should ask for explicit confirmation before running.
    pub fn requires_confirmation(&self) -> bool {
        self.level() == WorkloadLevel::Extreme
    }
}
