//! Parameters controlling a single distribution run.
use glam::DVec2;

use crate::error::{Error, Result};
use crate::items::SeededParams;

/// Configuration for one distribution run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DistributionConfig {
    /// Repulsive force magnitude scale.
    pub spread: f64,
    /// Fraction of the computed force applied per step.
    pub damping: f64,
    /// Interaction cutoff; pairs at or beyond this distance exert no force.
    pub radius: f64,
    /// Relaxation steps per iteration.
    pub max_steps: usize,
    /// Number of full relaxation passes.
    pub max_iterations: usize,
    /// Uniform post-pass scale, used when `keep_within_bounds` is false.
    pub scale_factor: f64,
    /// Rescale after each iteration to the bounds of the original input.
    pub keep_within_bounds: bool,
    /// Fulcrum for uniform scaling. Defaults to the bounds center of the scaled set.
    pub center: Option<DVec2>,
    /// Steps between progress events. Defaults to `max(1, max_steps / 10)`.
    pub progress_interval: Option<usize>,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            spread: 1.0,
            damping: 0.5,
            radius: 1.0,
            max_steps: 50,
            max_iterations: 1,
            scale_factor: 1.0,
            keep_within_bounds: false,
            center: None,
            progress_interval: None,
        }
    }
}

/// Action applied to the point set after each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rescale {
    /// Map the set onto the bounds of the original input.
    KeepWithinBounds,
    /// Scale uniformly by `factor` about `fulcrum` (bounds center when `None`).
    Uniform { factor: f64, fulcrum: Option<DVec2> },
    /// Leave the set as relaxed.
    None,
}

impl DistributionConfig {
    /// Creates a configuration with the given force parameters and defaults elsewhere.
    pub fn new(spread: f64, damping: f64, radius: f64) -> Self {
        Self {
            spread,
            damping,
            radius,
            ..Default::default()
        }
    }

    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_keep_within_bounds(mut self, keep_within_bounds: bool) -> Self {
        self.keep_within_bounds = keep_within_bounds;
        self
    }

    pub fn with_center(mut self, center: DVec2) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_progress_interval(mut self, progress_interval: usize) -> Self {
        self.progress_interval = Some(progress_interval);
        self
    }

    /// Overrides `spread` and `radius` with whichever seeded values are present.
    pub fn with_seeded(mut self, seeded: &SeededParams) -> Self {
        if let Some(spread) = seeded.spread {
            self.spread = spread;
        }
        if let Some(radius) = seeded.radius {
            self.radius = radius;
        }
        self
    }

    /// Total relaxation steps across all iterations.
    pub fn total_steps(&self) -> usize {
        self.max_steps.saturating_mul(self.max_iterations)
    }

    /// Steps between progress events.
    pub fn effective_progress_interval(&self) -> usize {
        self.progress_interval
            .unwrap_or_else(|| (self.max_steps / 10).max(1))
    }

    /// Post-iteration action. Bounds preservation takes precedence over uniform scaling.
    pub fn rescale(&self) -> Rescale {
        if self.keep_within_bounds {
            Rescale::KeepWithinBounds
        } else if self.scale_factor != 1.0 {
            Rescale::Uniform {
                factor: self.scale_factor,
                fulcrum: self.center,
            }
        } else {
            Rescale::None
        }
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Only structural problems are rejected. Values such as `damping > 1` or a
    /// non-positive `radius` are accepted as given and never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.max_steps < 1 {
            return Err(Error::InvalidConfig("max_steps must be >= 1".into()));
        }
        if self.max_iterations < 1 {
            return Err(Error::InvalidConfig("max_iterations must be >= 1".into()));
        }
        for (name, value) in [
            ("spread", self.spread),
            ("damping", self.damping),
            ("radius", self.radius),
            ("scale_factor", self.scale_factor),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if let Some(center) = self.center {
            if !center.is_finite() {
                return Err(Error::InvalidConfig("center must be finite".into()));
            }
        }
        if self.progress_interval == Some(0) {
            return Err(Error::InvalidConfig(
                "progress_interval must be >= 1 when set".into(),
            ));
        }

        Ok(())
    }
}
