//! High-level runner executing relaxation passes over a point set.
use glam::DVec2;
use tracing::{debug, info, warn};

use crate::distribute::cancel::CancelToken;
use crate::distribute::config::{DistributionConfig, Rescale};
use crate::distribute::events::{
    DistributeEvent, DistributeEventKind, EventSink, ProgressSink, RunSummary,
};
use crate::distribute::relax::{ForceParams, Relaxation};
use crate::distribute::workload::{Workload, WorkloadLevel};
use crate::error::{Error, Result};
use crate::geometry::{scale_to_bounding_box, scale_uniform, Bounds};
use crate::items::{apply_translations, centers, translations, Distributable};

/// Spreads apart point sets according to a [`DistributionConfig`].
///
/// The distributor never mutates the caller's points; every run works on its own
/// copy and returns a new set, index-aligned with the input.
#[derive(Debug, Clone)]
pub struct PointDistributor {
    /// Configuration applied to every run of this distributor.
    pub config: DistributionConfig,
}

impl PointDistributor {
    pub fn try_new(config: DistributionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: DistributionConfig) -> Self {
        debug_assert!(config.max_steps >= 1, "max_steps must be >= 1");
        debug_assert!(config.max_iterations >= 1, "max_iterations must be >= 1");

        Self { config }
    }

    /// Projected work for a run over `point_count` points.
    pub fn workload(&self, point_count: usize) -> Workload {
        Workload::estimate(point_count, &self.config)
    }

    /// Runs the distribution, returning the moved points.
    pub fn distribute(&self, points: &[DVec2]) -> Result<Vec<DVec2>> {
        run_with_events(points, &self.config, &mut (), None)
    }

    /// Runs the distribution, reporting `(step, total_steps)` at the configured interval.
    pub fn distribute_with_progress<F>(
        &self,
        points: &[DVec2],
        on_progress: F,
    ) -> Result<Vec<DVec2>>
    where
        F: FnMut(usize, usize),
    {
        distribute_with_progress(points, &self.config, on_progress)
    }

    pub fn distribute_with_events(
        &self,
        points: &[DVec2],
        sink: &mut dyn EventSink,
    ) -> Result<Vec<DVec2>> {
        run_with_events(points, &self.config, sink, None)
    }

    /// Runs the distribution, checking `cancel` once before every step.
    pub fn distribute_with_cancel(
        &self,
        points: &[DVec2],
        sink: &mut dyn EventSink,
        cancel: &CancelToken,
    ) -> Result<Vec<DVec2>> {
        run_with_events(points, &self.config, sink, Some(cancel))
    }

    /// Distributes the centers of `items` and translates each item by its delta.
    ///
    /// Returns the applied translations, index-aligned with `items`. Items are left
    /// untouched when the run fails.
    pub fn distribute_items<T: Distributable>(&self, items: &mut [T]) -> Result<Vec<DVec2>> {
        let original = centers(items);
        let distributed = self.distribute(&original)?;
        let deltas = translations(&original, &distributed)?;
        apply_translations(items, &deltas)?;
        Ok(deltas)
    }
}

/// Runs one distribution with `config`, returning the moved points.
pub fn distribute(points: &[DVec2], config: &DistributionConfig) -> Result<Vec<DVec2>> {
    run_with_events(points, config, &mut (), None)
}

/// Runs one distribution, reporting `(step, total_steps)` at the configured interval.
pub fn distribute_with_progress<F>(
    points: &[DVec2],
    config: &DistributionConfig,
    on_progress: F,
) -> Result<Vec<DVec2>>
where
    F: FnMut(usize, usize),
{
    let mut sink = ProgressSink::new(on_progress);
    run_with_events(points, config, &mut sink, None)
}

fn run_with_events(
    points: &[DVec2],
    config: &DistributionConfig,
    sink: &mut dyn EventSink,
    cancel: Option<&CancelToken>,
) -> Result<Vec<DVec2>> {
    config.validate()?;
    let Some(original_bounds) = Bounds::from_points(points) else {
        return Err(Error::InvalidConfig("points must not be empty".into()));
    };
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(Error::InvalidPoint { index });
    }

    let workload = Workload::estimate(points.len(), config);
    info!(
        "Distributing {} points | steps: {} | iterations: {} | projected operations: {}.",
        points.len(),
        config.max_steps,
        config.max_iterations,
        workload.operations,
    );
    if sink.wants(DistributeEventKind::RunStarted) {
        sink.send(DistributeEvent::RunStarted {
            workload,
            bounds: original_bounds,
        });
    }
    report_workload(&workload, sink);

    let params = ForceParams {
        spread: config.spread,
        damping: config.damping,
        radius: config.radius,
    };
    let rescale = config.rescale();
    let total_steps = config.total_steps();
    let interval = config.effective_progress_interval();

    let mut relax = Relaxation::new(points);
    let mut completed = 0usize;

    for iteration in 0..config.max_iterations {
        for _ in 0..config.max_steps {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                warn!(
                    "Distribution cancelled after {} of {} steps.",
                    completed, total_steps
                );
                if sink.wants(DistributeEventKind::Cancelled) {
                    sink.send(DistributeEvent::Cancelled {
                        completed_steps: completed,
                        total_steps,
                    });
                }
                return Err(Error::Cancelled {
                    completed_steps: completed,
                    total_steps,
                });
            }

            relax.step(params);
            completed += 1;

            if (completed % interval == 0 || completed == total_steps)
                && sink.wants(DistributeEventKind::StepProgress)
            {
                sink.send(DistributeEvent::StepProgress {
                    step: completed,
                    total_steps,
                });
            }
        }

        apply_rescale(relax.points_mut(), rescale, &original_bounds);

        let bounds = Bounds::from_points(relax.points()).unwrap_or(original_bounds);
        debug!(
            "Iteration {} finished | bounds: ({:.3}, {:.3}) - ({:.3}, {:.3}).",
            iteration, bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y,
        );
        if sink.wants(DistributeEventKind::IterationFinished) {
            sink.send(DistributeEvent::IterationFinished { iteration, bounds });
        }
    }

    let distributed = relax.into_points();
    let max_displacement = points
        .iter()
        .zip(&distributed)
        .map(|(a, b)| a.distance(*b))
        .fold(0.0f64, f64::max);

    let summary = RunSummary {
        point_count: distributed.len(),
        steps_run: completed,
        iterations_run: config.max_iterations,
        max_displacement,
    };
    info!(
        "Distribution finished | steps: {} | max displacement: {:.3}.",
        summary.steps_run, summary.max_displacement,
    );
    if sink.wants(DistributeEventKind::RunFinished) {
        sink.send(DistributeEvent::RunFinished { summary });
    }

    Ok(distributed)
}

fn report_workload(workload: &Workload, sink: &mut dyn EventSink) {
    let message = match workload.level() {
        WorkloadLevel::Light => return,
        WorkloadLevel::Heavy => format!(
            "Projected {} operations; this run may take a while",
            workload.operations
        ),
        WorkloadLevel::Extreme => format!(
            "Projected {} operations; this run may take a very long time",
            workload.operations
        ),
    };
    warn!("{message}.");
    if sink.wants(DistributeEventKind::Warning) {
        sink.send(DistributeEvent::Warning {
            context: "workload".into(),
            message,
        });
    }
}

fn apply_rescale(points: &mut [DVec2], rescale: Rescale, original_bounds: &Bounds) {
    match rescale {
        Rescale::KeepWithinBounds => scale_to_bounding_box(points, original_bounds),
        Rescale::Uniform { factor, fulcrum } => scale_uniform(points, factor, fulcrum),
        Rescale::None => {}
    }
}
