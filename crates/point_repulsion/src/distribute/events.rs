//! Event types and sinks for observing distribution runs.
//!
//! This module defines [`DistributeEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while executing a run via
//! [`crate::distribute::runner::PointDistributor`] or [`crate::distribute::runner::distribute`].
use crate::distribute::workload::Workload;
use crate::geometry::Bounds;

/// Describes events emitted by distribution runs.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum DistributeEvent {
    /// Emitted once validation passed and before the first step.
    RunStarted {
        /// Projected work for this run.
        workload: Workload,
        /// Bounds of the input point set.
        bounds: Bounds,
    },

    /// Emitted every `progress_interval` steps and after the final step.
    StepProgress {
        /// Number of steps completed so far, counted across iterations.
        step: usize,
        /// Total steps of the run.
        total_steps: usize,
    },

    /// Emitted after an iteration finished, including its rescale.
    IterationFinished {
        /// Zero-based iteration index.
        iteration: usize,
        /// Bounds of the point set after the rescale.
        bounds: Bounds,
    },

    /// Non-fatal warning, e.g. a heavy projected workload.
    Warning {
        /// Context string.
        context: String,
        /// Human-readable message.
        message: String,
    },

    /// Emitted when a run stopped because its cancel token was triggered.
    Cancelled {
        completed_steps: usize,
        total_steps: usize,
    },

    /// Emitted when the run completed.
    RunFinished {
        /// Summary of the run.
        summary: RunSummary,
    },
}

/// Discriminant of [`DistributeEvent`], used by sinks to filter what they receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributeEventKind {
    RunStarted,
    StepProgress,
    IterationFinished,
    Warning,
    Cancelled,
    RunFinished,
}

impl DistributeEvent {
    pub fn kind(&self) -> DistributeEventKind {
        match self {
            DistributeEvent::RunStarted { .. } => DistributeEventKind::RunStarted,
            DistributeEvent::StepProgress { .. } => DistributeEventKind::StepProgress,
            DistributeEvent::IterationFinished { .. } => DistributeEventKind::IterationFinished,
            DistributeEvent::Warning { .. } => DistributeEventKind::Warning,
            DistributeEvent::Cancelled { .. } => DistributeEventKind::Cancelled,
            DistributeEvent::RunFinished { .. } => DistributeEventKind::RunFinished,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Number of points distributed.
    pub point_count: usize,
    /// Relaxation steps executed.
    pub steps_run: usize,
    /// Iterations executed.
    pub iterations_run: usize,
    /// Largest distance any point moved from its input position.
    pub max_displacement: f64,
}

/// A generic event sink that accepts [`DistributeEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: DistributeEvent);

    /// Returns false for kinds the sink ignores, letting the runner skip building them.
    fn wants(&self, _kind: DistributeEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: DistributeEvent) {}

    #[inline]
    fn wants(&self, _kind: DistributeEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(DistributeEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(DistributeEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(DistributeEvent),
{
    #[inline]
    fn send(&mut self, event: DistributeEvent) {
        (self.f)(event);
    }
}

/// Adapts a `(step, total_steps)` progress callback into an [`EventSink`].
///
/// Only [`DistributeEvent::StepProgress`] is forwarded.
pub struct ProgressSink<F>
where
    F: FnMut(usize, usize),
{
    on_progress: F,
}

impl<F> ProgressSink<F>
where
    F: FnMut(usize, usize),
{
    pub fn new(on_progress: F) -> Self {
        Self { on_progress }
    }
}

impl<F> EventSink for ProgressSink<F>
where
    F: FnMut(usize, usize),
{
    fn send(&mut self, event: DistributeEvent) {
        if let DistributeEvent::StepProgress { step, total_steps } = event {
            (self.on_progress)(step, total_steps);
        }
    }

    fn wants(&self, kind: DistributeEventKind) -> bool {
        kind == DistributeEventKind::StepProgress
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<DistributeEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<DistributeEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[DistributeEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: DistributeEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: DistributeEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }

    fn wants(&self, kind: DistributeEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
