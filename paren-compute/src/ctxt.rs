use crate::{
    eval::{Evaluator, LiteralEvaluator},
    marker::{Brackets, Marker},
};
use std::fmt;

/// The default maximum number of steps a trace may take before it is considered stuck.
pub const DEFAULT_MAX_STEPS: usize = 1024;

/// The context used to simplify and render expressions.
///
/// A context holds the [`Evaluator`] that computes the value of each reducible group, the
/// [`Marker`] that decorates the targeted group when rendering, and the maximum number of steps a
/// trace may take.
///
/// The default context evaluates with [`LiteralEvaluator`] and annotates with [`Brackets`].
pub struct Ctxt {
    /// Computes the value of a reducible group.
    evaluator: Box<dyn Evaluator>,

    /// Decorates the targeted group.
    marker: Box<dyn Marker>,

    /// The maximum number of steps a trace may take.
    max_steps: usize,
}

impl Ctxt {
    /// Creates a new context with the given evaluator, and default settings for the rest.
    pub fn new(evaluator: impl Evaluator + 'static) -> Self {
        Self {
            evaluator: Box::new(evaluator),
            marker: Box::new(Brackets),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Replaces the evaluator.
    pub fn with_evaluator(mut self, evaluator: impl Evaluator + 'static) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Replaces the marker.
    pub fn with_marker(mut self, marker: impl Marker + 'static) -> Self {
        self.marker = Box::new(marker);
        self
    }

    /// Sets the maximum number of steps a trace may take.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Returns the evaluator.
    pub fn evaluator(&self) -> &dyn Evaluator {
        self.evaluator.as_ref()
    }

    /// Returns the marker.
    pub fn marker(&self) -> &dyn Marker {
        self.marker.as_ref()
    }

    /// Returns the maximum number of steps a trace may take.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

impl Default for Ctxt {
    fn default() -> Self {
        Self::new(LiteralEvaluator)
    }
}

impl fmt::Debug for Ctxt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Ctxt")
            .field("max_steps", &self.max_steps)
            .finish_non_exhaustive()
    }
}
