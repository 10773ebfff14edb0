//! Destinations for the steps of a trace.

/// Receives each step of a trace as soon as it is recorded.
///
/// Pass `&mut ()` to discard the steps and keep only the answer, or a `Vec` to keep all of them.
pub trait StepCollector<S> {
    /// Receives the next step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
