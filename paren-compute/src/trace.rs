//! Step-by-step traces of the simplification of an expression.

use crate::{
    ctxt::Ctxt,
    error::{Error, NonTerminatingTrace},
    marker::Mark,
    render::{canonical, render_marked},
    simplify::{evaluate_group, Reduction},
    step_collector::StepCollector,
};
use paren_parser::{parse, Expr};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single simplification step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceStep {
    /// The expression before the step, with the group about to be reduced marked as
    /// [`Mark::Target`].
    pub before: String,

    /// The expression after the step, with the value the group was reduced to marked as
    /// [`Mark::Result`].
    pub after: String,
}

/// The intermediate steps of a simplification, along with the expression it ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace {
    /// Every step except the last, which reduces the expression to its answer.
    pub steps: Vec<TraceStep>,

    /// The terminal expression that simplification ended with.
    pub answer: Expr,
}

/// Simplifies the expression one reducible group at a time until none remain, pushing every step
/// to the given collector (including the final one). Returns the terminal expression.
///
/// The evaluator is called exactly once per step. An error is returned if the input is malformed,
/// the evaluator fails, or the trace takes more than [`Ctxt::max_steps`] steps.
pub fn trace_with_steps(
    source: &str,
    ctxt: &Ctxt,
    steps: &mut dyn StepCollector<TraceStep>,
) -> Result<Expr, Error> {
    let mut expr = parse(source).map_err(|err| Error::in_input(source, err))?;
    let mut taken = 0;

    while let Some((path, group)) = expr.find_reducible() {
        if taken >= ctxt.max_steps() {
            return Err(non_terminating(source, taken));
        }

        let value = evaluate_group(group, ctxt)?;
        let before = render_marked(&expr, &path, &group.to_string(), Some(Mark::Target), ctxt.marker());
        let after = render_marked(&expr, &path, &value, Some(Mark::Result), ctxt.marker());
        debug!(step = taken, %before, %after, "recorded step");
        steps.push(TraceStep { before, after });

        let text = canonical(&Reduction { path, value }.apply(&expr).to_string());
        let next = parse(&text).map_err(|err| Error::in_input(text.as_str(), err))?;
        taken += 1;
        if next.node_count() >= expr.node_count() {
            return Err(non_terminating(source, taken));
        }
        expr = next;
    }

    debug!(steps = taken, answer = %expr, "finished trace");
    Ok(expr)
}

/// Simplifies the expression one reducible group at a time, returning every step except the last
/// along with the terminal expression.
///
/// The last step is withheld because it shows the reduction to the final answer itself; an
/// expression with a single reducible group therefore produces no steps.
pub fn trace(source: &str, ctxt: &Ctxt) -> Result<Trace, Error> {
    let mut steps = Vec::new();
    let answer = trace_with_steps(source, ctxt, &mut steps)?;
    steps.pop();
    Ok(Trace { steps, answer })
}

/// Returns the intermediate steps of simplifying the expression. See [`trace`].
pub fn build_trace(source: &str, ctxt: &Ctxt) -> Result<Vec<TraceStep>, Error> {
    trace(source, ctxt).map(|trace| trace.steps)
}

fn non_terminating(source: &str, steps: usize) -> Error {
    Error::in_input(source, paren_error::Error::new(
        vec![0..source.len()],
        NonTerminatingTrace { steps },
    ))
}
