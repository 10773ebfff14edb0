//! Errors that can occur while simplifying an expression.

use ariadne::{Fmt, Report, Source};
use paren_attrs::ErrorKind;
use paren_error::{ErrorKind, EXPR};
use std::{io, ops::Range};

/// An error produced while simplifying or tracing an expression, along with the text that its
/// spans point into.
///
/// Parse errors and trace errors point into the input expression, while evaluation errors point
/// into the text of the group that was being evaluated.
#[derive(Debug)]
pub struct Error {
    /// The name of the source, shown in the report.
    pub src_id: &'static str,

    /// The text that the spans of `inner` refer to.
    pub source: String,

    /// The error itself.
    pub inner: paren_error::Error,
}

impl Error {
    /// Creates an error whose spans point into the input expression.
    pub fn in_input(source: impl Into<String>, inner: paren_error::Error) -> Self {
        Self { src_id: "input", source: source.into(), inner }
    }

    /// Creates an error whose spans point into the text of an evaluated group.
    pub fn in_group(group: impl Into<String>, inner: paren_error::Error) -> Self {
        Self { src_id: "group", source: group.into(), inner }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.inner.is::<K>()
    }

    /// Returns the kind of this error as `K`, or [`None`] if it is a different kind.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.inner.downcast_ref::<K>()
    }

    /// Build a report from this error.
    pub fn build_report(&self) -> Report<(&'static str, Range<usize>)> {
        self.inner.build_report(self.src_id)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self) -> io::Result<()> {
        self.build_report().eprint((self.src_id, Source::from(self.source.as_str())))
    }
}

/// The evaluator was asked to evaluate a group that is not reducible.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot evaluate a group that is not reducible",
    labels = ["this group still contains other groups, or has fewer than two children"],
    help = "you should never see this error; please report this as a bug",
)]
pub struct NonReducibleEvaluation;

/// The evaluator returned text that cannot stand in for a group as a single atom.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the evaluator did not produce a single atom",
    labels = [format!("this group evaluated to `{}`", self.result)],
    help = format!(
        "an evaluator must return one {} with no whitespace or parentheses",
        "literal".fg(EXPR),
    ),
)]
pub struct NonAtomicResult {
    /// The text the evaluator returned.
    pub result: String,
}

/// Simplification did not finish within the allowed number of steps, or a step did not make the
/// expression smaller.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the expression did not finish simplifying",
    labels = [format!("gave up after {} step(s)", self.steps)],
    help = "the evaluator might be returning unchanged text, or the step limit is too low",
)]
pub struct NonTerminatingTrace {
    /// The number of steps that were taken before giving up.
    pub steps: usize,
}
