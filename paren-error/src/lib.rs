//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that attaches a kind to the regions of source it came from.

// lets `#[derive(ErrorKind)]` refer to `paren_error::...` from inside this crate's own tests
extern crate self as paren_error;

use ariadne::{Color, Report};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually implemented with `#[derive(ErrorKind)]` from the `paren-attrs` crate.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that callers can find out which kind of error occurred.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, or [`None`] if it is a different kind.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use paren_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = "something went wrong",
        labels = ["this part", "and this part"],
        help = "try something else",
    )]
    struct Sample;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("found `{}`", self.found),
        labels = [format!("`{}` is not allowed here", self.found)],
    )]
    struct WithField {
        found: String,
    }

    /// Renders the report of the given error against the given source, without ANSI colors.
    fn render(err: &Error, source: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1], WithField { found: "x".to_string() });
        assert!(err.is::<WithField>());
        assert!(!err.is::<Sample>());
        assert_eq!(
            err.downcast_ref::<WithField>(),
            Some(&WithField { found: "x".to_string() }),
        );
    }

    #[test]
    fn report_contains_message_labels_and_help() {
        let err = Error::new(vec![1..5, 9..14], Sample);
        let report = render(&err, "(true && false)");

        assert!(report.contains("something went wrong"));
        assert!(report.contains("this part"));
        assert!(report.contains("and this part"));
        assert!(report.contains("try something else"));
    }

    #[test]
    fn report_uses_fields() {
        let err = Error::new(vec![0..3], WithField { found: "abc".to_string() });
        let report = render(&err, "abc");

        assert!(report.contains("found `abc`"));
        assert!(report.contains("`abc` is not allowed here"));
    }

    #[test]
    fn extra_labels_without_spans_are_dropped() {
        // `Sample` has two labels, but only one span is provided
        let err = Error::new(vec![0..4], Sample);
        let report = render(&err, "true");

        assert!(report.contains("this part"));
        assert!(!report.contains("and this part"));
    }
}
