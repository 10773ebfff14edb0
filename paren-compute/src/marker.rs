//! Annotation of the group targeted by a simplification step.
//!
//! The renderer only decides *which* node is annotated; a [`Marker`] decides what the annotation
//! looks like. This keeps styling concerns, such as terminal colors or HTML markup, out of the
//! simplifier.

/// The role of an annotated piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// The group that is about to be reduced, such as `(true && false)`.
    Target,

    /// The atom that a reduced group was replaced with, such as `false`.
    Result,
}

/// Decorates the annotated part of a rendered expression.
///
/// Closures with the signature `Fn(Mark, &str) -> String` are also markers.
pub trait Marker: Send + Sync {
    /// Returns the given text, decorated to show the given role.
    fn mark(&self, mark: Mark, text: &str) -> String;
}

impl<F> Marker for F
where
    F: Fn(Mark, &str) -> String + Send + Sync,
{
    fn mark(&self, mark: Mark, text: &str) -> String {
        self(mark, text)
    }
}

/// Wraps annotated text in square brackets, as in `([true && false] || true)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Brackets;

impl Marker for Brackets {
    fn mark(&self, _: Mark, text: &str) -> String {
        format!("[{}]", text)
    }
}

/// Leaves annotated text as-is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unmarked;

impl Marker for Unmarked {
    fn mark(&self, _: Mark, text: &str) -> String {
        text.to_string()
    }
}
