//! The evaluator capability used to compute the value of a reducible group.
//!
//! The simplifier never interprets atoms itself. Whenever it finds a group that can be reduced, it
//! renders the group back to text (such as `(true && false)`) and hands it to an [`Evaluator`],
//! which must return the text of a single literal (such as `false`).

pub mod literal;

pub use literal::LiteralEvaluator;

use paren_error::Error;

/// Computes the literal result of a fully-literal parenthesized expression.
///
/// The input is always a syntactically complete group whose children are all atoms, such as
/// `(1 + 2 * 3)`. The output must be the text of a single atom: non-empty, with no whitespace or
/// parentheses.
///
/// Spans of returned errors should point into the given text.
///
/// Closures with the signature `Fn(&str) -> Result<String, Error>` are also evaluators.
pub trait Evaluator: Send + Sync {
    /// Evaluates the given expression, returning the text of the resulting literal.
    fn evaluate(&self, expr: &str) -> Result<String, Error>;
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Result<String, Error> + Send + Sync,
{
    fn evaluate(&self, expr: &str) -> Result<String, Error> {
        self(expr)
    }
}
