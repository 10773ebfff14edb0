//! Errors that can occur while parsing an expression.

use ariadne::Fmt;
use paren_attrs::ErrorKind;
use paren_error::EXPR;
use crate::parser::MAX_DEPTH;

pub use paren_error::Error;

/// The end of the source code was reached where an expression was required.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "text".fg(EXPR))],
    help = format!("wrap the whole expression in {} to combine its parts", "parentheses".fg(EXPR)),
)]
pub struct ExpectedEof;

/// A group did not start with an opening parenthesis, or did not end with a closing
/// parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed group",
    labels = if self.opening {
        vec!["I expected a `(` here".to_string()]
    } else {
        vec![
            "this group is never closed".to_string(),
            format!("I expected a {} here", "`)`".fg(EXPR)),
        ]
    },
    help = if self.opening {
        "every group must start with `(`"
    } else {
        "add a `)` to close the group"
    },
)]
pub struct MalformedGroup {
    /// The opening parenthesis was missing. (Otherwise, the closing parenthesis was missing.)
    pub opening: bool,
}

/// An atom was expected, but no characters could be consumed for it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an atom",
    labels = ["I expected to see an atom before this"],
    help = "this `)` does not close any group; try removing it",
)]
pub struct EmptyAtom;

/// Groups were nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = [format!("this group is nested more than {} levels deep", MAX_DEPTH)],
    help = "split the expression into smaller parts",
)]
pub struct TooDeep;
