//! Errors that can occur while evaluating a literal expression.

use ariadne::Fmt;
use paren_attrs::ErrorKind;
use paren_error::EXPR;
use super::{op::{BinOpKind, UnaryOpKind}, token::TokenKind};

/// The end of the expression was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("I expected to see an {} here", "operand".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the expression was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!(
        "expected one of: {}",
        self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "),
    )],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A name was used that is not a literal.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a literal", self.name),
    labels = ["this atom"],
    help = if self.suggestions.is_empty() {
        "literals are `true`, `false`, and integers".to_string()
    } else {
        format!(
            "did you mean {}?",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(" or ")
        )
    },
)]
pub struct UnknownAtom {
    /// The name that was used.
    pub name: String,

    /// Literals with a similar spelling, if any.
    pub suggestions: Vec<&'static str>,
}

/// An integer literal does not fit in 64 bits.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "integer literal is too large",
    labels = ["this literal"],
    help = format!("integers must be between {} and {}", i64::MIN, i64::MAX),
)]
pub struct IntegerTooLarge;

/// The given binary operation cannot be applied to the given operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply the `{}` operator to these operands", self.op),
    labels = [
        format!("this operand has type `{}`", self.left),
        "this operator".to_string(),
        format!("this operand has type `{}`", self.right),
    ],
)]
pub struct InvalidBinaryOperation {
    /// The operator that was used.
    pub op: BinOpKind,

    /// The type the left side evaluated to.
    pub left: &'static str,

    /// The type the right side evaluated to.
    pub right: &'static str,
}

/// The given unary operation cannot be applied to the given operand.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply the `{}` operator to this operand", self.op),
    labels = [
        "this operator".to_string(),
        format!("this operand has type `{}`", self.operand),
    ],
)]
pub struct InvalidUnaryOperation {
    /// The operator that was used.
    pub op: UnaryOpKind,

    /// The type the operand evaluated to.
    pub operand: &'static str,
}

/// Attempted to divide by zero, or to take the remainder of a division by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["", "this operand evaluates to zero"],
)]
pub struct DivisionByZero;

/// The result of an integer operation does not fit in 64 bits.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "integer overflow",
    labels = ["the result of this operation is out of range"],
    help = format!("integers must be between {} and {}", i64::MIN, i64::MAX),
)]
pub struct Overflow;
