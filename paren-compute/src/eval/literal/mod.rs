//! A small evaluator for boolean and integer literal expressions.
//!
//! The grammar understood by [`LiteralEvaluator`] is intentionally tiny:
//!
//! - literals: `true`, `false`, and non-negative decimal integers
//! - unary operators: `!` (logical not) and `-` (negation)
//! - binary operators, from lowest to highest precedence: `||`; `&&`; `==` and `!=`; `<`, `<=`,
//!   `>`, and `>=`; `+` and `-`; `*`, `/`, and `%`
//!
//! All binary operators are left-associative, and any sub-expression can be parenthesized.
//! Integers are 64-bit; overflow and division by zero are reported as errors rather than wrapping
//! or panicking.

pub mod error;
pub mod op;
pub mod token;
pub mod value;

use error::{
    DivisionByZero,
    ExpectedEof,
    IntegerTooLarge,
    InvalidBinaryOperation,
    InvalidUnaryOperation,
    Overflow,
    UnexpectedEof,
    UnexpectedToken,
    UnknownAtom,
};
use levenshtein::levenshtein;
use op::{BinOp, BinOpKind, Precedence, UnaryOpKind};
use paren_error::Error;
use std::ops::Range;
use super::Evaluator;
use token::{tokenize_complete, Token, TokenKind};
use value::Value;

/// The literals that an unknown name could have been a misspelling of.
const KEYWORDS: [&str; 2] = ["true", "false"];

/// An evaluated operand, along with the region of the source code it was parsed from.
type Operand = (Value, Range<usize>);

/// Evaluates boolean and integer literal expressions, such as `(true && !false)` or
/// `(1 + 2 * 3)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LiteralEvaluator;

impl LiteralEvaluator {
    /// Evaluates the given expression to a [`Value`].
    pub fn eval(&self, expr: &str) -> Result<Value, Error> {
        LiteralParser::new(expr).parse_full()
    }
}

impl Evaluator for LiteralEvaluator {
    fn evaluate(&self, expr: &str) -> Result<String, Error> {
        self.eval(expr).map(|value| value.to_string())
    }
}

/// Parses and evaluates a literal expression at the same time, using precedence climbing.
struct LiteralParser<'source> {
    /// The non-whitespace tokens of the expression.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The length of the expression, used to point at its end.
    len: usize,
}

impl<'source> LiteralParser<'source> {
    fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            len: source.len(),
        }
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.len..self.len, |token| token.span.clone())
    }

    /// Returns the next token to be parsed, then advances the cursor.
    fn next_token(&mut self) -> Result<Token<'source>, Error> {
        let token = self.tokens
            .get(self.cursor)
            .cloned()
            .ok_or_else(|| Error::new(vec![self.span()], UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Returns the binary operator at the cursor without advancing, if there is one.
    fn peek_bin_op(&self) -> Option<BinOp> {
        let token = self.tokens.get(self.cursor)?;
        Some(BinOp {
            kind: BinOpKind::from_token(token.kind)?,
            span: token.span.clone(),
        })
    }

    /// Evaluates the whole expression. All tokens must be consumed.
    fn parse_full(&mut self) -> Result<Value, Error> {
        let (value, _) = self.parse_expr(Precedence::Any)?;
        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            let start = self.span().start;
            Err(Error::new(vec![start..self.len], ExpectedEof))
        }
    }

    /// Evaluates an expression containing only operators of at least the given precedence.
    fn parse_expr(&mut self, precedence: Precedence) -> Result<Operand, Error> {
        let lhs = self.parse_unary()?;
        self.parse_binary(lhs, precedence)
    }

    /// Given an already evaluated left-hand side, continues evaluating binary operations whose
    /// precedence is at least `precedence`.
    fn parse_binary(&mut self, mut lhs: Operand, precedence: Precedence) -> Result<Operand, Error> {
        while let Some(op) = self.peek_bin_op().filter(|op| op.precedence() >= precedence) {
            self.cursor += 1;
            let mut rhs = self.parse_unary()?;

            // operators that bind tighter than `op` take `rhs` as their left-hand side first, so
            // that `1 + 2 * 3` is evaluated as `1 + (2 * 3)`
            while let Some(next) = self.peek_bin_op().filter(|next| next.precedence() > op.precedence()) {
                rhs = self.parse_binary(rhs, next.precedence())?;
            }

            lhs = eval_binary(op, lhs, rhs)?;
        }

        Ok(lhs)
    }

    /// Evaluates a unary operation, or a primary expression.
    ///
    /// A `-` directly followed by an integer is read as a single negative literal, so that every
    /// integer this evaluator produces, including [`i64::MIN`], can be read back.
    fn parse_unary(&mut self) -> Result<Operand, Error> {
        let token = self.next_token()?;
        let op = match token.kind {
            TokenKind::Not => UnaryOpKind::Not,
            TokenKind::Sub => UnaryOpKind::Neg,
            _ => return self.parse_primary(token),
        };

        if op == UnaryOpKind::Neg {
            if let Some(int) = self.tokens.get(self.cursor).filter(|t| t.kind == TokenKind::Int) {
                let span = token.span.start..int.span.end;
                let n = format!("-{}", int.lexeme).parse::<i64>()
                    .map_err(|_| Error::new(vec![span.clone()], IntegerTooLarge))?;
                self.cursor += 1;
                return Ok((Value::Integer(n), span));
            }
        }

        let operand = self.parse_unary()?;
        eval_unary(op, token.span, operand)
    }

    /// Evaluates a literal or a parenthesized expression, given its first token.
    fn parse_primary(&mut self, token: Token<'source>) -> Result<Operand, Error> {
        match token.kind {
            TokenKind::True => Ok((Value::Boolean(true), token.span)),
            TokenKind::False => Ok((Value::Boolean(false), token.span)),
            TokenKind::Int => {
                let n = token.lexeme.parse::<i64>()
                    .map_err(|_| Error::new(vec![token.span.clone()], IntegerTooLarge))?;
                Ok((Value::Integer(n), token.span))
            },
            TokenKind::OpenParen => {
                let (value, _) = self.parse_expr(Precedence::Any)?;
                let close = self.next_token()?;
                if close.kind != TokenKind::CloseParen {
                    return Err(Error::new(vec![close.span], UnexpectedToken {
                        expected: &[TokenKind::CloseParen],
                        found: close.kind,
                    }));
                }
                Ok((value, token.span.start..close.span.end))
            },
            TokenKind::Name => {
                let suggestions = KEYWORDS.into_iter()
                    .filter(|keyword| levenshtein(keyword, token.lexeme) < 3)
                    .collect();
                Err(Error::new(vec![token.span], UnknownAtom {
                    name: token.lexeme.to_string(),
                    suggestions,
                }))
            },
            found => Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[
                    TokenKind::True,
                    TokenKind::False,
                    TokenKind::Int,
                    TokenKind::OpenParen,
                    TokenKind::Not,
                    TokenKind::Sub,
                ],
                found,
            })),
        }
    }
}

/// Applies a unary operator to its operand.
fn eval_unary(op: UnaryOpKind, op_span: Range<usize>, operand: Operand) -> Result<Operand, Error> {
    let span = op_span.start..operand.1.end;
    let value = match (op, operand.0) {
        (UnaryOpKind::Not, Value::Boolean(b)) => Value::Boolean(!b),
        (UnaryOpKind::Neg, Value::Integer(n)) => Value::Integer(
            n.checked_neg().ok_or_else(|| Error::new(vec![span.clone()], Overflow))?
        ),
        (op, value) => return Err(Error::new(vec![op_span, operand.1], InvalidUnaryOperation {
            op,
            operand: value.typename(),
        })),
    };
    Ok((value, span))
}

/// Applies a binary operator to its operands.
fn eval_binary(op: BinOp, lhs: Operand, rhs: Operand) -> Result<Operand, Error> {
    let span = lhs.1.start..rhs.1.end;
    let overflow = || Error::new(vec![span.clone()], Overflow);

    let value = match (op.kind, lhs.0, rhs.0) {
        (BinOpKind::Or, Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(a || b),
        (BinOpKind::And, Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(a && b),
        (BinOpKind::Eq, a, b) if a.typename() == b.typename() => Value::Boolean(a == b),
        (BinOpKind::NotEq, a, b) if a.typename() == b.typename() => Value::Boolean(a != b),
        (BinOpKind::Less, Value::Integer(a), Value::Integer(b)) => Value::Boolean(a < b),
        (BinOpKind::LessEq, Value::Integer(a), Value::Integer(b)) => Value::Boolean(a <= b),
        (BinOpKind::Greater, Value::Integer(a), Value::Integer(b)) => Value::Boolean(a > b),
        (BinOpKind::GreaterEq, Value::Integer(a), Value::Integer(b)) => Value::Boolean(a >= b),
        (BinOpKind::Add, Value::Integer(a), Value::Integer(b)) => {
            Value::Integer(a.checked_add(b).ok_or_else(overflow)?)
        },
        (BinOpKind::Sub, Value::Integer(a), Value::Integer(b)) => {
            Value::Integer(a.checked_sub(b).ok_or_else(overflow)?)
        },
        (BinOpKind::Mul, Value::Integer(a), Value::Integer(b)) => {
            Value::Integer(a.checked_mul(b).ok_or_else(overflow)?)
        },
        (BinOpKind::Div | BinOpKind::Mod, Value::Integer(_), Value::Integer(0)) => {
            return Err(Error::new(vec![op.span, rhs.1], DivisionByZero));
        },
        (BinOpKind::Div, Value::Integer(a), Value::Integer(b)) => {
            Value::Integer(a.checked_div(b).ok_or_else(overflow)?)
        },
        // `i64::MIN % -1` has no overflowing intermediate value
        (BinOpKind::Mod, Value::Integer(_), Value::Integer(-1)) => Value::Integer(0),
        (BinOpKind::Mod, Value::Integer(a), Value::Integer(b)) => {
            Value::Integer(a.checked_rem(b).ok_or_else(overflow)?)
        },
        (kind, a, b) => return Err(Error::new(vec![lhs.1, op.span, rhs.1], InvalidBinaryOperation {
            op: kind,
            left: a.typename(),
            right: b.typename(),
        })),
    };

    Ok((value, span))
}
