//! Parser for fully-parenthesized expressions, such as `(true && (false || true))`.
//!
//! The parser only knows about three structural characters: `(`, `)`, and whitespace. Everything
//! else is grouped into opaque [`Expr::Atom`]s, so the same parser works for boolean, arithmetic,
//! or any other kind of operator as long as every operation is parenthesized.
//!
//! ```
//! use paren_parser::{expr::Expr, parse};
//!
//! let expr = parse("(true && (false || true))").unwrap();
//! assert_eq!(expr, Expr::Group(vec![
//!     Expr::Atom("true".to_string()),
//!     Expr::Atom("&&".to_string()),
//!     Expr::Group(vec![
//!         Expr::Atom("false".to_string()),
//!         Expr::Atom("||".to_string()),
//!         Expr::Atom("true".to_string()),
//!     ]),
//! ]));
//! assert_eq!(expr.to_string(), "(true && (false || true))");
//! ```

pub mod cursor;
pub mod error;
pub mod expr;
pub mod parser;

pub use error::Error;
pub use expr::Expr;
pub use parser::{parse, Parser, MAX_DEPTH};
