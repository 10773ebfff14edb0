//! Stepwise simplification of fully-parenthesized expressions.
//!
//! An expression is simplified by repeatedly finding the leftmost innermost group whose children
//! are all atoms, such as `(true && false)`, and replacing it with the atom it evaluates to. Each
//! replacement is one step, and a [`Trace`] records a `before` and `after` line for every step, in
//! the way a student would show their work.
//!
//! ```
//! use paren_compute::{trace, Ctxt, TraceStep};
//!
//! let trace = trace("((true && false) || (1 < 2))", &Ctxt::default()).unwrap();
//! assert_eq!(trace.steps, vec![
//!     TraceStep {
//!         before: "([(true && false)] || (1 < 2))".to_string(),
//!         after: "([false] || (1 < 2))".to_string(),
//!     },
//!     TraceStep {
//!         before: "(false || [(1 < 2)])".to_string(),
//!         after: "(false || [true])".to_string(),
//!     },
//! ]);
//! assert_eq!(trace.answer.to_string(), "(true)");
//! ```
//!
//! The group evaluation itself is delegated to an [`Evaluator`]. The default is
//! [`LiteralEvaluator`], which understands boolean and integer literals with the usual operators;
//! any closure `Fn(&str) -> Result<String, paren_error::Error>` can be used instead.

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod marker;
pub mod render;
pub mod simplify;
pub mod step_collector;
pub mod trace;

pub use ctxt::{Ctxt, DEFAULT_MAX_STEPS};
pub use error::Error;
pub use eval::{Evaluator, LiteralEvaluator};
pub use marker::{Brackets, Mark, Marker, Unmarked};
pub use render::{render, RenderOptions, RenderOptionsBuilder};
pub use simplify::simplify;
pub use step_collector::StepCollector;
pub use trace::{build_trace, trace, trace_with_steps, Trace, TraceStep};
