//! Reduction of the innermost reducible group of an expression.

use crate::{
    ctxt::Ctxt,
    error::{Error, NonAtomicResult, NonReducibleEvaluation},
};
use paren_parser::{cursor::is_whitespace, Expr};
use tracing::trace;

/// A single reduction: the group at `path` evaluates to the atom `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// The child indices leading from the root to the reduced group.
    pub path: Vec<usize>,

    /// The text of the atom the group evaluates to.
    pub value: String,
}

impl Reduction {
    /// Finds the next reducible group in the expression and evaluates it.
    ///
    /// Returns [`None`] if the expression is terminal (it contains no reducible group).
    pub fn find(expr: &Expr, ctxt: &Ctxt) -> Result<Option<Self>, Error> {
        let Some((path, group)) = expr.find_reducible() else {
            return Ok(None);
        };

        let value = evaluate_group(group, ctxt)?;
        trace!(?path, %group, %value, "reduced group");
        Ok(Some(Self { path, value }))
    }

    /// Returns a copy of the expression with the reduced group replaced by its value.
    pub fn apply(&self, expr: &Expr) -> Expr {
        expr.replace(&self.path, Expr::atom(self.value.as_str()))
    }
}

/// Evaluates a reducible group with the context's evaluator, returning the text of its value.
///
/// The group must be reducible, and the evaluator must return a single atom; otherwise, an error
/// is returned.
pub fn evaluate_group(group: &Expr, ctxt: &Ctxt) -> Result<String, Error> {
    let text = group.to_string();
    if !group.is_reducible() {
        let span = 0..text.len();
        return Err(Error::in_group(text, paren_error::Error::new(vec![span], NonReducibleEvaluation)));
    }

    let result = match ctxt.evaluator().evaluate(&text) {
        Ok(result) => result,
        Err(err) => return Err(Error::in_group(text, err)),
    };

    if is_atomic(&result) {
        Ok(result)
    } else {
        let span = 0..text.len();
        Err(Error::in_group(text, paren_error::Error::new(vec![span], NonAtomicResult { result })))
    }
}

/// Returns true if the text can be parsed back as exactly one atom.
fn is_atomic(text: &str) -> bool {
    !text.is_empty() && !text.chars().any(|c| is_whitespace(c) || c == '(' || c == ')')
}

/// Reduces the first reducible group of the expression (searching depth-first, left to right) to
/// the atom it evaluates to.
///
/// Exactly one group is reduced per call. If the expression contains no reducible group, it is
/// returned unchanged.
pub fn simplify(expr: &Expr, ctxt: &Ctxt) -> Result<Expr, Error> {
    Ok(match Reduction::find(expr, ctxt)? {
        Some(reduction) => reduction.apply(expr),
        None => expr.clone(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use paren_parser::parse;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use super::*;

    fn simplify_str(text: &str) -> Expr {
        simplify(&parse(text).unwrap(), &Ctxt::default()).unwrap()
    }

    #[test]
    fn single_group_becomes_atom() {
        assert_eq!(simplify_str("(true && false)"), Expr::atom("false"));
        assert_eq!(simplify_str("(1 + 2 * 3)"), Expr::atom("7"));
    }

    #[test]
    fn innermost_first() {
        let expr = simplify_str("((true && false) || true)");
        assert_eq!(expr, parse("(false || true)").unwrap());
    }

    #[test]
    fn one_reduction_per_call() {
        let expr = simplify_str("((true && false) || (true && true))");
        assert_eq!(expr.to_string(), "(false || (true && true))");

        let expr = simplify(&expr, &Ctxt::default()).unwrap();
        assert_eq!(expr.to_string(), "(false || true)");
    }

    #[test]
    fn deepest_leftmost_wins() {
        let expr = simplify_str("((1 + (2 * 3)) == (4 + 3))");
        assert_eq!(expr.to_string(), "((1 + 6) == (4 + 3))");
    }

    #[test]
    fn terminal_trees_are_unchanged() {
        for text in ["true", "(true)", "()", "((false) && true)"] {
            let expr = parse(text).unwrap();
            assert_eq!(simplify(&expr, &Ctxt::default()).unwrap(), expr);
        }
    }

    #[test]
    fn evaluator_called_once_with_group_text() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let ctxt = Ctxt::new(move |expr: &str| -> Result<String, paren_error::Error> {
            seen.fetch_add(1, Ordering::SeqCst);
            assert_eq!(expr, "(a b c)");
            Ok("abc".to_string())
        });

        let expr = simplify(&parse("(x (a b c))").unwrap(), &ctxt).unwrap();
        assert_eq!(expr.to_string(), "(x abc)");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn evaluator_errors_point_into_group() {
        let err = simplify(&parse("((1 / 0) + 1)").unwrap(), &Ctxt::default()).unwrap_err();
        assert_eq!(err.src_id, "group");
        assert_eq!(err.source, "(1 / 0)");
    }

    #[test]
    fn non_atomic_results_are_rejected() {
        for bad in ["", "a b", "(a)", "a)"] {
            let ctxt = Ctxt::new(move |_: &str| -> Result<String, paren_error::Error> {
                Ok(bad.to_string())
            });
            let err = simplify(&parse("(a b)").unwrap(), &ctxt).unwrap_err();
            assert_eq!(err.downcast_ref::<NonAtomicResult>(), Some(&NonAtomicResult { result: bad.to_string() }));
        }
    }

    #[test]
    fn non_reducible_groups_are_not_evaluated() {
        for text in ["(x)", "(a (b c))", "x"] {
            let err = evaluate_group(&parse(text).unwrap(), &Ctxt::default()).unwrap_err();
            assert!(err.is::<NonReducibleEvaluation>());
        }
    }

    /// Generates trees of boolean operations where every group is reducible once its children are.
    fn arb_boolean() -> impl Strategy<Value = Expr> {
        let leaf = prop::bool::ANY.prop_map(|b| Expr::atom(b.to_string()));
        leaf.prop_recursive(4, 24, 2, |inner| {
            (inner.clone(), prop::bool::ANY, inner).prop_map(|(lhs, and, rhs)| {
                let op = if and { "&&" } else { "||" };
                Expr::Group(vec![lhs, Expr::atom(op), rhs])
            })
        })
    }

    proptest! {
        #[test]
        fn simplify_shrinks_until_terminal(expr in arb_boolean()) {
            let ctxt = Ctxt::default();
            let mut expr = expr;
            while expr.has_reducible() {
                let next = simplify(&expr, &ctxt).unwrap();
                prop_assert!(next.node_count() < expr.node_count());
                expr = next;
            }
            prop_assert_eq!(simplify(&expr, &ctxt).unwrap(), expr.clone());
            prop_assert!(expr.as_atom().is_some());
        }
    }
}
