//! Random boolean expressions for practice.

use rand::Rng;

/// The operators a generated expression can use.
const OPERATORS: [&str; 2] = ["&&", "||"];

/// Returns a random boolean literal.
pub fn random_boolean(rng: &mut impl Rng) -> &'static str {
    if rng.gen_bool(0.5) { "true" } else { "false" }
}

/// Returns a random boolean operator.
pub fn random_operator(rng: &mut impl Rng) -> &'static str {
    OPERATORS[rng.gen_range(0..OPERATORS.len())]
}

/// Returns an unparenthesized operation on two literals, such as `true && false`.
pub fn simple_expression(rng: &mut impl Rng) -> String {
    let lhs = random_boolean(rng);
    let op = random_operator(rng);
    let rhs = random_boolean(rng);
    format!("{} {} {}", lhs, op, rhs)
}

/// Returns a parenthesized expression nested around `depth` levels deep.
///
/// At depth 0 this is a parenthesized [`simple_expression`]. Otherwise, a literal is combined with
/// a nested expression on a random side. The nested expression is either one level shallower or
/// the same depth, so the result is at least `depth + 1` groups deep.
pub fn complex_expression(depth: usize, rng: &mut impl Rng) -> String {
    if depth == 0 {
        return format!("({})", simple_expression(rng));
    }

    let nested_depth = depth - rng.gen_range(0..=1);
    let expr = if rng.gen_bool(0.5) {
        let nested = complex_expression(nested_depth, rng);
        format!("{} {} {}", nested, random_operator(rng), random_boolean(rng))
    } else {
        let lhs = random_boolean(rng);
        let op = random_operator(rng);
        format!("{} {} {}", lhs, op, complex_expression(nested_depth, rng))
    };
    format!("({})", expr)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use paren_compute::{trace, Ctxt};
    use paren_parser::{parse, Expr};
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    /// Returns the number of nested groups along the deepest path of the expression.
    fn depth(expr: &Expr) -> usize {
        match expr {
            Expr::Atom(_) => 0,
            Expr::Group(children) => 1 + children.iter().map(depth).max().unwrap_or(0),
        }
    }

    #[test]
    fn simple_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let expr = parse(&format!("({})", simple_expression(&mut rng))).unwrap();
            assert!(expr.is_reducible());
            let children = expr.as_group().unwrap();
            assert_eq!(children.len(), 3);
            assert!(OPERATORS.contains(&children[1].as_atom().unwrap()));
        }
    }

    #[test]
    fn depth_zero_is_one_group() {
        let mut rng = StdRng::seed_from_u64(1);
        let expr = parse(&complex_expression(0, &mut rng)).unwrap();
        assert_eq!(depth(&expr), 1);
    }

    #[test]
    fn nests_at_least_depth_levels() {
        let mut rng = StdRng::seed_from_u64(42);
        for requested in 0..6 {
            let expr = parse(&complex_expression(requested, &mut rng)).unwrap();
            assert!(depth(&expr) > requested);
        }
    }

    #[test]
    fn same_seed_same_expression() {
        let a = complex_expression(4, &mut StdRng::seed_from_u64(99));
        let b = complex_expression(4, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn generated_expressions_simplify_to_a_literal() {
        let mut rng = StdRng::seed_from_u64(2024);
        let ctxt = Ctxt::default();
        for depth in 0..5 {
            let source = complex_expression(depth, &mut rng);
            let trace = trace(&source, &ctxt).unwrap();
            let answer = trace.answer.as_group().unwrap();
            assert_eq!(answer.len(), 1);
            assert!(["true", "false"].contains(&answer[0].as_atom().unwrap()));
        }
    }
}
