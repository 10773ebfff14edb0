pub mod iter;

use iter::ExprIter;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of a parenthesized expression.
///
/// Every non-structural run of characters is an [`Expr::Atom`]; the parser never looks inside
/// atoms, so `&&`, `true`, and `42` are all the same kind of node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// An opaque token, such as `true`, `&&`, or `42`.
    Atom(String),

    /// A parenthesized sequence of expressions, such as `(true && false)`.
    Group(Vec<Expr>),
}

impl Expr {
    /// Creates an atom from the given text.
    pub fn atom(text: impl Into<String>) -> Self {
        Self::Atom(text.into())
    }

    /// Returns the text of the atom, or [`None`] if this is a group.
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Self::Atom(text) => Some(text),
            Self::Group(_) => None,
        }
    }

    /// Returns the children of the group, or [`None`] if this is an atom.
    pub fn as_group(&self) -> Option<&[Expr]> {
        match self {
            Self::Atom(_) => None,
            Self::Group(children) => Some(children),
        }
    }

    /// Returns true if this is a group whose children are all atoms.
    pub fn is_deepest(&self) -> bool {
        self.as_group()
            .is_some_and(|children| children.iter().all(|child| matches!(child, Self::Atom(_))))
    }

    /// Returns true if this group can be evaluated in one step: it is a deepest group with more
    /// than one child.
    ///
    /// A deepest group with a single child, such as `(x)`, is terminal; it is never reduced.
    pub fn is_reducible(&self) -> bool {
        self.is_deepest() && self.as_group().is_some_and(|children| children.len() > 1)
    }

    /// Finds the group that should be reduced next, returning the path of child indices leading to
    /// it along with the group itself.
    ///
    /// Children are searched depth-first, left to right, so the leftmost innermost reducible group
    /// is found. Returns [`None`] if no group in the tree is reducible.
    pub fn find_reducible(&self) -> Option<(Vec<usize>, &Expr)> {
        let mut path = Vec::new();
        let group = self.find_reducible_inner(&mut path)?;
        path.reverse();
        Some((path, group))
    }

    /// Pushes the child indices onto `path` in reverse order (innermost first).
    fn find_reducible_inner(&self, path: &mut Vec<usize>) -> Option<&Expr> {
        if self.is_reducible() {
            return Some(self);
        }

        let children = self.as_group()?;
        children.iter()
            .enumerate()
            .find_map(|(i, child)| {
                let found = child.find_reducible_inner(path)?;
                path.push(i);
                Some(found)
            })
    }

    /// Returns true if the tree contains a reducible group.
    pub fn has_reducible(&self) -> bool {
        self.pre_order_iter().any(Expr::is_reducible)
    }

    /// Returns the node found by following the given path of child indices, or [`None`] if the
    /// path leads nowhere.
    pub fn get(&self, path: &[usize]) -> Option<&Expr> {
        path.iter().try_fold(self, |expr, &i| expr.as_group()?.get(i))
    }

    /// Returns a copy of this tree with the node at the given path replaced. The tree is returned
    /// unchanged if the path leads nowhere.
    pub fn replace(&self, path: &[usize], replacement: Expr) -> Expr {
        match (path.split_first(), self) {
            (None, _) => replacement,
            (Some((&index, rest)), Self::Group(children)) if index < children.len() => {
                let mut children = children.clone();
                children[index] = children[index].replace(rest, replacement);
                Self::Group(children)
            },
            _ => self.clone(),
        }
    }

    /// Returns the total number of atoms and groups in the tree, including this one.
    pub fn node_count(&self) -> usize {
        self.pre_order_iter().count()
    }

    /// Returns an iterator that traverses the tree in left-to-right pre-order.
    pub fn pre_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }
}

/// Renders the expression back to text: atoms as themselves, and groups as their children
/// joined by single spaces inside parentheses.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Atom(text) => write!(f, "{}", text),
            Self::Group(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    child.fmt(f)?;
                }
                write!(f, ")")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn group<const N: usize>(children: [Expr; N]) -> Expr {
        Expr::Group(children.into())
    }

    fn atoms(text: &str) -> Vec<Expr> {
        text.split_whitespace().map(Expr::atom).collect()
    }

    #[test]
    fn deepest_and_reducible() {
        let deepest = Expr::Group(atoms("true && false"));
        assert!(deepest.is_deepest());
        assert!(deepest.is_reducible());

        let single = Expr::Group(atoms("true"));
        assert!(single.is_deepest());
        assert!(!single.is_reducible());

        let empty = Expr::Group(vec![]);
        assert!(empty.is_deepest());
        assert!(!empty.is_reducible());

        let nested = group([Expr::atom("true"), Expr::atom("||"), deepest]);
        assert!(!nested.is_deepest());
        assert!(!nested.is_reducible());

        assert!(!Expr::atom("true").is_deepest());
    }

    #[test]
    fn find_leftmost_innermost() {
        // ((a && (b || c)) && (d || e))
        let expr = group([
            group([
                Expr::atom("a"),
                Expr::atom("&&"),
                Expr::Group(atoms("b || c")),
            ]),
            Expr::atom("&&"),
            Expr::Group(atoms("d || e")),
        ]);

        let (path, found) = expr.find_reducible().unwrap();
        assert_eq!(path, vec![0, 2]);
        assert_eq!(found, &Expr::Group(atoms("b || c")));
        assert_eq!(expr.get(&path), Some(found));
    }

    #[test]
    fn find_root() {
        let expr = Expr::Group(atoms("1 + 2"));
        let (path, found) = expr.find_reducible().unwrap();
        assert!(path.is_empty());
        assert_eq!(found, &expr);
    }

    #[test]
    fn find_skips_terminal_groups() {
        // ((x) (a b))
        let expr = group([Expr::Group(atoms("x")), Expr::Group(atoms("a b"))]);
        let (path, _) = expr.find_reducible().unwrap();
        assert_eq!(path, vec![1]);

        let terminal = group([Expr::Group(atoms("x")), Expr::atom("y")]);
        assert_eq!(terminal.find_reducible(), None);
        assert!(!terminal.has_reducible());
        assert_eq!(Expr::atom("x").find_reducible(), None);
    }

    #[test]
    fn replace_leaves_original_untouched() {
        let expr = group([Expr::Group(atoms("a && b")), Expr::atom("||"), Expr::atom("c")]);
        let replaced = expr.replace(&[0], Expr::atom("false"));

        assert_eq!(replaced, Expr::Group(atoms("false || c")));
        assert_eq!(expr.to_string(), "((a && b) || c)");
        assert_eq!(expr.replace(&[7], Expr::atom("x")), expr);
        assert_eq!(expr.replace(&[], Expr::atom("x")), Expr::atom("x"));
    }

    #[test]
    fn node_count_and_order() {
        let expr = group([Expr::Group(atoms("a b")), Expr::atom("c")]);
        assert_eq!(expr.node_count(), 5);

        let order = expr.pre_order_iter()
            .map(|expr| expr.as_atom().unwrap_or("()"))
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["()", "()", "a", "b", "c"]);
    }

    #[test]
    fn display() {
        let expr = group([Expr::Group(atoms("a && b")), Expr::atom("||"), Expr::Group(vec![])]);
        assert_eq!(expr.to_string(), "((a && b) || ())");
        assert_eq!(Expr::atom("true").to_string(), "true");
    }
}
