use super::Expr;

/// An iterator that traverses the tree of expressions in left-to-right pre-order (each group is
/// visited before its children).
///
/// This iterator is created by [`Expr::pre_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right pre-order.
    pub fn new(expr: &'a Expr) -> Self {
        Self { stack: vec![expr] }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let expr = self.stack.pop()?;
        if let Expr::Group(children) = expr {
            // reversed so the leftmost child is popped first
            self.stack.extend(children.iter().rev());
        }
        Some(expr)
    }
}
