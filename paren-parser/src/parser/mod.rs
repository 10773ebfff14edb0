use crate::{
    cursor::{is_whitespace, Cursor},
    error::{EmptyAtom, Error, ExpectedEof, MalformedGroup, TooDeep, UnexpectedEof},
    expr::Expr,
};
use paren_error::ErrorKind;
use std::ops::Range;

/// The maximum number of groups that can be nested inside each other.
pub const MAX_DEPTH: usize = 256;

/// Parses the given source into an expression tree.
///
/// The source must contain exactly one expression: either a single atom, or a single group. Any
/// whitespace around it is ignored.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source).try_parse_full()
}

/// A recursive descent parser for parenthesized expressions.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The cursor over the text being parsed.
    cursor: Cursor<'source>,

    /// The number of groups that are currently open.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self { cursor: Cursor::new(source), depth: 0 }
    }

    /// Creates an error that points at the next character, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.cursor.span()], kind)
    }

    /// Parses the next expression, which is a group if it starts with `(`, and an atom otherwise.
    pub fn parse_expr(&mut self) -> Result<Expr, Error> {
        self.cursor.eat_whitespace();
        match self.cursor.peek() {
            Some('(') => self.parse_group(),
            Some(_) => self.parse_atom(),
            None => Err(self.error(UnexpectedEof)),
        }
    }

    /// Parses a group: a `(`, any number of expressions, then a `)`.
    ///
    /// Groups may be nested at most [`MAX_DEPTH`] levels deep.
    pub fn parse_group(&mut self) -> Result<Expr, Error> {
        self.cursor.eat_whitespace();
        let open_span = self.cursor.span();
        if self.cursor.peek() != Some('(') {
            return Err(self.error(MalformedGroup { opening: true }));
        }
        if self.depth >= MAX_DEPTH {
            return Err(self.error(TooDeep));
        }
        self.cursor.next();

        self.depth += 1;
        let group = self.parse_group_children(open_span);
        self.depth -= 1;
        group
    }

    /// Parses the children of a group whose `(` has been consumed, along with its `)`.
    fn parse_group_children(&mut self, open_span: Range<usize>) -> Result<Expr, Error> {
        let mut children = Vec::new();
        loop {
            self.cursor.eat_whitespace();
            match self.cursor.peek() {
                Some(')') => {
                    self.cursor.next();
                    return Ok(Expr::Group(children));
                },
                Some(_) => children.push(self.parse_expr()?),
                None => return Err(Error::new(
                    vec![open_span, self.cursor.eof_span()],
                    MalformedGroup { opening: false },
                )),
            }
        }
    }

    /// Parses an atom: every character up to the next whitespace, `)`, or the end of the source.
    pub fn parse_atom(&mut self) -> Result<Expr, Error> {
        self.cursor.eat_whitespace();
        if self.cursor.at_end() {
            return Err(self.error(UnexpectedEof));
        }

        let start = self.cursor.offset();
        while self.cursor.peek().is_some_and(|c| !is_whitespace(c) && c != ')') {
            self.cursor.next();
        }

        let text = &self.cursor.source()[start..self.cursor.offset()];
        if text.is_empty() {
            return Err(self.error(EmptyAtom));
        }

        Ok(Expr::atom(text))
    }

    /// Parses a single expression. Only whitespace may follow it; if anything else does, an error
    /// is returned.
    pub fn try_parse_full(&mut self) -> Result<Expr, Error> {
        let expr = self.parse_expr()?;
        self.cursor.eat_whitespace();
        if self.cursor.at_end() {
            Ok(expr)
        } else {
            let start = self.cursor.offset();
            let end = self.cursor.source().len();
            Err(Error::new(vec![start..end], ExpectedEof))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;

    fn atoms(text: &str) -> Vec<Expr> {
        text.split_whitespace().map(Expr::atom).collect()
    }

    #[test]
    fn simple_group() {
        let expr = parse("(true && false)").unwrap();
        assert_eq!(expr, Expr::Group(atoms("true && false")));
    }

    #[test]
    fn nested_groups() {
        let expr = parse("((true && false) || true)").unwrap();
        assert_eq!(expr, Expr::Group(vec![
            Expr::Group(atoms("true && false")),
            Expr::atom("||"),
            Expr::atom("true"),
        ]));
    }

    #[test]
    fn whitespace_insensitive() {
        let expr = parse(" \n(  true\t&&\n( false||  true ) )\n").unwrap();
        assert_eq!(expr, Expr::Group(vec![
            Expr::atom("true"),
            Expr::atom("&&"),
            Expr::Group(atoms("false|| true")),
        ]));
    }

    #[test]
    fn carriage_return_separates_atoms() {
        assert_eq!(parse("(a\rb)").unwrap(), Expr::Group(atoms("a b")));
        assert_eq!(parse("(a\r\n(b c))\r\n").unwrap(), parse("(a\n(b c))\n").unwrap());
    }

    #[test]
    fn atom_stops_at_close_paren() {
        let expr = parse("(a (b c))").unwrap();
        assert_eq!(expr, Expr::Group(vec![
            Expr::atom("a"),
            Expr::Group(atoms("b c")),
        ]));
    }

    #[test]
    fn open_paren_inside_atom_is_opaque() {
        // `(` only starts a group at the start of an expression
        let expr = parse("(f(x y)").unwrap();
        assert_eq!(expr, Expr::Group(atoms("f(x y")));
    }

    #[test]
    fn bare_atom() {
        assert_eq!(parse("true").unwrap(), Expr::atom("true"));
        assert_eq!(parse("  42 ").unwrap(), Expr::atom("42"));
    }

    #[test]
    fn empty_and_single_groups() {
        assert_eq!(parse("()").unwrap(), Expr::Group(vec![]));
        assert_eq!(parse("((x))").unwrap(), Expr::Group(vec![Expr::Group(atoms("x"))]));
    }

    #[test]
    fn missing_close_paren() {
        let err = parse("(true && false").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&MalformedGroup { opening: false }));
        assert_eq!(err.spans, vec![0..1, 14..14]);
    }

    /// Returns `depth` groups nested inside each other around `a b`.
    fn nested(depth: usize) -> String {
        format!("{}a b{}", "(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn nesting_limit() {
        let expr = parse(&nested(MAX_DEPTH)).unwrap();
        assert_eq!(expr.pre_order_iter().filter(|e| e.as_group().is_some()).count(), MAX_DEPTH);

        let err = parse(&nested(MAX_DEPTH + 1)).unwrap_err();
        assert!(err.is::<TooDeep>());
        assert_eq!(err.spans, vec![MAX_DEPTH..MAX_DEPTH + 1]);
    }

    #[test]
    fn far_too_deep_fails_cleanly() {
        let err = parse(&nested(50_000)).unwrap_err();
        assert!(err.is::<TooDeep>());

        // the limit applies to nesting, not to the number of groups
        let siblings = format!("({})", "(a b) ".repeat(10_000));
        assert_eq!(parse(&siblings).unwrap().as_group().map(<[Expr]>::len), Some(10_000));
    }

    #[test]
    fn missing_nested_close_paren() {
        let err = parse("(a (b c)").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&MalformedGroup { opening: false }));
        assert_eq!(err.spans, vec![0..1, 8..8]);
    }

    #[test]
    fn group_must_open() {
        let err = Parser::new("true").parse_group().unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&MalformedGroup { opening: true }));
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn stray_close_paren() {
        let err = parse(")").unwrap_err();
        assert!(err.is::<EmptyAtom>());
        assert_eq!(err.spans, vec![0..1]);

        let err = parse("(a b))").unwrap_err();
        assert!(err.is::<ExpectedEof>());
        assert_eq!(err.spans, vec![5..6]);
    }

    #[test]
    fn trailing_text() {
        let err = parse("(a b) c").unwrap_err();
        assert!(err.is::<ExpectedEof>());
        assert_eq!(err.spans, vec![6..7]);

        assert!(parse("true false").unwrap_err().is::<ExpectedEof>());
    }

    #[test]
    fn empty_input() {
        assert!(parse("").unwrap_err().is::<UnexpectedEof>());
        assert!(parse(" \n ").unwrap_err().is::<UnexpectedEof>());
        assert!(Parser::new("").parse_atom().unwrap_err().is::<UnexpectedEof>());
    }

    /// Generates well-formed trees whose atoms contain no structural characters.
    fn arb_expr() -> impl Strategy<Value = Expr> {
        let atom = "[a-z0-9&|!=<>+*-]{1,5}".prop_map(Expr::Atom);
        atom.prop_recursive(4, 32, 5, |inner| {
            prop::collection::vec(inner, 0..5).prop_map(Expr::Group)
        })
    }

    /// Joins the children of groups with random whitespace.
    fn arb_spacing(expr: &Expr, seps: &[&str], next: &mut usize) -> String {
        match expr {
            Expr::Atom(text) => text.clone(),
            Expr::Group(children) => {
                let mut out = String::from("(");
                for child in children {
                    out.push_str(seps[*next % seps.len()]);
                    *next += 1;
                    out.push_str(&arb_spacing(child, seps, next));
                    out.push(' ');
                }
                out.push(')');
                out
            },
        }
    }

    proptest! {
        #[test]
        fn render_then_parse_round_trips(expr in arb_expr()) {
            let text = expr.to_string();
            prop_assert_eq!(parse(&text).unwrap(), expr);
        }

        #[test]
        fn whitespace_does_not_change_structure(
            expr in arb_expr(),
            seps in prop::collection::vec(prop::sample::select(vec!["", " ", "\t", "\n", "  \r\n"]), 1..8),
        ) {
            let spaced = arb_spacing(&expr, &seps, &mut 0);
            let parsed = parse(&spaced).unwrap();
            prop_assert_eq!(parsed.to_string(), expr.to_string());
        }
    }
}
