//! Terminal colors for expressions.

use ariadne::{Color, Fmt};
use paren_compute::{Mark, Marker};
use paren_parser::Expr;

/// The colors of the parentheses of each nesting depth, cycling once exhausted.
pub const DEPTH_COLORS: [Color; 7] = [
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::Cyan,
    Color::Red,
    Color::White,
];

/// Returns the color of the parentheses of a group nested `depth` levels deep, where the root
/// group has depth 0.
pub fn depth_color(depth: usize) -> Color {
    DEPTH_COLORS[depth % DEPTH_COLORS.len()]
}

/// Renders the expression with the parentheses of each group colored by its depth.
pub fn paint_depths(expr: &Expr) -> String {
    let mut out = String::new();
    paint_inner(&mut out, expr, 0);
    out
}

fn paint_inner(out: &mut String, expr: &Expr, depth: usize) {
    match expr {
        Expr::Atom(text) => out.push_str(text),
        Expr::Group(children) => {
            let color = depth_color(depth);
            out.push_str(&"(".fg(color).to_string());
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                paint_inner(out, child, depth + 1);
            }
            out.push_str(&")".fg(color).to_string());
        },
    }
}

/// Highlights the group about to be reduced in green, and the value it was reduced to in blue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ansi;

impl Marker for Ansi {
    fn mark(&self, mark: Mark, text: &str) -> String {
        let color = match mark {
            Mark::Target => Color::Green,
            Mark::Result => Color::Blue,
        };
        text.fg(color).to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use paren_compute::{build_trace, Ctxt};
    use paren_parser::parse;
    use super::*;

    fn strip(text: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(text)).unwrap()
    }

    #[test]
    fn colors_cycle() {
        assert_eq!(depth_color(0), Color::Blue);
        assert_eq!(depth_color(6), Color::White);
        assert_eq!(depth_color(7), Color::Blue);
        assert_eq!(depth_color(10), Color::Green);
    }

    #[test]
    fn painting_keeps_text() {
        let expr = parse("((true && (false || true)) && (x))").unwrap();
        assert_eq!(strip(&paint_depths(&expr)), expr.to_string());
    }

    #[test]
    fn ansi_marker_keeps_text() {
        let ctxt = Ctxt::default().with_marker(Ansi);
        let steps = build_trace("((true && false) || true)", &ctxt).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(strip(&steps[0].before), "((true && false) || true)");
        assert_eq!(strip(&steps[0].after), "(false || true)");
    }
}
