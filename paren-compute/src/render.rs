//! Rendering of expressions back to text, with optional annotation of the group that will be
//! reduced next.

use crate::{
    ctxt::Ctxt,
    error::Error,
    marker::{Mark, Marker},
    simplify::evaluate_group,
};
use paren_parser::Expr;

/// Options controlling how [`render`] treats the target group: the first reducible group found by
/// [`Expr::find_reducible`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether to decorate the target group with the context's [`Marker`].
    ///
    /// The target is marked with [`Mark::Target`], or [`Mark::Result`] if
    /// [`collapse_target`](RenderOptions::collapse_target) is also set.
    pub annotate_target: bool,

    /// Whether to render the target group as the atom it evaluates to, instead of as its
    /// parenthesized form.
    ///
    /// This calls the context's evaluator once.
    pub collapse_target: bool,
}

impl RenderOptions {
    /// Wraps the given [`RenderOptions`] into a builder for further customization.
    pub fn into_builder(self) -> RenderOptionsBuilder {
        RenderOptionsBuilder(self)
    }
}

/// Helper struct to build a [`RenderOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptionsBuilder(RenderOptions);

impl RenderOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to annotate the target group. See [`RenderOptions::annotate_target`].
    pub fn annotate_target(mut self, annotate_target: bool) -> Self {
        self.0.annotate_target = annotate_target;
        self
    }

    /// Sets whether to collapse the target group. See [`RenderOptions::collapse_target`].
    pub fn collapse_target(mut self, collapse_target: bool) -> Self {
        self.0.collapse_target = collapse_target;
        self
    }

    /// Builds the [`RenderOptions`] struct.
    pub fn build(self) -> RenderOptions {
        self.0
    }
}

/// Renders the expression to text.
///
/// With the default options, this is the same as the expression's [`Display`](std::fmt::Display)
/// implementation. If the expression contains no reducible group, the options have no effect.
pub fn render(expr: &Expr, options: RenderOptions, ctxt: &Ctxt) -> Result<String, Error> {
    if !options.annotate_target && !options.collapse_target {
        return Ok(expr.to_string());
    }

    let Some((path, group)) = expr.find_reducible() else {
        return Ok(expr.to_string());
    };

    let (text, mark) = if options.collapse_target {
        (evaluate_group(group, ctxt)?, Mark::Result)
    } else {
        (group.to_string(), Mark::Target)
    };

    let mark = options.annotate_target.then_some(mark);
    Ok(render_marked(expr, &path, &text, mark, ctxt.marker()))
}

/// Renders the expression with the node at `path` replaced by `text`, decorated with the given
/// mark if there is one.
pub(crate) fn render_marked(
    expr: &Expr,
    path: &[usize],
    text: &str,
    mark: Option<Mark>,
    marker: &dyn Marker,
) -> String {
    let mut out = String::new();
    write_marked(&mut out, expr, Some(path), text, mark, marker);
    out
}

fn write_marked(
    out: &mut String,
    expr: &Expr,
    path: Option<&[usize]>,
    text: &str,
    mark: Option<Mark>,
    marker: &dyn Marker,
) {
    match (path.map(<[usize]>::split_first), expr) {
        (Some(None), _) => match mark {
            Some(mark) => out.push_str(&marker.mark(mark, text)),
            None => out.push_str(text),
        },
        (Some(Some((&index, rest))), Expr::Group(children)) => {
            out.push('(');
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let path = (i == index).then_some(rest);
                write_marked(out, child, path, text, mark, marker);
            }
            out.push(')');
        },
        _ => out.push_str(&expr.to_string()),
    }
}

/// Returns the text as a whole parenthesized expression, wrapping it in parentheses if it does not
/// already begin with one.
///
/// Collapsing the last reducible group of an expression produces a bare atom; this restores the
/// group around it.
pub fn canonical(text: &str) -> String {
    if text.starts_with('(') {
        text.to_string()
    } else {
        format!("({})", text)
    }
}
