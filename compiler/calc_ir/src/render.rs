//! Infix rendering for arithmetic and assignment subtrees.
//!
//! Every operand is wrapped in parentheses, so the output does not depend on
//! operator precedence: `(1) + ((2) * (3))`. Only numbers, arithmetic and
//! assignments can be rendered; anything else is an error.

use std::fmt::Write;

use calc_stack::ensure_sufficient_stack;

use crate::ast::{BinaryOp, ExprKind, UnaryOp};
use crate::{ExprArena, ExprId, StringInterner};

/// Why a subtree could not be rendered.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The node variant has no infix form.
    #[error("cannot render {kind} node as infix text")]
    UnsupportedNode { kind: &'static str },
    /// An arithmetic node carries a non-arithmetic opcode.
    #[error("operator `{symbol}` cannot appear in arithmetic")]
    UnsupportedOperator { symbol: &'static str },
    /// The id does not refer to a node in the arena.
    #[error("expression {0:?} is not in the arena")]
    DanglingExpr(ExprId),
}

/// Render `id` as fully parenthesized infix text.
pub fn render_expr(
    arena: &ExprArena,
    interner: &StringInterner,
    id: ExprId,
) -> Result<String, RenderError> {
    let mut out = String::new();
    Renderer { arena, interner }.render(id, &mut out)?;
    Ok(out)
}

struct Renderer<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl Renderer<'_> {
    fn render(&self, id: ExprId, out: &mut String) -> Result<(), RenderError> {
        ensure_sufficient_stack(|| self.render_inner(id, out))
    }

    fn render_inner(&self, id: ExprId, out: &mut String) -> Result<(), RenderError> {
        let kind = self.arena.get(id).ok_or(RenderError::DanglingExpr(id))?;
        match *kind {
            ExprKind::Number(value) => {
                // Writing to a String cannot fail.
                let _ = write!(out, "{value}");
            }
            ExprKind::BinaryArith { op, left, right } => {
                let symbol = arith_symbol(op)?;
                self.parenthesized(left, out)?;
                out.push(' ');
                out.push_str(symbol);
                out.push(' ');
                self.parenthesized(right, out)?;
            }
            ExprKind::UnaryArith { op, operand } => {
                if op != UnaryOp::Neg {
                    return Err(RenderError::UnsupportedOperator {
                        symbol: op.as_symbol(),
                    });
                }
                out.push_str(op.as_symbol());
                self.parenthesized(operand, out)?;
            }
            // The assigned expression is part of the text, not just the
            // target name.
            ExprKind::Assign { name, value } => {
                out.push_str(self.interner.lookup(name));
                out.push_str(" = ");
                self.parenthesized(value, out)?;
            }
            ref other => {
                return Err(RenderError::UnsupportedNode {
                    kind: other.variant_name(),
                })
            }
        }
        Ok(())
    }

    fn parenthesized(&self, id: ExprId, out: &mut String) -> Result<(), RenderError> {
        out.push('(');
        self.render(id, out)?;
        out.push(')');
        Ok(())
    }
}

fn arith_symbol(op: BinaryOp) -> Result<&'static str, RenderError> {
    if op.is_arithmetic() {
        Ok(op.as_symbol())
    } else {
        Err(RenderError::UnsupportedOperator {
            symbol: op.as_symbol(),
        })
    }
}
