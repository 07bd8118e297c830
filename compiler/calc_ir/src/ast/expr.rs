//! Expression Types
//!
//! All children are `ExprId` indices into the owning arena. Nodes are `Copy`
//! and never mutated after allocation, so a subtree can be referenced from
//! several places (a call node and a callee's argument binding) without
//! being duplicated.

use super::operators::{BinaryOp, UnaryOp};
use crate::{ExprId, ExprRange, Name, NameRange};

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: `42`
    Number(i64),

    /// Arithmetic: `left op right` with `op` in `+ - * /`
    BinaryArith {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Unary minus: `-operand`
    UnaryArith { op: UnaryOp, operand: ExprId },

    /// Assignment: `name = value`
    Assign { name: Name, value: ExprId },

    /// Variable reference
    Variable(Name),

    /// Named function definition with fixed arity.
    FunctionDef {
        name: Name,
        params: NameRange,
        body: ExprId,
    },

    /// Function call: `name(args...)`
    Call { name: Name, args: ExprRange },

    /// Statement sequence; yields the last statement's value.
    Block(ExprRange),

    /// Boolean binary expression: logical and comparison operators.
    BinaryCond {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Boolean negation: `!operand`
    UnaryCond { op: UnaryOp, operand: ExprId },

    /// `if cond { then_branch }`
    If { cond: ExprId, then_branch: ExprId },

    /// `if cond { then_branch } else { else_branch }`
    IfElse {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// `while cond { body }`
    While { cond: ExprId, body: ExprId },

    /// `print expr`
    Print(ExprId),
}

impl ExprKind {
    /// Human-readable variant name for diagnostics.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number literal",
            Self::BinaryArith { .. } => "binary arithmetic",
            Self::UnaryArith { .. } => "unary arithmetic",
            Self::Assign { .. } => "assignment",
            Self::Variable(_) => "variable reference",
            Self::FunctionDef { .. } => "function definition",
            Self::Call { .. } => "call",
            Self::Block(_) => "block",
            Self::BinaryCond { .. } => "binary condition",
            Self::UnaryCond { .. } => "unary condition",
            Self::If { .. } => "if",
            Self::IfElse { .. } => "if-else",
            Self::While { .. } => "while",
            Self::Print(_) => "print",
        }
    }
}
