//! Arena owning every node of a program.
//!
//! Nodes are allocated append-only and addressed by [`ExprId`]. A node can
//! only name children that already exist when it is allocated, so trees built
//! through these constructors are acyclic.

use crate::ast::{BinaryOp, ExprKind, UnaryOp};
use crate::{ExprId, ExprRange, Name, NameRange};

/// Flat storage for expressions, child lists and parameter lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<ExprKind>,
    expr_lists: Vec<ExprId>,
    names: Vec<Name>,
}

/// Convert a length to a `u32` arena index.
///
/// # Panics
/// Panics if the arena outgrows `u32` indices.
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} exceeded u32 capacity ({len} entries)"))
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node and return its id.
    pub fn alloc(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expression arena"));
        self.exprs.push(kind);
        id
    }

    /// Store a list of child expressions, returning its range.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "expression list");
        self.expr_lists.extend(ids);
        let len = to_u32(self.expr_lists.len(), "expression list") - start;
        ExprRange::new(start, len)
    }

    /// Store a list of names, returning its range.
    pub fn alloc_name_list(&mut self, names: impl IntoIterator<Item = Name>) -> NameRange {
        let start = to_u32(self.names.len(), "name list");
        self.names.extend(names);
        let len = to_u32(self.names.len(), "name list") - start;
        NameRange::new(start, len)
    }

    /// Get a node, or `None` if the id does not belong to this arena.
    #[inline]
    pub fn get(&self, id: ExprId) -> Option<&ExprKind> {
        self.exprs.get(id.index())
    }

    /// Child expressions for a range, or `None` if the range does not lie
    /// inside this arena.
    pub fn expr_list(&self, range: ExprRange) -> Option<&[ExprId]> {
        let start = range.start as usize;
        self.expr_lists.get(start..start.checked_add(range.len())?)
    }

    /// Names for a range, or `None` if the range does not lie inside this
    /// arena.
    pub fn name_list(&self, range: NameRange) -> Option<&[Name]> {
        let start = range.start as usize;
        self.names.get(start..start.checked_add(range.len())?)
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    // Node constructors, one per variant. No validation happens here.

    pub fn number(&mut self, value: i64) -> ExprId {
        self.alloc(ExprKind::Number(value))
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc(ExprKind::BinaryArith { op, left, right })
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.alloc(ExprKind::UnaryArith { op, operand })
    }

    pub fn assign(&mut self, name: Name, value: ExprId) -> ExprId {
        self.alloc(ExprKind::Assign { name, value })
    }

    pub fn variable(&mut self, name: Name) -> ExprId {
        self.alloc(ExprKind::Variable(name))
    }

    pub fn function_def(
        &mut self,
        name: Name,
        params: impl IntoIterator<Item = Name>,
        body: ExprId,
    ) -> ExprId {
        let params = self.alloc_name_list(params);
        self.alloc(ExprKind::FunctionDef { name, params, body })
    }

    pub fn call(&mut self, name: Name, args: impl IntoIterator<Item = ExprId>) -> ExprId {
        let args = self.alloc_expr_list(args);
        self.alloc(ExprKind::Call { name, args })
    }

    pub fn block(&mut self, stmts: impl IntoIterator<Item = ExprId>) -> ExprId {
        let stmts = self.alloc_expr_list(stmts);
        self.alloc(ExprKind::Block(stmts))
    }

    pub fn binary_cond(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc(ExprKind::BinaryCond { op, left, right })
    }

    pub fn unary_cond(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.alloc(ExprKind::UnaryCond { op, operand })
    }

    pub fn if_then(&mut self, cond: ExprId, then_branch: ExprId) -> ExprId {
        self.alloc(ExprKind::If { cond, then_branch })
    }

    pub fn if_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.alloc(ExprKind::IfElse {
            cond,
            then_branch,
            else_branch,
        })
    }

    pub fn while_loop(&mut self, cond: ExprId, body: ExprId) -> ExprId {
        self.alloc(ExprKind::While { cond, body })
    }

    pub fn print(&mut self, expr: ExprId) -> ExprId {
        self.alloc(ExprKind::Print(expr))
    }
}
