//! Calc IR - AST types for the calc evaluator.
//!
//! This crate contains the core data structures shared by producers of calc
//! programs (parsers, tests, embedders) and the evaluator:
//! - Names for interned identifiers
//! - AST nodes (`ExprKind`) and their operators
//! - Arena allocation for expressions (`ExprArena`)
//! - Infix rendering for arithmetic subtrees
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Immutable Nodes**: once allocated, a node never changes, so subtrees
//!   can be shared by id without copying

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod render;

pub use arena::ExprArena;
pub use ast::{BinaryOp, ExprKind, UnaryOp};
pub use expr_id::{ExprId, ExprRange, NameRange};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use render::{render_expr, RenderError};
