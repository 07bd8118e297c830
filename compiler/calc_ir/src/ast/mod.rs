//! AST node types.
//!
//! - `operators` - Binary and unary opcodes
//! - `expr` - The closed set of node variants

mod expr;
mod operators;

pub use expr::ExprKind;
pub use operators::{BinaryOp, UnaryOp};
