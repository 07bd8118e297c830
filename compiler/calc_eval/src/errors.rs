//! Evaluation errors and their constructors.
//!
//! Every failure aborts the evaluation in progress and propagates to the
//! caller of `evaluate`. Build errors through the factory functions below so
//! message wording stays in one place.

use calc_ir::{BinaryOp, ExprId, RenderError, UnaryOp};

/// Result of evaluating a node.
pub type EvalResult<T = i64> = Result<T, EvaluationError>;

/// Error raised while evaluating a program.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// A variable or function name with no binding.
    #[error("unbound name: {name}")]
    UnboundName { name: String },

    /// A call whose argument count differs from the function's parameters.
    #[error("{name} expects {expected} {}, got {got}", plural_args(*.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// Checked arithmetic failed.
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    /// A node, opcode or binding kind the evaluator cannot handle.
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },

    /// The configured maximum frame depth was exceeded.
    #[error("maximum call depth exceeded (limit: {depth})")]
    RecursionLimitExceeded { depth: usize },
}

fn plural_args(n: usize) -> &'static str {
    if n == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl From<RenderError> for EvaluationError {
    fn from(err: RenderError) -> Self {
        unsupported_operation(err.to_string())
    }
}

// Name Errors

#[cold]
pub fn unbound_name(name: &str) -> EvaluationError {
    EvaluationError::UnboundName {
        name: name.to_owned(),
    }
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvaluationError {
    EvaluationError::ArityMismatch {
        name: name.to_owned(),
        expected,
        got,
    }
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvaluationError {
    EvaluationError::DivisionByZero
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvaluationError {
    EvaluationError::IntegerOverflow { operation }
}

// Unsupported Operations

#[cold]
pub fn unsupported_operation(operation: impl Into<String>) -> EvaluationError {
    EvaluationError::UnsupportedOperation {
        operation: operation.into(),
    }
}

/// A binary node whose opcode belongs to the other family.
#[cold]
pub fn invalid_binary_op(node: &str, op: BinaryOp) -> EvaluationError {
    unsupported_operation(format!("operator `{}` in {node}", op.as_symbol()))
}

/// A unary node whose opcode belongs to the other family.
#[cold]
pub fn invalid_unary_op(node: &str, op: UnaryOp) -> EvaluationError {
    unsupported_operation(format!("operator `{}` in {node}", op.as_symbol()))
}

/// An id that does not refer to a node in the evaluator's arena.
#[cold]
pub fn dangling_expr(id: ExprId) -> EvaluationError {
    unsupported_operation(format!("expression {id:?} is not in the arena"))
}

/// A child list whose range lies outside the evaluator's arena.
#[cold]
pub fn dangling_list(what: &str) -> EvaluationError {
    unsupported_operation(format!("{what} list is not in the arena"))
}

#[cold]
pub fn empty_block() -> EvaluationError {
    unsupported_operation("empty block")
}

#[cold]
pub fn not_callable(name: &str) -> EvaluationError {
    unsupported_operation(format!("`{name}` is not a function"))
}

#[cold]
pub fn function_as_value(name: &str) -> EvaluationError {
    unsupported_operation(format!("function `{name}` used as a value"))
}

// Depth Errors

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvaluationError {
    EvaluationError::RecursionLimitExceeded { depth }
}

#[cfg(test)]
mod tests;
