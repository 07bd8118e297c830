//! Operator implementations for the evaluator.
//!
//! Operands arrive already evaluated (left before right). Arithmetic and
//! condition nodes share opcode enums, so each entry point rejects the
//! opcodes of the other family.
//!
//! All arithmetic is checked: overflow is an error, never a wrap or panic.
//! Booleans are the integers 0 and 1.

use calc_ir::{BinaryOp, UnaryOp};

use crate::errors::{
    division_by_zero, integer_overflow, invalid_binary_op, invalid_unary_op, EvalResult,
};

#[inline]
fn checked(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.ok_or_else(|| integer_overflow(op_name))
}

#[inline]
fn truth(b: bool) -> i64 {
    i64::from(b)
}

/// Evaluate a `BinaryArith` opcode.
///
/// Division truncates toward zero.
pub fn evaluate_arith(op: BinaryOp, left: i64, right: i64) -> EvalResult {
    match op {
        BinaryOp::Add => checked(left.checked_add(right), "addition"),
        BinaryOp::Sub => checked(left.checked_sub(right), "subtraction"),
        BinaryOp::Mul => checked(left.checked_mul(right), "multiplication"),
        BinaryOp::Div => {
            if right == 0 {
                Err(division_by_zero())
            } else {
                checked(left.checked_div(right), "division")
            }
        }
        _ => Err(invalid_binary_op("binary arithmetic", op)),
    }
}

/// Evaluate a `BinaryCond` opcode.
///
/// `Or`/`And` combine two values that have both been computed already.
pub fn evaluate_cond(op: BinaryOp, left: i64, right: i64) -> EvalResult {
    match op {
        BinaryOp::Or => Ok(truth(left != 0 || right != 0)),
        BinaryOp::And => Ok(truth(left != 0 && right != 0)),
        BinaryOp::Eq => Ok(truth(left == right)),
        BinaryOp::NotEq => Ok(truth(left != right)),
        BinaryOp::Lt => Ok(truth(left < right)),
        BinaryOp::LtEq => Ok(truth(left <= right)),
        BinaryOp::Gt => Ok(truth(left > right)),
        BinaryOp::GtEq => Ok(truth(left >= right)),
        _ => Err(invalid_binary_op("binary condition", op)),
    }
}

/// Evaluate a `UnaryArith` opcode.
pub fn evaluate_unary_arith(op: UnaryOp, value: i64) -> EvalResult {
    match op {
        UnaryOp::Neg => checked(value.checked_neg(), "negation"),
        UnaryOp::Not => Err(invalid_unary_op("unary arithmetic", op)),
    }
}

/// Evaluate a `UnaryCond` opcode.
pub fn evaluate_unary_cond(op: UnaryOp, value: i64) -> EvalResult {
    match op {
        UnaryOp::Not => Ok(truth(value == 0)),
        UnaryOp::Neg => Err(invalid_unary_op("unary condition", op)),
    }
}
