use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unbound_name_message() {
    assert_eq!(unbound_name("x").to_string(), "unbound name: x");
}

#[test]
fn arity_mismatch_message_pluralizes() {
    assert_eq!(
        arity_mismatch("f", 1, 2).to_string(),
        "f expects 1 argument, got 2"
    );
    assert_eq!(
        arity_mismatch("g", 3, 0).to_string(),
        "g expects 3 arguments, got 0"
    );
}

#[test]
fn arithmetic_messages() {
    assert_eq!(division_by_zero().to_string(), "division by zero");
    assert_eq!(
        integer_overflow("addition").to_string(),
        "integer overflow in addition"
    );
}

#[test]
fn opcode_family_errors_are_unsupported_operations() {
    let err = invalid_binary_op("binary arithmetic", BinaryOp::Lt);
    assert_eq!(
        err,
        EvaluationError::UnsupportedOperation {
            operation: "operator `<` in binary arithmetic".to_owned()
        }
    );
    let err = invalid_unary_op("unary condition", UnaryOp::Neg);
    assert_eq!(
        err.to_string(),
        "unsupported operation: operator `-` in unary condition"
    );
}

#[test]
fn render_error_converts_to_unsupported_operation() {
    let err = EvaluationError::from(RenderError::DanglingExpr(ExprId::new(9)));
    assert!(matches!(err, EvaluationError::UnsupportedOperation { .. }));
}

#[test]
fn recursion_limit_message() {
    assert_eq!(
        recursion_limit_exceeded(64).to_string(),
        "maximum call depth exceeded (limit: 64)"
    );
}

#[test]
fn malformed_tree_errors() {
    assert_eq!(
        dangling_expr(ExprId::new(2)).to_string(),
        "unsupported operation: expression ExprId(2) is not in the arena"
    );
    assert_eq!(
        dangling_list("argument").to_string(),
        "unsupported operation: argument list is not in the arena"
    );
    assert_eq!(
        empty_block().to_string(),
        "unsupported operation: empty block"
    );
    assert_eq!(
        not_callable("x").to_string(),
        "unsupported operation: `x` is not a function"
    );
    assert_eq!(
        function_as_value("f").to_string(),
        "unsupported operation: function `f` used as a value"
    );
}
