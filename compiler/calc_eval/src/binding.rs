//! What a name can be bound to.

use calc_ir::{ExprId, NameRange};

/// A single environment entry.
///
/// Variables and functions share one namespace; the tag decides what a
/// lookup site is allowed to do with the entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// A variable's current value.
    Value(i64),
    /// A function definition. The body is evaluated only when called.
    Function { params: NameRange, body: ExprId },
    /// A call-by-name argument: the caller's unevaluated argument
    /// expression, re-evaluated on every reference.
    Deferred(ExprId),
}

impl Binding {
    /// Whether reading this binding yields an integer.
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_) | Self::Deferred(_))
    }

    /// Whether this binding can be called.
    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function { .. })
    }

    /// Whether reading this binding re-runs an argument expression.
    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}
