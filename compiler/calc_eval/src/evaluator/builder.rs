//! `EvaluatorBuilder` for creating Evaluator instances with various configurations.

use calc_ir::{ExprArena, StringInterner};

use super::Evaluator;
use crate::eval_mode::EvalMode;
use crate::{Environment, SharedPrintHandler};

/// Builder for creating Evaluator instances.
///
/// The mode supplies defaults for the print handler and depth limit; explicit
/// settings override it regardless of call order.
pub struct EvaluatorBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    env: Option<Environment>,
    mode: EvalMode,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl<'a> EvaluatorBuilder<'a> {
    /// Create a new builder with default `Interpret` mode.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            env: None,
            mode: EvalMode::default(),
            print_handler: None,
            max_call_depth: None,
        }
    }

    /// Set the evaluation mode.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Start from an existing environment instead of an empty one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit frame depth, overriding the mode's limit.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Evaluator<'a> {
        Evaluator {
            interner: self.interner,
            arena: self.arena,
            env: self.env.unwrap_or_default(),
            print_handler: self
                .print_handler
                .unwrap_or_else(|| self.mode.default_print_handler()),
            max_depth: self.max_call_depth.or_else(|| self.mode.max_call_depth()),
            depth: 0,
        }
    }
}
