//! Tree-walking evaluator for calc programs.
//!
//! # Architecture
//!
//! `eval` is a single exhaustive `match` over `ExprKind`. Children are
//! evaluated before their parent combines them, left before right.
//!
//! - `builder` - `EvaluatorBuilder` for mode, environment and print handler
//! - `function_call` - calls, argument binding and frame depth
//!
//! # Call-by-name
//!
//! A call does not evaluate its arguments. The callee runs in a new
//! evaluator whose environment is a copy of the caller's with every
//! parameter bound to `Binding::Deferred(arg)`. Each read of a parameter
//! evaluates the argument expression again, in the callee's environment.

mod builder;
mod function_call;

pub use builder::EvaluatorBuilder;

use calc_ir::{ExprArena, ExprId, ExprKind, ExprRange, Name, StringInterner};
use calc_stack::ensure_sufficient_stack;

use crate::errors::{
    dangling_expr, dangling_list, empty_block, function_as_value, unbound_name, EvalResult,
};
use crate::operators::{evaluate_arith, evaluate_cond, evaluate_unary_arith, evaluate_unary_cond};
use crate::print_handler::SharedPrintHandler;
use crate::{Binding, Environment};

/// Evaluator for one environment.
///
/// Borrows the program (arena and interner); owns its environment. Calls
/// spawn child evaluators that share the program and print handler.
pub struct Evaluator<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    env: Environment,
    print_handler: SharedPrintHandler,
    /// Frame limit, `None` for unlimited.
    max_depth: Option<usize>,
    /// Frames between the root evaluator and the current point.
    depth: usize,
}

impl<'a> Evaluator<'a> {
    /// Evaluator with default settings: empty environment, `Interpret` mode.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        EvaluatorBuilder::new(interner, arena).build()
    }

    /// Evaluate a program root. A missing root evaluates to 0.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&mut self, root: impl Into<Option<ExprId>>) -> EvalResult {
        match root.into() {
            Some(id) => self.eval(id),
            None => Ok(0),
        }
    }

    /// Evaluate a single node.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let kind = *self.arena.get(id).ok_or_else(|| dangling_expr(id))?;
        match kind {
            ExprKind::Number(value) => Ok(value),
            ExprKind::BinaryArith { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_arith(op, left, right)
            }
            ExprKind::UnaryArith { op, operand } => {
                let value = self.eval(operand)?;
                evaluate_unary_arith(op, value)
            }
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.env.assign_value(name, value);
                Ok(value)
            }
            ExprKind::Variable(name) => self.eval_variable(name),
            ExprKind::FunctionDef { name, params, body } => {
                tracing::debug!(
                    function = self.interner.lookup(name),
                    arity = params.len(),
                    "define function"
                );
                self.env.define_function(name, params, body);
                Ok(0)
            }
            ExprKind::Call { name, args } => self.eval_call(name, args),
            ExprKind::Block(stmts) => self.eval_block(stmts),
            ExprKind::BinaryCond { op, left, right } => {
                // Both sides always run: `or`/`and` do not short-circuit.
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_cond(op, left, right)
            }
            ExprKind::UnaryCond { op, operand } => {
                let value = self.eval(operand)?;
                evaluate_unary_cond(op, value)
            }
            ExprKind::If { cond, then_branch } => {
                if self.eval(cond)? != 0 {
                    self.eval(then_branch)
                } else {
                    Ok(0)
                }
            }
            ExprKind::IfElse {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(cond)? != 0 {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            }
            ExprKind::While { cond, body } => {
                let mut last = 0;
                while self.eval(cond)? != 0 {
                    last = self.eval(body)?;
                }
                Ok(last)
            }
            ExprKind::Print(expr) => {
                let value = self.eval(expr)?;
                tracing::trace!(value, "print");
                self.print_handler.emit(value);
                Ok(0)
            }
        }
    }

    fn eval_variable(&mut self, name: Name) -> EvalResult {
        match self.env.lookup(name) {
            Some(Binding::Value(value)) => Ok(value),
            Some(Binding::Deferred(arg)) => {
                tracing::trace!(param = self.interner.lookup(name), "force argument");
                self.with_frame(|this| this.eval(arg))
            }
            Some(Binding::Function { .. }) => Err(function_as_value(self.interner.lookup(name))),
            None => Err(unbound_name(self.interner.lookup(name))),
        }
    }

    fn eval_block(&mut self, stmts: ExprRange) -> EvalResult {
        let arena = self.arena;
        let stmts = arena
            .expr_list(stmts)
            .ok_or_else(|| dangling_list("block statement"))?;
        let Some((&last, init)) = stmts.split_last() else {
            return Err(empty_block());
        };
        for &stmt in init {
            self.eval(stmt)?;
        }
        self.eval(last)
    }

    /// The environment this evaluator reads and writes.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Consume the evaluator, returning its environment.
    pub fn into_env(self) -> Environment {
        self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Current frame depth (0 for a root evaluator).
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Evaluate `root` against `env`, printing to stdout.
///
/// Bindings created or changed at the top level are written back to `env`,
/// including those made before an error.
pub fn evaluate(
    arena: &ExprArena,
    interner: &StringInterner,
    root: impl Into<Option<ExprId>>,
    env: &mut Environment,
) -> EvalResult {
    let mut evaluator = EvaluatorBuilder::new(interner, arena)
        .env(std::mem::take(env))
        .build();
    let result = evaluator.evaluate(root);
    *env = evaluator.into_env();
    result
}
