//! Function calls and frame depth tracking.

use calc_ir::{ExprRange, Name};

use super::Evaluator;
use crate::errors::{
    arity_mismatch, dangling_list, not_callable, recursion_limit_exceeded, unbound_name,
    EvalResult,
};
use crate::{Binding, Environment};

impl<'a> Evaluator<'a> {
    /// Call `name` with unevaluated `args`.
    ///
    /// The callee sees a snapshot of the caller's environment plus its
    /// parameters. Nothing it assigns is visible to the caller afterwards.
    pub(super) fn eval_call(&mut self, name: Name, args: ExprRange) -> EvalResult {
        let (params, body) = match self.env.lookup(name) {
            Some(Binding::Function { params, body }) => (params, body),
            Some(Binding::Value(_) | Binding::Deferred(_)) => {
                return Err(not_callable(self.interner.lookup(name)));
            }
            None => return Err(unbound_name(self.interner.lookup(name))),
        };

        let arena = self.arena;
        let params = arena
            .name_list(params)
            .ok_or_else(|| dangling_list("parameter"))?;
        let args = arena
            .expr_list(args)
            .ok_or_else(|| dangling_list("argument"))?;
        if params.len() != args.len() {
            return Err(arity_mismatch(
                self.interner.lookup(name),
                params.len(),
                args.len(),
            ));
        }

        let depth = self.next_depth()?;
        tracing::trace!(fn_name = self.interner.lookup(name), depth, "call");

        let mut call_env = self.env.snapshot();
        for (&param, &arg) in params.iter().zip(args) {
            tracing::trace!(param = self.interner.lookup(param), ?arg, "bind argument");
            call_env.bind_argument(param, arg);
        }

        let mut callee = self.child(call_env, depth);
        callee.eval(body)
    }

    /// Run `f` one frame deeper, restoring the depth afterwards.
    pub(super) fn with_frame(&mut self, f: impl FnOnce(&mut Self) -> EvalResult) -> EvalResult {
        let depth = self.next_depth()?;
        let saved = std::mem::replace(&mut self.depth, depth);
        let result = f(self);
        self.depth = saved;
        result
    }

    /// Depth of a new frame, or an error if it would pass the limit.
    fn next_depth(&self) -> EvalResult<usize> {
        let next = self.depth.saturating_add(1);
        match self.max_depth {
            Some(max) if next > max => Err(recursion_limit_exceeded(max)),
            _ => Ok(next),
        }
    }

    /// Evaluator for a callee body, sharing the program and print handler.
    fn child(&self, env: Environment, depth: usize) -> Evaluator<'a> {
        Evaluator {
            interner: self.interner,
            arena: self.arena,
            env,
            print_handler: self.print_handler.clone(),
            max_depth: self.max_depth,
            depth,
        }
    }
}

