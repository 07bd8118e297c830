#![deny(clippy::arithmetic_side_effects)]
//! Calc Eval - tree-walking evaluator for calc programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: a flat name-to-`Binding` map, copied on every call
//! - `evaluate_arith` / `evaluate_cond`: direct enum-based binary operator dispatch
//! - `evaluate_unary_arith` / `evaluate_unary_cond`: unary operator dispatch
//! - `PrintHandler`: where `print` output goes
//! - `EvalMode`: default print destination and frame depth limit
//!
//! Programs are built with `calc_ir::ExprArena` and evaluated either through
//! [`Evaluator`] or the one-shot [`evaluate`] function.

mod binding;
mod environment;
pub mod errors;
mod eval_mode;
pub mod evaluator;
mod operators;
mod print_handler;

pub use binding::Binding;
pub use calc_stack::ensure_sufficient_stack;
pub use environment::Environment;
pub use errors::{EvalResult, EvaluationError};
pub use eval_mode::EvalMode;
pub use evaluator::{evaluate, Evaluator, EvaluatorBuilder};
pub use operators::{evaluate_arith, evaluate_cond, evaluate_unary_arith, evaluate_unary_cond};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};

static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or a global subscriber already
/// exists. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
