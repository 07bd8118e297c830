//! Evaluation modes.
//!
//! A mode picks the default print destination and the frame depth limit.
//! Both can still be overridden on [`EvaluatorBuilder`].
//!
//! [`EvaluatorBuilder`]: crate::EvaluatorBuilder

use crate::print_handler::{buffer_handler, stdout_handler, SharedPrintHandler};

/// Evaluation mode, determining evaluator policy via match dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Run a program: print to stdout, no depth limit.
    #[default]
    Interpret,
    /// Run under a test harness: capture output, bounded depth.
    TestRun,
}

impl EvalMode {
    /// Maximum frame depth, or `None` for unlimited.
    ///
    /// A frame is one function call or one forcing of a call-by-name
    /// argument.
    #[inline]
    pub fn max_call_depth(self) -> Option<usize> {
        match self {
            Self::Interpret => None,
            Self::TestRun => Some(500),
        }
    }

    /// Whether printed output is captured rather than written to stdout.
    #[inline]
    pub fn captures_output(self) -> bool {
        matches!(self, Self::TestRun)
    }

    /// Print handler used when none is set explicitly.
    pub fn default_print_handler(self) -> SharedPrintHandler {
        if self.captures_output() {
            buffer_handler()
        } else {
            stdout_handler()
        }
    }
}
