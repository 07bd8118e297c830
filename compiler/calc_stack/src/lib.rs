//! Stack growth for deep recursion.
//!
//! Rendering and evaluation both recurse once per tree level, and evaluation
//! once more per call, so deeply nested programs would overflow the native
//! stack. On native targets `stacker` grows the stack on demand; on wasm32
//! the closure is called directly.
//!
//! Wrap each recursive step:
//!
//! ```text
//! fn eval(&mut self, id: ExprId) -> EvalResult {
//!     ensure_sufficient_stack(|| self.eval_inner(id))
//! }
//! ```

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow when less than this much stack remains (128KB).
    const RED_ZONE: usize = 128 * 1024;

    /// Size of each new stack segment (2MB).
    const SEGMENT: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

/// wasm32: no stack switching available.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
