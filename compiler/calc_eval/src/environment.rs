//! Environment for name bindings in the evaluator.
//!
//! A flat map from name to [`Binding`]. There is no scope chain: a call works
//! on a full copy of its caller's environment, so nothing the callee does can
//! leak back out.

use rustc_hash::FxHashMap;

use calc_ir::{ExprId, Name, NameRange};

use crate::Binding;

/// Name bindings visible to one evaluator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: FxHashMap<Name, Binding>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Look up a name.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Binding> {
        self.bindings.get(&name).copied()
    }

    /// Bind `name`, replacing whatever it was bound to.
    #[inline]
    pub fn define(&mut self, name: Name, binding: Binding) {
        self.bindings.insert(name, binding);
    }

    /// Store a variable value.
    #[inline]
    pub fn assign_value(&mut self, name: Name, value: i64) {
        self.define(name, Binding::Value(value));
    }

    /// Store a function definition.
    #[inline]
    pub fn define_function(&mut self, name: Name, params: NameRange, body: ExprId) {
        self.define(name, Binding::Function { params, body });
    }

    /// Bind a parameter to an unevaluated argument expression.
    #[inline]
    pub fn bind_argument(&mut self, param: Name, arg: ExprId) {
        self.define(param, Binding::Deferred(arg));
    }

    /// Value copy of every binding, used as the basis of a callee's
    /// environment.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Whether `name` has a binding.
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, Binding)> + '_ {
        self.bindings.iter().map(|(&name, &binding)| (name, binding))
    }
}
