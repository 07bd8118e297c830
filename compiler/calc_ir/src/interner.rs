//! String interner for identifier storage.
//!
//! Names are compared as `u32`s everywhere in the evaluator; the interner is
//! only consulted again when a name has to be shown to a user (error
//! messages, rendering).

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings.
    #[error("interner exceeded capacity: {count} strings, max is {}", u32::MAX)]
    Overflow { count: usize },
}

struct InternState {
    /// Map from string content to its name.
    map: FxHashMap<&'static str, Name>,
    /// Storage for string contents, indexed by `Name::index`.
    strings: Vec<&'static str>,
}

impl InternState {
    fn with_empty() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, Name::EMPTY);
        Self {
            map,
            strings: vec![empty],
        }
    }
}

/// Interner mapping identifier text to [`Name`]s.
///
/// Interned strings are leaked and live for the rest of the process, which
/// lets [`lookup`](Self::lookup) hand out `&'static str`.
pub struct StringInterner {
    state: RwLock<InternState>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(InternState::with_empty()),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.state.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = self.state.write();

        // Double-check after acquiring write lock
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_raw(index);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32::MAX` strings.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a Name.
    ///
    /// Returns `"<unknown>"` for names that did not come from this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.state
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("<unknown>")
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.state.read().strings.len()
    }

    /// Always false: the empty string is interned on construction.
    pub fn is_empty(&self) -> bool {
        self.state.read().strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
