use std::any;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

use super::builder::{Entry, Key};
use super::{
    Compare, Iterate, MissingOperation, Parse, RegistryBuilder, RegistryParseError, Stringify,
    TraversalError, UnsupportedType, Verb,
};
use crate::cmp;
use crate::iter::Traversal;
use crate::string;
use crate::util::fmt::DebugRaw;

/// An immutable table of per-type operations, built by a [`RegistryBuilder`].
///
/// Every verb method resolves its operation before touching any of its arguments, so a failed
/// lookup leaves sequences untouched.
///
/// # Examples
/// ```
/// # use neat::registry::{Registry, UnsupportedType};
/// let registry = Registry::defaults();
/// assert_eq!(registry.stringify(&-7_i16), Ok(String::from("-7")));
/// assert_eq!(registry.parse::<u32>("  19"), Ok(19));
///
/// struct Opaque;
/// assert!(registry.stringify(&Opaque).is_err());
/// ```
pub struct Registry {
    pub(crate) entries: HashMap<Key, Entry>,
}

fn require<T: 'static, F>(slot: Option<F>, name: &'static str) -> Result<F, MissingOperation> {
    slot.ok_or(MissingOperation {
        type_name: any::type_name::<T>(),
        slot: name,
    })
}

impl Registry {
    /// Returns a builder that starts from the built-in operations. See
    /// [`RegistryBuilder::with_defaults`].
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::with_defaults()
    }

    /// Creates a registry holding only the built-in operations.
    pub fn defaults() -> Registry {
        Registry {
            entries: RegistryBuilder::with_defaults().entries,
        }
    }

    /// Returns the number of registered `(type, verb)` pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if an operation is registered for the verb `V` on type `T`.
    pub fn supports<V: Verb, T: 'static>(&self) -> bool {
        self.entries.contains_key(&Key::of::<V, T>())
    }

    /// Looks up the operation implementing the verb `V` for the type `T`.
    ///
    /// # Errors
    /// Returns [`UnsupportedType`] if nothing was registered for the pair.
    pub fn resolve<V: Verb, T: 'static>(&self) -> Result<V::Op<T>, UnsupportedType> {
        self.entries
            .get(&Key::of::<V, T>())
            .and_then(|entry| entry.op.downcast_ref::<V::Op<T>>())
            .copied()
            .ok_or(UnsupportedType {
                type_name: any::type_name::<T>(),
                verb: V::NAME,
            })
    }

    pub fn compare<T: 'static>(&self, a: &T, b: &T) -> Result<Ordering, UnsupportedType> {
        Ok(self.resolve::<Compare, T>()?(a, b))
    }

    pub fn stringify<T: 'static>(&self, value: &T) -> Result<String, UnsupportedType> {
        Ok(self.resolve::<Stringify, T>()?(value))
    }

    /// Renders a sequence as `{a, b, c}` using the registered stringify operation.
    pub fn array_to_string<T: 'static>(&self, seq: &[T]) -> Result<String, UnsupportedType> {
        let stringify = self.resolve::<Stringify, T>()?;
        Ok(string::array_to_string_with(seq, stringify))
    }

    /// Parses a `T` using the registered parse operation.
    ///
    /// # Errors
    /// Returns [`RegistryParseError::Unsupported`] if `T` has no parse operation, or
    /// [`RegistryParseError::Parse`] if the operation rejects the input.
    pub fn parse<T: 'static>(&self, input: &str) -> Result<T, RegistryParseError> {
        let parse = self.resolve::<Parse, T>()?;
        Ok(parse(input)?)
    }

    pub fn sort<T: 'static>(&self, seq: &mut [T]) -> Result<(), UnsupportedType> {
        let compare = self.resolve::<Compare, T>()?;
        cmp::sort_with(seq, compare);
        Ok(())
    }

    pub fn sort_desc<T: 'static>(&self, seq: &mut [T]) -> Result<(), UnsupportedType> {
        let compare = self.resolve::<Compare, T>()?;
        cmp::sort_desc_with(seq, compare);
        Ok(())
    }

    /// See [`cmp::binary_search`]. The outer [`Result`] reports a missing compare operation, the
    /// inner [`Option`] whether the key was found.
    pub fn binary_search<T: 'static>(
        &self,
        seq: &[T],
        key: &T,
    ) -> Result<Option<usize>, UnsupportedType> {
        let compare = self.resolve::<Compare, T>()?;
        Ok(cmp::binary_search_with(seq, key, compare))
    }

    /// See [`cmp::linear_search`].
    pub fn linear_search<T: 'static>(
        &self,
        seq: &[T],
        key: &T,
    ) -> Result<Option<usize>, UnsupportedType> {
        let compare = self.resolve::<Compare, T>()?;
        Ok(cmp::linear_search_with(seq, key, compare))
    }

    /// Walks `iterable` from front to back using its registered cursor operations.
    ///
    /// # Errors
    /// Returns [`TraversalError::Unsupported`] if no cursor operations with cursor type `C` are
    /// registered for `T`, or [`TraversalError::MissingOperation`] if `begin`, `end` or `next`
    /// was left out.
    pub fn forward<'a, T: 'static, C: Copy + Eq + 'static>(
        &self,
        iterable: &'a T,
    ) -> Result<Traversal<'a, T, C>, TraversalError> {
        self.forward_skip(iterable, 1)
    }

    /// Walks `iterable` from back to front using its registered cursor operations.
    ///
    /// # Errors
    /// As [`forward`](Registry::forward), but requires `prev` instead of `next`.
    pub fn backward<'a, T: 'static, C: Copy + Eq + 'static>(
        &self,
        iterable: &'a T,
    ) -> Result<Traversal<'a, T, C>, TraversalError> {
        self.backward_skip(iterable, 1)
    }

    /// Like [`forward`](Registry::forward), stepping up to `stride` elements at a time.
    ///
    /// # Errors
    /// As [`forward`](Registry::forward), plus [`TraversalError::ZeroStep`] if `stride` is 0.
    pub fn forward_skip<'a, T: 'static, C: Copy + Eq + 'static>(
        &self,
        iterable: &'a T,
        stride: usize,
    ) -> Result<Traversal<'a, T, C>, TraversalError> {
        let ops = self.resolve::<Iterate<C>, T>()?;
        let begin = require::<T, _>(ops.begin, "begin")?;
        let end = require::<T, _>(ops.end, "end")?;
        let next = require::<T, _>(ops.next, "next")?;

        Ok(Traversal::new(iterable, begin(iterable), end(iterable), next, stride)?)
    }

    /// Like [`backward`](Registry::backward), stepping up to `stride` elements at a time.
    ///
    /// # Errors
    /// As [`backward`](Registry::backward), plus [`TraversalError::ZeroStep`] if `stride` is 0.
    pub fn backward_skip<'a, T: 'static, C: Copy + Eq + 'static>(
        &self,
        iterable: &'a T,
        stride: usize,
    ) -> Result<Traversal<'a, T, C>, TraversalError> {
        let ops = self.resolve::<Iterate<C>, T>()?;
        let begin = require::<T, _>(ops.begin, "begin")?;
        let end = require::<T, _>(ops.end, "end")?;
        let prev = require::<T, _>(ops.prev, "prev")?;

        let start = prev(iterable, end(iterable));
        let sentinel = prev(iterable, begin(iterable));
        Ok(Traversal::new(iterable, start, sentinel, prev, stride)?)
    }
}

impl Debug for Registry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<(&str, &str)> = self
            .entries
            .values()
            .map(|entry| (entry.type_name, entry.verb))
            .collect();
        pairs.sort_unstable();

        f.debug_set()
            .entries(pairs.into_iter().map(|(type_name, verb)| {
                (DebugRaw(type_name), DebugRaw(verb))
            }))
            .finish()
    }
}
