use std::any::{self, Any, TypeId};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry as Slot;
use std::fmt::{self, Debug, Formatter};

use derive_more::IsVariant;
use tracing::{debug, trace};

use super::{Compare, CursorOps, DuplicateRegistration, Iterate, Parse, Registry, Stringify, Verb};
use crate::cmp::Comparable;
use crate::iter::{Iterable, ReverseIterable};
use crate::parse::{ParseError, Parsable};
use crate::string::Stringable;

/// What a [`RegistryBuilder`] does when a `(type, verb)` pair is registered a second time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum DuplicatePolicy {
    /// Keep the first registration and make [`RegistryBuilder::build`] fail with a
    /// [`DuplicateRegistration`].
    #[default]
    Reject,
    /// Replace the earlier registration, so the last one wins.
    Override,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Key {
    value: TypeId,
    verb: TypeId,
}

impl Key {
    pub(crate) fn of<V: Verb, T: 'static>() -> Key {
        Key {
            value: TypeId::of::<T>(),
            verb: TypeId::of::<V>(),
        }
    }
}

pub(crate) struct Entry {
    pub op: Box<dyn Any + Send + Sync>,
    pub type_name: &'static str,
    pub verb: &'static str,
}

/// A builder struct for assembling a [`Registry`]. Available via [`Registry::builder`], which
/// starts from the built-in operations, or [`RegistryBuilder::new`], which starts empty.
///
/// The [`DuplicatePolicy`] applies to registrations made after it is set, so set it first when
/// overriding built-in operations.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use neat::registry::{Compare, DuplicatePolicy, Registry};
/// fn by_length(a: &String, b: &String) -> Ordering {
///     a.len().cmp(&b.len())
/// }
///
/// let registry = Registry::builder()
///     .policy(DuplicatePolicy::Override)
///     .with::<Compare, String>(by_length)
///     .build()
///     .unwrap();
///
/// let mut words = vec![String::from("ccc"), String::from("a"), String::from("bb")];
/// registry.sort(&mut words).unwrap();
/// assert_eq!(words, ["a", "bb", "ccc"]);
/// ```
pub struct RegistryBuilder {
    pub(crate) entries: HashMap<Key, Entry>,
    pub(crate) policy: DuplicatePolicy,
    pub(crate) conflict: Option<DuplicateRegistration>,
}

macro_rules! with_builtins {
    ($builder:expr; $($type:ty),* $(,)?) => {
        $builder
            $(
                .with_comparable::<$type>()
                .with_stringable::<$type>()
                .with_parsable::<$type>()
            )*
    };
}

impl RegistryBuilder {
    /// Creates a builder with no registered operations and [`DuplicatePolicy::Reject`].
    pub fn new() -> RegistryBuilder {
        RegistryBuilder {
            entries: HashMap::new(),
            policy: DuplicatePolicy::default(),
            conflict: None,
        }
    }

    /// Creates a builder holding compare, stringify and parse operations for every primitive
    /// number type, `bool`, `char` and `String`, plus compare and stringify for `&'static str`.
    pub fn with_defaults() -> RegistryBuilder {
        with_builtins!(
            RegistryBuilder::new();
            u8, u16, u32, u64, u128, usize,
            i8, i16, i32, i64, i128, isize,
            f32, f64, bool, char, String,
        )
        .with_comparable::<&'static str>()
        .with_stringable::<&'static str>()
    }

    pub fn policy(mut self, policy: DuplicatePolicy) -> RegistryBuilder {
        self.policy = policy;
        self
    }

    /// Associates `op` with the verb `V` for the type `T`.
    pub fn register<V: Verb, T: 'static>(&mut self, op: V::Op<T>) -> &mut RegistryBuilder {
        let entry = Entry {
            op: Box::new(op),
            type_name: any::type_name::<T>(),
            verb: V::NAME,
        };

        match self.entries.entry(Key::of::<V, T>()) {
            Slot::Vacant(slot) => {
                trace!(type_name = entry.type_name, verb = entry.verb, "registered operation");
                slot.insert(entry);
            },
            Slot::Occupied(mut slot) => match self.policy {
                DuplicatePolicy::Override => {
                    debug!(type_name = entry.type_name, verb = entry.verb, "overriding operation");
                    slot.insert(entry);
                },
                DuplicatePolicy::Reject => {
                    debug!(
                        type_name = entry.type_name,
                        verb = entry.verb,
                        "rejecting duplicate operation"
                    );
                    // Only the first conflict is reported.
                    if self.conflict.is_none() {
                        self.conflict = Some(DuplicateRegistration {
                            type_name: entry.type_name,
                            verb: entry.verb,
                        });
                    }
                },
            },
        }
        self
    }

    /// Associates `op` with the verb `V` for the type `T`, consuming and returning the builder.
    pub fn with<V: Verb, T: 'static>(mut self, op: V::Op<T>) -> RegistryBuilder {
        self.register::<V, T>(op);
        self
    }

    /// Registers `T`'s [`Comparable`] implementation.
    pub fn with_comparable<T: Comparable + 'static>(self) -> RegistryBuilder {
        let op: fn(&T, &T) -> Ordering = T::compare;
        self.with::<Compare, T>(op)
    }

    /// Registers `T`'s [`Stringable`] implementation.
    pub fn with_stringable<T: Stringable + 'static>(self) -> RegistryBuilder {
        let op: fn(&T) -> String = T::stringify;
        self.with::<Stringify, T>(op)
    }

    /// Registers `T`'s [`Parsable`] implementation, using its lenient
    /// [`parse`](Parsable::parse).
    pub fn with_parsable<T: Parsable + 'static>(self) -> RegistryBuilder {
        let op: fn(&str) -> Result<T, ParseError> = T::parse;
        self.with::<Parse, T>(op)
    }

    /// Registers `T`'s [`Iterable`] implementation, without a `prev` operation.
    pub fn with_iterable<T: Iterable + 'static>(self) -> RegistryBuilder
    where
        T::Cursor: 'static,
    {
        self.with::<Iterate<T::Cursor>, T>(CursorOps::forward_only())
    }

    /// Registers `T`'s [`ReverseIterable`] implementation, including `prev`.
    pub fn with_reverse_iterable<T: ReverseIterable + 'static>(self) -> RegistryBuilder
    where
        T::Cursor: 'static,
    {
        self.with::<Iterate<T::Cursor>, T>(CursorOps::bidirectional())
    }

    /// Finishes the registry.
    ///
    /// # Errors
    /// Returns the first [`DuplicateRegistration`] if the policy was [`DuplicatePolicy::Reject`]
    /// while a pair was registered twice.
    pub fn build(self) -> Result<Registry, DuplicateRegistration> {
        if let Some(conflict) = self.conflict {
            return Err(conflict);
        }

        debug!(entries = self.entries.len(), policy = ?self.policy, "built operation registry");
        Ok(Registry {
            entries: self.entries,
        })
    }
}

impl Default for RegistryBuilder {
    fn default() -> RegistryBuilder {
        RegistryBuilder::new()
    }
}

impl Debug for RegistryBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("policy", &self.policy)
            .field("entries", &self.entries.len())
            .field("conflict", &self.conflict)
            .finish()
    }
}
