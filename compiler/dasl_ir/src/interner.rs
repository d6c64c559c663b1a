//! String interner for identifiers and literal text.
//!
//! Maps each distinct string to a dense [`Name`] handle and back. One
//! interner is created per compilation unit and must outlive every tree
//! whose handles it issued.
//!
//! # Concurrency
//!
//! [`StringInterner`] is a plain single-owner structure: interning takes
//! `&mut self`, lookups take `&self`. When several threads need the same
//! interner (for example to render several trees at once), wrap it in a
//! [`SharedInterner`], which serializes writes behind a `RwLock` and lets
//! readers proceed in parallel.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use rustc_hash::FxHashMap;
use thiserror::Error;

use super::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternError {
    /// Every `u32` handle has already been issued.
    #[error("interner exceeded capacity: {count} strings, max is {max}", max = u32::MAX)]
    Overflow { count: usize },
}

/// Bidirectional text <-> [`Name`] table.
///
/// Handles are assigned in first-seen order starting at 0, and interning the
/// same text twice yields the same handle.
#[derive(Default)]
pub struct StringInterner {
    /// Text to handle.
    map: FxHashMap<Box<str>, Name>,
    /// Handle index to text.
    strings: Vec<Box<str>>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with room for `capacity` distinct strings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            strings: Vec::with_capacity(capacity),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.map.get(s) {
            return Ok(name);
        }
        self.insert(Box::from(s))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Intern an owned String, reusing its buffer when the text is new.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern_owned(&mut self, s: String) -> Name {
        if let Some(&name) = self.map.get(s.as_str()) {
            return name;
        }
        self.insert(s.into_boxed_str())
            .unwrap_or_else(|e| panic!("{e}"))
    }

    fn insert(&mut self, text: Box<str>) -> Result<Name, InternError> {
        let count = self.strings.len();
        let raw = u32::try_from(count).map_err(|_| InternError::Overflow { count })?;
        let name = Name::from_raw(raw);
        self.strings.push(text.clone());
        self.map.insert(text, name);
        Ok(name)
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if `name` was not issued by this interner. A foreign handle
    /// means the tree was built against a different interner.
    pub fn lookup(&self, name: Name) -> &str {
        match self.try_lookup(name) {
            Some(s) => s,
            None => panic!(
                "{name:?} was not issued by this interner ({} strings interned)",
                self.strings.len()
            ),
        }
    }

    /// Look up the string for a Name, or `None` for an unknown handle.
    pub fn try_lookup(&self, name: Name) -> Option<&str> {
        self.strings.get(name.index()).map(AsRef::as_ref)
    }

    /// Number of distinct strings interned.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// All interned strings in the order their handles were issued.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &str)> + '_ {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (Name::from_index(i), s.as_ref()))
    }
}

/// Trait for looking up interned string names.
///
/// The printer is generic over this trait so it can read through a plain
/// interner, a read guard of a [`SharedInterner`], or a test double.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Interner shared between threads.
///
/// Interning takes the write lock; [`SharedInterner::read`] hands out a read
/// guard that can back any number of concurrent renders.
#[derive(Clone, Default)]
pub struct SharedInterner(Arc<RwLock<StringInterner>>);

impl SharedInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an interner that was filled during single-threaded construction.
    pub fn from_interner(interner: StringInterner) -> Self {
        SharedInterner(Arc::new(RwLock::new(interner)))
    }

    /// Intern a string under the write lock.
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: most strings are already interned
        if let Some(&name) = self.0.read().map.get(s) {
            return name;
        }
        self.0.write().intern(s)
    }

    /// Acquire shared read access.
    pub fn read(&self) -> RwLockReadGuard<'_, StringInterner> {
        self.0.read()
    }

    /// Look up the string for a Name, copying it out of the lock.
    pub fn lookup_owned(&self, name: Name) -> String {
        self.0.read().lookup(name).to_owned()
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}
