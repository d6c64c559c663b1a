//! Patterns
//!
//! Patterns appear as function parameters, in `case` arms and as the
//! iteration binding of `for`. Every pattern may carry a type annotation.

use super::list::ListCons;
use super::types::Type;
use dasl_stack::ensure_sufficient_stack;

use crate::{Name, Span, Spanned, StringInterner, StringLookup, SymbolRef, Value};

/// Pattern node.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pat {
    pub kind: PatKind,
    /// Explicit annotation: `x: int`
    pub ty: Option<Type>,
    pub span: Span,
}

/// Pattern variants.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatKind {
    /// List: `[a, b :: rest]`
    List(ListCons<Pat>),
    /// Map: `{ :k => v }`
    Map(Vec<MapPatEntry>),
    /// Record: `Point { x: px, y: py }`
    ///
    /// Fields keep source order. Duplicate field names are left for
    /// semantic analysis to reject.
    Record {
        name: SymbolRef,
        fields: Vec<FieldPat>,
    },
    /// Binding or, when the name is `_`, the wildcard.
    Symbol(SymbolRef),
    /// Literal: `42`, `"hello"`, `:ok`
    Value(Value),
}

/// `key => value` entry of a map pattern.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPatEntry {
    pub key: Pat,
    pub value: Pat,
}

/// `field: pattern` entry of a record pattern.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldPat {
    pub name: Name,
    pub pattern: Pat,
}

impl Pat {
    pub fn new(kind: PatKind) -> Self {
        Pat {
            kind,
            ty: None,
            span: Span::DUMMY,
        }
    }

    /// `[elements... :: tail]`, built as a cons chain.
    pub fn list(elements: Vec<Pat>, tail: Option<Pat>) -> Self {
        Self::new(PatKind::List(ListCons::make(elements, tail)))
    }

    pub fn map(entries: Vec<MapPatEntry>) -> Self {
        Self::new(PatKind::Map(entries))
    }

    pub fn record(name: SymbolRef, fields: Vec<FieldPat>) -> Self {
        Self::new(PatKind::Record { name, fields })
    }

    pub fn symbol(symbol: SymbolRef) -> Self {
        Self::new(PatKind::Symbol(symbol))
    }

    /// `_`
    pub fn wildcard(interner: &mut StringInterner) -> Self {
        Self::symbol(SymbolRef::new(interner.intern("_")))
    }

    pub fn value(value: Value) -> Self {
        Self::new(PatKind::Value(value))
    }

    #[must_use]
    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Attach an annotation discovered after the pattern was built.
    pub fn set_type(&mut self, ty: Type) {
        self.ty = Some(ty);
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Whether this is the unqualified `_` binding.
    ///
    /// # Panics
    /// Panics if the binding's handle was not issued by `interner`.
    pub fn is_wildcard<I: StringLookup + ?Sized>(&self, interner: &I) -> bool {
        match &self.kind {
            PatKind::Symbol(symbol) => {
                !symbol.is_qualified() && interner.lookup(symbol.name()) == "_"
            }
            _ => false,
        }
    }
}

impl MapPatEntry {
    pub fn new(key: Pat, value: Pat) -> Self {
        MapPatEntry { key, value }
    }
}

impl FieldPat {
    pub fn new(name: Name, pattern: Pat) -> Self {
        FieldPat { name, pattern }
    }
}

impl Drop for Pat {
    fn drop(&mut self) {
        let kind = std::mem::replace(&mut self.kind, PatKind::Value(Value::Unit));
        ensure_sufficient_stack(move || drop(kind));
    }
}

impl Spanned for Pat {
    fn span(&self) -> Span {
        self.span
    }
}
