//! Type annotations.

use crate::{Span, Spanned, SymbolRef};

/// Type annotation node.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Type {
    pub kind: TypeKind,
    pub span: Span,
}

/// Type annotation variants.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    /// `list`
    List,
    /// `map`
    Map,
    /// Named record type: `Geometry.Point`
    Record(SymbolRef),
    /// `any`
    Any,
    /// Built-in scalar type
    Prim(PrimKind),
}

/// Built-in scalar types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimKind {
    String,
    Int,
    Float,
    Bool,
    Atom,
    Unit,
}

impl PrimKind {
    /// Source spelling of the type.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimKind::String => "string",
            PrimKind::Int => "int",
            PrimKind::Float => "float",
            PrimKind::Bool => "bool",
            PrimKind::Atom => "atom",
            PrimKind::Unit => "()",
        }
    }
}

impl Type {
    pub fn new(kind: TypeKind) -> Self {
        Type {
            kind,
            span: Span::DUMMY,
        }
    }

    pub fn list() -> Self {
        Self::new(TypeKind::List)
    }

    pub fn map() -> Self {
        Self::new(TypeKind::Map)
    }

    pub fn record(symbol: SymbolRef) -> Self {
        Self::new(TypeKind::Record(symbol))
    }

    pub fn any() -> Self {
        Self::new(TypeKind::Any)
    }

    pub fn prim(kind: PrimKind) -> Self {
        Self::new(TypeKind::Prim(kind))
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl Spanned for Type {
    fn span(&self) -> Span {
        self.span
    }
}
