//! Literal values.
//!
//! A closed set of literal kinds shared by value patterns and value
//! expressions. Text-bearing variants hold interned handles.

use crate::Name;

/// Literal value.
///
/// Floats are stored as bits so the whole tree can derive `Eq` and `Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// String literal (interned, without quotes or escapes)
    Str(Name),
    /// Unit: ()
    Unit,
    /// Integer literal
    Int(u64),
    /// Float literal (stored as bits)
    Float(u64),
    /// Boolean literal
    Bool(bool),
    /// Atom literal: `:name` (interned, without the colon)
    Atom(Name),
}

/// Tag of a [`Value`], without its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Str,
    Unit,
    Int,
    Float,
    Bool,
    Atom,
}

impl Value {
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f.to_bits())
    }

    /// The float payload, if this is a float.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Value::Float(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }

    pub const fn kind(self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Unit => ValueKind::Unit,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Atom(_) => ValueKind::Atom,
        }
    }
}
