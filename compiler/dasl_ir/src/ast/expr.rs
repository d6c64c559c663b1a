//! Expression Types
//!
//! Core expression nodes and variants.
//!
//! # Ownership
//!
//! Every child is owned through a `Box` or `Vec`: the tree is never shared
//! and never cyclic. Constructors take their children by value. Dropping a
//! node grows the stack as needed, like rendering does.

use super::list::ListCons;
use super::operators::{BinaryOp, UnaryOp};
use super::patterns::Pat;
use super::stmt::Body;
use super::types::Type;
use dasl_stack::ensure_sufficient_stack;

use crate::{Name, Span, Spanned, SymbolRef, Value};

/// Expression node.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    /// Explicit annotation, if the source gave one. Stored for later
    /// stages; this crate never infers types.
    pub ty: Option<Type>,
    pub span: Span,
}

/// Expression variants.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// `if cond then ... else ... end`
    IfElse {
        cond: Box<Expr>,
        body: Body,
        else_body: Option<Body>,
    },

    /// `case scrutinee of | pat => expr ...`
    ///
    /// Arms are kept in source order; the first matching arm wins.
    Case {
        scrutinee: Box<Expr>,
        arms: Vec<CaseArm>,
    },

    /// Record construction: `Point { x: 1, y: 2 }`
    Record {
        name: SymbolRef,
        fields: Vec<FieldInit>,
    },

    /// List: `[1, 2 :: rest]`
    List(ListCons<Expr>),

    /// Map: `{ :a => 1 }`
    Map(Vec<MapEntry>),

    /// Literal
    Value(Value),

    /// Variable reference: `x`, `Mod.x`
    Symbol(SymbolRef),

    /// Function call: `f(a, b)`
    Call { callee: SymbolRef, args: Vec<Expr> },

    /// Binary operation, including indexing
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// Unary operation
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `a; b; c`, a sequence with its own lexical scope
    Compound(Vec<Expr>),
}

/// `| pattern => body` arm of a case expression.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseArm {
    pub pattern: Pat,
    pub body: Expr,
}

/// `field: value` in a record expression.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldInit {
    pub name: Name,
    pub value: Expr,
}

/// `key => value` in a map expression.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapEntry {
    pub key: Expr,
    pub value: Expr,
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr {
            kind,
            ty: None,
            span: Span::DUMMY,
        }
    }

    pub fn if_else(cond: Expr, body: Body, else_body: Option<Body>) -> Self {
        Self::new(ExprKind::IfElse {
            cond: Box::new(cond),
            body,
            else_body,
        })
    }

    pub fn case(scrutinee: Expr, arms: Vec<CaseArm>) -> Self {
        Self::new(ExprKind::Case {
            scrutinee: Box::new(scrutinee),
            arms,
        })
    }

    pub fn record(name: SymbolRef, fields: Vec<FieldInit>) -> Self {
        Self::new(ExprKind::Record { name, fields })
    }

    /// `[elements... :: tail]`, built as a cons chain.
    pub fn list(elements: Vec<Expr>, tail: Option<Expr>) -> Self {
        Self::new(ExprKind::List(ListCons::make(elements, tail)))
    }

    pub fn map(entries: Vec<MapEntry>) -> Self {
        Self::new(ExprKind::Map(entries))
    }

    pub fn value(value: Value) -> Self {
        Self::new(ExprKind::Value(value))
    }

    /// `()`
    pub fn unit() -> Self {
        Self::value(Value::Unit)
    }

    pub fn symbol(symbol: SymbolRef) -> Self {
        Self::new(ExprKind::Symbol(symbol))
    }

    pub fn call(callee: SymbolRef, args: Vec<Expr>) -> Self {
        Self::new(ExprKind::Call { callee, args })
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::new(ExprKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::new(ExprKind::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn compound(exprs: Vec<Expr>) -> Self {
        Self::new(ExprKind::Compound(exprs))
    }

    #[must_use]
    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Attach an annotation discovered after the expression was built.
    pub fn set_type(&mut self, ty: Type) {
        self.ty = Some(ty);
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl CaseArm {
    pub fn new(pattern: Pat, body: Expr) -> Self {
        CaseArm { pattern, body }
    }
}

impl FieldInit {
    pub fn new(name: Name, value: Expr) -> Self {
        FieldInit { name, value }
    }
}

impl MapEntry {
    pub fn new(key: Expr, value: Expr) -> Self {
        MapEntry { key, value }
    }
}

// Children are destroyed inside the stack guard, one level at a time, so
// nesting depth never overflows the thread stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let kind = std::mem::replace(&mut self.kind, ExprKind::Value(Value::Unit));
        ensure_sufficient_stack(move || drop(kind));
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}
