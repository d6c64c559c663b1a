//! Statement Types
//!
//! Statements make up function, module and branch bodies. [`Program`] is the
//! root of every tree.

use super::expr::Expr;
use super::patterns::Pat;
use super::types::Type;
use dasl_stack::ensure_sufficient_stack;

use crate::{Name, Span, Spanned};

/// Statement node.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

/// Statement kinds.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    /// Function definition: `def f(x: int) => int: ... end`
    Def(Function),

    /// Record type declaration: `type Point = { x: float, y: float }`
    Record(RecordDecl),

    /// Value binding: `val x = 3`
    Val { name: Name, init: Expr },

    /// Nested module: `module Geometry ... end`
    Module(ModuleDecl),

    /// Expression statement
    Expr(Expr),

    /// Iteration: `for x in xs`
    For { pattern: Pat, container: Expr },
}

/// Function definition. Lambdas do not exist, so a definition is always
/// a statement.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub name: Name,
    pub params: Vec<Pat>,
    pub return_ty: Option<Type>,
    pub body: Body,
}

/// Record type declaration.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordDecl {
    pub name: Name,
    pub fields: Vec<RecordField>,
}

/// `field: type` in a record declaration.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordField {
    pub name: Name,
    pub ty: Type,
}

/// Named module. Opens its own scope.
#[derive(Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleDecl {
    pub name: Name,
    pub body: Body,
}

/// Ordered statement list owned by a block.
#[derive(Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body(Vec<Stmt>);

/// Root of a parse tree: the top-level statements of one file.
#[derive(Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub body: Body,
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Stmt {
            kind,
            span: Span::DUMMY,
        }
    }

    pub fn def(name: Name, params: Vec<Pat>, return_ty: Option<Type>, body: Body) -> Self {
        Self::new(StmtKind::Def(Function {
            name,
            params,
            return_ty,
            body,
        }))
    }

    pub fn record(name: Name, fields: Vec<RecordField>) -> Self {
        Self::new(StmtKind::Record(RecordDecl { name, fields }))
    }

    pub fn val(name: Name, init: Expr) -> Self {
        Self::new(StmtKind::Val { name, init })
    }

    pub fn module(name: Name, body: Body) -> Self {
        Self::new(StmtKind::Module(ModuleDecl { name, body }))
    }

    pub fn expr(expr: Expr) -> Self {
        Self::new(StmtKind::Expr(expr))
    }

    pub fn for_in(pattern: Pat, container: Expr) -> Self {
        Self::new(StmtKind::For { pattern, container })
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl RecordField {
    pub fn new(name: Name, ty: Type) -> Self {
        RecordField { name, ty }
    }
}

impl Body {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Body(stmts)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.0.iter()
    }

    pub fn stmts(&self) -> &[Stmt] {
        &self.0
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.0.push(stmt);
    }
}

impl From<Vec<Stmt>> for Body {
    fn from(stmts: Vec<Stmt>) -> Self {
        Body(stmts)
    }
}

impl FromIterator<Stmt> for Body {
    fn from_iter<T: IntoIterator<Item = Stmt>>(iter: T) -> Self {
        Body(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Body {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program {
            body: Body::new(statements),
        }
    }

    pub fn statements(&self) -> &[Stmt] {
        self.body.stmts()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let kind = std::mem::replace(&mut self.kind, StmtKind::Expr(Expr::unit()));
        ensure_sufficient_stack(move || drop(kind));
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}
