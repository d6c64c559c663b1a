//! Parse tree node families.
//!
//! The tree is built bottom-up by the grammar driver and handed over as a
//! [`Program`]. Each family is a struct holding a `kind` enum plus its
//! span (and, for patterns and expressions, an optional type annotation).
//!
//! # Module Structure
//!
//! - `types`: Type annotations (`Type`, `TypeKind`, `PrimKind`)
//! - `patterns`: Patterns (`Pat`, `PatKind`) and their entries
//! - `expr`: Expressions (`Expr`, `ExprKind`) and their entries
//! - `stmt`: Statements (`Stmt`, `StmtKind`), `Body`, `Program`
//! - `list`: Cons chains shared by list patterns and list expressions
//! - `operators`: Binary and unary operators

mod expr;
mod list;
mod operators;
mod patterns;
mod stmt;
mod types;

pub use expr::{CaseArm, Expr, ExprKind, FieldInit, MapEntry};
pub use list::{ConsShape, Elements, ListCons};
pub use operators::{BinaryOp, UnaryOp};
pub use patterns::{FieldPat, MapPatEntry, Pat, PatKind};
pub use stmt::{Body, Function, ModuleDecl, Program, RecordDecl, RecordField, Stmt, StmtKind};
pub use types::{PrimKind, Type, TypeKind};
