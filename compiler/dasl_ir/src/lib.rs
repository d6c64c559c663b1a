//! DASL IR - Parse Tree Types
//!
//! This crate contains the data model produced by the DASL grammar driver:
//! - Names for interned identifiers and literal text
//! - Spans for source locations
//! - Literal values and qualified symbol references
//! - Parse tree nodes (Type, Pat, Expr, Stmt, Program)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifier and literal text becomes `Name(u32)`
//! - **Own Everything**: every node owns its children exclusively; the tree
//!   is acyclic and nodes are moved, never shared
//! - **Closed Variants**: each node family is an enum matched exhaustively
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.

pub mod ast;
mod interner;
mod name;
mod span;
mod symbol;
mod value;

pub use ast::{
    BinaryOp, Body, CaseArm, ConsShape, Expr, ExprKind, FieldInit, FieldPat, Function, ListCons,
    MapEntry, MapPatEntry, ModuleDecl, Pat, PatKind, PrimKind, Program, RecordDecl, RecordField,
    Stmt, StmtKind, Type, TypeKind, UnaryOp,
};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError, Spanned};
pub use symbol::SymbolRef;
pub use value::{Value, ValueKind};
