//! DASL Printer
//!
//! Canonical text rendering for DASL parse trees.
//!
//! # Architecture
//!
//! Rendering is a single top-down pass. Every node implements [`Render`],
//! which appends its text to an output buffer while a [`RenderEnv`] carries
//! the interner and the current scope depth. Block-owning nodes enter a
//! scope through a guard, so depth is always restored when they return.
//!
//! # Modules
//!
//! - [`context`]: Render environment, scope guard and configuration
//! - [`printer`]: The `Render` trait and per-node rendering rules
//!
//! # Example
//!
//! ```
//! use dasl_fmt::render_program;
//! use dasl_ir::{Expr, Program, Stmt, StringInterner, Value};
//!
//! let mut interner = StringInterner::new();
//! let x = interner.intern("x");
//! let program = Program::new(vec![Stmt::val(x, Expr::value(Value::Int(3)))]);
//!
//! assert_eq!(render_program(&program, &interner), "val x = 3\n");
//! ```

pub mod context;
pub mod printer;

pub use context::{RenderConfig, RenderEnv, Scope, INDENT_WIDTH};
pub use printer::Render;

use dasl_ir::{Program, StringLookup};

/// Render a whole program with the default configuration.
///
/// Each top-level statement is followed by a newline.
pub fn render_program<I: StringLookup + ?Sized>(program: &Program, interner: &I) -> String {
    render_program_with_config(program, interner, RenderConfig::default())
}

/// Render a whole program with a custom configuration.
#[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
pub fn render_program_with_config<I: StringLookup + ?Sized>(
    program: &Program,
    interner: &I,
    config: RenderConfig,
) -> String {
    let mut env = RenderEnv::with_config(interner, config);
    let mut out = String::new();
    program.render_to(&mut env, &mut out);
    debug_assert_eq!(env.depth(), 0, "unbalanced scopes after render");
    tracing::debug!(bytes = out.len(), "rendered program");
    out
}

/// Render any single node at depth 0.
pub fn render<T: Render + ?Sized, I: StringLookup + ?Sized>(node: &T, interner: &I) -> String {
    node.render(&mut RenderEnv::new(interner))
}
