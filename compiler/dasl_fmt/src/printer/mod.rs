//! Canonical Printer
//!
//! Turns parse tree nodes back into source text. Output is a pure function
//! of the node, the interner and the current scope depth; nodes are never
//! mutated.
//!
//! # Module Structure
//!
//! - `literals`: Values and symbol references
//! - `types`: Type annotations
//! - `patterns`: Patterns
//! - `expressions`: Expressions, including block-owning `if` and `case`
//! - `statements`: Statements and the `Program` root
//! - `list`: Cons chains shared by list patterns and list expressions
//! - `helpers`: Separator-joined sequences
//!
//! # Layout
//!
//! Everything renders on one line except block bodies. A block renders each
//! child statement on its own line, one scope deeper than the node that owns
//! it, and closes with `end` at the owner's depth. Binary operations are
//! always parenthesized so the output never depends on precedence rules.

mod expressions;
mod helpers;
mod list;
mod literals;
mod patterns;
mod statements;
mod types;

use dasl_ir::StringLookup;

use crate::context::RenderEnv;

/// A node that has a canonical textual form.
pub trait Render {
    /// Append this node's text to `out`.
    fn render_to<I: StringLookup + ?Sized>(&self, env: &mut RenderEnv<'_, I>, out: &mut String);

    /// Render into a fresh string.
    fn render<I: StringLookup + ?Sized>(&self, env: &mut RenderEnv<'_, I>) -> String {
        let mut out = String::new();
        self.render_to(env, &mut out);
        out
    }
}
