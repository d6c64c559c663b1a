//! Separator-joined sequences.
//!
//! Collections, argument lists and parameter lists all join their entries
//! with a separator and emit nothing between the brackets when empty.
//! Block bodies put each statement on its own line.

use dasl_ir::{Body, StringLookup};

use super::Render;
use crate::context::RenderEnv;

/// Render each item, separated by `sep`.
pub(super) fn render_separated<'a, T, I>(
    items: impl IntoIterator<Item = &'a T>,
    sep: &str,
    env: &mut RenderEnv<'_, I>,
    out: &mut String,
) where
    T: Render + 'a,
    I: StringLookup + ?Sized,
{
    render_separated_with(items, sep, env, out, |item, env, out| {
        item.render_to(env, out);
    });
}

/// Render each item with `emit`, separated by `sep`.
pub(super) fn render_separated_with<'i, T, I, F>(
    items: impl IntoIterator<Item = T>,
    sep: &str,
    env: &mut RenderEnv<'i, I>,
    out: &mut String,
    mut emit: F,
) where
    I: StringLookup + ?Sized,
    F: FnMut(T, &mut RenderEnv<'i, I>, &mut String),
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        emit(item, env, out);
    }
}

/// Render a braced collection: `{}` when empty, otherwise `{ a, b }`.
pub(super) fn render_braced<'i, T, I, F>(
    entries: &[T],
    env: &mut RenderEnv<'i, I>,
    out: &mut String,
    emit: F,
) where
    I: StringLookup + ?Sized,
    F: FnMut(&T, &mut RenderEnv<'i, I>, &mut String),
{
    if entries.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{ ");
    render_separated_with(entries, ", ", env, out, emit);
    out.push_str(" }");
}

/// Render a body one scope deeper, each statement on its own indented line.
pub(super) fn render_block<I: StringLookup + ?Sized>(
    body: &Body,
    env: &mut RenderEnv<'_, I>,
    out: &mut String,
) {
    let mut scope = env.scope();
    for stmt in body {
        scope.write_indent(out);
        stmt.render_to(&mut *scope, out);
        out.push('\n');
    }
}
