//! Pattern Formatting
//!
//! An annotated pattern renders its type as a `: T` suffix.

use dasl_ir::{Pat, PatKind, StringLookup};
use dasl_stack::ensure_sufficient_stack;

use super::helpers::render_braced;
use super::Render;
use crate::context::RenderEnv;

impl Render for Pat {
    fn render_to<I: StringLookup + ?Sized>(&self, env: &mut RenderEnv<'_, I>, out: &mut String) {
        ensure_sufficient_stack(|| {
            match &self.kind {
                PatKind::List(chain) => chain.render_to(env, out),
                PatKind::Map(entries) => render_braced(entries, env, out, |entry, env, out| {
                    entry.key.render_to(env, out);
                    out.push_str(" => ");
                    entry.value.render_to(env, out);
                }),
                PatKind::Record { name, fields } => {
                    name.render_to(env, out);
                    out.push(' ');
                    render_braced(fields, env, out, |field, env, out| {
                        out.push_str(env.lookup(field.name));
                        out.push_str(": ");
                        field.pattern.render_to(env, out);
                    });
                }
                PatKind::Symbol(symbol) => symbol.render_to(env, out),
                PatKind::Value(value) => value.render_to(env, out),
            }
            if let Some(ty) = &self.ty {
                out.push_str(": ");
                ty.render_to(env, out);
            }
        });
    }
}
