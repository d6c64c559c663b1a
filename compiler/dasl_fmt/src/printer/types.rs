//! Type Annotation Formatting

use dasl_ir::{StringLookup, Type, TypeKind};

use super::Render;
use crate::context::RenderEnv;

impl Render for Type {
    fn render_to<I: StringLookup + ?Sized>(&self, env: &mut RenderEnv<'_, I>, out: &mut String) {
        match &self.kind {
            TypeKind::List => out.push_str("list"),
            TypeKind::Map => out.push_str("map"),
            TypeKind::Record(symbol) => symbol.render_to(env, out),
            TypeKind::Any => out.push_str("any"),
            TypeKind::Prim(kind) => out.push_str(kind.keyword()),
        }
    }
}
