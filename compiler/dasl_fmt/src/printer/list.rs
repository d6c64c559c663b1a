//! Cons Chain Formatting
//!
//! Walks the chain head to tail without recursing per node, so list length
//! never deepens the native stack. Elements are joined with `, `; a rest
//! capture switches to ` :: rest` and ends the list; a terminator ends it
//! wherever it appears.

use dasl_ir::{ListCons, StringLookup};

use super::Render;
use crate::context::RenderEnv;

impl<T: Render> Render for ListCons<T> {
    fn render_to<I: StringLookup + ?Sized>(&self, env: &mut RenderEnv<'_, I>, out: &mut String) {
        out.push('[');
        let mut node = self;
        let mut first = true;
        loop {
            match (node.value(), node.tail()) {
                (Some(value), tail) => {
                    if !first {
                        out.push_str(", ");
                    }
                    first = false;
                    value.render_to(env, out);
                    match tail {
                        Some(next) => node = next,
                        None => break,
                    }
                }
                (None, Some(rest)) => {
                    // A rest node whose tail holds nothing closes like `[]`
                    if let Some(value) = rest.value() {
                        out.push_str(" :: ");
                        value.render_to(env, out);
                    }
                    break;
                }
                (None, None) => break,
            }
        }
        out.push(']');
    }
}
