//! Literal Value and Symbol Formatting

use std::fmt::Write;

use dasl_ir::{StringLookup, SymbolRef, Value};

use super::Render;
use crate::context::RenderEnv;

impl Render for Value {
    fn render_to<I: StringLookup + ?Sized>(&self, env: &mut RenderEnv<'_, I>, out: &mut String) {
        match *self {
            Value::Str(name) => write_string(env.lookup(name), out),
            Value::Unit => out.push_str("()"),
            Value::Int(n) => {
                // Writing to a String is infallible
                let _ = write!(out, "{n}");
            }
            Value::Float(bits) => write_float(f64::from_bits(bits), out),
            Value::Bool(b) => out.push_str(if b { "true" } else { "false" }),
            Value::Atom(name) => {
                out.push(':');
                out.push_str(env.lookup(name));
            }
        }
    }
}

impl Render for SymbolRef {
    fn render_to<I: StringLookup + ?Sized>(&self, env: &mut RenderEnv<'_, I>, out: &mut String) {
        for module in self.modules() {
            out.push_str(env.lookup(*module));
            out.push('.');
        }
        out.push_str(env.lookup(self.name()));
    }
}

/// Integral floats keep a `.0` so they re-tokenize as floats.
fn write_float(f: f64, out: &mut String) {
    // Writing to a String is infallible
    if f.fract() == 0.0 {
        let _ = write!(out, "{f:.1}");
    } else {
        let _ = write!(out, "{f}");
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out.push('"');
}
