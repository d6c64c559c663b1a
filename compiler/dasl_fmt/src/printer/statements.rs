//! Statement Formatting
//!
//! Definitions and modules own blocks. A definition separates its body
//! statements with `;` and closes with `end`; a module lists its members one
//! per line. Both put `end` at the depth the statement started at.

use dasl_ir::{Function, ModuleDecl, Program, Stmt, StmtKind, StringLookup};
use dasl_stack::ensure_sufficient_stack;

use super::helpers::{render_block, render_braced, render_separated};
use super::Render;
use crate::context::RenderEnv;

impl Render for Stmt {
    fn render_to<I: StringLookup + ?Sized>(&self, env: &mut RenderEnv<'_, I>, out: &mut String) {
        ensure_sufficient_stack(|| match &self.kind {
            StmtKind::Def(function) => render_def(function, env, out),
            StmtKind::Record(decl) => {
                out.push_str("type ");
                out.push_str(env.lookup(decl.name));
                out.push_str(" = ");
                render_braced(&decl.fields, env, out, |field, env, out| {
                    out.push_str(env.lookup(field.name));
                    out.push_str(": ");
                    field.ty.render_to(env, out);
                });
            }
            StmtKind::Val { name, init } => {
                out.push_str("val ");
                out.push_str(env.lookup(*name));
                out.push_str(" = ");
                init.render_to(env, out);
            }
            StmtKind::Module(module) => render_module(module, env, out),
            StmtKind::Expr(expr) => expr.render_to(env, out),
            StmtKind::For { pattern, container } => {
                out.push_str("for ");
                pattern.render_to(env, out);
                out.push_str(" in ");
                container.render_to(env, out);
            }
        });
    }
}

fn render_def<I: StringLookup + ?Sized>(
    function: &Function,
    env: &mut RenderEnv<'_, I>,
    out: &mut String,
) {
    out.push_str("def ");
    out.push_str(env.lookup(function.name));
    out.push('(');
    render_separated(&function.params, ", ", env, out);
    out.push(')');
    if let Some(ty) = &function.return_ty {
        out.push_str(" => ");
        ty.render_to(env, out);
    }
    out.push_str(":\n");
    {
        let mut scope = env.scope();
        for (i, stmt) in function.body.iter().enumerate() {
            if i > 0 {
                out.push_str(";\n");
            }
            scope.write_indent(out);
            stmt.render_to(&mut *scope, out);
        }
        if !function.body.is_empty() {
            out.push('\n');
        }
    }
    env.write_indent(out);
    out.push_str("end");
}

fn render_module<I: StringLookup + ?Sized>(
    module: &ModuleDecl,
    env: &mut RenderEnv<'_, I>,
    out: &mut String,
) {
    out.push_str("module ");
    out.push_str(env.lookup(module.name));
    out.push('\n');
    render_block(&module.body, env, out);
    env.write_indent(out);
    out.push_str("end");
}

impl Render for Program {
    /// Top-level statements, each followed by a newline. The root has no
    /// header of its own.
    fn render_to<I: StringLookup + ?Sized>(&self, env: &mut RenderEnv<'_, I>, out: &mut String) {
        for stmt in self.statements() {
            env.write_indent(out);
            stmt.render_to(env, out);
            out.push('\n');
        }
    }
}
