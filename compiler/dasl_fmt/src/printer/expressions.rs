//! Expression Formatting
//!
//! Most expressions render on a single line. `if` and `case` own blocks:
//! their children go on new lines one scope deeper, and the depth is
//! restored before the expression returns.

use dasl_ir::{BinaryOp, Expr, ExprKind, StringLookup};
use dasl_stack::ensure_sufficient_stack;

use super::helpers::{render_block, render_braced, render_separated};
use super::Render;
use crate::context::RenderEnv;

impl Render for Expr {
    fn render_to<I: StringLookup + ?Sized>(&self, env: &mut RenderEnv<'_, I>, out: &mut String) {
        // Annotations are kept on the tree for later stages but not echoed.
        ensure_sufficient_stack(|| match &self.kind {
            ExprKind::IfElse {
                cond,
                body,
                else_body,
            } => {
                out.push_str("if ");
                cond.render_to(env, out);
                out.push_str(" then\n");
                render_block(body, env, out);
                if let Some(else_body) = else_body {
                    env.write_indent(out);
                    out.push_str("else\n");
                    render_block(else_body, env, out);
                }
                env.write_indent(out);
                out.push_str("end");
            }
            ExprKind::Case { scrutinee, arms } => {
                out.push_str("case ");
                scrutinee.render_to(env, out);
                out.push_str(" of");
                let mut scope = env.scope();
                for arm in arms {
                    out.push('\n');
                    scope.write_indent(out);
                    out.push_str("| ");
                    arm.pattern.render_to(&mut *scope, out);
                    out.push_str(" => ");
                    arm.body.render_to(&mut *scope, out);
                }
            }
            ExprKind::Record { name, fields } => {
                name.render_to(env, out);
                out.push(' ');
                render_braced(fields, env, out, |field, env, out| {
                    out.push_str(env.lookup(field.name));
                    out.push_str(": ");
                    field.value.render_to(env, out);
                });
            }
            ExprKind::List(chain) => chain.render_to(env, out),
            ExprKind::Map(entries) => render_braced(entries, env, out, |entry, env, out| {
                entry.key.render_to(env, out);
                out.push_str(" => ");
                entry.value.render_to(env, out);
            }),
            ExprKind::Value(value) => value.render_to(env, out),
            ExprKind::Symbol(symbol) => symbol.render_to(env, out),
            ExprKind::Call { callee, args } => {
                callee.render_to(env, out);
                out.push('(');
                render_separated(args, ", ", env, out);
                out.push(')');
            }
            ExprKind::Binary {
                op: BinaryOp::Index,
                lhs,
                rhs,
            } => {
                lhs.render_to(env, out);
                out.push('[');
                rhs.render_to(env, out);
                out.push(']');
            }
            ExprKind::Binary { op, lhs, rhs } => {
                out.push('(');
                lhs.render_to(env, out);
                out.push(' ');
                out.push_str(op.as_symbol());
                out.push(' ');
                rhs.render_to(env, out);
                out.push(')');
            }
            ExprKind::Unary { op, operand } => {
                out.push_str(op.as_symbol());
                operand.render_to(env, out);
            }
            ExprKind::Compound(exprs) => render_separated(exprs, "; ", env, out),
        });
    }
}
