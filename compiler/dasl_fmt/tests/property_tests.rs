//! Property-based tests for the DASL printer.
//!
//! These tests use proptest to generate interner inputs and parse trees and
//! verify:
//! 1. Interning is idempotent and order-preserving
//! 2. Cons chains render as `[e0, e1 :: tail]`
//! 3. Empty collections never leave a dangling separator
//! 4. Case arms keep their order
//! 5. Scope depth is balanced after any render

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use dasl_fmt::{render, Render, RenderEnv};
use dasl_ir::{
    Body, CaseArm, Expr, FieldInit, FieldPat, MapEntry, MapPatEntry, Pat, Stmt, StringInterner,
    SymbolRef, Value,
};
use proptest::prelude::*;

// -- Strategies --

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,11}").expect("valid regex")
}

/// Block kinds used to build nested trees.
#[derive(Debug, Clone, Copy)]
enum Block {
    Module,
    Def,
    IfElse,
    Case,
}

fn block_strategy() -> impl Strategy<Value = Block> {
    prop_oneof![
        Just(Block::Module),
        Just(Block::Def),
        Just(Block::IfElse),
        Just(Block::Case),
    ]
}

/// Wrap a `val` binding in each block of `layers`, outermost first.
fn nest(layers: &[Block], interner: &mut StringInterner) -> Stmt {
    let mut stmt = Stmt::val(interner.intern("x"), Expr::value(Value::Int(0)));
    for layer in layers.iter().rev() {
        stmt = match layer {
            Block::Module => Stmt::module(interner.intern("M"), Body::new(vec![stmt])),
            Block::Def => Stmt::def(interner.intern("f"), vec![], None, Body::new(vec![stmt])),
            Block::IfElse => Stmt::expr(Expr::if_else(
                Expr::value(Value::Bool(true)),
                Body::new(vec![stmt]),
                Some(Body::default()),
            )),
            Block::Case => Stmt::expr(Expr::case(
                Expr::unit(),
                vec![CaseArm::new(
                    Pat::wildcard(interner),
                    Expr::if_else(Expr::value(Value::Bool(false)), Body::new(vec![stmt]), None),
                )],
            )),
        };
    }
    stmt
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Equal text always yields the same handle, and handles resolve back.
    #[test]
    fn prop_interning_idempotent(words in prop::collection::vec(identifier_strategy(), 0..40)) {
        let mut interner = StringInterner::new();
        let first: Vec<_> = words.iter().map(|w| interner.intern(w)).collect();
        let second: Vec<_> = words.iter().map(|w| interner.intern(w)).collect();
        prop_assert_eq!(&first, &second);

        for (word, name) in words.iter().zip(&first) {
            prop_assert_eq!(interner.lookup(*name), word.as_str());
        }

        // Handles are dense and issued in first-seen order
        let mut seen = Vec::new();
        for word in &words {
            if !seen.contains(word) {
                seen.push(word.clone());
            }
        }
        prop_assert_eq!(interner.len(), seen.len());
        for (i, word) in seen.iter().enumerate() {
            prop_assert_eq!(interner.intern(word).index(), i);
        }
    }

    /// `make(E, T)` renders as `[` + join(E) + optional ` :: T` + `]`.
    #[test]
    fn prop_cons_chain_rendering(
        elements in prop::collection::vec(any::<u64>(), 0..20),
        tail in prop::option::of(identifier_strategy()),
    ) {
        let mut interner = StringInterner::new();
        let tail_expr = tail
            .as_ref()
            .map(|t| Expr::symbol(SymbolRef::new(interner.intern(t))));
        let list = Expr::list(
            elements.iter().map(|&n| Expr::value(Value::Int(n))).collect(),
            tail_expr,
        );

        let joined = elements
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let rest = tail.map(|t| format!(" :: {t}")).unwrap_or_default();
        prop_assert_eq!(render(&list, &interner), format!("[{joined}{rest}]"));
    }

    /// Collections join entries with `, ` and never end in a separator.
    #[test]
    fn prop_collections_have_no_dangling_separator(
        keys in prop::collection::vec(identifier_strategy(), 0..6),
    ) {
        let mut interner = StringInterner::new();
        let point = SymbolRef::new(interner.intern("Point"));
        let names: Vec<_> = keys.iter().map(|k| interner.intern(k)).collect();

        let map_expr = Expr::map(
            names
                .iter()
                .map(|&n| MapEntry::new(Expr::value(Value::Atom(n)), Expr::unit()))
                .collect(),
        );
        let record_expr = Expr::record(
            point.clone(),
            names.iter().map(|&n| FieldInit::new(n, Expr::unit())).collect(),
        );
        let map_pat = Pat::map(
            names
                .iter()
                .map(|&n| MapPatEntry::new(Pat::value(Value::Atom(n)), Pat::value(Value::Unit)))
                .collect(),
        );
        let record_pat = Pat::record(
            point,
            names.iter().map(|&n| FieldPat::new(n, Pat::value(Value::Unit))).collect(),
        );

        let rendered = [
            render(&map_expr, &interner),
            render(&record_expr, &interner),
            render(&map_pat, &interner),
            render(&record_pat, &interner),
        ];
        for text in &rendered {
            prop_assert!(!text.contains(", }"), "dangling separator in {}", text);
            prop_assert!(!text.contains("{ }"), "spaced empty braces in {}", text);
            prop_assert_eq!(text.matches(", ").count(), keys.len().saturating_sub(1));
            prop_assert_eq!(keys.is_empty(), text.ends_with("{}"));
        }
    }

    /// Case arms render one per line, in the order supplied.
    #[test]
    fn prop_case_order_preserved(values in prop::collection::vec(any::<u64>(), 0..12)) {
        let interner = StringInterner::new();
        let arms = values
            .iter()
            .map(|&n| CaseArm::new(Pat::value(Value::Int(n)), Expr::value(Value::Int(n))))
            .collect();
        let case = Expr::case(Expr::unit(), arms);

        let text = render(&case, &interner);
        let mut lines = text.lines();
        prop_assert_eq!(lines.next(), Some("case () of"));
        let arm_lines: Vec<_> = lines.collect();
        let expected: Vec<_> = values.iter().map(|n| format!("  | {n} => {n}")).collect();
        prop_assert_eq!(arm_lines, expected);
    }

    /// Any nesting of block-owning nodes leaves the depth where it started.
    #[test]
    fn prop_scope_depth_balanced(
        layers in prop::collection::vec(block_strategy(), 0..24),
        start in 0usize..4,
    ) {
        let mut interner = StringInterner::new();
        let stmt = nest(&layers, &mut interner);

        let mut env = RenderEnv::new(&interner);
        for _ in 0..start {
            env.scope_start();
        }
        let mut out = String::new();
        stmt.render_to(&mut env, &mut out);
        prop_assert_eq!(env.depth(), start);

        prop_assert!(out.contains("val x = 0"));
    }
}
