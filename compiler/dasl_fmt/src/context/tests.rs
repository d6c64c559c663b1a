use std::panic::{catch_unwind, AssertUnwindSafe};

use super::*;

#[test]
fn env_starts_at_depth_zero() {
    let interner = StringInterner::new();
    let env = RenderEnv::new(&interner);
    assert_eq!(env.depth(), 0);
    assert_eq!(env.indent(), "");
}

#[test]
fn env_indent_two_spaces_per_level() {
    let interner = StringInterner::new();
    let mut env = RenderEnv::new(&interner);
    env.scope_start();
    assert_eq!(env.indent(), "  ");
    env.scope_start();
    assert_eq!(env.indent(), "    ");

    let mut out = String::from(">");
    env.write_indent(&mut out);
    assert_eq!(out, ">    ");

    env.scope_end();
    env.scope_end();
    assert_eq!(env.depth(), 0);
}

#[test]
fn env_custom_indent_size() {
    let interner = StringInterner::new();
    let mut env = RenderEnv::with_config(&interner, RenderConfig::with_indent_size(4));
    env.scope_start();
    assert_eq!(env.indent_width(), 4);
    assert_eq!(env.config().indent_size, 4);
    env.scope_end();
}

#[test]
fn scope_guard_restores_depth() {
    let interner = StringInterner::new();
    let mut env = RenderEnv::new(&interner);
    {
        let mut outer = env.scope();
        assert_eq!(outer.depth(), 1);
        {
            let inner = outer.scope();
            assert_eq!(inner.depth(), 2);
        }
        assert_eq!(outer.depth(), 1);
    }
    assert_eq!(env.depth(), 0);
}

#[test]
fn scope_guard_restores_depth_on_panic() {
    let interner = StringInterner::new();
    let mut env = RenderEnv::new(&interner);

    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut scope = env.scope();
        let _nested = scope.scope();
        panic!("render failed");
    }));

    assert!(result.is_err());
    assert_eq!(env.depth(), 0);
}

#[test]
fn env_lookup_outlives_env() {
    let mut interner = StringInterner::new();
    let name = interner.intern("point");

    let text = {
        let env = RenderEnv::new(&interner);
        env.lookup(name)
    };
    assert_eq!(text, "point");
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "scope_end without matching scope_start")]
fn unmatched_scope_end_panics() {
    let interner = StringInterner::new();
    let mut env = RenderEnv::new(&interner);
    env.scope_end();
}
