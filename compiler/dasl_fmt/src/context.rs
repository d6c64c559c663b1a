//! Render Environment
//!
//! Carries what every render call needs besides the node itself: the
//! interner that resolves handles and the current scope depth, which
//! determines indentation.
//!
//! # Scopes
//!
//! Block-owning nodes (definitions, modules, branch bodies, case arms) render
//! their children one scope deeper. Depth changes go through
//! [`RenderEnv::scope`], which returns a guard that restores the depth when
//! dropped, so the environment comes back balanced on every exit path,
//! unwinding included.

use std::ops::{Deref, DerefMut};

use dasl_ir::{Name, StringInterner, StringLookup};

/// Spaces per scope level.
pub const INDENT_WIDTH: usize = 2;

/// Configuration for the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Indentation size in spaces. Defaults to 2.
    pub indent_size: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_size: INDENT_WIDTH,
        }
    }
}

impl RenderConfig {
    /// Create a new config with the specified indent size.
    pub fn with_indent_size(indent_size: usize) -> Self {
        Self { indent_size }
    }
}

/// Shared state threaded through every render call.
///
/// Borrows the interner; the interner must outlive the environment, and
/// every handle in the rendered tree must have been issued by it.
pub struct RenderEnv<'i, I: StringLookup + ?Sized = StringInterner> {
    interner: &'i I,
    depth: usize,
    config: RenderConfig,
}

impl<'i, I: StringLookup + ?Sized> RenderEnv<'i, I> {
    /// Create an environment at depth 0 with the default config.
    pub fn new(interner: &'i I) -> Self {
        Self::with_config(interner, RenderConfig::default())
    }

    pub fn with_config(interner: &'i I, config: RenderConfig) -> Self {
        RenderEnv {
            interner,
            depth: 0,
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Current scope depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Width of the current indentation in spaces.
    pub fn indent_width(&self) -> usize {
        self.depth * self.config.indent_size
    }

    /// Indentation for the current depth.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width())
    }

    /// Append the current indentation to `out`.
    pub fn write_indent(&self, out: &mut String) {
        out.extend(std::iter::repeat(' ').take(self.indent_width()));
    }

    /// Resolve a handle through the interner.
    ///
    /// # Panics
    /// Panics if the handle was issued by a different interner.
    #[inline]
    pub fn lookup(&self, name: Name) -> &'i str {
        let interner: &'i I = self.interner;
        interner.lookup(name)
    }

    /// Enter a nested scope.
    pub fn scope_start(&mut self) {
        self.depth += 1;
        tracing::trace!(depth = self.depth, "scope start");
    }

    /// Leave the innermost scope.
    ///
    /// Must pair with an earlier [`scope_start`](Self::scope_start). An
    /// unmatched call trips a debug assertion; release builds clamp at 0.
    pub fn scope_end(&mut self) {
        debug_assert!(self.depth > 0, "scope_end without matching scope_start");
        self.depth = self.depth.saturating_sub(1);
        tracing::trace!(depth = self.depth, "scope end");
    }

    /// Enter a nested scope that ends when the returned guard is dropped.
    pub fn scope(&mut self) -> Scope<'_, 'i, I> {
        self.scope_start();
        Scope { env: self }
    }
}

/// Guard for one scope level. Derefs to the environment it was opened on.
#[must_use = "the scope ends as soon as the guard is dropped"]
pub struct Scope<'e, 'i, I: StringLookup + ?Sized> {
    env: &'e mut RenderEnv<'i, I>,
}

impl<'i, I: StringLookup + ?Sized> Deref for Scope<'_, 'i, I> {
    type Target = RenderEnv<'i, I>;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl<I: StringLookup + ?Sized> DerefMut for Scope<'_, '_, I> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}

impl<I: StringLookup + ?Sized> Drop for Scope<'_, '_, I> {
    fn drop(&mut self) {
        self.env.scope_end();
    }
}

#[cfg(test)]
mod tests;
