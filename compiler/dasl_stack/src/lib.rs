//! Stack growth for recursion that follows tree depth.
//!
//! Parse trees are walked recursively, one native frame (or a few) per level
//! of nesting. Deeply nested input would otherwise overflow the thread stack,
//! so every recursive walk wraps its body in [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` allocates a new stack segment on demand.
//! - **WASM targets**: plain call.
//!
//! ```text
//! fn render_to(&self, env: &mut RenderEnv<'_, I>, out: &mut String) {
//!     ensure_sufficient_stack(|| match &self.kind {
//!         // ... recurse into children ...
//!     })
//! }
//! ```

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_recursion_is_transparent() {
        fn depth_sum(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { n + depth_sum(n - 1) })
        }

        assert_eq!(depth_sum(10), 55);
    }

    #[test]
    fn deep_recursion_does_not_overflow() {
        // Nesting far beyond what a default 8MB stack survives
        fn nest(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { nest(n - 1) + 1 })
        }

        assert_eq!(nest(100_000), 100_000);
    }

    #[test]
    fn passes_through_results() {
        let result: Result<&str, ()> = ensure_sufficient_stack(|| Ok("done"));
        assert_eq!(result, Ok("done"));
    }
}
