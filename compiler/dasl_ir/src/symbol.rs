//! Qualified symbol references.

use smallvec::SmallVec;

use crate::Name;

/// Dotted path to a name: `A.B.c` is modules `[A, B]` plus name `c`.
///
/// Module order is outer-to-inner and never changes once built. The grammar
/// driver discovers a path one segment at a time, so the only mutation is
/// [`SymbolRef::shift`], which pushes the current name onto the module list
/// and installs the next segment as the name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolRef {
    modules: SmallVec<[Name; 2]>,
    name: Name,
}

impl SymbolRef {
    /// Unqualified reference.
    pub fn new(name: Name) -> Self {
        SymbolRef {
            modules: SmallVec::new(),
            name,
        }
    }

    pub fn qualified(modules: impl IntoIterator<Item = Name>, name: Name) -> Self {
        SymbolRef {
            modules: modules.into_iter().collect(),
            name,
        }
    }

    /// Extend the path by one segment: `A.B` becomes `A.B.next`.
    pub fn shift(&mut self, next: Name) {
        self.modules.push(self.name);
        self.name = next;
    }

    /// Final segment.
    pub fn name(&self) -> Name {
        self.name
    }

    /// Qualifying modules, outermost first.
    pub fn modules(&self) -> &[Name] {
        &self.modules
    }

    pub fn is_qualified(&self) -> bool {
        !self.modules.is_empty()
    }

    /// Every segment, modules first, ending with the name.
    pub fn segments(&self) -> impl Iterator<Item = Name> + '_ {
        self.modules.iter().copied().chain(std::iter::once(self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;

    #[test]
    fn test_shift_builds_left_to_right() {
        let mut interner = StringInterner::new();
        let a = interner.intern("A");
        let b = interner.intern("B");
        let c = interner.intern("c");

        let mut sym = SymbolRef::new(a);
        assert!(!sym.is_qualified());

        sym.shift(b);
        assert_eq!(sym.modules(), &[a]);
        assert_eq!(sym.name(), b);

        sym.shift(c);
        assert_eq!(sym.modules(), &[a, b]);
        assert_eq!(sym.name(), c);
        assert_eq!(sym, SymbolRef::qualified([a, b], c));
    }

    #[test]
    fn test_segments() {
        let mut interner = StringInterner::new();
        let names: Vec<_> = ["A", "B", "c"].iter().map(|s| interner.intern(s)).collect();
        let sym = SymbolRef::qualified(names[..2].iter().copied(), names[2]);

        let segments: Vec<_> = sym.segments().map(|n| interner.lookup(n)).collect();
        assert_eq!(segments, vec!["A", "B", "c"]);
    }
}
