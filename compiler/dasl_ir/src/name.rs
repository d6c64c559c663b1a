//! Interned string handle.

use std::fmt;

/// Handle to a string owned by a [`StringInterner`](crate::StringInterner).
///
/// Handles are dense: the first distinct string interned gets index 0, the
/// next gets 1, and so on. A handle only means something to the interner
/// that issued it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Create from a dense index.
    ///
    /// # Panics
    /// Panics if `index` does not fit in `u32`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(raw) => Name(raw),
            Err(_) => panic!("name index {index} exceeds u32::MAX"),
        }
    }

    /// Dense index of this handle.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let name = Name::from_index(42);
        assert_eq!(name.index(), 42);
        assert_eq!(name.raw(), 42);
        assert_eq!(Name::from_raw(42), name);
    }

    #[test]
    fn test_name_ord() {
        assert!(Name::from_index(1) < Name::from_index(2));
    }

    #[test]
    fn test_name_debug() {
        assert_eq!(format!("{:?}", Name::from_index(7)), "Name(7)");
    }

    #[test]
    #[should_panic(expected = "exceeds u32::MAX")]
    #[cfg(target_pointer_width = "64")]
    fn test_from_index_overflow() {
        let _ = Name::from_index(u32::MAX as usize + 1);
    }
}
