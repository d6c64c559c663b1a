//! Cons chains for list patterns and list expressions.
//!
//! Both `[a, b :: rest]` patterns and `[1, 2 :: xs]` expressions are stored
//! as a singly-linked chain of [`ListCons`] nodes. Each node has an optional
//! value and an optional tail, giving four shapes:
//!
//! | value | tail | shape                                                   |
//! |-------|------|---------------------------------------------------------|
//! | yes   | yes  | [`ConsShape::Element`]: element followed by more        |
//! | yes   | no   | [`ConsShape::Last`]: final element, list ends here      |
//! | no    | yes  | [`ConsShape::Rest`]: the tail's value is the remainder  |
//! | no    | no   | [`ConsShape::Terminator`]: end of list, `[]`            |
//!
//! A terminator ends the chain wherever it appears, not only at the head.
//!
//! Equality, hashing, debug output and drop all walk the chain in a loop, so
//! list length never grows the native stack.

use std::fmt;
use std::hash::{Hash, Hasher};

/// One node of a cons chain.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListCons<T> {
    value: Option<Box<T>>,
    tail: Option<Box<ListCons<T>>>,
}

/// Which of the four node shapes a [`ListCons`] has.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConsShape {
    Element,
    Last,
    Rest,
    Terminator,
}

impl<T> ListCons<T> {
    /// The empty list, `[]`.
    pub const fn terminator() -> Self {
        ListCons {
            value: None,
            tail: None,
        }
    }

    /// `value` followed by `tail`.
    pub fn cons(value: T, tail: ListCons<T>) -> Self {
        ListCons {
            value: Some(Box::new(value)),
            tail: Some(Box::new(tail)),
        }
    }

    /// A final element with nothing after it.
    pub fn last(value: T) -> Self {
        ListCons {
            value: Some(Box::new(value)),
            tail: None,
        }
    }

    /// A rest capture: `:: value` binds (or splices in) the remainder.
    pub fn rest_capture(value: T) -> Self {
        ListCons {
            value: None,
            tail: Some(Box::new(Self::last(value))),
        }
    }

    /// Build a node from raw parts. Any combination is accepted.
    pub fn from_parts(value: Option<T>, tail: Option<ListCons<T>>) -> Self {
        ListCons {
            value: value.map(Box::new),
            tail: tail.map(Box::new),
        }
    }

    /// Build `[e0, e1, ... :: tail]`.
    ///
    /// The chain is built right to left: it starts from a terminator (or a
    /// rest capture of `tail`) and prepends each element, last first.
    pub fn make(elements: Vec<T>, tail: Option<T>) -> Self {
        let mut chain = match tail {
            Some(rest) => Self::rest_capture(rest),
            None => Self::terminator(),
        };
        for element in elements.into_iter().rev() {
            chain = Self::cons(element, chain);
        }
        chain
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_deref()
    }

    pub fn tail(&self) -> Option<&ListCons<T>> {
        self.tail.as_deref()
    }

    pub fn shape(&self) -> ConsShape {
        match (&self.value, &self.tail) {
            (Some(_), Some(_)) => ConsShape::Element,
            (Some(_), None) => ConsShape::Last,
            (None, Some(_)) => ConsShape::Rest,
            (None, None) => ConsShape::Terminator,
        }
    }

    pub fn is_terminator(&self) -> bool {
        self.shape() == ConsShape::Terminator
    }

    /// The fixed elements, head first, stopping at a rest capture or terminator.
    pub fn elements(&self) -> Elements<'_, T> {
        Elements { node: Some(self) }
    }

    /// The value bound or spliced after `::`, if the chain ends in a rest capture.
    pub fn rest(&self) -> Option<&T> {
        let mut node = self;
        loop {
            match (node.value(), node.tail()) {
                (Some(_), Some(next)) => node = next,
                (None, Some(rest)) => return rest.value(),
                _ => return None,
            }
        }
    }

    /// Every node of the chain, head first, including the final one.
    fn nodes(&self) -> impl Iterator<Item = &ListCons<T>> + '_ {
        std::iter::successors(Some(self), |node| node.tail())
    }

    /// Take the node apart.
    pub fn into_parts(mut self) -> (Option<T>, Option<ListCons<T>>) {
        let value = self.value.take().map(|v| *v);
        let tail = self.tail.take().map(|t| *t);
        (value, tail)
    }
}

impl<T> Default for ListCons<T> {
    fn default() -> Self {
        Self::terminator()
    }
}

impl<T: PartialEq> PartialEq for ListCons<T> {
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (self, other);
        loop {
            if left.value() != right.value() {
                return false;
            }
            match (left.tail(), right.tail()) {
                (Some(l), Some(r)) => {
                    left = l;
                    right = r;
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for ListCons<T> {}

impl<T: Hash> Hash for ListCons<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node in self.nodes() {
            node.value().hash(state);
            node.tail.is_some().hash(state);
        }
    }
}

/// Prints the value slot of every node, head first: `ListCons[Some(1), None]`.
impl<T: fmt::Debug> fmt::Debug for ListCons<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ListCons")?;
        f.debug_list()
            .entries(self.nodes().map(ListCons::value))
            .finish()
    }
}

// Unlink iteratively so dropping a long list does not recurse once per node.
impl<T> Drop for ListCons<T> {
    fn drop(&mut self) {
        let mut next = self.tail.take();
        while let Some(mut node) = next {
            next = node.tail.take();
        }
    }
}

/// Iterator over the fixed elements of a cons chain.
pub struct Elements<'a, T> {
    node: Option<&'a ListCons<T>>,
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.node?;
        let Some(value) = node.value() else {
            self.node = None;
            return None;
        };
        self.node = node.tail();
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHasher;

    use super::*;

    #[test]
    fn test_make_empty_is_terminator() {
        let list: ListCons<u32> = ListCons::make(vec![], None);
        assert!(list.is_terminator());
        assert_eq!(list.elements().count(), 0);
        assert_eq!(list.rest(), None);
    }

    #[test]
    fn test_make_elements_end_in_terminator() {
        let list = ListCons::make(vec![1, 2, 3], None);
        assert_eq!(list.shape(), ConsShape::Element);
        assert_eq!(list.elements().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list.rest(), None);

        let mut node = &list;
        while let Some(next) = node.tail() {
            node = next;
        }
        assert!(node.is_terminator());
    }

    #[test]
    fn test_make_with_tail() {
        let list = ListCons::make(vec![1, 2], Some(99));
        assert_eq!(list.elements().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(list.rest(), Some(&99));
    }

    #[test]
    fn test_make_only_tail_is_rest_capture() {
        let list = ListCons::make(vec![], Some(7));
        assert_eq!(list.shape(), ConsShape::Rest);
        assert_eq!(list.rest(), Some(&7));
        assert_eq!(list.tail().map(ListCons::shape), Some(ConsShape::Last));
    }

    #[test]
    fn test_elements_stop_at_rest_capture() {
        let list = ListCons::from_parts(
            Some(1),
            Some(ListCons::from_parts(None, Some(ListCons::last(9)))),
        );
        assert_eq!(list.elements().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(list.rest(), Some(&9));
    }

    #[test]
    fn test_last_node_ends_elements() {
        let list = ListCons::cons(1, ListCons::last(2));
        assert_eq!(list.elements().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(list.rest(), None);
    }

    #[test]
    fn test_into_parts() {
        let (value, tail) = ListCons::cons("a", ListCons::terminator()).into_parts();
        assert_eq!(value, Some("a"));
        assert!(tail.is_some_and(|t| t.is_terminator()));
    }

    #[test]
    fn test_equality_follows_shape() {
        assert_eq!(ListCons::make(vec![1, 2], None), ListCons::make(vec![1, 2], None));
        assert_ne!(ListCons::make(vec![1, 2], None), ListCons::make(vec![1], None));
        assert_ne!(ListCons::make(vec![1], Some(2)), ListCons::make(vec![1, 2], None));
        // A final element and an element followed by a terminator differ
        assert_ne!(ListCons::last(1), ListCons::cons(1, ListCons::terminator()));
    }

    #[test]
    fn test_debug_lists_node_values() {
        let list = ListCons::make(vec![1, 2], Some(9));
        assert_eq!(
            format!("{list:?}"),
            "ListCons[Some(1), Some(2), None, Some(9)]"
        );
        assert_eq!(format!("{:?}", ListCons::<u32>::terminator()), "ListCons[None]");
    }

    #[test]
    fn test_long_chains_compare_and_hash_without_overflow() {
        fn fx_hash(list: &ListCons<u32>) -> u64 {
            let mut hasher = FxHasher::default();
            list.hash(&mut hasher);
            hasher.finish()
        }

        let left = ListCons::make((0..1_000_000).collect(), None);
        let right = ListCons::make((0..1_000_000).collect(), None);
        assert!(left == right);
        assert_eq!(fx_hash(&left), fx_hash(&right));

        let shorter = ListCons::make((0..999_999).collect(), None);
        assert!(left != shorter);
        assert_eq!(format!("{shorter:?}").matches("Some(").count(), 999_999);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let list = ListCons::make((0..1_000_000).collect(), None);
        assert_eq!(list.elements().count(), 1_000_000);
        drop(list);
    }
}
