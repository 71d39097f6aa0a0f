//! Set algebra over the words stored in a [`Trie`].
//!
//! Every operator works on the enumerated word sets, never on node layout:
//! `+` is union, `-` is difference, `==` is set equality, and the ordering
//! operators are the subset/superset relations. Two tries whose word sets are
//! not subsets of each other are incomparable, so `partial_cmp` returns `None`
//! and all of `<`, `<=`, `>`, `>=` are false.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use std::iter::Peekable;

use tracing::debug;

use super::iter::Completions;
use super::map::Trie;

impl Trie {
    /// Returns true if every word of `self` is also stored in `other`.
    pub fn is_subset(&self, other: &Trie) -> bool {
        self.len() <= other.len() && sorted_subset(self.completions(""), other.completions("").peekable())
    }

    /// Returns true if every word of `other` is also stored in `self`.
    pub fn is_superset(&self, other: &Trie) -> bool {
        other.is_subset(self)
    }
}

/// Merge walk over two ascending, duplicate-free word streams.
fn sorted_subset(small: Completions<'_>, mut large: Peekable<Completions<'_>>) -> bool {
    for word in small {
        loop {
            let ordering = match large.peek() {
                Some(candidate) => candidate.cmp(&word),
                None => return false,
            };
            large.next();
            match ordering {
                Ordering::Less => {}
                Ordering::Equal => break,
                Ordering::Greater => return false,
            }
        }
    }
    true
}

impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.completions("").eq(other.completions(""))
    }
}

impl Eq for Trie {}

impl PartialOrd for Trie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => (self == other).then_some(Ordering::Equal),
            Ordering::Less => self.is_subset(other).then_some(Ordering::Less),
            Ordering::Greater => other.is_subset(self).then_some(Ordering::Greater),
        }
    }
}

impl AddAssign<&Trie> for Trie {
    fn add_assign(&mut self, rhs: &Trie) {
        self.extend(rhs.completions(""));
    }
}

impl SubAssign<&Trie> for Trie {
    fn sub_assign(&mut self, rhs: &Trie) {
        for word in rhs.completions("") {
            self.del(&word);
        }
    }
}

impl Add<&Trie> for &Trie {
    type Output = Trie;

    fn add(self, rhs: &Trie) -> Trie {
        let mut union = self.clone();
        union += rhs;
        debug!(lhs = self.len(), rhs = rhs.len(), union = union.len(), "trie union");
        union
    }
}

impl Add for Trie {
    type Output = Trie;

    fn add(mut self, rhs: Trie) -> Trie {
        self += &rhs;
        self
    }
}

impl Sub<&Trie> for &Trie {
    type Output = Trie;

    fn sub(self, rhs: &Trie) -> Trie {
        let mut difference = self.clone();
        difference -= rhs;
        debug!(lhs = self.len(), rhs = rhs.len(), difference = difference.len(), "trie difference");
        difference
    }
}

impl Sub for Trie {
    type Output = Trie;

    fn sub(mut self, rhs: Trie) -> Trie {
        self -= &rhs;
        self
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for text in iter {
            self.insert(text.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl From<&str> for Trie {
    fn from(text: &str) -> Self {
        let mut trie = Trie::new();
        trie.insert(text);
        trie
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Trie {
    fn from(texts: Vec<S>) -> Self {
        texts.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for Trie {
    fn from(texts: &[S]) -> Self {
        texts.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_difference() {
        let a = Trie::from_iter(["hello", "world", "test"]);
        let b = Trie::from_iter(["test", "case"]);

        assert_eq!((&a + &b).words(), ["case", "hello", "test", "world"]);
        assert_eq!((&a - &b).words(), ["hello", "world"]);
        assert_eq!((&b - &a).words(), ["case"]);
        // operands are untouched
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_owned_operators() {
        let a = Trie::from("one two");
        let b = Trie::from("two three");
        assert_eq!((a.clone() + b.clone()).words(), ["one", "three", "two"]);
        assert_eq!((a - b).words(), ["one"]);
    }

    #[test]
    fn test_difference_prunes_nodes() {
        let a = Trie::from_iter(["app", "apple"]);
        let b = Trie::from("apple");
        let diff = &a - &b;
        assert_eq!(diff.size(), 3);
        assert!(diff.root().descend("app").unwrap().is_leaf());
    }

    #[test]
    fn test_partial_cmp() {
        let full = Trie::from_iter(["apple", "banana", "cherry"]);
        let part = Trie::from_iter(["banana", "apple"]);
        let other = Trie::from_iter(["apple", "banana", "date"]);

        assert_eq!(part.partial_cmp(&full), Some(Ordering::Less));
        assert_eq!(full.partial_cmp(&part), Some(Ordering::Greater));
        assert_eq!(full.partial_cmp(&full.clone()), Some(Ordering::Equal));
        assert_eq!(full.partial_cmp(&other), None);
    }

    #[test]
    fn test_subset_of_empty() {
        let empty = Trie::new();
        let some = Trie::from("x");
        assert!(empty.is_subset(&some));
        assert!(empty.is_subset(&empty));
        assert!(!some.is_subset(&empty));
        assert!(some.is_superset(&empty));
    }

    #[test]
    fn test_from_slice_and_vec() {
        let words = ["apple", "app", "bat"];
        let from_slice = Trie::from(&words[..]);
        let from_vec = Trie::from(vec![String::from("bat"), String::from("apple app")]);
        assert_eq!(from_slice, from_vec);
    }
}
