//! Read-only structural access to trie nodes, for tests and debugging.

use core::fmt;

use super::map::Trie;

/// A shared handle to one node of a [`Trie`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    trie: &'a Trie,
    idx: usize,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(trie: &'a Trie, idx: usize) -> Self {
        Self { trie, idx }
    }

    /// Returns true if the path from the root to this node spells a stored word.
    pub fn is_end_of_word(&self) -> bool {
        self.trie.node(self.idx).end_of_word
    }

    /// Returns the child reached through `key`, if any.
    pub fn child(&self, key: char) -> Option<NodeRef<'a>> {
        let key = u8::try_from(key).ok()?;
        self.trie
            .node(self.idx)
            .get_child(key)
            .map(|idx| NodeRef::new(self.trie, idx))
    }

    /// Follows `path` one character at a time from this node.
    pub fn descend(&self, path: &str) -> Option<NodeRef<'a>> {
        path.chars().try_fold(*self, |node, key| node.child(key))
    }

    /// Iterates over the children in ascending key order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = (char, NodeRef<'a>)> + 'a {
        let trie = self.trie;
        trie.node(self.idx)
            .children
            .iter()
            .map(move |&(key, idx)| (char::from(key), NodeRef::new(trie, idx)))
    }

    /// Returns the number of children.
    pub fn child_count(&self) -> usize {
        self.trie.node(self.idx).children.len()
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: String = self.children().map(|(key, _)| key).collect();
        f.debug_struct("NodeRef")
            .field("end_of_word", &self.is_end_of_word())
            .field("children", &keys)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Trie;

    #[test]
    fn test_walk_by_hand() {
        let trie = Trie::from_iter(["apple", "app", "bat"]);
        let root = trie.root();

        assert!(!root.is_end_of_word());
        assert_eq!(root.children().map(|(k, _)| k).collect::<String>(), "ab");

        let app = root.descend("app").unwrap();
        assert!(app.is_end_of_word());
        assert_eq!(app.child_count(), 1);

        let apple = app.child('l').and_then(|n| n.child('e')).unwrap();
        assert!(apple.is_end_of_word());
        assert!(apple.is_leaf());

        assert!(root.child('c').is_none());
        assert!(root.child('é').is_none());
        assert!(root.descend("bx").is_none());
    }
}
