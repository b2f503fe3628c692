//! Node implementation for the Lanai Trie.
//!
//! This module provides the TrieNode structure used in the Lanai Trie implementation.
//! Each node has one owned child slot per lowercase letter, so a path from the
//! root spells out a word prefix.

/// Number of child slots per node, one per letter `a`..=`z`.
pub const ALPHABET_SIZE: usize = 26;

/// Returns the child slot for a lowercase ASCII letter, or `None` for any other character.
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Returns the letter stored in the given child slot.
pub fn index_letter(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

/// A node in the Lanai Trie.
///
/// Terminal nodes mark the end of an inserted word.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child nodes indexed by letter offset
    pub children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether an inserted word ends at this node
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child in the given slot, if one has been created.
    pub fn child(&self, index: usize) -> Option<&TrieNode> {
        self.children[index].as_deref()
    }

    /// Returns the child in the given slot, creating an empty one first if needed.
    pub fn child_or_insert(&mut self, index: usize) -> &mut TrieNode {
        self.children[index].get_or_insert_with(Box::default)
    }

    /// Iterates over the existing children in alphabetical order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (usize, &TrieNode)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| child.as_deref().map(|node| (index, node)))
    }

    /// Whether any child slot is occupied.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

impl Drop for TrieNode {
    /// Tears the subtree down from a work stack, so dropping a trie holding a
    /// very long word does not recurse once per letter.
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> = self.children.iter_mut().filter_map(Option::take).collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_bounds() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('z'), Some(25));
        assert_eq!(letter_index('A'), None);
        assert_eq!(letter_index('.'), None);
        assert_eq!(letter_index('é'), None);
        assert_eq!(index_letter(0), 'a');
        assert_eq!(index_letter(25), 'z');
    }

    #[test]
    fn test_child_creation_is_lazy() {
        let mut node = TrieNode::new();
        assert!(!node.has_children());
        assert!(node.child(3).is_none());

        node.child_or_insert(3).is_terminal = true;
        assert!(node.has_children());
        assert!(node.child(3).map(|c| c.is_terminal).unwrap_or(false));

        // A second call reuses the existing child
        node.child_or_insert(3);
        assert!(node.child(3).map(|c| c.is_terminal).unwrap_or(false));
        assert_eq!(node.children().count(), 1);
    }

    #[test]
    fn test_children_iterate_in_order() {
        let mut node = TrieNode::new();
        node.child_or_insert(20);
        node.child_or_insert(1);
        node.child_or_insert(7);

        let indices: Vec<usize> = node.children().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 7, 20]);

        let reversed: Vec<usize> = node.children().rev().map(|(i, _)| i).collect();
        assert_eq!(reversed, vec![20, 7, 1]);
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for depth in 0..200_000 {
            node = node.child_or_insert(depth % ALPHABET_SIZE);
        }
        node.is_terminal = true;

        drop(root);
    }
}
