//! Wildcard matchers for the Lanai Trie.
//!
//! Both matchers walk `(position, node)` pairs depth-first. A letter follows a
//! single child slot, a wildcard fans out over every existing child, and a branch
//! is abandoned as soon as the slot it needs is empty.

use super::config::SearchStrategy;
use super::node::{index_letter, TrieNode};
use super::pattern::PatternToken;

/// What has to hold at the node reached after the last pattern position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchMode {
    /// A word ends exactly here.
    Exact,
    /// Some word passes through or ends here.
    Prefix,
}

impl MatchMode {
    fn accepts(self, node: &TrieNode) -> bool {
        match self {
            MatchMode::Exact => node.is_terminal,
            // Nodes only exist on the path of an inserted word, so any node
            // other than the root of an empty trie qualifies.
            MatchMode::Prefix => node.is_terminal || node.has_children(),
        }
    }
}

/// Whether any path below `root` satisfies `tokens` under `mode`.
pub(crate) fn matches(
    root: &TrieNode,
    tokens: &[PatternToken],
    mode: MatchMode,
    strategy: SearchStrategy,
) -> bool {
    match strategy {
        SearchStrategy::Recursive => matches_recursive(root, tokens, mode),
        SearchStrategy::Iterative => matches_iterative(root, tokens, mode),
    }
}

fn matches_recursive(node: &TrieNode, tokens: &[PatternToken], mode: MatchMode) -> bool {
    let Some((token, rest)) = tokens.split_first() else {
        return mode.accepts(node);
    };

    match *token {
        PatternToken::Letter(index) => node
            .child(index)
            .map_or(false, |child| matches_recursive(child, rest, mode)),
        PatternToken::Wildcard => node
            .children()
            .any(|(_, child)| matches_recursive(child, rest, mode)),
    }
}

fn matches_iterative(root: &TrieNode, tokens: &[PatternToken], mode: MatchMode) -> bool {
    let mut stack = vec![(0usize, root)];

    while let Some((position, node)) = stack.pop() {
        match tokens.get(position) {
            None => {
                if mode.accepts(node) {
                    return true;
                }
            }
            Some(PatternToken::Letter(index)) => {
                if let Some(child) = node.child(*index) {
                    stack.push((position + 1, child));
                }
            }
            Some(PatternToken::Wildcard) => {
                stack.extend(node.children().map(|(_, child)| (position + 1, child)));
            }
        }
    }

    false
}

/// Collects every word below `root` matched by `tokens`, in lexicographic order.
///
/// Walks an explicit stack whatever the configured strategy, so the depth of
/// the trie never turns into call depth.
pub(crate) fn collect_matches(root: &TrieNode, tokens: &[PatternToken], out: &mut Vec<String>) {
    let mut path = String::with_capacity(tokens.len());
    let mut stack = vec![(0usize, None, root)];

    while let Some((depth, letter, node)) = stack.pop() {
        follow(&mut path, depth, letter);

        match tokens.get(depth) {
            None => {
                if node.is_terminal {
                    out.push(path.clone());
                }
            }
            Some(PatternToken::Letter(index)) => {
                if let Some(child) = node.child(*index) {
                    stack.push((depth + 1, Some(*index), child));
                }
            }
            Some(PatternToken::Wildcard) => {
                // Pushed z..a so that `a` is popped first
                stack.extend(
                    node.children()
                        .rev()
                        .map(|(index, child)| (depth + 1, Some(index), child)),
                );
            }
        }
    }
}

/// Collects every word below `root`, in lexicographic order.
pub(crate) fn collect_words(root: &TrieNode, out: &mut Vec<String>) {
    let mut path = String::new();
    let mut stack = vec![(0usize, None, root)];

    while let Some((depth, letter, node)) = stack.pop() {
        follow(&mut path, depth, letter);

        if node.is_terminal {
            out.push(path.clone());
        }
        stack.extend(
            node.children()
                .rev()
                .map(|(index, child)| (depth + 1, Some(index), child)),
        );
    }
}

/// Rewinds `path` to the parent of a node at `depth`, then appends the node's letter.
fn follow(path: &mut String, depth: usize, letter: Option<usize>) {
    if let Some(index) = letter {
        path.truncate(depth - 1);
        path.push(index_letter(index));
    }
}
