//! Internal node implementation for the radix trie.
//!
//! This module contains the `Node` and `Edge` structures that form the backbone
//! of the radix trie, together with the tree surgery (split, merge, prune) that
//! keeps the tree compressed across insertions and removals. Every `Edge` owns
//! the `Node` it leads to, so the tree has no sharing and no cycles.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::trace;

use crate::util::prefix_match;
use crate::Error;

/// Internal node type for the radix trie.
///
/// This type is not exposed in the public API but is used internally by the
/// `RadixTrie` type. A node knows nothing about its own label: the symbols
/// leading to it live on the incoming `Edge`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<S> {
    /// Whether the path from the root to this node spells a stored word
    pub terminal: bool,

    /// Outgoing edges indexed by the first symbol of their chunk
    pub edges: BTreeMap<S, Edge<S>>,
}

/// A labelled edge. The chunk is never empty and its first symbol is the key
/// the edge is filed under in the parent's map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edge<S> {
    /// The symbols spelled by following this edge
    pub chunk: Vec<S>,

    /// The node this edge leads to
    pub node: Node<S>,
}

impl<S> Default for Node<S> {
    fn default() -> Self {
        Node {
            terminal: false,
            edges: BTreeMap::new(),
        }
    }
}

impl<S> Node<S> {
    /// Creates a node with no children.
    pub fn leaf(terminal: bool) -> Self {
        Node {
            terminal,
            edges: BTreeMap::new(),
        }
    }

    /// A non-terminal node without children. Only the root may be one.
    pub fn is_dead(&self) -> bool {
        !self.terminal && self.edges.is_empty()
    }

    /// A non-terminal node with a single child, which compression folds into
    /// the parent edge.
    pub fn is_pass_through(&self) -> bool {
        !self.terminal && self.edges.len() == 1
    }

    /// Returns the number of nodes in this subtree, this one included
    pub fn subtree_nodes(&self) -> usize {
        1 + self
            .edges
            .values()
            .map(|edge| edge.node.subtree_nodes())
            .sum::<usize>()
    }
}

impl<S: Ord + Clone> Node<S> {
    /// Follows `word` edge by edge and returns the node it ends on, if the
    /// word ends exactly on a node boundary.
    pub fn find(&self, word: &[S]) -> Option<&Node<S>> {
        let mut current = self;
        let mut remaining = word;

        while let Some(first) = remaining.first() {
            let edge = current.edges.get(first)?;
            if !remaining.starts_with(&edge.chunk) {
                return None;
            }
            remaining = &remaining[edge.chunk.len()..];
            current = &edge.node;
        }

        Some(current)
    }

    /// Inserts `word` below this node, splitting an edge where the word
    /// diverges from it. Returns `true` if the word was not present.
    pub fn insert(&mut self, word: &[S], depth: usize) -> bool {
        let Some(first) = word.first() else {
            return !std::mem::replace(&mut self.terminal, true);
        };

        match self.edges.entry(first.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(Edge::new(word.to_vec(), Node::leaf(true)));
                true
            }
            Entry::Occupied(mut slot) => {
                let edge = slot.get_mut();
                let common_len = prefix_match(word, &edge.chunk);

                // The first symbols match, so at least one symbol is shared
                if common_len < edge.chunk.len() {
                    edge.split(common_len, depth);
                }

                edge.node.insert(&word[common_len..], depth + common_len)
            }
        }
    }

    /// Inserts `word` below this node with one edge per symbol.
    pub fn insert_uncompressed(&mut self, word: &[S]) -> bool {
        let mut current = self;

        for symbol in word {
            current = &mut current
                .edges
                .entry(symbol.clone())
                .or_insert_with(|| Edge::new(vec![symbol.clone()], Node::default()))
                .node;
        }

        !std::mem::replace(&mut current.terminal, true)
    }

    /// Removes `word` from below this node. Returns `false`, leaving the tree
    /// untouched, when the word is not stored.
    ///
    /// The cleanup runs on the way back up: a child left dead is pruned
    /// together with its edge, and with `compress` set a child left as a
    /// pass-through is merged into its incoming edge. The caller applies the
    /// same rule to this node, which is how pruning cascades toward the root.
    pub fn remove(&mut self, word: &[S], compress: bool, depth: usize) -> bool {
        let Some(first) = word.first() else {
            return std::mem::replace(&mut self.terminal, false);
        };

        let Some(edge) = self.edges.get_mut(first) else {
            return false;
        };
        if !word.starts_with(&edge.chunk) {
            return false;
        }

        let chunk_len = edge.chunk.len();
        if !edge.node.remove(&word[chunk_len..], compress, depth + chunk_len) {
            return false;
        }

        if edge.node.is_dead() {
            trace!(depth, chunk_len, "pruning dead leaf");
            self.edges.remove(first);
        } else if compress && edge.node.is_pass_through() {
            edge.merge(depth);
        }

        true
    }

    /// Checks the structural invariants of this subtree and returns the
    /// number of stored words in it.
    pub fn check(&self, depth: usize, compressed: bool, is_root: bool) -> Result<usize, Error> {
        if !is_root {
            if self.is_dead() {
                return Err(Error::DeadLeaf { depth });
            }
            if compressed && self.is_pass_through() {
                return Err(Error::UncompressedNode { depth });
            }
        }

        let mut words = usize::from(self.terminal);
        for (key, edge) in &self.edges {
            match edge.chunk.first() {
                None => return Err(Error::EmptyChunk { depth }),
                Some(first) if first != key => return Err(Error::MisfiledEdge { depth }),
                Some(_) => {}
            }
            if !compressed && edge.chunk.len() > 1 {
                return Err(Error::OversizedChunk {
                    depth,
                    len: edge.chunk.len(),
                });
            }
            words += edge.node.check(depth + edge.chunk.len(), compressed, false)?;
        }

        Ok(words)
    }
}

impl<S> Edge<S> {
    /// Creates a new edge carrying `chunk` to `node`
    pub fn new(chunk: Vec<S>, node: Node<S>) -> Self {
        Edge { chunk, node }
    }
}

impl<S: Ord + Clone> Edge<S> {
    /// Splits this edge after `at` symbols.
    ///
    /// The edge keeps the first `at` symbols and leads to a new intermediate
    /// node, whose only child edge carries the rest of the chunk to the old
    /// child. `at` must be strictly inside the chunk.
    pub fn split(&mut self, at: usize, depth: usize) {
        debug_assert!(at > 0 && at < self.chunk.len());

        let tail = self.chunk.split_off(at);
        trace!(depth, head_len = at, tail_len = tail.len(), "splitting edge");

        let child = std::mem::take(&mut self.node);
        let mut intermediate = Node::default();
        intermediate
            .edges
            .insert(tail[0].clone(), Edge::new(tail, child));
        self.node = intermediate;
    }

    /// Merges the pass-through node this edge leads to into the edge itself:
    /// the single child chunk is appended and the edge points at the
    /// grandchild. The inverse of `split`.
    pub fn merge(&mut self, depth: usize) {
        debug_assert!(self.node.is_pass_through());

        if let Some((_, next)) = self.node.edges.pop_first() {
            trace!(
                depth,
                head_len = self.chunk.len(),
                tail_len = next.chunk.len(),
                "merging edge"
            );
            self.chunk.extend(next.chunk);
            self.node = next.node;
        }
    }
}
