//! Prefix view into a radix trie.
//!
//! This module provides the `PrefixView` type, which gives access to all
//! words sharing a prefix, and the iterators used to enumerate words in
//! lexicographic order.

use std::fmt;
use std::marker::PhantomData;

use crate::key_converter::{AsSymbols, FromSymbols};
use crate::node::Node;
use crate::util::prefix_match;
use crate::RadixTrie;

/// A lightweight view into the words of a trie that start with a prefix.
///
/// The prefix does not have to end on a node boundary: a view of `"toa"`
/// over a trie holding `"toast"` finds the edge carrying `"oast"` and covers
/// everything below it.
///
/// # Examples
///
/// ```
/// use radix_set::StringTrie;
///
/// let mut trie1 = StringTrie::new();
/// trie1.extend(["hello", "help"]);
///
/// let mut trie2 = StringTrie::new();
/// trie2.extend(["help", "hello", "world"]);
///
/// let view1 = trie1.view_subtrie("hel");
/// let view2 = trie2.view_subtrie("hel");
///
/// // Views enumerating the same words are equal
/// assert_eq!(view1, view2);
///
/// // Check if words exist in the view
/// assert!(view1.contains_key("hello"));
/// assert!(!view1.contains_key("world"));
/// ```
pub struct PrefixView<'a, S, K> {
    /// The source trie for this view
    trie: &'a RadixTrie<S, K>,

    /// The prefix defining this view
    prefix: Vec<S>,

    /// The node at or just past the prefix, with the symbols spelled on the
    /// way there
    anchor: Option<(&'a Node<S>, Vec<S>)>,
}

/// Depth-first walk over a subtree, yielding the symbols of every stored
/// word. Children are visited in ascending order of their first symbol and a
/// node's own word comes before its descendants, so words come out in
/// lexicographic order.
pub(crate) struct Paths<'a, S> {
    /// Nodes still to visit, along with the symbols spelled to reach them
    stack: Vec<(&'a Node<S>, Vec<S>)>,
}

/// An iterator over stored words in lexicographic order.
///
/// Created by [`RadixTrie::iter`] and [`PrefixView::iter`].
pub struct Iter<'a, S, K> {
    paths: Paths<'a, S>,
    _key_type: PhantomData<fn() -> K>,
}

impl<'a, S, K> PrefixView<'a, S, K>
where
    S: Ord + Clone,
{
    /// Creates a new prefix view for the given trie and prefix.
    pub fn new(trie: &'a RadixTrie<S, K>, prefix: Vec<S>) -> Self {
        let anchor = Self::find_subtrie_node(&trie.root, &prefix);

        PrefixView {
            trie,
            prefix,
            anchor,
        }
    }

    /// Returns the prefix for this view.
    pub fn prefix(&self) -> &[S] {
        &self.prefix
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &'a RadixTrie<S, K> {
        self.trie
    }

    /// Returns whether any path of the trie starts with the prefix.
    ///
    /// This is `true` whenever the view is not empty.
    pub fn exists(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the number of words in this view.
    pub fn len(&self) -> usize {
        self.paths().count()
    }

    /// Returns whether this view contains no words.
    pub fn is_empty(&self) -> bool {
        self.paths().next().is_none()
    }

    /// Checks if the view contains a word.
    ///
    /// Only returns true if the word is in the trie and starts with the prefix.
    pub fn contains_key<Q>(&self, word: &Q) -> bool
    where
        Q: AsSymbols<S> + ?Sized,
    {
        let symbols = word.symbols();

        symbols.starts_with(&self.prefix) && self.trie.contains(&symbols[..])
    }

    /// Returns an iterator over the words in the view, in lexicographic order.
    pub fn iter(&self) -> Iter<'a, S, K> {
        Iter::new(self.paths())
    }

    /// Collects every word in the view.
    pub fn keys(&self) -> Vec<K>
    where
        K: FromSymbols<S>,
    {
        self.iter().collect()
    }

    fn paths(&self) -> Paths<'a, S> {
        match &self.anchor {
            Some((node, spelled)) => Paths::new(*node, spelled.clone()),
            None => Paths::empty(),
        }
    }

    // Helper method to find the node the prefix leads to. A prefix ending
    // inside an edge resolves to the node at the end of that edge.
    fn find_subtrie_node(root: &'a Node<S>, prefix: &[S]) -> Option<(&'a Node<S>, Vec<S>)> {
        let mut current = root;
        let mut remaining = prefix;
        let mut spelled = Vec::with_capacity(prefix.len());

        while let Some(first) = remaining.first() {
            let edge = current.edges.get(first)?;
            let common_len = prefix_match(remaining, &edge.chunk);

            // The prefix runs out on this edge, possibly partway through it
            if common_len == remaining.len() {
                spelled.extend_from_slice(&edge.chunk);
                return Some((&edge.node, spelled));
            }

            // The prefix diverges from the edge
            if common_len < edge.chunk.len() {
                return None;
            }

            spelled.extend_from_slice(&edge.chunk);
            remaining = &remaining[common_len..];
            current = &edge.node;
        }

        Some((current, spelled))
    }
}

impl<'a, S, K> Clone for PrefixView<'a, S, K>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        PrefixView {
            trie: self.trie,
            prefix: self.prefix.clone(),
            anchor: self.anchor.clone(),
        }
    }
}

impl<'a, S, K> fmt::Debug for PrefixView<'a, S, K>
where
    S: Ord + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("len", &self.len())
            .finish()
    }
}

// Views are compared by the words they enumerate, so views over different
// tries or with different prefixes can be equal.
impl<'a, S, K> PartialEq for PrefixView<'a, S, K>
where
    S: Ord + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.paths().eq(other.paths())
    }
}

impl<'a, S, K> Eq for PrefixView<'a, S, K> where S: Ord + Clone {}

impl<'a, 'b, S, K> IntoIterator for &'b PrefixView<'a, S, K>
where
    S: Ord + Clone,
    K: FromSymbols<S>,
{
    type Item = K;
    type IntoIter = Iter<'a, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S> Paths<'a, S> {
    pub(crate) fn new(node: &'a Node<S>, spelled: Vec<S>) -> Self {
        Paths {
            stack: vec![(node, spelled)],
        }
    }

    pub(crate) fn empty() -> Self {
        Paths { stack: Vec::new() }
    }
}

impl<'a, S: Clone> Iterator for Paths<'a, S> {
    type Item = Vec<S>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, spelled)) = self.stack.pop() {
            // Push in reverse so the smallest first symbol is popped first
            for edge in node.edges.values().rev() {
                let mut child = Vec::with_capacity(spelled.len() + edge.chunk.len());
                child.extend_from_slice(&spelled);
                child.extend_from_slice(&edge.chunk);
                self.stack.push((&edge.node, child));
            }

            if node.terminal {
                return Some(spelled);
            }
        }

        None
    }
}

impl<'a, S, K> Iter<'a, S, K> {
    pub(crate) fn new(paths: Paths<'a, S>) -> Self {
        Iter {
            paths,
            _key_type: PhantomData,
        }
    }
}

impl<'a, S, K> Iterator for Iter<'a, S, K>
where
    S: Clone,
    K: FromSymbols<S>,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.paths.next().map(|path| K::from_symbols(&path))
    }
}
