//! The main trie implementation.
//!
//! This module contains the `RadixTrie` type, which provides the primary API for
//! working with the radix trie data structure.

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::config::TrieConfig;
use crate::key_converter::{AsSymbols, FromSymbols};
use crate::node::Node;
use crate::prefix_view::{Iter, Paths, PrefixView};
use crate::Error;

/// A mutable radix trie storing a set of words.
///
/// This Radix Trie (also known as a Patricia Trie) is an ordered tree data
/// structure where each edge is labelled with a non-empty run of symbols. Runs
/// of nodes with a single child are collapsed into one edge, split again when
/// an insertion diverges inside them and merged back when a removal leaves a
/// node with a single child.
///
/// `S` is the symbol type and `K` is the owned word type handed back by
/// enumerating operations. Words are accepted as anything implementing
/// [`AsSymbols<S>`](crate::AsSymbols).
///
/// Stored words are kept in lexicographic order of their symbols.
pub struct RadixTrie<S, K = Vec<S>> {
    /// The root node of the trie
    pub(crate) root: Node<S>,

    /// The number of words stored in the trie
    size: usize,

    config: TrieConfig,

    /// Phantom data to carry the word type
    _key_type: PhantomData<fn() -> K>,
}

/// A trie over the `char`s of strings.
pub type StringTrie = RadixTrie<char, String>;

/// A trie over raw bytes.
pub type ByteTrie = RadixTrie<u8, Vec<u8>>;

impl<S: Clone, K> Clone for RadixTrie<S, K> {
    fn clone(&self) -> Self {
        RadixTrie {
            root: self.root.clone(),
            size: self.size,
            config: self.config,
            _key_type: PhantomData,
        }
    }
}

impl<S, K> RadixTrie<S, K> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_set::StringTrie;
    ///
    /// let trie = StringTrie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new, empty trie with the given configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        if config != TrieConfig::default() {
            debug!(compression = ?config.compression_mode(), "creating trie");
        }

        RadixTrie {
            root: Node::default(),
            size: 0,
            config,
            _key_type: PhantomData,
        }
    }

    /// Creates a plain trie that keeps one edge per symbol.
    pub fn uncompressed() -> Self {
        Self::with_config(TrieConfig::uncompressed())
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> TrieConfig {
        self.config
    }

    /// Returns the number of words stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_set::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello");
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no words.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.size = 0;
    }

    /// Returns the number of nodes in the tree, the root included.
    ///
    /// A compressed trie holding `n` words never has more than `2n + 1`.
    pub fn node_count(&self) -> usize {
        self.root.subtree_nodes()
    }

    /// Returns an iterator over all stored words in lexicographic order.
    pub fn iter(&self) -> Iter<'_, S, K> {
        Iter::new(Paths::new(&self.root, Vec::new()))
    }
}

impl<S, K> RadixTrie<S, K>
where
    S: Ord + Clone,
{
    /// Inserts a word into the trie.
    ///
    /// Returns `true` if the word was not already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_set::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// assert!(trie.insert("hello"));
    /// assert!(!trie.insert("hello"));
    /// assert!(trie.contains("hello"));
    /// ```
    pub fn insert<Q>(&mut self, word: &Q) -> bool
    where
        Q: AsSymbols<S> + ?Sized,
    {
        let symbols = word.symbols();

        let inserted = if self.config.compressed() {
            self.root.insert(&symbols, 0)
        } else {
            self.root.insert_uncompressed(&symbols)
        };

        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Returns `true` if the word is stored in the trie.
    ///
    /// Only whole words match: a prefix of a stored word is not found unless
    /// it was inserted itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_set::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("toast");
    ///
    /// assert!(trie.contains("toast"));
    /// assert!(!trie.contains("toas"));
    /// ```
    #[doc(alias = "search")]
    pub fn contains<Q>(&self, word: &Q) -> bool
    where
        Q: AsSymbols<S> + ?Sized,
    {
        self.root
            .find(&word.symbols())
            .map_or(false, |node| node.terminal)
    }

    /// Removes a word from the trie.
    ///
    /// Returns `true` if the word was stored. Removing a missing word leaves
    /// the trie unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_set::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("hello");
    ///
    /// assert!(trie.remove("hello"));
    /// assert!(!trie.remove("hello"));
    /// assert!(trie.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, word: &Q) -> bool
    where
        Q: AsSymbols<S> + ?Sized,
    {
        let removed = self
            .root
            .remove(&word.symbols(), self.config.compressed(), 0);

        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Creates a view of all words starting with the given prefix.
    ///
    /// The prefix may end in the middle of an edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_set::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("hello");
    /// trie.insert("help");
    ///
    /// let view = trie.view_subtrie("hel");
    /// assert_eq!(view.len(), 2);
    /// assert!(view.contains_key("hello"));
    /// ```
    pub fn view_subtrie<Q>(&self, prefix: &Q) -> PrefixView<'_, S, K>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        PrefixView::new(self, prefix.symbols().into_owned())
    }

    /// Verifies the structural invariants of the tree.
    ///
    /// Every edge chunk must be non-empty and filed under its first symbol, no
    /// node below the root may be a dead leaf, the stored word count must
    /// match `len`, and depending on the compression mode either no node
    /// below the root is a non-terminal single-child node or every chunk is a
    /// single symbol.
    pub fn check_invariants(&self) -> Result<(), Error> {
        let found = self.root.check(0, self.config.compressed(), true)?;
        if found != self.size {
            return Err(Error::LengthMismatch {
                expected: self.size,
                found,
            });
        }
        Ok(())
    }
}

impl<S, K> RadixTrie<S, K>
where
    S: Ord + Clone,
    K: FromSymbols<S>,
{
    /// Returns the longest stored word that is a prefix of `word`.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_set::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("toast");
    /// trie.insert("toaster");
    ///
    /// assert_eq!(trie.longest_prefix("toasting"), Some("toast".to_string()));
    /// assert_eq!(trie.longest_prefix("bread"), None);
    /// ```
    pub fn longest_prefix<Q>(&self, word: &Q) -> Option<K>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        let symbols = word.symbols();

        let mut current = &self.root;
        let mut remaining = &symbols[..];
        let mut consumed = 0;
        let mut longest = current.terminal.then_some(0);

        while let Some(first) = remaining.first() {
            let Some(edge) = current.edges.get(first) else {
                break;
            };
            if !remaining.starts_with(&edge.chunk) {
                break;
            }

            consumed += edge.chunk.len();
            remaining = &remaining[edge.chunk.len()..];
            current = &edge.node;

            if current.terminal {
                longest = Some(consumed);
            }
        }

        longest.map(|len| K::from_symbols(&symbols[..len]))
    }

    /// Returns every stored word starting with `prefix`, in lexicographic
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_set::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("test");
    /// trie.insert("toaster");
    /// trie.insert("toast");
    ///
    /// assert_eq!(trie.keys_with_prefix("to"), vec!["toast", "toaster"]);
    /// assert!(trie.keys_with_prefix("x").is_empty());
    /// ```
    pub fn keys_with_prefix<Q>(&self, prefix: &Q) -> Vec<K>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        self.view_subtrie(prefix).keys()
    }
}

impl<S, K> Default for RadixTrie<S, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K> fmt::Debug for RadixTrie<S, K>
where
    S: Clone,
    K: FromSymbols<S> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Two tries are equal when they store the same words, whatever their
// compression mode.
impl<S, K> PartialEq for RadixTrie<S, K>
where
    S: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        if self.config == other.config {
            return self.root == other.root;
        }
        Paths::new(&self.root, Vec::new()).eq(Paths::new(&other.root, Vec::new()))
    }
}

impl<S, K> Eq for RadixTrie<S, K> where S: Clone + Eq {}

impl<S, K, Q> FromIterator<Q> for RadixTrie<S, K>
where
    S: Ord + Clone,
    Q: AsSymbols<S>,
{
    fn from_iter<I: IntoIterator<Item = Q>>(iter: I) -> Self {
        let mut trie = RadixTrie::new();
        trie.extend(iter);
        trie
    }
}

impl<S, K, Q> Extend<Q> for RadixTrie<S, K>
where
    S: Ord + Clone,
    Q: AsSymbols<S>,
{
    fn extend<I: IntoIterator<Item = Q>>(&mut self, iter: I) {
        for word in iter {
            self.insert(&word);
        }
    }
}

impl<'a, S, K> IntoIterator for &'a RadixTrie<S, K>
where
    S: Clone,
    K: FromSymbols<S>,
{
    type Item = K;
    type IntoIter = Iter<'a, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{SeqAccess, Visitor};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::RadixTrie;
    use crate::key_converter::{AsSymbols, FromSymbols};

    // A trie serializes as the sequence of its words in lexicographic order.
    impl<S, K> Serialize for RadixTrie<S, K>
    where
        S: Clone,
        K: FromSymbols<S> + Serialize,
    {
        fn serialize<T: Serializer>(&self, serializer: T) -> Result<T::Ok, T::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for word in self.iter() {
                seq.serialize_element(&word)?;
            }
            seq.end()
        }
    }

    struct TrieVisitor<S, K>(PhantomData<fn() -> (S, K)>);

    impl<'de, S, K> Visitor<'de> for TrieVisitor<S, K>
    where
        S: Ord + Clone,
        K: Deserialize<'de> + AsSymbols<S>,
    {
        type Value = RadixTrie<S, K>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a sequence of words")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut trie = RadixTrie::new();
            while let Some(word) = seq.next_element::<K>()? {
                trie.insert(&word);
            }
            Ok(trie)
        }
    }

    impl<'de, S, K> Deserialize<'de> for RadixTrie<S, K>
    where
        S: Ord + Clone,
        K: Deserialize<'de> + AsSymbols<S>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(TrieVisitor(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Compression;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn toasts() -> StringTrie {
        let mut trie = StringTrie::new();
        trie.insert("test");
        trie.insert("toaster");
        trie.insert("toast");
        trie
    }

    #[test]
    fn test_new_trie() {
        let trie = StringTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.config().compression_mode(), Compression::Enabled);
    }

    #[test]
    fn test_contains_nonexistent() {
        let trie = StringTrie::new();
        assert!(!trie.contains("hello"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_insert_and_contains() {
        let mut trie = StringTrie::new();
        assert!(trie.insert("hello"));

        assert_eq!(trie.len(), 1);
        assert!(trie.contains("hello"));
        assert!(!trie.contains("world"));
    }

    #[test]
    fn test_insert_twice() {
        let mut trie = StringTrie::new();
        assert!(trie.insert("hello"));
        let before = trie.clone();

        assert!(!trie.insert("hello"));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie, before);
    }

    #[test]
    fn test_node_splitting() {
        let mut trie = StringTrie::new();

        // Insert a word
        trie.insert("alphabet");

        // Insert another with common prefix - should cause splitting
        trie.insert("alpha");

        assert!(trie.contains("alphabet"));
        assert!(trie.contains("alpha"));
        assert_eq!(trie.root.edges[&'a'].chunk, chars("alpha"));
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn test_shorter_word_first() {
        let mut trie = StringTrie::new();

        // First insert the shorter word
        trie.insert("alpha");

        // Then insert the longer one
        trie.insert("alphabet");

        assert!(trie.contains("alpha"));
        assert!(trie.contains("alphabet"));
        assert!(!trie.contains("alphab"));
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn test_toast_scenario() {
        let mut trie = toasts();

        assert!(trie.contains("toast"));
        assert!(!trie.contains("toas"));
        assert_eq!(trie.keys_with_prefix("to"), vec!["toast", "toaster"]);
        assert_eq!(trie.longest_prefix("toasting"), Some("toast".to_string()));

        assert!(trie.remove("toast"));
        assert!(trie.contains("toaster"));
        assert!(!trie.contains("toast"));

        // "toast" + "er" folded back into one edge under the shared 't'
        let shared = &trie.root.edges[&'t'];
        assert_eq!(shared.chunk, vec!['t']);
        let merged = &shared.node.edges[&'o'];
        assert_eq!(merged.chunk, chars("oaster"));
        assert!(merged.node.edges.is_empty());
        assert!(trie.check_invariants().is_ok());
    }

    #[test]
    fn test_remove_existing() {
        let mut trie = StringTrie::new();
        trie.insert("hello");
        trie.insert("world");

        assert!(trie.remove("hello"));

        assert_eq!(trie.len(), 1);
        assert!(!trie.contains("hello"));
        assert!(trie.contains("world"));
    }

    #[test]
    fn test_remove_nonexistent() {
        let mut trie = StringTrie::new();
        trie.insert("hello");
        let before = trie.clone();

        assert!(!trie.remove("world"));
        assert!(!trie.remove("hell"));
        assert!(!trie.remove("hello world"));
        assert_eq!(trie, before);
        assert_eq!(trie.len(), 1);

        // Removing from an empty trie
        let mut empty = StringTrie::new();
        assert!(!empty.remove("anything"));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_with_compression() {
        let mut trie = StringTrie::new();
        trie.insert("abc");
        trie.insert("abcde");

        // Remove the shorter word, which should merge the edges
        assert!(trie.remove("abc"));

        assert!(!trie.contains("abc"));
        assert!(trie.contains("abcde"));
        assert_eq!(trie.root.edges[&'a'].chunk, chars("abcde"));
        assert_eq!(trie.node_count(), 2);
    }

    #[test]
    fn test_remove_cascades_to_root() {
        let mut trie = StringTrie::new();
        trie.insert("abc");
        trie.remove("abc");

        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.root.edges.is_empty());
    }

    #[test]
    fn test_root_keeps_single_child() {
        let mut trie = StringTrie::new();
        trie.insert("ab");
        trie.insert("cd");
        trie.remove("cd");

        // The root is allowed a single child and is never merged
        assert_eq!(trie.root.edges.len(), 1);
        assert!(trie.check_invariants().is_ok());
    }

    #[test]
    fn test_empty_word() {
        let mut trie = StringTrie::new();
        assert!(trie.insert(""));
        assert!(trie.contains(""));
        assert!(trie.root.terminal);
        assert_eq!(trie.node_count(), 1);

        trie.insert("a");
        assert_eq!(trie.longest_prefix("b"), Some(String::new()));
        assert_eq!(trie.keys_with_prefix(""), vec!["", "a"]);

        assert!(trie.remove(""));
        assert!(!trie.contains(""));
        assert!(trie.contains("a"));
        assert_eq!(trie.longest_prefix("b"), None);
    }

    #[test]
    fn test_longest_prefix() {
        let trie = toasts();

        assert_eq!(trie.longest_prefix("toaster oven"), Some("toaster".to_string()));
        assert_eq!(trie.longest_prefix("toaster"), Some("toaster".to_string()));
        assert_eq!(trie.longest_prefix("toasted"), Some("toast".to_string()));
        // Walk stops inside an edge before reaching any stored word
        assert_eq!(trie.longest_prefix("toas"), None);
        assert_eq!(trie.longest_prefix("tea"), None);
        assert_eq!(trie.longest_prefix(""), None);
    }

    #[test]
    fn test_keys_with_prefix_mid_edge() {
        let trie = toasts();

        assert_eq!(trie.keys_with_prefix("toa"), vec!["toast", "toaster"]);
        assert_eq!(trie.keys_with_prefix("toaste"), vec!["toaster"]);
        assert_eq!(trie.keys_with_prefix("t"), vec!["test", "toast", "toaster"]);
        assert_eq!(trie.keys_with_prefix(""), vec!["test", "toast", "toaster"]);
        assert!(trie.keys_with_prefix("toastx").is_empty());
        assert!(trie.keys_with_prefix("toasters").is_empty());
    }

    #[test]
    fn test_uncompressed_trie() {
        let mut trie = StringTrie::uncompressed();
        trie.insert("toast");
        trie.insert("toaster");

        assert_eq!(trie.node_count(), 8);
        assert!(trie.check_invariants().is_ok());
        assert_eq!(trie.keys_with_prefix("to"), vec!["toast", "toaster"]);

        trie.remove("toast");
        assert!(trie.contains("toaster"));
        assert_eq!(trie.node_count(), 8);

        trie.remove("toaster");
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_equality_across_modes() {
        let compressed: StringTrie = ["an", "ant", "any"].iter().collect();
        let mut plain = StringTrie::uncompressed();
        plain.extend(["any", "an", "ant"]);

        assert_eq!(compressed, plain);

        plain.remove("an");
        assert_ne!(compressed, plain);
    }

    #[test]
    fn test_byte_trie() {
        let mut trie = ByteTrie::new();
        trie.insert(b"abc");
        trie.insert("abd");
        trie.insert(&vec![b'x']);

        assert!(trie.contains(b"abd"));
        assert_eq!(trie.keys_with_prefix("ab"), vec![b"abc".to_vec(), b"abd".to_vec()]);
        assert_eq!(trie.longest_prefix(b"xyz"), Some(vec![b'x']));
    }

    #[test]
    fn test_generic_symbols() {
        let mut trie: RadixTrie<&str> = RadixTrie::new();
        trie.insert(&["usr", "local", "bin"]);
        trie.insert(&["usr", "local", "lib"]);
        trie.insert(&["usr", "share"]);

        assert_eq!(trie.keys_with_prefix(&["usr", "local"]).len(), 2);
        assert_eq!(
            trie.longest_prefix(&["usr", "share", "man"]),
            Some(vec!["usr", "share"])
        );
    }

    #[test]
    fn test_clear() {
        let mut trie = toasts();
        trie.clear();
        assert!(trie.is_empty());
        assert!(!trie.contains("toast"));
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_debug_renders_set() {
        let trie = toasts();
        assert_eq!(format!("{:?}", trie), r#"{"test", "toast", "toaster"}"#);
    }

    #[test]
    fn test_check_invariants_detects_bad_length() {
        let mut trie = toasts();
        trie.size = 7;
        assert_eq!(
            trie.check_invariants(),
            Err(Error::LengthMismatch {
                expected: 7,
                found: 3
            })
        );
    }
}
