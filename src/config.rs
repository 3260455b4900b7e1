//! Construction-time configuration for a [`RadixTrie`](crate::RadixTrie).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether edges may carry chunks longer than one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Compression {
    /// Radix trie: runs of single-child nodes are collapsed into one edge,
    /// split on insertion and merged back on removal.
    #[default]
    Enabled,
    /// Plain trie: one edge per symbol, never split or merged.
    Disabled,
}

/// Configuration of a trie, fixed for its whole lifetime.
///
/// ```rust
/// use radix_set::{Compression, StringTrie, TrieConfig};
///
/// let config = TrieConfig::new().compression(Compression::Disabled);
/// let mut trie = StringTrie::with_config(config);
/// trie.insert("abc");
/// assert_eq!(trie.node_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrieConfig {
    compression: Compression,
}

impl TrieConfig {
    /// The default configuration: a compressed radix trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a plain, uncompressed trie.
    pub fn uncompressed() -> Self {
        Self::new().compression(Compression::Disabled)
    }

    /// Sets the compression mode.
    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn compression_mode(&self) -> Compression {
        self.compression
    }

    pub(crate) fn compressed(&self) -> bool {
        self.compression == Compression::Enabled
    }
}
