//! # Radix Set
//!
//! A compressed radix trie storing an ordered set of words.
//!
//! This crate provides a mutable radix trie (also known as a patricia trie)
//! over any symbol type with an ordering. Each edge carries a run of symbols
//! rather than a single one; edges are split when an insertion diverges inside
//! them and merged back when a removal leaves a node with a single child, so
//! the tree never keeps a non-terminal node with one child below the root.
//!
//! ## Features
//!
//! - **Set operations**: insert, exact membership and removal
//! - **Prefix queries**: enumerate every word under a prefix, or find the
//!   longest stored word that prefixes a query
//! - **Ordered iteration**: words come out in lexicographic order
//! - **Plain trie mode**: compression can be disabled to keep one edge per
//!   symbol
//! - **Serde support** behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use radix_set::StringTrie;
//!
//! let mut trie = StringTrie::new();
//! trie.insert("test");
//! trie.insert("toaster");
//! trie.insert("toast");
//!
//! assert!(trie.contains("toast"));
//! assert!(!trie.contains("toas"));
//! assert_eq!(trie.keys_with_prefix("to"), vec!["toast", "toaster"]);
//! assert_eq!(trie.longest_prefix("toasting"), Some("toast".to_string()));
//!
//! trie.remove("toast");
//! assert!(trie.contains("toaster"));
//! ```

mod config;
mod key_converter;
mod node;
mod prefix_view;
mod pretty;
mod trie;
mod util;

// Re-export public types
pub use crate::config::{Compression, TrieConfig};
pub use crate::key_converter::{AsSymbols, FromSymbols};
pub use crate::prefix_view::{Iter, PrefixView};
pub use crate::pretty::PrettyTree;
pub use crate::trie::{ByteTrie, RadixTrie, StringTrie};

/// Structural invariant violations reported by
/// [`RadixTrie::check_invariants`].
///
/// `depth` is the number of symbols between the root and the node where the
/// violation was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge carries no symbols
    EmptyChunk { depth: usize },
    /// An edge is filed under a key other than its first symbol
    MisfiledEdge { depth: usize },
    /// A non-terminal node below the root has exactly one child
    UncompressedNode { depth: usize },
    /// A non-terminal node below the root has no children
    DeadLeaf { depth: usize },
    /// An edge of an uncompressed trie carries more than one symbol
    OversizedChunk { depth: usize, len: usize },
    /// The stored word count disagrees with the tree
    LengthMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyChunk { depth } => write!(f, "empty edge chunk at depth {}", depth),
            Error::MisfiledEdge { depth } => {
                write!(f, "edge filed under the wrong symbol at depth {}", depth)
            }
            Error::UncompressedNode { depth } => {
                write!(f, "non-terminal single-child node at depth {}", depth)
            }
            Error::DeadLeaf { depth } => write!(f, "non-terminal leaf at depth {}", depth),
            Error::OversizedChunk { depth, len } => write!(
                f,
                "edge of {} symbols in an uncompressed trie at depth {}",
                len, depth
            ),
            Error::LengthMismatch { expected, found } => write!(
                f,
                "trie reports {} words but holds {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for Error {}
