//! Diagnostic rendering of the tree structure.

use std::fmt;

use crate::node::Node;
use crate::RadixTrie;

/// Renders the edges of a trie as an indented tree, one edge per line.
///
/// Nodes that end a stored word are marked `(word)`. The root is drawn as
/// `.`.
///
/// ```rust
/// use radix_set::StringTrie;
///
/// let mut trie = StringTrie::new();
/// trie.extend(["test", "toaster", "toast"]);
///
/// let expected = "\
/// .
/// └── t
///     ├── est (word)
///     └── oast (word)
///         └── er (word)
/// ";
/// assert_eq!(trie.pretty().to_string(), expected);
/// ```
pub struct PrettyTree<'a, S> {
    root: &'a Node<S>,
}

impl<S, K> RadixTrie<S, K> {
    /// Returns a `Display` rendering of the tree structure.
    pub fn pretty(&self) -> PrettyTree<'_, S> {
        PrettyTree { root: &self.root }
    }

    /// Prints the tree structure to standard output.
    pub fn pretty_print(&self)
    where
        S: fmt::Display,
    {
        print!("{}", self.pretty());
    }
}

impl<'a, S: fmt::Display> fmt::Display for PrettyTree<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(".")?;
        if self.root.terminal {
            f.write_str(" (word)")?;
        }
        writeln!(f)?;

        write_edges(f, self.root, &mut String::new())
    }
}

fn write_edges<S: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<S>,
    indent: &mut String,
) -> fmt::Result {
    let count = node.edges.len();

    for (i, edge) in node.edges.values().enumerate() {
        let last = i + 1 == count;

        f.write_str(indent)?;
        f.write_str(if last { "└── " } else { "├── " })?;
        for symbol in &edge.chunk {
            write!(f, "{}", symbol)?;
        }
        if edge.node.terminal {
            f.write_str(" (word)")?;
        }
        writeln!(f)?;

        let depth = indent.len();
        indent.push_str(if last { "    " } else { "│   " });
        write_edges(f, &edge.node, indent)?;
        indent.truncate(depth);
    }

    Ok(())
}
