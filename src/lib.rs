//! A string-keyed ordered map implemented with an AVL tree.
//!
//! Every insert and delete retraces the path back to the root, recomputing cached heights and
//! rotating where a subtree became unbalanced, so lookups stay `O(log n)`.
//!
//! ```
//! use avl_string_map::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.insert("b", 1);
//! tree.insert("a", 2);
//! tree.insert("c", 3);
//! assert_eq!(tree.search("a"), Some(&2));
//! assert_eq!(tree.root().map(|root| root.key()), Some("b"));
//!
//! tree.delete("a");
//! assert!(tree.search("a").is_none());
//! ```
//!
//! The tree performs no internal synchronization. Share it between threads behind a single
//! lock held for the duration of each operation.

mod balance;
mod node;
mod tree;

pub use node::{balance_factor, height, Node};
pub use tree::AvlTree;

#[cfg(test)]
mod proptests;
