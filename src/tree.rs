use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::balance::rebalance;
use crate::node::{self, update_height, Link, Node};

/// An ordered map from `String` keys to values of type `V`, kept height balanced.
#[derive(Clone)]
pub struct AvlTree<V> {
    root: Link<V>,
    num_nodes: usize,
}

impl<V> AvlTree<V> {
    /// Creates an empty tree.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, 0 if it is empty.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// Returns the balance factor of the root node, 0 if the tree is empty.
    pub fn balance_factor(&self) -> isize {
        node::balance_factor(self.root())
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// Clears the tree, deallocating all nodes.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns a reference to the value stored for the key.
    pub fn search(&self, key: &str) -> Option<&V> {
        Self::search_node(self.root(), key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored for the key.
    pub fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        Self::search_node_mut(&mut self.root, key).map(|node| &mut node.value)
    }

    /// Returns true if the tree contains a value for the key.
    pub fn contains_key(&self, key: &str) -> bool {
        Self::search_node(self.root(), key).is_some()
    }

    /// Inserts a key-value pair into the tree.
    ///
    /// If the key is already present, its value is overwritten in place and the old value is
    /// returned. The shape of the tree does not change in that case.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let (root, old_value) = Self::insert_node(self.root.take(), key.into(), value);
        self.root = Some(root);
        if old_value.is_none() {
            self.num_nodes += 1;
        }
        old_value
    }

    /// Removes a key from the tree.
    /// Returns the value at the key if the key was previously in the tree.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let (root, removed) = Self::delete_node(self.root.take(), key);
        self.root = root;
        if removed.is_some() {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
            debug_assert!(self.search(key).is_none());
        }
        removed
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Returns the height of the checked subtree.
        fn check<V>(
            node: Option<&Node<V>>,
            lower: Option<&str>,
            upper: Option<&str>,
            num_nodes: &mut usize,
        ) -> usize {
            let node = match node {
                None => return 0,
                Some(node) => node,
            };

            // Check ordering against all ancestors
            if let Some(lower) = lower {
                assert!(node.key() > lower);
            }
            if let Some(upper) = upper {
                assert!(node.key() < upper);
            }

            let left_height = check(node.left(), lower, Some(node.key()), num_nodes);
            let right_height = check(node.right(), Some(node.key()), upper, num_nodes);

            // Check height
            assert_eq!(node.height(), 1 + left_height.max(right_height));

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            *num_nodes += 1;
            node.height()
        }

        let mut num_nodes = 0;
        let height = check(self.root(), None, None, &mut num_nodes);
        assert_eq!(height, self.height());

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.is_empty(), self.num_nodes == 0);

        // Check depth bound
        let bound = 1.44 * ((self.num_nodes + 2) as f64).log2();
        assert!(height as f64 <= bound, "height {height} exceeds {bound}");
    }

    #[cfg(test)]
    pub(crate) fn keys<'a>(&'a self) -> Vec<&'a str> {
        let mut keys = Vec::with_capacity(self.num_nodes);
        Self::inorder(self.root(), &mut |node: &'a Node<V>| keys.push(node.key()));
        keys
    }

    fn search_node<'a>(node: Option<&'a Node<V>>, key: &str) -> Option<&'a Node<V>> {
        let node = node?;
        match key.cmp(node.key()) {
            Ordering::Less => Self::search_node(node.left(), key),
            Ordering::Equal => Some(node),
            Ordering::Greater => Self::search_node(node.right(), key),
        }
    }

    fn search_node_mut<'a>(link: &'a mut Link<V>, key: &str) -> Option<&'a mut Node<V>> {
        let node = link.as_deref_mut()?;
        match key.cmp(node.key.as_str()) {
            Ordering::Less => Self::search_node_mut(&mut node.left, key),
            Ordering::Equal => Some(node),
            Ordering::Greater => Self::search_node_mut(&mut node.right, key),
        }
    }

    // Returns the new subtree root and the overwritten value, if any.
    fn insert_node(link: Link<V>, key: String, value: V) -> (Box<Node<V>>, Option<V>) {
        let mut node = match link {
            None => return (Node::create(key, value), None),
            Some(node) => node,
        };

        let old_value = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, old_value) = Self::insert_node(node.left.take(), key, value);
                node.left = Some(left);
                old_value
            }
            Ordering::Greater => {
                let (right, old_value) = Self::insert_node(node.right.take(), key, value);
                node.right = Some(right);
                old_value
            }
            Ordering::Equal => {
                let old_value = mem::replace(&mut node.value, value);
                return (node, Some(old_value));
            }
        };

        update_height(&mut node);
        (rebalance(node), old_value)
    }

    // Returns the new subtree root and the removed value, if any.
    fn delete_node(link: Link<V>, key: &str) -> (Link<V>, Option<V>) {
        let mut node = match link {
            None => return (None, None),
            Some(node) => node,
        };

        let removed = match key.cmp(node.key.as_str()) {
            Ordering::Less => {
                let (left, removed) = Self::delete_node(node.left.take(), key);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = Self::delete_node(node.right.take(), key);
                node.right = right;
                removed
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => return (None, Some(node.value)),
                (Some(child), None) | (None, Some(child)) => {
                    return (Some(child), Some(node.value));
                }
                (Some(left), Some(right)) => {
                    // Splice in the in-order successor, the leftmost node of the right subtree
                    let (right, successor) = Self::take_min(right);
                    debug_assert!(successor.is_leaf());
                    log::debug!(
                        "delete {:?}: replacing with successor {:?}",
                        node.key,
                        successor.key
                    );

                    let Node {
                        key: successor_key,
                        value: successor_value,
                        ..
                    } = *successor;
                    node.key = successor_key;
                    node.left = Some(left);
                    node.right = right;
                    Some(mem::replace(&mut node.value, successor_value))
                }
            },
        };

        update_height(&mut node);
        (Some(rebalance(node)), removed)
    }

    // Detaches the leftmost node of a subtree, retracing on the way back up.
    // Returns the remaining subtree and the detached node.
    fn take_min(mut node: Box<Node<V>>) -> (Link<V>, Box<Node<V>>) {
        match node.left.take() {
            None => {
                let right = node.right.take();
                (right, node)
            }
            Some(left) => {
                let (left, min) = Self::take_min(left);
                node.left = left;
                update_height(&mut node);
                (Some(rebalance(node)), min)
            }
        }
    }

    fn inorder<'a, F>(node: Option<&'a Node<V>>, f: &mut F)
    where
        F: FnMut(&'a Node<V>),
    {
        if let Some(node) = node {
            Self::inorder(node.left(), f);
            f(node);
            Self::inorder(node.right(), f);
        }
    }
}

impl<V> Default for AvlTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for AvlTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        Self::inorder(self.root(), &mut |node: &Node<V>| {
            map.entry(&node.key, &node.value);
        });
        map.finish()
    }
}
