use std::cmp;

pub(crate) type Link<V> = Option<Box<Node<V>>>;

/// A single entry of an [`AvlTree`](crate::AvlTree).
///
/// Nodes exclusively own their children. They can be inspected through
/// [`AvlTree::root`](crate::AvlTree::root) but never modified from outside the tree.
#[derive(Clone)]
pub struct Node<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    pub(crate) left: Link<V>,
    pub(crate) right: Link<V>,
    pub(crate) height: usize,
}

impl<V> Node<V> {
    pub(crate) fn create(key: String, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<V>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<V>> {
        self.right.as_deref()
    }

    /// Cached height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Height of the right subtree minus height of the left subtree.
    pub fn balance_factor(&self) -> isize {
        height(self.right()) as isize - height(self.left()) as isize
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Returns the height of an optional subtree. An absent subtree has height 0.
pub fn height<V>(node: Option<&Node<V>>) -> usize {
    match node {
        None => 0,
        Some(node) => node.height,
    }
}

/// Returns the balance factor of an optional subtree.
/// Negative values mean left-heavy, positive values right-heavy.
pub fn balance_factor<V>(node: Option<&Node<V>>) -> isize {
    match node {
        None => 0,
        Some(node) => node.balance_factor(),
    }
}

// Must be called on every node whose child links changed,
// before its balance factor is queried again.
pub(crate) fn update_height<V>(node: &mut Node<V>) {
    node.height = 1 + cmp::max(height(node.left()), height(node.right()));
}
