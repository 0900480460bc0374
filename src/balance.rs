use crate::node::{update_height, Node};

// Unreachable as long as rebalance only rotates towards the heavy side.
#[cold]
#[inline(never)]
fn invariant_violation<V>(node: &Node<V>, missing: &str) -> ! {
    panic!(
        "AVL invariant violated: cannot rotate node {:?} (height {}, balance factor {}) without {} child",
        node.key,
        node.height,
        node.balance_factor(),
        missing
    );
}

//     node            left
//     /  \            /  \
//   left  c   ->     a   node
//   /  \                 /  \
//  a    b               b    c
pub(crate) fn rotate_right<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    let mut left = match node.left.take() {
        Some(left) => left,
        None => invariant_violation(&node, "left"),
    };
    log::trace!("rotate right at {:?}, promoting {:?}", node.key, left.key);

    node.left = left.right.take();
    update_height(&mut node);
    left.right = Some(node);
    update_height(&mut left);
    left
}

//   node                right
//   /  \                /  \
//  a   right    ->    node  c
//      /  \           /  \
//     b    c         a    b
pub(crate) fn rotate_left<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    let mut right = match node.right.take() {
        Some(right) => right,
        None => invariant_violation(&node, "right"),
    };
    log::trace!("rotate left at {:?}, promoting {:?}", node.key, right.key);

    node.right = right.left.take();
    update_height(&mut node);
    right.left = Some(node);
    update_height(&mut right);
    right
}

// Restore the AVL condition at a node whose height is already up to date.
// A child balance factor of 0 is handled with a single rotation.
pub(crate) fn rebalance<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    let balance_factor = node.balance_factor();
    if balance_factor < -1 {
        let left = node.left.take();
        match left {
            Some(left) if left.balance_factor() > 0 => {
                log::trace!("rebalance {:?}: left-right", node.key);
                node.left = Some(rotate_left(left));
            }
            left => {
                log::trace!("rebalance {:?}: left-left", node.key);
                node.left = left;
            }
        }
        rotate_right(node)
    } else if balance_factor > 1 {
        let right = node.right.take();
        match right {
            Some(right) if right.balance_factor() < 0 => {
                log::trace!("rebalance {:?}: right-left", node.key);
                node.right = Some(rotate_right(right));
            }
            right => {
                log::trace!("rebalance {:?}: right-right", node.key);
                node.right = right;
            }
        }
        rotate_left(node)
    } else {
        node
    }
}
