//! Traversal that only reads links.
//!
//! These functions never splay, so they work through a shared borrow of the arena. They give up
//! the amortized bounds of `Tree`, which is fine for full in-order scans where every link is
//! followed a constant number of times.

use crate::arena::{Arena, Handle};
use crate::splay::node::{Axis, Dir, Linked};
use std::cmp::Ordering;

/// Returns the extreme `dir` node of the subtree rooted at `node`.
pub fn extreme<N: Linked>(arena: &Arena<N>, axis: Axis, node: Handle, dir: Dir) -> Handle {
    let mut curr = node;
    while let Some(child) = arena[curr].links(axis).child(dir) {
        curr = child;
    }
    curr
}

/// Returns the neighbour of `node` in direction `dir` without restructuring the tree.
pub fn step<N: Linked>(arena: &Arena<N>, axis: Axis, node: Handle, dir: Dir) -> Option<Handle> {
    if let Some(child) = arena[node].links(axis).child(dir) {
        return Some(extreme(arena, axis, child, dir.mirror()));
    }

    let mut prev = node;
    let mut curr = arena[node].links(axis).up;
    while let Some(up) = curr {
        let links = arena[up].links(axis);
        if links.child(dir) != Some(prev) {
            return Some(up);
        }
        prev = up;
        curr = links.up;
    }
    None
}

/// Descends from `root` to the node whose key compares equal according to `probe`.
pub fn find<N, F>(arena: &Arena<N>, axis: Axis, root: Option<Handle>, mut probe: F) -> Option<Handle>
where
    N: Linked,
    F: FnMut(&N) -> Ordering,
{
    let mut curr = root;
    while let Some(node) = curr {
        let links = arena[node].links(axis);
        curr = match probe(&arena[node]) {
            Ordering::Less => links.left,
            Ordering::Greater => links.right,
            Ordering::Equal => return Some(node),
        };
    }
    None
}

/// Returns every node of the tree rooted at `root` in order.
pub fn in_order<N: Linked>(arena: &Arena<N>, axis: Axis, root: Option<Handle>) -> Vec<Handle> {
    let mut nodes = Vec::with_capacity(arena.len());
    let mut curr = root.map(|root| extreme(arena, axis, root, Dir::Left));
    while let Some(node) = curr {
        nodes.push(node);
        curr = step(arena, axis, node, Dir::Right);
    }
    nodes
}
