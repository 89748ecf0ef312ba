use crate::arena::{Arena, Handle};
use crate::splay::node::{Axis, Dir, Linked, Links};
use std::cmp::Ordering;

/// A mutable view of the splay tree formed by one axis of the records in an arena.
///
/// The view borrows the root slot of that axis and keeps it current: every operation that splays
/// a node records it as the new root. Operations that split the tree (`cut`, `cut_both`) leave the
/// recorded root at the node they split on, and the caller is expected to `merge` the pieces back
/// before relying on the root again.
pub struct Tree<'a, N> {
    arena: &'a mut Arena<N>,
    root: &'a mut Option<Handle>,
    axis: Axis,
}

impl<'a, N> Tree<'a, N>
where
    N: Linked,
{
    pub fn new(arena: &'a mut Arena<N>, root: &'a mut Option<Handle>, axis: Axis) -> Self {
        Tree { arena, root, axis }
    }

    pub fn root(&self) -> Option<Handle> {
        *self.root
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    fn links(&self, node: Handle) -> &Links {
        self.arena[node].links(self.axis)
    }

    fn links_mut(&mut self, node: Handle) -> &mut Links {
        self.arena[node].links_mut(self.axis)
    }

    fn parent(&self, node: Handle) -> Option<Handle> {
        self.links(node).up
    }

    fn child(&self, node: Handle, dir: Dir) -> Option<Handle> {
        self.links(node).child(dir)
    }

    fn set_parent(&mut self, node: Handle, up: Option<Handle>) {
        self.links_mut(node).up = up;
    }

    fn set_child(&mut self, node: Handle, dir: Dir, child: Option<Handle>) {
        self.links_mut(node).set_child(dir, child);
    }

    // Which slot of `up` holds `node`.
    fn dir_of(&self, up: Handle, node: Handle) -> Dir {
        if self.child(up, Dir::Left) == Some(node) {
            Dir::Left
        } else {
            Dir::Right
        }
    }

    /// Rotates `pivot` down into its `dir` slot. The child on the mirrored side takes the place of
    /// `pivot` under its former parent.
    ///
    /// # Panics
    ///
    /// Panics if `pivot` has no child on the mirrored side.
    pub fn rotate(&mut self, pivot: Handle, dir: Dir) {
        let other = dir.mirror();
        let up = self.parent(pivot);
        let child = self
            .child(pivot, other)
            .expect("Expected a child node to rotate up.");

        if let Some(up) = up {
            let slot = self.dir_of(up, pivot);
            self.set_child(up, slot, Some(child));
        }

        let inner = self.child(child, dir);
        self.set_child(child, dir, Some(pivot));
        self.set_child(pivot, other, inner);
        self.set_parent(pivot, Some(child));
        self.set_parent(child, up);
        if let Some(inner) = inner {
            self.set_parent(inner, Some(pivot));
        }
    }

    /// Moves `node` to the root of its tree with zig, zig-zig and zig-zag steps.
    pub fn splay(&mut self, node: Handle) -> Handle {
        while let Some(up) = self.parent(node) {
            let dir = self.dir_of(up, node);
            match self.parent(up) {
                None => self.rotate(up, dir.mirror()),
                Some(grand) if self.dir_of(grand, up) == dir => {
                    self.rotate(grand, dir.mirror());
                    self.rotate(up, dir.mirror());
                },
                Some(grand) => {
                    self.rotate(up, dir.mirror());
                    self.rotate(grand, dir);
                },
            }
        }
        *self.root = Some(node);
        node
    }

    /// Descends from `node` along `dir` to the extreme node of that subtree and splays it.
    pub fn extreme(&mut self, node: Handle, dir: Dir) -> Handle {
        let mut curr = node;
        while let Some(child) = self.child(curr, dir) {
            curr = child;
        }
        self.splay(curr)
    }

    pub fn left_most(&mut self, node: Handle) -> Handle {
        self.extreme(node, Dir::Left)
    }

    pub fn right_most(&mut self, node: Handle) -> Handle {
        self.extreme(node, Dir::Right)
    }

    /// Returns the neighbour of `node` in direction `dir` (`Dir::Right` for the successor) and
    /// splays it. If there is none, `node` itself is splayed and `None` is returned.
    pub fn step(&mut self, node: Handle, dir: Dir) -> Option<Handle> {
        if let Some(child) = self.child(node, dir) {
            return Some(self.extreme(child, dir.mirror()));
        }

        let mut prev = node;
        let mut curr = self.parent(node);
        while let Some(up) = curr {
            if self.child(up, dir) != Some(prev) {
                break;
            }
            prev = up;
            curr = self.parent(up);
        }

        match curr {
            Some(up) => Some(self.splay(up)),
            None => {
                self.splay(node);
                None
            },
        }
    }

    pub fn next(&mut self, node: Handle) -> Option<Handle> {
        self.step(node, Dir::Right)
    }

    pub fn prev(&mut self, node: Handle) -> Option<Handle> {
        self.step(node, Dir::Left)
    }

    /// Splits the tree into the nodes ordered before `node` and the tree rooted at `node` holding
    /// `node` and everything after it.
    pub fn cut(&mut self, node: Handle) -> (Option<Handle>, Handle) {
        self.splay(node);
        let less = self.detach(node, Dir::Left);
        (less, node)
    }

    /// Splits the tree into the nodes before `node`, `node` on its own, and the nodes after it.
    pub fn cut_both(&mut self, node: Handle) -> (Option<Handle>, Handle, Option<Handle>) {
        let (less, node) = self.cut(node);
        let greater = self.detach(node, Dir::Right);
        (less, node, greater)
    }

    fn detach(&mut self, node: Handle, dir: Dir) -> Option<Handle> {
        let child = self.child(node, dir);
        if let Some(child) = child {
            self.set_parent(child, None);
            self.set_child(node, dir, None);
        }
        child
    }

    // Hangs `subtree` below the extreme `dir` node of the tree containing `node`.
    fn attach(&mut self, node: Handle, subtree: Option<Handle>, dir: Dir) {
        let subtree = match subtree {
            Some(subtree) => subtree,
            None => return,
        };
        debug_assert!(self.parent(subtree).is_none());

        self.splay(node);
        let extreme = self.extreme(node, dir);
        self.set_child(extreme, dir, Some(subtree));
        self.set_parent(subtree, Some(extreme));
        self.splay(node);
    }

    /// Joins `less`, the tree containing `node`, and `greater` into one tree rooted at `node`.
    ///
    /// Every key in `less` must order before every key of the middle tree, and every key in
    /// `greater` after it. Both outer trees must be detached roots or `None`.
    pub fn merge(
        &mut self,
        node: Handle,
        less: Option<Handle>,
        greater: Option<Handle>,
    ) -> Handle {
        self.attach(node, less, Dir::Left);
        self.attach(node, greater, Dir::Right);
        self.splay(node)
    }

    /// Unlinks `node` from the tree and joins the remaining nodes back together. Returns the new
    /// root, which is `None` once the tree is empty.
    pub fn excise(&mut self, node: Handle) -> Option<Handle> {
        let (less, _, greater) = self.cut_both(node);
        let root = match greater {
            Some(greater) => {
                self.attach(greater, less, Dir::Left);
                Some(greater)
            },
            None => less,
        };
        *self.root = root;
        root
    }

    /// Finds and splays the first node that does not order before the probed key.
    ///
    /// `probe` reports how the probed key compares to a node's key. An exact match is returned as
    /// soon as it is seen. When every node orders before the key, the last visited node is
    /// splayed and `None` is returned.
    pub fn find_ge<F>(&mut self, mut probe: F) -> Option<Handle>
    where
        F: FnMut(&N) -> Ordering,
    {
        let mut curr = *self.root;
        let mut best = None;
        let mut last = None;

        while let Some(node) = curr {
            last = Some(node);
            match probe(&self.arena[node]) {
                Ordering::Less => {
                    best = Some(node);
                    curr = self.child(node, Dir::Left);
                },
                Ordering::Equal => return Some(self.splay(node)),
                Ordering::Greater => curr = self.child(node, Dir::Right),
            }
        }

        match best {
            Some(node) => Some(self.splay(node)),
            None => {
                if let Some(node) = last {
                    self.splay(node);
                }
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;
    use crate::arena::{Arena, Handle};
    use crate::splay::{walk, Axis, Dir, Linked, Links};

    struct TestNode {
        key: u32,
        links: [Links; 2],
    }

    impl Linked for TestNode {
        fn links(&self, axis: Axis) -> &Links {
            &self.links[axis.index()]
        }

        fn links_mut(&mut self, axis: Axis) -> &mut Links {
            &mut self.links[axis.index()]
        }
    }

    fn insert(arena: &mut Arena<TestNode>, root: &mut Option<Handle>, key: u32) -> Handle {
        let node = arena.allocate(TestNode {
            key,
            links: [Links::default(); 2],
        });
        if root.is_none() {
            *root = Some(node);
            return node;
        }
        let mut tree = Tree::new(arena, root, Axis::Left);
        let (less, greater) = match tree.find_ge(|other| key.cmp(&other.key)) {
            Some(found) => {
                let (less, found) = tree.cut(found);
                (less, Some(found))
            },
            None => (tree.root(), None),
        };
        tree.merge(node, less, greater);
        node
    }

    // Walks the whole tree, checking parent links, and returns the keys in order.
    fn check(arena: &Arena<TestNode>, root: Option<Handle>) -> Vec<u32> {
        let mut keys = Vec::new();
        let root = match root {
            Some(root) => root,
            None => return keys,
        };
        assert_eq!(arena[root].links[0].up, None);

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let links = arena[node].links[0];
            for child in links.left.iter().chain(links.right.iter()) {
                assert_eq!(arena[*child].links[0].up, Some(node));
                stack.push(*child);
            }
        }

        let mut curr = Some(walk::extreme(arena, Axis::Left, root, Dir::Left));
        while let Some(node) = curr {
            keys.push(arena[node].key);
            curr = walk::step(arena, Axis::Left, node, Dir::Right);
        }
        keys
    }

    fn build(keys: &[u32]) -> (Arena<TestNode>, Option<Handle>, Vec<Handle>) {
        let mut arena = Arena::new(16);
        let mut root = None;
        let handles = keys
            .iter()
            .map(|key| insert(&mut arena, &mut root, *key))
            .collect();
        (arena, root, handles)
    }

    #[test]
    fn test_insert_in_order() {
        let (arena, root, _) = build(&[5, 1, 9, 3, 7, 2, 8]);
        assert_eq!(check(&arena, root), vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_rotate() {
        let (mut arena, mut root, handles) = build(&[1, 2]);
        assert_eq!(root, Some(handles[1]));

        let mut tree = Tree::new(&mut arena, &mut root, Axis::Left);
        tree.rotate(handles[1], Dir::Right);
        assert_eq!(arena[handles[0]].links[0].right, Some(handles[1]));
        assert_eq!(arena[handles[0]].links[0].up, None);
        assert_eq!(arena[handles[1]].links[0].up, Some(handles[0]));
        assert_eq!(check(&arena, Some(handles[0])), vec![1, 2]);
    }

    #[test]
    fn test_splay_to_root() {
        let (mut arena, mut root, handles) = build(&[4, 2, 6, 1, 3, 5, 7]);
        for handle in handles {
            let mut tree = Tree::new(&mut arena, &mut root, Axis::Left);
            assert_eq!(tree.splay(handle), handle);
            assert_eq!(tree.root(), Some(handle));
            assert_eq!(check(&arena, root), vec![1, 2, 3, 4, 5, 6, 7]);
        }
    }

    #[test]
    fn test_extreme() {
        let (mut arena, mut root, handles) = build(&[4, 2, 6, 1, 3]);
        let start = root.unwrap();
        let mut tree = Tree::new(&mut arena, &mut root, Axis::Left);
        assert_eq!(tree.left_most(start), handles[3]);
        assert_eq!(tree.right_most(handles[3]), handles[2]);
        assert_eq!(root, Some(handles[2]));
    }

    #[test]
    fn test_next_prev() {
        let (mut arena, mut root, _) = build(&[3, 1, 4, 5, 9, 2, 6]);
        let start = root.unwrap();
        let mut tree = Tree::new(&mut arena, &mut root, Axis::Left);
        let first = tree.left_most(start);

        let mut forward = vec![first];
        let mut curr = first;
        while let Some(next) = tree.next(curr) {
            forward.push(next);
            curr = next;
        }
        let mut backward = vec![curr];
        while let Some(prev) = tree.prev(curr) {
            backward.push(prev);
            curr = prev;
        }
        backward.reverse();

        assert_eq!(forward, backward);
        let keys: Vec<u32> = forward.iter().map(|node| arena[*node].key).collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 9]);
        assert_eq!(check(&arena, root), keys);
    }

    #[test]
    fn test_cut_both() {
        let (mut arena, mut root, handles) = build(&[1, 2, 3, 4, 5]);
        let mut tree = Tree::new(&mut arena, &mut root, Axis::Left);
        let (less, node, greater) = tree.cut_both(handles[2]);
        assert_eq!(node, handles[2]);
        assert!(arena[node].links[0].is_isolated());
        assert_eq!(check(&arena, less), vec![1, 2]);
        assert_eq!(check(&arena, greater), vec![4, 5]);

        let mut tree = Tree::new(&mut arena, &mut root, Axis::Left);
        assert_eq!(tree.merge(node, less, greater), node);
        assert_eq!(check(&arena, root), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_excise() {
        let (mut arena, mut root, handles) = build(&[2, 4, 1, 3]);
        let mut tree = Tree::new(&mut arena, &mut root, Axis::Left);
        tree.excise(handles[1]);
        assert_eq!(check(&arena, root), vec![1, 2, 3]);

        for handle in [handles[0], handles[2], handles[3]].iter() {
            let mut tree = Tree::new(&mut arena, &mut root, Axis::Left);
            tree.excise(*handle);
        }
        assert_eq!(root, None);
    }

    #[test]
    fn test_find_ge() {
        let (mut arena, mut root, handles) = build(&[1, 3, 5, 7]);
        let mut tree = Tree::new(&mut arena, &mut root, Axis::Left);
        assert_eq!(tree.find_ge(|node| 0u32.cmp(&node.key)), Some(handles[0]));
        assert_eq!(tree.find_ge(|node| 4u32.cmp(&node.key)), Some(handles[2]));
        assert_eq!(tree.find_ge(|node| 5u32.cmp(&node.key)), Some(handles[2]));
        assert_eq!(tree.root(), Some(handles[2]));
        assert_eq!(tree.find_ge(|node| 8u32.cmp(&node.key)), None);
        assert_eq!(check(&arena, root), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_axes_are_independent() {
        let (mut arena, mut root, handles) = build(&[1, 2, 3]);
        let mut other_root = None;
        for handle in handles.iter().rev() {
            let mut tree = Tree::new(&mut arena, &mut other_root, Axis::Right);
            let less = tree.root();
            tree.merge(*handle, less, None);
        }

        let left_before: Vec<Links> = handles.iter().map(|h| arena[*h].links[0]).collect();
        let mut tree = Tree::new(&mut arena, &mut other_root, Axis::Right);
        tree.splay(handles[0]);
        let left_after: Vec<Links> = handles.iter().map(|h| arena[*h].links[0]).collect();

        assert_eq!(left_before, left_after);
        assert_eq!(check(&arena, root.take()), vec![1, 2, 3]);
    }
}
