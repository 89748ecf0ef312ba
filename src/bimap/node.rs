use crate::splay::{Axis, Linked, Links};

/// A single entry of a `BiMap`.
///
/// One node is one arena allocation holding both values and one set of links per axis, so the
/// same node is a member of the left-ordered and the right-ordered tree at once. The handle of the
/// node identifies it on either axis, which makes going from an axis role back to the entry free.
pub struct Node<L, R> {
    left: L,
    right: R,
    roles: [Links; 2],
}

impl<L, R> Node<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Node {
            left,
            right,
            roles: [Links::default(); 2],
        }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn pair(&self) -> (&L, &R) {
        (&self.left, &self.right)
    }

    pub fn into_pair(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Linked for Node<L, R> {
    fn links(&self, axis: Axis) -> &Links {
        &self.roles[axis.index()]
    }

    fn links_mut(&mut self, axis: Axis) -> &mut Links {
        &mut self.roles[axis.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::Node;
    use crate::arena::Arena;
    use crate::splay::{Axis, Linked};

    #[test]
    fn test_roles_are_separate() {
        let mut arena = Arena::new(16);
        let other = arena.allocate(Node::new(2, 'b'));
        let mut node = Node::new(1, 'a');
        node.links_mut(Axis::Left).right = Some(other);

        assert_eq!(node.links(Axis::Left).right, Some(other));
        assert!(node.links(Axis::Right).is_isolated());
        assert_eq!(node.pair(), (&1, &'a'));
        assert_eq!(node.into_pair(), (1, 'a'));
    }
}
