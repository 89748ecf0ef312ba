use crate::arena::Handle;
use crate::splay::Axis;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

mod private {
    pub trait Sealed {}
}

/// Type-level tag naming the axis a `Cursor` walks.
pub trait View: private::Sealed {
    const AXIS: Axis;
    type Flipped: View;
}

/// Tag for positions ordered by the left key.
#[derive(Debug)]
pub enum Left {}

/// Tag for positions ordered by the right key.
#[derive(Debug)]
pub enum Right {}

impl private::Sealed for Left {}
impl private::Sealed for Right {}

impl View for Left {
    const AXIS: Axis = Axis::Left;
    type Flipped = Right;
}

impl View for Right {
    const AXIS: Axis = Axis::Right;
    type Flipped = Left;
}

/// A position on one axis of a `BiMap`.
///
/// A cursor is a plain value: it does not borrow the map. All movement goes through the map
/// (`BiMap::next`, `BiMap::prev`), because moving splays the tree. A cursor is invalidated when
/// its entry is removed or the map is cleared; using an invalidated cursor panics.
pub struct Cursor<V> {
    node: Option<Handle>,
    view: PhantomData<V>,
}

/// A position ordered by the left key.
pub type LeftCursor = Cursor<Left>;

/// A position ordered by the right key.
pub type RightCursor = Cursor<Right>;

impl<V: View> Cursor<V> {
    pub(crate) fn new(node: Option<Handle>) -> Self {
        Cursor {
            node,
            view: PhantomData,
        }
    }

    pub(crate) fn end() -> Self {
        Cursor::new(None)
    }

    pub(crate) fn node(&self) -> Option<Handle> {
        self.node
    }

    /// Returns `true` if this is the past-the-end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the position of the same entry on the other axis. The end position flips to the
    /// end position.
    pub fn flip(self) -> Cursor<V::Flipped> {
        Cursor::new(self.node)
    }

    /// Returns the axis this cursor walks.
    pub fn axis(&self) -> Axis {
        V::AXIS
    }
}

impl<V> Clone for Cursor<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Cursor<V> {}

impl<V> PartialEq for Cursor<V> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<V> Eq for Cursor<V> {}

impl<V> Hash for Cursor<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl<V: View> fmt::Debug for Cursor<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("axis", &V::AXIS)
            .field("node", &self.node)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{LeftCursor, RightCursor};
    use crate::arena::Arena;
    use crate::splay::Axis;

    #[test]
    fn test_flip() {
        let mut arena = Arena::new(16);
        let handle = arena.allocate(0);
        let left = LeftCursor::new(Some(handle));
        let right: RightCursor = left.flip();

        assert_eq!(left.axis(), Axis::Left);
        assert_eq!(right.axis(), Axis::Right);
        assert_eq!(right.node(), Some(handle));
        assert_eq!(right.flip(), left);
    }

    #[test]
    fn test_end() {
        let end = LeftCursor::end();
        assert!(end.is_end());
        assert!(end.flip().is_end());
        assert_ne!(end, LeftCursor::new(Some(Arena::new(16).allocate(0))));
    }
}
