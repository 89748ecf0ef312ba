use crate::arena::Handle;
use std::fmt;

/// One of the two independent orderings a record can take part in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis {
    Left,
    Right,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::Left => 0,
            Axis::Right => 1,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Axis::Left => Axis::Right,
            Axis::Right => Axis::Left,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Left => write!(f, "left"),
            Axis::Right => write!(f, "right"),
        }
    }
}

/// A child slot of a tree node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    /// Returns the structurally opposite slot.
    pub fn mirror(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// The child and parent links a record holds for one axis.
///
/// A record that is not part of any tree, or the root of one, has no parent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Links {
    pub left: Option<Handle>,
    pub right: Option<Handle>,
    pub up: Option<Handle>,
}

impl Links {
    pub fn child(&self, dir: Dir) -> Option<Handle> {
        match dir {
            Dir::Left => self.left,
            Dir::Right => self.right,
        }
    }

    pub fn set_child(&mut self, dir: Dir, child: Option<Handle>) {
        match dir {
            Dir::Left => self.left = child,
            Dir::Right => self.right = child,
        }
    }

    pub fn is_isolated(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.up.is_none()
    }
}

/// A record that embeds one set of `Links` per axis.
pub trait Linked {
    fn links(&self, axis: Axis) -> &Links;
    fn links_mut(&mut self, axis: Axis) -> &mut Links;
}
