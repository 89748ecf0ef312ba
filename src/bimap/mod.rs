//! Bidirectional map built from two splay trees sharing their nodes.
//!
//! Every entry of a `BiMap` is a single node holding a left key and a right key. The node carries
//! one set of links for the tree ordered by left keys and another for the tree ordered by right
//! keys, so an entry found on one side is already located on the other. `Cursor`s mark positions
//! on one side and `Cursor::flip` moves a position to the other side without a search.

mod cursor;
mod iter;
mod map;
mod node;
mod render;
mod serde_impl;

pub use self::cursor::{Cursor, Left, LeftCursor, Right, RightCursor, View};
pub use self::iter::{IntoIter, Iter};
pub use self::map::BiMap;
