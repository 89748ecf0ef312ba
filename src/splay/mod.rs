//! Parent-linked splay trees stored in an `Arena`.
//!
//! A record may carry one set of `Links` per `Axis`, which lets the same record be a member of two
//! independent splay trees at once. Every structural operation is written once and parameterized
//! by the axis it walks and by the `Dir` it treats as primary, so mirrored operations such as
//! `next`/`prev` or `left_most`/`right_most` share a single implementation.

mod node;
mod tree;
pub mod walk;

pub use self::node::{Axis, Dir, Linked, Links};
pub use self::tree::Tree;
