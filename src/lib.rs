//! A bidirectional map backed by a pair of splay trees that share their nodes.
//!
//! `BiMap<L, R>` stores `(left, right)` pairs where every left key and every right key is unique.
//! Each pair lives in one arena-allocated node that is linked into two splay trees, one ordered by
//! left keys and one ordered by right keys. Lookups and cursor moves on either side splay the
//! visited node, so recently used entries are cheap to reach again.
//!
//! # Examples
//!
//! ```
//! use splay_bimap::{Axis, BiMap, Error};
//!
//! let mut map = BiMap::new();
//! map.insert("fr", 33);
//! map.insert("de", 49);
//!
//! assert_eq!(map.at_left(&"fr"), Ok(&33));
//! assert_eq!(map.at_right(&49), Ok(&"de"));
//! assert_eq!(map.at_right(&1), Err(Error::KeyNotFound { axis: Axis::Right }));
//!
//! let mut cursor = map.begin_right();
//! let mut codes = Vec::new();
//! while !cursor.is_end() {
//!     codes.push(map[cursor]);
//!     cursor = map.next(cursor);
//! }
//! assert_eq!(codes, vec![33, 49]);
//! ```

pub mod arena;
pub mod bimap;
mod error;
pub mod splay;

pub use crate::bimap::BiMap;
pub use crate::error::Error;
pub use crate::splay::Axis;
