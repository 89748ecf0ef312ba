use crate::arena::{Arena, Handle};
use crate::bimap::cursor::{Cursor, Left, LeftCursor, Right, RightCursor, View};
use crate::bimap::iter::{IntoIter, Iter};
use crate::bimap::node::Node;
use crate::bimap::render;
use crate::error::Error;
use crate::splay::{walk, Axis, Tree};
use compare::{Compare, Natural};
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;

const DEFAULT_CHUNK_SIZE: usize = 1024;

/// A bidirectional map implemented using two splay trees over one set of nodes.
///
/// Every entry is a `(left, right)` pair. Left keys are unique among left keys and right keys are
/// unique among right keys, so either side can be used to look up the other. Each entry is a
/// single node that is linked into a tree ordered by the left key and into a tree ordered by the
/// right key. Accessing an entry through either axis splays it to the root of that axis, so
/// lookups, bound queries and cursor movement need a mutable reference.
///
/// Positions are `Cursor`s. A cursor on one axis can be flipped to the position of the same entry
/// on the other axis in constant time.
///
/// # Examples
///
/// ```
/// use splay_bimap::BiMap;
///
/// let mut map = BiMap::new();
/// map.insert(1, "one");
/// map.insert(2, "two");
///
/// assert_eq!(map.at_left(&1), Ok(&"one"));
/// assert_eq!(map.at_right(&"two"), Ok(&2));
///
/// // Both keys must be new for an insert to succeed.
/// assert!(map.insert(1, "uno").is_end());
/// assert!(map.insert(3, "one").is_end());
/// assert_eq!(map.len(), 2);
///
/// let cursor = map.find_left(&2);
/// assert_eq!(map[cursor], 2);
/// assert_eq!(map[cursor.flip()], "two");
///
/// assert!(map.erase_right(&"one"));
/// assert_eq!(map.iter_left().collect::<Vec<_>>(), vec![(&2, &"two")]);
/// ```
pub struct BiMap<L, R, CL = Natural<L>, CR = Natural<R>> {
    arena: Arena<Node<L, R>>,
    roots: [Option<Handle>; 2],
    len: usize,
    left_cmp: CL,
    right_cmp: CR,
}

impl<L, R> BiMap<L, R>
where
    L: Ord,
    R: Ord,
{
    /// Constructs a new, empty `BiMap<L, R>` ordering both sides by their `Ord` implementations.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let map: BiMap<u32, String> = BiMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        BiMap::with_comparators(compare::natural(), compare::natural())
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR> {
    /// Constructs a new, empty `BiMap` that orders left keys with `left_cmp` and right keys with
    /// `right_cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_comparators(
    ///     |a: &u32, b: &u32| a.cmp(b),
    ///     |a: &u32, b: &u32| b.cmp(a),
    /// );
    /// map.insert(1, 10);
    /// map.insert(2, 20);
    /// assert_eq!(map.iter_right().map(|(_, r)| *r).collect::<Vec<_>>(), vec![20, 10]);
    /// ```
    pub fn with_comparators(left_cmp: CL, right_cmp: CR) -> Self {
        BiMap::with_chunk_size(left_cmp, right_cmp, DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `BiMap` with the given comparators whose node storage grows by
    /// `chunk_size` nodes at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(left_cmp: CL, right_cmp: CR, chunk_size: usize) -> Self {
        BiMap {
            arena: Arena::new(chunk_size),
            roots: [None, None],
            len: 0,
            left_cmp,
            right_cmp,
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn left_comparator(&self) -> &CL {
        &self.left_cmp
    }

    pub fn right_comparator(&self) -> &CR {
        &self.right_cmp
    }

    /// Removes every entry. All cursors into the map become invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// map.insert(2, 'b');
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing bimap with {} entries", self.len);
        self.arena.clear();
        self.roots = [None, None];
        self.len = 0;
    }

    fn tree(&mut self, axis: Axis) -> Tree<'_, Node<L, R>> {
        let BiMap { arena, roots, .. } = self;
        Tree::new(arena, &mut roots[axis.index()], axis)
    }

    // Resolves a cursor that must point at a live entry.
    fn live<V: View>(&self, cursor: Cursor<V>) -> Handle {
        let node = cursor
            .node()
            .expect("Error: cursor is at the end position.");
        assert!(
            self.arena.contains(node),
            "Error: cursor refers to an erased entry.",
        );
        node
    }

    // Links `node` into the tree of `axis` right before `successor`, or after every node when
    // there is no successor.
    fn splice(&mut self, axis: Axis, node: Handle, successor: Option<Handle>) {
        let mut tree = self.tree(axis);
        let (less, greater) = match successor {
            Some(successor) => {
                let (less, successor) = tree.cut(successor);
                (less, Some(successor))
            },
            None => (tree.root(), None),
        };
        tree.merge(node, less, greater);
    }

    fn unlink(&mut self, node: Handle) -> (L, R) {
        self.tree(Axis::Left).excise(node);
        self.tree(Axis::Right).excise(node);
        self.len -= 1;
        self.arena.free(node).into_pair()
    }

    fn begin<V: View>(&mut self) -> Cursor<V> {
        match self.roots[V::AXIS.index()] {
            Some(root) => Cursor::new(Some(self.tree(V::AXIS).left_most(root))),
            None => Cursor::end(),
        }
    }

    /// Returns a cursor at the entry with the smallest left key, or the end cursor if the map is
    /// empty. The entry is splayed to the root of the left tree, which makes a following scan
    /// cheap.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// assert_eq!(map.begin_left(), map.end_left());
    ///
    /// map.insert(2, 'a');
    /// map.insert(1, 'b');
    /// let cursor = map.begin_left();
    /// assert_eq!(map[cursor], 1);
    /// ```
    pub fn begin_left(&mut self) -> LeftCursor {
        self.begin()
    }

    /// Returns the past-the-end cursor of the left axis.
    pub fn end_left(&self) -> LeftCursor {
        Cursor::end()
    }

    /// Returns a cursor at the entry with the smallest right key, or the end cursor if the map is
    /// empty.
    pub fn begin_right(&mut self) -> RightCursor {
        self.begin()
    }

    /// Returns the past-the-end cursor of the right axis.
    pub fn end_right(&self) -> RightCursor {
        Cursor::end()
    }

    /// Advances a cursor to the next entry along its axis. Advancing from the last entry yields
    /// the end cursor.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is the end cursor or refers to an erased entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'b');
    /// map.insert(2, 'a');
    ///
    /// let mut cursor = map.begin_right();
    /// let mut lefts = Vec::new();
    /// while cursor != map.end_right() {
    ///     lefts.push(map[cursor.flip()]);
    ///     cursor = map.next(cursor);
    /// }
    /// assert_eq!(lefts, vec![2, 1]);
    /// ```
    pub fn next<V: View>(&mut self, cursor: Cursor<V>) -> Cursor<V> {
        let node = self.live(cursor);
        Cursor::new(self.tree(V::AXIS).next(node))
    }

    /// Moves a cursor to the previous entry along its axis. Moving back from the end cursor yields
    /// the last entry; moving back from the first entry yields the end cursor.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` refers to an erased entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// map.insert(2, 'b');
    ///
    /// let end = map.end_left();
    /// let last = map.prev(end);
    /// assert_eq!(map[last], 2);
    /// let first = map.prev(last);
    /// assert_eq!(map[first], 1);
    /// ```
    pub fn prev<V: View>(&mut self, cursor: Cursor<V>) -> Cursor<V> {
        if cursor.is_end() {
            return match self.roots[V::AXIS.index()] {
                Some(root) => Cursor::new(Some(self.tree(V::AXIS).right_most(root))),
                None => Cursor::end(),
            };
        }
        let node = self.live(cursor);
        Cursor::new(self.tree(V::AXIS).prev(node))
    }

    /// Returns the entry at `cursor`, or `None` if the cursor is at the end or no longer refers to
    /// an entry.
    pub fn get<V: View>(&self, cursor: Cursor<V>) -> Option<(&L, &R)> {
        cursor
            .node()
            .and_then(|node| self.arena.get(node))
            .map(Node::pair)
    }

    /// Removes the entry at `cursor` and returns a cursor at the entry that followed it on the
    /// same axis.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is the end cursor or refers to an erased entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'c');
    /// map.insert(2, 'b');
    /// map.insert(3, 'a');
    ///
    /// let cursor = map.find_right(&'b');
    /// let next = map.erase(cursor);
    /// assert_eq!(map[next], 'c');
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn erase<V: View>(&mut self, cursor: Cursor<V>) -> Cursor<V> {
        let node = self.live(cursor);
        let next = self.tree(V::AXIS).next(node);
        self.unlink(node);
        Cursor::new(next)
    }

    /// Removes every entry from `first` up to, but not including, `last` and returns the cursor
    /// following the removed range.
    ///
    /// # Panics
    ///
    /// Panics if `last` does not follow `first` on their axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map: BiMap<u32, u32> = (0..10).map(|i| (i, i * 10)).collect();
    /// let first = map.find_left(&2);
    /// let last = map.find_left(&8);
    /// let cursor = map.erase_range(first, last);
    /// assert_eq!(map[cursor], 8);
    /// assert_eq!(map.len(), 4);
    /// ```
    pub fn erase_range<V: View>(&mut self, mut first: Cursor<V>, last: Cursor<V>) -> Cursor<V> {
        while first != last {
            first = self.erase(first);
        }
        first
    }

    /// Returns an iterator over the entries in increasing order of their left keys. The iterator
    /// does not splay, so it only needs a shared reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(2, 'a');
    /// map.insert(1, 'b');
    ///
    /// let mut iterator = map.iter_left();
    /// assert_eq!(iterator.next(), Some((&1, &'b')));
    /// assert_eq!(iterator.next(), Some((&2, &'a')));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_left(&self) -> Iter<'_, L, R> {
        Iter::new(&self.arena, Axis::Left, self.roots[Axis::Left.index()], self.len)
    }

    /// Returns an iterator over the entries in increasing order of their right keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(2, 'a');
    /// map.insert(1, 'b');
    ///
    /// let mut iterator = map.iter_right();
    /// assert_eq!(iterator.next(), Some((&2, &'a')));
    /// assert_eq!(iterator.next(), Some((&1, &'b')));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_right(&self) -> Iter<'_, L, R> {
        Iter::new(&self.arena, Axis::Right, self.roots[Axis::Right.index()], self.len)
    }

    /// Renders the current shape of the left tree as a Mermaid graph. Meant for debugging.
    pub fn render_left(&self) -> String
    where
        L: fmt::Display,
    {
        render::mermaid(&self.arena, Axis::Left, self.roots[Axis::Left.index()], |node| {
            node.left().to_string()
        })
    }

    /// Renders the current shape of the right tree as a Mermaid graph. Meant for debugging.
    pub fn render_right(&self) -> String
    where
        R: fmt::Display,
    {
        render::mermaid(&self.arena, Axis::Right, self.roots[Axis::Right.index()], |node| {
            node.right().to_string()
        })
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn search_left(&mut self, key: &L) -> Option<Handle> {
        let BiMap {
            arena,
            roots,
            left_cmp,
            ..
        } = self;
        Tree::new(arena, &mut roots[Axis::Left.index()], Axis::Left)
            .find_ge(|node| left_cmp.compare(key, node.left()))
    }

    fn search_right(&mut self, key: &R) -> Option<Handle> {
        let BiMap {
            arena,
            roots,
            right_cmp,
            ..
        } = self;
        Tree::new(arena, &mut roots[Axis::Right.index()], Axis::Right)
            .find_ge(|node| right_cmp.compare(key, node.right()))
    }

    fn is_left_match(&self, key: &L, node: Handle) -> bool {
        self.left_cmp.compare(key, self.arena[node].left()) == Ordering::Equal
    }

    fn is_right_match(&self, key: &R, node: Handle) -> bool {
        self.right_cmp.compare(key, self.arena[node].right()) == Ordering::Equal
    }

    /// Inserts a pair into the map and returns a left cursor at the new entry. If either key is
    /// already present the map is left unchanged and the end cursor is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// let cursor = map.insert(1, 'a');
    /// assert_eq!(map.get(cursor), Some((&1, &'a')));
    ///
    /// assert_eq!(map.insert(1, 'b'), map.end_left());
    /// assert_eq!(map.insert(2, 'a'), map.end_left());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, left: L, right: R) -> LeftCursor {
        self.try_insert(left, right)
            .unwrap_or_else(|_| Cursor::end())
    }

    /// Inserts a pair into the map and returns a left cursor at the new entry, or an error naming
    /// the axis whose key is already present. The map is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::{Axis, BiMap, Error};
    ///
    /// let mut map = BiMap::new();
    /// assert!(map.try_insert(1, 'a').is_ok());
    /// assert_eq!(
    ///     map.try_insert(2, 'a'),
    ///     Err(Error::DuplicateKey { axis: Axis::Right }),
    /// );
    /// ```
    pub fn try_insert(&mut self, left: L, right: R) -> Result<LeftCursor, Error> {
        if self.is_empty() {
            let node = self.arena.allocate(Node::new(left, right));
            self.roots = [Some(node), Some(node)];
            self.len = 1;
            return Ok(Cursor::new(Some(node)));
        }

        let left_successor = self.search_left(&left);
        if let Some(node) = left_successor {
            if self.is_left_match(&left, node) {
                debug!("rejected insert: left key already present");
                return Err(Error::DuplicateKey { axis: Axis::Left });
            }
        }
        let right_successor = self.search_right(&right);
        if let Some(node) = right_successor {
            if self.is_right_match(&right, node) {
                debug!("rejected insert: right key already present");
                return Err(Error::DuplicateKey { axis: Axis::Right });
            }
        }

        let node = self.arena.allocate(Node::new(left, right));
        self.splice(Axis::Left, node, left_successor);
        self.splice(Axis::Right, node, right_successor);
        self.len += 1;
        Ok(Cursor::new(Some(node)))
    }

    /// Returns a cursor at the entry with the given left key, or the end cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// let cursor = map.find_left(&1);
    /// assert_eq!(map[cursor.flip()], 'a');
    /// assert!(map.find_left(&2).is_end());
    /// ```
    pub fn find_left(&mut self, key: &L) -> LeftCursor {
        match self.search_left(key) {
            Some(node) if self.is_left_match(key, node) => Cursor::new(Some(node)),
            _ => Cursor::end(),
        }
    }

    /// Returns a cursor at the entry with the given right key, or the end cursor if there is none.
    pub fn find_right(&mut self, key: &R) -> RightCursor {
        match self.search_right(key) {
            Some(node) if self.is_right_match(key, node) => Cursor::new(Some(node)),
            _ => Cursor::end(),
        }
    }

    /// Returns a cursor at the first entry whose left key is not less than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// map.insert(3, 'b');
    ///
    /// let cursor = map.lower_bound_left(&2);
    /// assert_eq!(map[cursor], 3);
    /// let cursor = map.lower_bound_left(&3);
    /// assert_eq!(map[cursor], 3);
    /// assert!(map.lower_bound_left(&4).is_end());
    /// ```
    pub fn lower_bound_left(&mut self, key: &L) -> LeftCursor {
        Cursor::new(self.search_left(key))
    }

    /// Returns a cursor at the first entry whose left key is greater than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// map.insert(3, 'b');
    ///
    /// let cursor = map.upper_bound_left(&1);
    /// assert_eq!(map[cursor], 3);
    /// assert!(map.upper_bound_left(&3).is_end());
    /// ```
    pub fn upper_bound_left(&mut self, key: &L) -> LeftCursor {
        let cursor = self.lower_bound_left(key);
        match cursor.node() {
            Some(node) if self.is_left_match(key, node) => self.next(cursor),
            _ => cursor,
        }
    }

    /// Returns a cursor at the first entry whose right key is not less than `key`.
    pub fn lower_bound_right(&mut self, key: &R) -> RightCursor {
        Cursor::new(self.search_right(key))
    }

    /// Returns a cursor at the first entry whose right key is greater than `key`.
    pub fn upper_bound_right(&mut self, key: &R) -> RightCursor {
        let cursor = self.lower_bound_right(key);
        match cursor.node() {
            Some(node) if self.is_right_match(key, node) => self.next(cursor),
            _ => cursor,
        }
    }

    /// Returns the right value paired with a left key, or `Error::KeyNotFound` if the key is not
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::{Axis, BiMap, Error};
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// assert_eq!(map.at_left(&1), Ok(&'a'));
    /// assert_eq!(map.at_left(&2), Err(Error::KeyNotFound { axis: Axis::Left }));
    /// ```
    pub fn at_left(&mut self, key: &L) -> Result<&R, Error> {
        match self.find_left(key).node() {
            Some(node) => Ok(self.arena[node].right()),
            None => Err(Error::KeyNotFound { axis: Axis::Left }),
        }
    }

    /// Returns the left value paired with a right key, or `Error::KeyNotFound` if the key is not
    /// present.
    pub fn at_right(&mut self, key: &R) -> Result<&L, Error> {
        match self.find_right(key).node() {
            Some(node) => Ok(self.arena[node].left()),
            None => Err(Error::KeyNotFound { axis: Axis::Right }),
        }
    }

    /// Returns a copy of the right value paired with a left key, or `R::default()` if the key is
    /// not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 5);
    /// assert_eq!(map.at_left_or_default(&1), 5);
    /// assert_eq!(map.at_left_or_default(&2), 0);
    /// ```
    pub fn at_left_or_default(&mut self, key: &L) -> R
    where
        R: Clone + Default,
    {
        self.at_left(key).map(|right| right.clone()).unwrap_or_default()
    }

    /// Returns a copy of the left value paired with a right key, or `L::default()` if the key is
    /// not present.
    pub fn at_right_or_default(&mut self, key: &R) -> L
    where
        L: Clone + Default,
    {
        self.at_right(key).map(|left| left.clone()).unwrap_or_default()
    }

    /// Removes the entry with the given left key and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// assert_eq!(map.remove_left(&1), Some((1, 'a')));
    /// assert_eq!(map.remove_left(&1), None);
    /// ```
    pub fn remove_left(&mut self, key: &L) -> Option<(L, R)> {
        let node = self.find_left(key).node()?;
        Some(self.unlink(node))
    }

    /// Removes the entry with the given right key and returns it.
    pub fn remove_right(&mut self, key: &R) -> Option<(L, R)> {
        let node = self.find_right(key).node()?;
        Some(self.unlink(node))
    }

    /// Removes the entry with the given left key. Returns `true` if there was one.
    pub fn erase_left(&mut self, key: &L) -> bool {
        self.remove_left(key).is_some()
    }

    /// Removes the entry with the given right key. Returns `true` if there was one.
    pub fn erase_right(&mut self, key: &R) -> bool {
        self.remove_right(key).is_some()
    }

    /// Returns the right value paired with a left key without splaying, so only a shared
    /// reference is needed. Repeated lookups do not get the amortized bounds of `find_left`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// assert_eq!(map.get_by_left(&1), Some(&'a'));
    /// assert_eq!(map.get_by_left(&2), None);
    /// ```
    pub fn get_by_left(&self, key: &L) -> Option<&R> {
        let root = self.roots[Axis::Left.index()];
        walk::find(&self.arena, Axis::Left, root, |node| {
            self.left_cmp.compare(key, node.left())
        })
        .map(|node| self.arena[node].right())
    }

    /// Returns the left value paired with a right key without splaying.
    pub fn get_by_right(&self, key: &R) -> Option<&L> {
        let root = self.roots[Axis::Right.index()];
        walk::find(&self.arena, Axis::Right, root, |node| {
            self.right_cmp.compare(key, node.right())
        })
        .map(|node| self.arena[node].left())
    }

    /// Checks if a left key exists in the map without splaying.
    pub fn contains_left(&self, key: &L) -> bool {
        self.get_by_left(key).is_some()
    }

    /// Checks if a right key exists in the map without splaying.
    pub fn contains_right(&self, key: &R) -> bool {
        self.get_by_right(key).is_some()
    }
}

impl<L, R, CL, CR> Default for BiMap<L, R, CL, CR>
where
    CL: Default,
    CR: Default,
{
    fn default() -> Self {
        BiMap::with_comparators(CL::default(), CR::default())
    }
}

impl<L, R, CL, CR> Clone for BiMap<L, R, CL, CR>
where
    L: Clone,
    R: Clone,
    CL: Compare<L> + Clone,
    CR: Compare<R> + Clone,
{
    fn clone(&self) -> Self {
        let mut map = BiMap::with_comparators(self.left_cmp.clone(), self.right_cmp.clone());
        for (left, right) in self.iter_left() {
            map.insert(left.clone(), right.clone());
        }
        map
    }
}

impl<L, R, CL, CR> PartialEq for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter_left()
                .zip(other.iter_left())
                .all(|((l1, r1), (l2, r2))| {
                    self.left_cmp.compare(l1, l2) == Ordering::Equal
                        && self.right_cmp.compare(r1, r2) == Ordering::Equal
                })
    }
}

impl<L, R, CL, CR> Eq for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
}

impl<L, R, CL, CR> fmt::Debug for BiMap<L, R, CL, CR>
where
    L: fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}

impl<L, R, CL, CR> Index<Cursor<Left>> for BiMap<L, R, CL, CR> {
    type Output = L;

    fn index(&self, cursor: Cursor<Left>) -> &Self::Output {
        self.arena[self.live(cursor)].left()
    }
}

impl<L, R, CL, CR> Index<Cursor<Right>> for BiMap<L, R, CL, CR> {
    type Output = R;

    fn index(&self, cursor: Cursor<Right>) -> &Self::Output {
        self.arena[self.live(cursor)].right()
    }
}

impl<L, R, CL, CR> IntoIterator for BiMap<L, R, CL, CR> {
    type IntoIter = IntoIter<L, R>;
    type Item = (L, R);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.arena, self.roots[Axis::Left.index()])
    }
}

impl<'a, L, R, CL, CR> IntoIterator for &'a BiMap<L, R, CL, CR>
where
    L: 'a,
    R: 'a,
{
    type IntoIter = Iter<'a, L, R>;
    type Item = (&'a L, &'a R);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_left()
    }
}

impl<L, R, CL, CR> Extend<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Inserts every pair, skipping pairs with a key that is already present.
    fn extend<I: IntoIterator<Item = (L, R)>>(&mut self, iter: I) {
        for (left, right) in iter {
            self.insert(left, right);
        }
    }
}

impl<L, R, CL, CR> FromIterator<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        let mut map = BiMap::default();
        map.extend(iter);
        map
    }
}
