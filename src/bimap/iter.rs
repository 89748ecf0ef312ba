use crate::arena::{Arena, Handle};
use crate::bimap::node::Node;
use crate::splay::{walk, Axis, Dir};
use std::vec;

/// An iterator over the entries of a `BiMap` ordered along one axis.
///
/// The iterator follows parent links instead of splaying, so it borrows the map immutably.
pub struct Iter<'a, L, R>
where
    L: 'a,
    R: 'a,
{
    arena: &'a Arena<Node<L, R>>,
    axis: Axis,
    front: Option<Handle>,
    back: Option<Handle>,
    len: usize,
}

impl<'a, L, R> Iter<'a, L, R> {
    pub(crate) fn new(
        arena: &'a Arena<Node<L, R>>,
        axis: Axis,
        root: Option<Handle>,
        len: usize,
    ) -> Self {
        Iter {
            arena,
            axis,
            front: root.map(|root| walk::extreme(arena, axis, root, Dir::Left)),
            back: root.map(|root| walk::extreme(arena, axis, root, Dir::Right)),
            len,
        }
    }
}

impl<'a, L, R> Iterator for Iter<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let arena = self.arena;
        let node = self.front?;
        self.len -= 1;
        self.front = walk::step(arena, self.axis, node, Dir::Right);
        Some(arena[node].pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, L, R> DoubleEndedIterator for Iter<'a, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let arena = self.arena;
        let node = self.back?;
        self.len -= 1;
        self.back = walk::step(arena, self.axis, node, Dir::Left);
        Some(arena[node].pair())
    }
}

impl<'a, L, R> ExactSizeIterator for Iter<'a, L, R> {}

impl<'a, L, R> Clone for Iter<'a, L, R> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            axis: self.axis,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

/// An owning iterator for `BiMap<L, R>`.
///
/// This iterator yields the pairs in increasing order of their left keys.
pub struct IntoIter<L, R> {
    arena: Arena<Node<L, R>>,
    order: vec::IntoIter<Handle>,
}

impl<L, R> IntoIter<L, R> {
    pub(crate) fn new(arena: Arena<Node<L, R>>, root: Option<Handle>) -> Self {
        let order = walk::in_order(&arena, Axis::Left, root);
        IntoIter {
            arena,
            order: order.into_iter(),
        }
    }
}

impl<L, R> Iterator for IntoIter<L, R> {
    type Item = (L, R);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.order.next()?;
        Some(self.arena.free(node).into_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<L, R> DoubleEndedIterator for IntoIter<L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.order.next_back()?;
        Some(self.arena.free(node).into_pair())
    }
}

impl<L, R> ExactSizeIterator for IntoIter<L, R> {}

#[cfg(test)]
mod tests {
    use crate::BiMap;

    #[test]
    fn test_iter_meets_in_middle() {
        let map: BiMap<u32, u32> = (0..6).map(|i| (i, 5 - i)).collect();
        let mut iter = map.iter_left();
        assert_eq!(iter.next(), Some((&0, &5)));
        assert_eq!(iter.next_back(), Some((&5, &0)));
        assert_eq!(iter.len(), 4);
        assert_eq!(
            iter.clone().map(|(left, _)| *left).collect::<Vec<u32>>(),
            vec![1, 2, 3, 4],
        );
        assert_eq!(iter.next_back(), Some((&4, &1)));
        assert_eq!(iter.next(), Some((&1, &4)));
        assert_eq!(iter.next(), Some((&2, &3)));
        assert_eq!(iter.next_back(), Some((&3, &2)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_into_iter_rev() {
        let map: BiMap<u32, char> = vec![(3, 'a'), (1, 'b'), (2, 'c')].into_iter().collect();
        let mut iter = map.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some((3, 'a')));
        assert_eq!(iter.next(), Some((1, 'b')));
        assert_eq!(iter.collect::<Vec<(u32, char)>>(), vec![(2, 'c')]);
    }

    #[test]
    fn test_into_iter_partial_drop() {
        let map: BiMap<u32, String> = (0..10).map(|i| (i, i.to_string())).collect();
        let mut iter = map.into_iter();
        assert_eq!(iter.next(), Some((0, String::from("0"))));
        drop(iter);
    }
}
