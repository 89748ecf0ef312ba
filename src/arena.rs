//! Chunked typed arena addressed by generation-checked handles.

use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to an object stored in an `Arena<T>`.
///
/// A handle stays valid until the object it refers to is freed. Freeing bumps the generation of
/// the slot, so a stale handle never resolves to an object that later reuses the same slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
    generation: u32,
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    chunk_index: usize,
    block_index: usize,
}

enum Block<T> {
    Occupied(u32, T),
    Vacant(u32, Option<Slot>),
}

/// An allocator for a single type of object that hands out `Handle`s instead of references.
///
/// Objects live in fixed-size chunks, so growing the arena never moves existing objects. Freed
/// slots are kept on a free list and reused by later allocations. The arena is plain `Vec`s and
/// uses no unsafe code.
///
/// # Examples
///
/// ```
/// use splay_bimap::arena::Arena;
///
/// let mut arena = Arena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert_eq!(arena.get(x), None);
/// ```
pub struct Arena<T> {
    head: Option<Slot>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>` holding `chunk_size` objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        Arena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    fn block(&self, handle: Handle) -> Option<&Block<T>> {
        self.chunks
            .get(handle.chunk_index)
            .and_then(|chunk| chunk.get(handle.block_index))
    }

    fn block_mut(&mut self, handle: Handle) -> Option<&mut Block<T>> {
        self.chunks
            .get_mut(handle.chunk_index)
            .and_then(|chunk| chunk.get_mut(handle.block_index))
    }

    /// Moves `value` into the arena and returns a handle to it.
    pub fn allocate(&mut self, value: T) -> Handle {
        if self.len == self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }
        self.len += 1;

        match self.head.take() {
            None => {
                let chunk_index = self.chunks.len() - 1;
                let chunk = &mut self.chunks[chunk_index];
                chunk.push(Block::Occupied(0, value));
                Handle {
                    chunk_index,
                    block_index: chunk.len() - 1,
                    generation: 0,
                }
            },
            Some(slot) => {
                let block = &mut self.chunks[slot.chunk_index][slot.block_index];
                let (generation, next) = match *block {
                    Block::Vacant(generation, next) => (generation, next),
                    Block::Occupied(..) => panic!("Error: free list points at an occupied block."),
                };
                *block = Block::Occupied(generation, value);
                self.head = next;
                Handle {
                    chunk_index: slot.chunk_index,
                    block_index: slot.block_index,
                    generation,
                }
            },
        }
    }

    /// Removes the object behind `handle` from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not refer to a live object.
    pub fn free(&mut self, handle: Handle) -> T {
        if !self.contains(handle) {
            panic!("Error: attempting to free an invalid or vacant block.");
        }
        let head = self.head.take();
        let block = self
            .block_mut(handle)
            .expect("Expected a block for a live handle.");
        let vacant = Block::Vacant(handle.generation.wrapping_add(1), head);
        match mem::replace(block, vacant) {
            Block::Occupied(_, value) => {
                self.len -= 1;
                self.head = Some(Slot {
                    chunk_index: handle.chunk_index,
                    block_index: handle.block_index,
                });
                value
            },
            Block::Vacant(..) => unreachable!(),
        }
    }

    /// Returns `true` if `handle` refers to a live object.
    pub fn contains(&self, handle: Handle) -> bool {
        match self.block(handle) {
            Some(Block::Occupied(generation, _)) => *generation == handle.generation,
            _ => false,
        }
    }

    /// Returns an immutable reference to the object behind `handle`, or `None` if the handle is
    /// stale or out of bounds.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.block(handle) {
            Some(Block::Occupied(generation, value)) if *generation == handle.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns a mutable reference to the object behind `handle`, or `None` if the handle is
    /// stale or out of bounds.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.block_mut(handle) {
            Some(Block::Occupied(generation, value)) if *generation == handle.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns the number of live objects.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object. The chunks are kept for reuse and every outstanding handle becomes
    /// stale.
    pub fn clear(&mut self) {
        let mut head = None;
        for (chunk_index, chunk) in self.chunks.iter_mut().enumerate().rev() {
            for (block_index, block) in chunk.iter_mut().enumerate().rev() {
                let generation = match *block {
                    Block::Occupied(generation, _) => generation.wrapping_add(1),
                    Block::Vacant(generation, _) => generation,
                };
                *block = Block::Vacant(generation, head);
                head = Some(Slot {
                    chunk_index,
                    block_index,
                });
            }
        }
        self.head = head;
        self.len = 0;
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle does not refer to a live object.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Handle};

    #[test]
    #[should_panic]
    fn test_new_zero_chunk_size() {
        let _: Arena<u32> = Arena::new(0);
    }

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: Arena<u32> = Arena::new(1024);
        arena.free(Handle {
            chunk_index: 0,
            block_index: 0,
            generation: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_twice() {
        let mut arena = Arena::new(1024);
        let handle = arena.allocate(0);
        arena.free(handle);
        arena.free(handle);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = Arena::new(2);
        let handles: Vec<Handle> = (0..3).map(|i| arena.allocate(i)).collect();
        assert_eq!(handles[1].chunk_index, 0);
        assert_eq!(handles[2].chunk_index, 1);
        assert_eq!(handles[2].block_index, 0);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena[handles[2]], 2);
    }

    #[test]
    fn test_free_reuses_slot() {
        let mut arena = Arena::new(1024);
        let first = arena.allocate(0);
        assert_eq!(arena.free(first), 0);
        assert!(arena.is_empty());

        let second = arena.allocate(1);
        assert_eq!(second.chunk_index, first.chunk_index);
        assert_eq!(second.block_index, first.block_index);
        assert_ne!(second, first);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_stale_handle() {
        let mut arena = Arena::new(1024);
        let stale = arena.allocate(0);
        arena.free(stale);
        let fresh = arena.allocate(1);

        assert!(!arena.contains(stale));
        assert!(arena.contains(fresh));
        assert_eq!(arena.get(stale), None);
        assert_eq!(arena.get_mut(stale), None);
        assert_eq!(arena.get(fresh), Some(&1));
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new(1024);
        let handle = arena.allocate(0);
        *arena.get_mut(handle).unwrap() = 1;
        assert_eq!(arena.get(handle), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new(2);
        for i in 0..5 {
            arena.allocate(i);
        }
        let stale = arena.allocate(5);
        arena.clear();
        assert!(arena.is_empty());
        assert!(!arena.contains(stale));

        let handle = arena.allocate(7);
        assert_eq!(handle.chunk_index, 0);
        assert_eq!(handle.block_index, 0);
        assert_eq!(arena[handle], 7);
        assert_eq!(arena.get(stale), None);
    }
}
