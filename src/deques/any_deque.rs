//! Object-safe abstraction over fixed-capacity deques.

use crate::deques::ring::RingDeque;
use crate::utils::index_type::IndexType;

/// An object-safe abstraction over bounded double-ended queues.
///
/// Implemented by [`RingDeque`] (borrowed storage) and, with the `heapless` feature,
/// by `heapless::Deque<T, N>` (inline storage), so code that only needs bounded
/// deque behaviour can accept either.
///
/// Rejections follow the `heapless` conventions: pushes hand the item back as
/// `Err(item)` when full, pops return `None` when empty.
pub trait AnyFixedDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns `true` if no further element fits.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
    /// Returns the maximum number of elements.
    fn capacity(&self) -> usize;
    /// Appends an element to the back, or returns it if full.
    fn push_back(&mut self, item: T) -> Result<(), T>;
    /// Prepends an element to the front, or returns it if full.
    fn push_front(&mut self, item: T) -> Result<(), T>;
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
    /// Returns an exclusive reference to the front element, or `None` if empty.
    fn front_mut(&mut self) -> Option<&mut T>;
    /// Returns an exclusive reference to the back element, or `None` if empty.
    fn back_mut(&mut self) -> Option<&mut T>;
}

impl<T, I: IndexType> AnyFixedDeque<T> for RingDeque<'_, T, I> {
    fn len(&self) -> usize {
        self.len()
    }
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
    fn is_full(&self) -> bool {
        self.is_full()
    }
    fn capacity(&self) -> usize {
        self.capacity()
    }
    fn push_back(&mut self, item: T) -> Result<(), T> {
        self.push_back(item)
    }
    fn push_front(&mut self, item: T) -> Result<(), T> {
        self.push_front(item)
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}

#[cfg(feature = "heapless")]
impl<T, const N: usize> AnyFixedDeque<T> for heapless::Deque<T, N> {
    fn len(&self) -> usize {
        self.len()
    }
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
    fn is_full(&self) -> bool {
        self.is_full()
    }
    fn capacity(&self) -> usize {
        self.capacity()
    }
    fn push_back(&mut self, item: T) -> Result<(), T> {
        self.push_back(item)
    }
    fn push_front(&mut self, item: T) -> Result<(), T> {
        self.push_front(item)
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}
