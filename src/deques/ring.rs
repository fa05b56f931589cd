//! Typed ring deque over a borrowed `&mut [MaybeUninit<T>]`.

use core::fmt;
use core::mem::MaybeUninit;

use crate::error::Error;
use crate::utils::cursor::Cursors;
use crate::utils::index_type::IndexType;

/// A fixed-capacity double-ended queue of `T` stored in caller-supplied slots.
///
/// This is the typed counterpart of [`RawRingDeque`](crate::RawRingDeque): the same
/// cursor arithmetic, but a cursor step is one slot rather than one byte, and values
/// are moved in and out directly instead of being copied byte by byte.
///
/// # Storage
/// The deque borrows `slots` for its whole lifetime and never allocates. Slots
/// outside the live span are treated as uninitialised; live elements are dropped
/// when the deque is cleared or dropped.
///
/// ```
/// use core::mem::MaybeUninit;
/// use ring_deque::RingDeque;
///
/// let mut slots = [MaybeUninit::<u16>::uninit(); 4];
/// let mut d = RingDeque::new(&mut slots);
/// d.push_back(2).unwrap();
/// d.push_front(1).unwrap();
/// assert_eq!(d.front(), Some(&1));
/// assert_eq!(d.pop_back(), Some(2));
/// ```
///
/// # Rejections
/// Follows the `heapless::Deque` conventions: a push onto a full deque hands the
/// item back as `Err(item)`; a pop from an empty deque yields `None`.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|---------|
/// | `T` | Element type |
/// | `I` | Cursor type; `slots.len()` must be below `I::NONE` |
pub struct RingDeque<'a, T, I: IndexType = usize> {
    slots: &'a mut [MaybeUninit<T>],
    cursors: Cursors<I>,
}

impl<'a, T> RingDeque<'a, T> {
    /// Creates an empty deque holding up to `slots.len()` elements.
    pub fn new(slots: &'a mut [MaybeUninit<T>]) -> Self {
        Self::with_index_type(slots)
    }
}

impl<'a, T, I: IndexType> RingDeque<'a, T, I> {
    /// Like [`new`](RingDeque::new), but with compact `I` cursors.
    ///
    /// # Panics
    /// Panics if `slots.len() >= I::NONE`.
    pub fn with_index_type(slots: &'a mut [MaybeUninit<T>]) -> Self {
        let cursors = Cursors::new(slots.len());
        Self { slots, cursors }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cursors.occupied()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cursors.size()
    }

    /// Returns the front element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        let slot = self.cursors.front()?;
        // SAFETY: `front` is inside the live span.
        Some(unsafe { self.slots[slot].assume_init_ref() })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let slot = self.cursors.front()?;
        // SAFETY: `front` is inside the live span.
        Some(unsafe { self.slots[slot].assume_init_mut() })
    }

    /// Returns the back element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        let slot = self.cursors.last()?;
        // SAFETY: the slot before `rear` is inside the live span.
        Some(unsafe { self.slots[slot].assume_init_ref() })
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let slot = self.cursors.last()?;
        // SAFETY: the slot before `rear` is inside the live span.
        Some(unsafe { self.slots[slot].assume_init_mut() })
    }

    /// Prepends `item`, or hands it back if the deque is full.
    pub fn push_front(&mut self, item: T) -> Result<(), T> {
        if let Err(err) = self.cursors.open() {
            self.trace_rejected("push_front", err);
            return Err(item);
        }
        let slot = self.cursors.retreat_front();
        self.slots[slot].write(item);
        Ok(())
    }

    /// Appends `item`, or hands it back if the deque is full.
    pub fn push_back(&mut self, item: T) -> Result<(), T> {
        if let Err(err) = self.cursors.open() {
            self.trace_rejected("push_back", err);
            return Err(item);
        }
        let slot = self.cursors.advance_rear();
        self.slots[slot].write(item);
        Ok(())
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match self.take_front_slot() {
            // SAFETY: the slot was live and has just been released from the span,
            // so it is read exactly once.
            Some(slot) => Some(unsafe { self.slots[slot].assume_init_read() }),
            None => {
                self.trace_rejected("pop_front", Error::Underflow);
                None
            }
        }
    }

    /// Removes and returns the back element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.take_back_slot() {
            // SAFETY: as in `pop_front`.
            Some(slot) => Some(unsafe { self.slots[slot].assume_init_read() }),
            None => {
                self.trace_rejected("pop_back", Error::Underflow);
                None
            }
        }
    }

    /// Drops every element and rewinds the cursors.
    pub fn clear(&mut self) {
        while let Some(slot) = self.take_front_slot() {
            // SAFETY: released from the live span above; never touched again.
            unsafe { self.slots[slot].assume_init_drop() };
        }
        self.cursors.reset();
    }

    #[inline(always)]
    fn take_front_slot(&mut self) -> Option<usize> {
        self.cursors.check_occupied().ok()?;
        let slot = self.cursors.advance_front();
        self.cursors.settle();
        Some(slot)
    }

    #[inline(always)]
    fn take_back_slot(&mut self) -> Option<usize> {
        self.cursors.check_occupied().ok()?;
        let slot = self.cursors.retreat_rear();
        self.cursors.settle();
        Some(slot)
    }

    #[cold]
    fn trace_rejected(&self, op: &'static str, err: Error) {
        tracing::trace!(
            target: "ring_deque",
            op,
            front = ?self.cursors.front(),
            rear = self.cursors.rear(),
            capacity = self.cursors.size(),
            "rejected: {err}"
        );
    }
}

impl<T, I: IndexType> Drop for RingDeque<'_, T, I> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, I: IndexType> fmt::Debug for RingDeque<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingDeque")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("front", &self.front())
            .field("back", &self.back())
            .finish()
    }
}
