//! Front/rear cursor pair shared by every ring deque in this crate.
//!
//! # Empty vs. full
//! A two-cursor ring sees `front == rear` both when nothing is stored and when the
//! write cursor has lapped the read cursor. Instead of sacrificing a slot, `front`
//! is parked on [`IndexType::NONE`] while the ring is empty. `NONE` lies outside
//! `0..size`, so:
//!
//! * empty  <=> `front == NONE`
//! * full   <=> `rear == front` (never true while `front == NONE`)
//!
//! and every one of the `size` positions is usable.
//!
//! # Granularity
//! Cursors count *positions*, not elements. [`RawRingDeque`](crate::RawRingDeque)
//! steps them once per byte; [`RingDeque`](crate::RingDeque) once per slot. Both
//! keep the stored span a whole number of elements, which is what lets callers
//! check capacity once per element instead of once per step.
//!
//! ```text
//! open_front:    if full: reject; if empty: front = rear
//!                repeat: front = back(front); write buf[front]
//! open_back:     if full: reject; if empty: front = rear
//!                repeat: write buf[rear]; rear = fwd(rear)
//! take_front:    if empty: reject
//!                repeat: read buf[front]; front = fwd(front)
//!                if front == rear: front = NONE
//! take_back:     if empty: reject
//!                repeat: rear = back(rear); read buf[rear]
//!                if front == rear: front = NONE
//! ```

use crate::error::Error;
use crate::utils::index_type::IndexType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursors<I: IndexType> {
    /// Oldest stored position, or `I::NONE` when empty.
    front: I,
    /// Next free position at the back.
    rear: I,
    /// Number of positions in the ring.
    size: I,
}

impl<I: IndexType> Cursors<I> {
    /// Creates an empty cursor pair over `size` positions.
    ///
    /// # Panics
    /// Panics if `size` does not fit below `I::NONE`.
    pub(crate) fn new(size: usize) -> Self {
        assert!(
            size < I::NONE.as_usize(),
            "ring of {size} positions cannot be indexed by {}",
            core::any::type_name::<I>()
        );
        Self {
            front: I::NONE,
            rear: I::ZERO,
            size: I::from_usize(size),
        }
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.front == I::NONE
    }

    /// A zero-sized ring is permanently full.
    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        self.rear == self.front || self.size.is_zero()
    }

    #[inline(always)]
    pub(crate) fn size(&self) -> usize {
        self.size.as_usize()
    }

    /// Number of occupied positions.
    pub(crate) fn occupied(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let front = self.front.as_usize();
        let rear = self.rear.as_usize();
        if rear > front {
            rear - front
        } else {
            self.size() - front + rear
        }
    }

    #[inline(always)]
    pub(crate) fn front(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.front.as_usize())
    }

    #[inline(always)]
    pub(crate) fn rear(&self) -> usize {
        self.rear.as_usize()
    }

    /// Position just before `rear`, i.e. the last occupied one.
    #[inline(always)]
    pub(crate) fn last(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.backward(self.rear).as_usize())
    }

    #[inline(always)]
    fn forward(&self, idx: I) -> I {
        let next = idx.inc();
        if next == self.size { I::ZERO } else { next }
    }

    #[inline(always)]
    fn backward(&self, idx: I) -> I {
        if idx.is_zero() {
            self.size.dec()
        } else {
            idx.dec()
        }
    }

    /// Prepares the ring for a push at either end.
    ///
    /// Rejects when full. An empty ring has its `front` pulled off the sentinel and
    /// pinned to `rear`, so the first element grows outward from the write cursor.
    pub(crate) fn open(&mut self) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::Overflow);
        }
        if self.is_empty() {
            self.front = self.rear;
        }
        Ok(())
    }

    /// Rejects when there is nothing to take.
    #[inline(always)]
    pub(crate) fn check_occupied(&self) -> Result<(), Error> {
        if self.is_empty() {
            Err(Error::Underflow)
        } else {
            Ok(())
        }
    }

    /// Steps `front` back one position and returns it. Caller must have `open`ed.
    #[inline(always)]
    pub(crate) fn retreat_front(&mut self) -> usize {
        self.front = self.backward(self.front);
        self.front.as_usize()
    }

    /// Returns the current `rear` and steps it forward. Caller must have `open`ed.
    #[inline(always)]
    pub(crate) fn advance_rear(&mut self) -> usize {
        let slot = self.rear;
        self.rear = self.forward(self.rear);
        slot.as_usize()
    }

    /// Returns the current `front` and steps it forward. Caller must have checked
    /// occupancy and must [`settle`](Self::settle) once the element is consumed.
    #[inline(always)]
    pub(crate) fn advance_front(&mut self) -> usize {
        let slot = self.front;
        self.front = self.forward(self.front);
        slot.as_usize()
    }

    /// Steps `rear` back one position and returns it. Same contract as
    /// [`advance_front`](Self::advance_front).
    #[inline(always)]
    pub(crate) fn retreat_rear(&mut self) -> usize {
        self.rear = self.backward(self.rear);
        self.rear.as_usize()
    }

    /// Parks `front` on the sentinel if the last element was just taken.
    #[inline(always)]
    pub(crate) fn settle(&mut self) {
        if self.front == self.rear {
            self.front = I::NONE;
        }
    }

    /// Returns to the freshly constructed state.
    pub(crate) fn reset(&mut self) {
        self.front = I::NONE;
        self.rear = I::ZERO;
    }
}
