//! Type-erased, byte-granular ring deque over a borrowed `&mut [u8]`.

use core::fmt;

use crate::error::Error;
use crate::utils::cursor::Cursors;
use crate::utils::index_type::IndexType;

/// A fixed-capacity double-ended queue of opaque, equally sized byte records.
///
/// The deque owns no memory. It borrows a caller-supplied byte buffer for its whole
/// lifetime and moves exactly `element_size` bytes on every push and pop, one byte
/// at a time, so neither the buffer nor the element type needs any alignment.
///
/// Prefer [`RingDeque`](crate::RingDeque) when the element type is known at compile
/// time; this type is for payloads whose layout is only known at run time.
///
/// # Layout
/// Elements are stored contiguously in natural byte order starting at `front`,
/// wrapping around the end of the buffer:
///
/// ```text
///  buffer:  [ d d . . . . a a b b c c ]      element_size = 2
///                ^rear        ^front
///  logical: a a | b b | c c | d d
/// ```
///
/// All `buffer.len() / element_size` slots are usable: while the deque is empty its
/// front cursor is parked on `I::NONE`, so `front == rear` can only mean full.
///
/// # Caller contract
/// * `element_size > 0` and `buffer.len()` is a multiple of `element_size`.
/// * Every `element` / `out` slice is exactly `element_size` bytes long.
///
/// Both are checked by `debug_assert!` only.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|---------|
/// | `I` | Cursor type; the buffer must be shorter than `I::NONE` bytes |
pub struct RawRingDeque<'a, I: IndexType = usize> {
    buf: &'a mut [u8],
    element_size: usize,
    cursors: Cursors<I>,
}

impl<'a> RawRingDeque<'a> {
    /// Creates an empty deque over `buf` holding `buf.len() / element_size` elements.
    ///
    /// The buffer's current contents are neither read nor cleared.
    pub fn new(buf: &'a mut [u8], element_size: usize) -> Self {
        Self::with_index_type(buf, element_size)
    }
}

impl<'a, I: IndexType> RawRingDeque<'a, I> {
    /// Like [`new`](RawRingDeque::new), but with compact `I` cursors.
    ///
    /// # Panics
    /// Panics if `buf.len() >= I::NONE`.
    pub fn with_index_type(buf: &'a mut [u8], element_size: usize) -> Self {
        debug_assert!(element_size > 0, "element_size must be non-zero");
        debug_assert!(
            buf.len() % element_size == 0,
            "buffer of {} bytes is not a multiple of element_size {element_size}",
            buf.len()
        );
        let cursors = Cursors::new(buf.len());
        Self {
            buf,
            element_size,
            cursors,
        }
    }

    /// Returns `true` if no elements are stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Returns `true` if every slot is occupied.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.cursors.occupied() / self.element_size
    }

    /// Maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.cursors.size() / self.element_size
    }

    #[inline(always)]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    #[inline(always)]
    pub fn buffer_size(&self) -> usize {
        self.cursors.size()
    }

    /// Forgets every stored element. The buffer bytes are left as they are.
    pub fn clear(&mut self) {
        self.cursors.reset();
    }

    /// Prepends one element. Its first byte ends up at the new front.
    pub fn push_front(&mut self, element: &[u8]) -> Result<(), Error> {
        self.check_len(element.len());
        if let Err(err) = self.cursors.open() {
            self.trace_rejected("push_front", err);
            return Err(err);
        }
        // Filled back to front so the element reads forward from `front`.
        for &byte in element[..self.element_size].iter().rev() {
            let slot = self.cursors.retreat_front();
            self.buf[slot] = byte;
        }
        Ok(())
    }

    /// Appends one element after the current back.
    pub fn push_back(&mut self, element: &[u8]) -> Result<(), Error> {
        self.check_len(element.len());
        if let Err(err) = self.cursors.open() {
            self.trace_rejected("push_back", err);
            return Err(err);
        }
        for &byte in &element[..self.element_size] {
            let slot = self.cursors.advance_rear();
            self.buf[slot] = byte;
        }
        Ok(())
    }

    /// Removes the front element, copying it into `out`.
    pub fn pop_front(&mut self, out: &mut [u8]) -> Result<(), Error> {
        self.check_len(out.len());
        take_front(&mut self.cursors, &*self.buf, self.element_size, out)
            .inspect_err(|&err| self.trace_rejected("pop_front", err))
    }

    /// Removes the back element, copying it into `out`.
    pub fn pop_back(&mut self, out: &mut [u8]) -> Result<(), Error> {
        self.check_len(out.len());
        take_back(&mut self.cursors, &*self.buf, self.element_size, out)
            .inspect_err(|&err| self.trace_rejected("pop_back", err))
    }

    /// Copies the front element into `out` without removing it.
    pub fn peek_front(&self, out: &mut [u8]) -> Result<(), Error> {
        self.check_len(out.len());
        let mut scratch = self.cursors;
        take_front(&mut scratch, &*self.buf, self.element_size, out)
            .inspect_err(|&err| self.trace_rejected("peek_front", err))
    }

    /// Copies the back element into `out` without removing it.
    pub fn peek_back(&self, out: &mut [u8]) -> Result<(), Error> {
        self.check_len(out.len());
        let mut scratch = self.cursors;
        take_back(&mut scratch, &*self.buf, self.element_size, out)
            .inspect_err(|&err| self.trace_rejected("peek_back", err))
    }

    #[inline(always)]
    fn check_len(&self, len: usize) {
        debug_assert_eq!(
            len, self.element_size,
            "element slice length must equal element_size"
        );
    }

    #[cold]
    fn trace_rejected(&self, op: &'static str, err: Error) {
        tracing::trace!(
            target: "ring_deque",
            op,
            front = ?self.cursors.front(),
            rear = self.cursors.rear(),
            buffer_size = self.cursors.size(),
            "rejected: {err}"
        );
    }
}

/// Reads one element forward from `front` and advances past it.
fn take_front<I: IndexType>(
    cursors: &mut Cursors<I>,
    buf: &[u8],
    element_size: usize,
    out: &mut [u8],
) -> Result<(), Error> {
    cursors.check_occupied()?;
    for byte in out[..element_size].iter_mut() {
        *byte = buf[cursors.advance_front()];
    }
    cursors.settle();
    Ok(())
}

/// Reads one element backward from `rear`, filling `out` from its last byte.
fn take_back<I: IndexType>(
    cursors: &mut Cursors<I>,
    buf: &[u8],
    element_size: usize,
    out: &mut [u8],
) -> Result<(), Error> {
    cursors.check_occupied()?;
    for byte in out[..element_size].iter_mut().rev() {
        *byte = buf[cursors.retreat_rear()];
    }
    cursors.settle();
    Ok(())
}

impl<I: IndexType> fmt::Debug for RawRingDeque<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawRingDeque")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("element_size", &self.element_size)
            .field("front", &self.cursors.front())
            .field("rear", &self.cursors.rear())
            .finish()
    }
}
