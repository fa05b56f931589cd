//! # Ring Deque
//!
//! Fixed-capacity double-ended queues that live in a buffer the caller hands in.
//! Nothing here allocates, so the deques work the same on the stack, in a `static`,
//! or in a slice carved out of a memory pool.
//!
//! ## Key Features
//!
//! * **Borrowed storage:** The deque borrows its buffer for its whole lifetime; the
//!   borrow checker guarantees it never outlives the memory it indexes.
//! * **Full capacity:** Every slot is usable. An empty deque parks its front cursor
//!   on a reserved sentinel instead of sacrificing a slot to tell empty from full.
//! * **All-or-nothing:** A rejected push, pop or peek changes nothing, neither the
//!   cursors nor the buffer nor the caller's output.
//! * **Compact cursors:** Cursors can be `u8`, `u16`, `u32` or `usize` via the
//!   [`IndexType`] parameter.
//! * **`no_std`:** Only `core` is required; the `std` feature adds
//!   `std::error::Error` support in dependencies.
//!
//! ## Which deque?
//!
//! * [`RingDeque<T>`](RingDeque) stores typed values in `&mut [MaybeUninit<T>]`.
//!   Use it whenever the element type is known at compile time.
//! * [`RawRingDeque`] stores opaque byte records of a size chosen at run time in a
//!   plain `&mut [u8]`, copying them in and out byte by byte.
//! * [`AnyFixedDeque`] abstracts over `RingDeque` and `heapless::Deque`.
//!
//! ## Examples
//!
//! ### RawRingDeque
//!
//! ```rust
//! use ring_deque::{Error, RawRingDeque};
//!
//! // Two elements of 1 byte.
//! let mut buf = [0u8; 2];
//! let mut d = RawRingDeque::new(&mut buf, 1);
//!
//! d.push_back(&[5]).unwrap();
//! d.push_back(&[6]).unwrap();
//! assert!(d.is_full());
//! assert_eq!(d.push_back(&[7]), Err(Error::Overflow));
//!
//! let mut out = [0u8; 1];
//! d.pop_front(&mut out).unwrap();
//! assert_eq!(out, [5]);
//! ```
//!
//! ### RingDeque
//!
//! ```rust
//! use core::mem::MaybeUninit;
//! use ring_deque::RingDeque;
//!
//! let mut slots = [MaybeUninit::<u32>::uninit(); 8];
//! let mut d = RingDeque::new(&mut slots);
//!
//! d.push_back(1).unwrap();
//! d.push_front(0).unwrap();
//! assert_eq!(d.front(), Some(&0));
//! assert_eq!(d.pop_back(), Some(1));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

// --- Module Declarations ---

pub mod deques;
pub mod error;
pub mod utils;

// --- Re-exports ---

pub use deques::any_deque::AnyFixedDeque;
pub use deques::raw::RawRingDeque;
pub use deques::ring::RingDeque;
pub use error::Error;
pub use utils::index_type::IndexType;
