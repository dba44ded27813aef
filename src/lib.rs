//! Cincin - Fixed-Capacity Circular Buffer
//!
//! Arsitektur:
//! - Power-of-Two Capacity: logical -> physical index cukup satu bitwise AND
//! - Overflow Policy: `Overwrite` (evict tertua) atau `Ignore` (buang yang baru)
//! - Single-Threaded: mutasi lewat `&mut self`, tanpa lock internal
//! - Snapshot Iteration: urutan logis dimaterialisasi, wraparound tidak bocor
//!
//! ```
//! use cincin::{OverflowPolicy, RingBuffer};
//!
//! let mut rb = RingBuffer::with_policy(4, OverflowPolicy::Overwrite);
//! rb.extend([100, 120, 125, 130]);
//! rb.push(131); // Penuh: evict 100
//!
//! assert_eq!(rb.snapshot(), vec![120, 125, 130, 131]);
//! assert_eq!(rb.pop(), Some(120));
//! ```

pub mod core;

pub use crate::core::{BufferError, OverflowPolicy, RingBuffer};
