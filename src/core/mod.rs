//! Core module: Fixed-Capacity Circular Buffer
//!
//! Prinsip desain:
//! - Power-of-Two Capacity: index arithmetic pakai bit-mask, bukan modulo
//! - No-Allocation: semua slot pre-allocated saat konstruksi
//! - Deterministic Overflow: policy `Overwrite`/`Ignore`, bukan error

mod ring_buffer;

pub use ring_buffer::{BufferError, IntoIter, OverflowPolicy, RingBuffer, DEFAULT_CAPACITY};
