//! In-place bit-reversal permutation driven by a precomputed exchange
//! table, the reordering step of radix-2/radix-4 in-place FFTs.
//!
//! The table itself comes from an external builder: an even-length slice
//! of `u16` values, read two at a time, each pair naming two positions to
//! swap. Its raw values are pre-scaled under one fixed convention, and a
//! width-specific right shift recovers a real index from them, which is
//! how a single builder can serve buffers of 16-bit scalars and 32/64-bit
//! interleaved complex samples. See [`bitrev`] for the exact convention
//! per width.
//!
//! Two ways in:
//!
//! - [`bit_rev_16`], [`bit_rev_32`], [`bit_rev_64`] trust their inputs and
//!   run a single unchecked pass. This is the path an FFT takes once per
//!   transform.
//! - [`BitRevTable`] validates the table once and range-checks each apply
//!   call up front, returning a [`TableError`] instead of panicking.
//!
//! Because the raw entries are `u16`, the table convention bounds the
//! addressable transform length per width; tables for longer transforms
//! need a wider entry type and are out of scope here.
//!
//! # Example
//!
//! ```
//! use revtab::bit_rev_16;
//!
//! let mut buf: Vec<u16> = (0..8).collect();
//! // Table for a 3-bit transform: swaps (1, 4) and (3, 6), raw values
//! // pre-scaled by 2 under the 16-bit convention.
//! let table = [2, 8, 6, 12];
//!
//! bit_rev_16(&mut buf, &table, table.len());
//! assert_eq!(buf, [0, 4, 2, 6, 1, 5, 3, 7]);
//!
//! // The permutation is an involution: applying it again restores the
//! // natural order.
//! bit_rev_16(&mut buf, &table, table.len());
//! assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7]);
//! ```

pub mod bitrev;
mod table;

pub use bitrev::{bit_rev_16, bit_rev_32, bit_rev_64};
pub use table::{BitRevTable, TableError};

#[cfg(feature = "complex-nums")]
pub use bitrev::bit_rev_complex;
