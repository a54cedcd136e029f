//! Validated view over an externally generated bit-reversal table.
//!
//! The fast-path functions in [`crate::bitrev`] trust their inputs the way
//! an FFT kernel can afford to: the table was built once, next to the
//! twiddle factors, for a known transform length. When the table or the
//! buffer comes from somewhere less trustworthy, [`BitRevTable`] checks the
//! whole call up front and returns a [`TableError`] instead of panicking
//! partway through a permutation.
//!
//! Construction records the largest raw entry, so the per-call range check
//! is O(1) no matter how many times the table is reused.

use crate::bitrev::{bit_rev_16, bit_rev_32, bit_rev_64};

/// Errors reported by the checked apply entry points.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The raw table has an odd number of entries and cannot be grouped
    /// into exchange pairs.
    OddLength(usize),
    /// The largest normalized element index does not fit the buffer.
    IndexOutOfRange {
        /// Largest element index the table would touch.
        index: usize,
        /// Length of the buffer that was passed in.
        len: usize,
    },
}

impl core::fmt::Display for TableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OddLength(len) => {
                write!(f, "bit reversal table length {len} is odd")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "bit reversal table touches element {index} of a buffer of length {len}"
                )
            }
        }
    }
}

impl core::fmt::Debug for TableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for TableError {}

/// A borrowed bit-reversal table with its length parity verified and its
/// largest raw entry cached for range checks.
///
/// The table is never mutated and one instance may drive any number of
/// apply calls, concurrently on distinct buffers if desired.
#[derive(Copy, Clone, Debug)]
pub struct BitRevTable<'a> {
    raw: &'a [u16],
    max_raw: u16,
}

impl<'a> BitRevTable<'a> {
    /// Wraps a raw table, rejecting odd lengths.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OddLength`] if `raw.len()` is odd.
    pub fn new(raw: &'a [u16]) -> Result<Self, TableError> {
        if raw.len() % 2 != 0 {
            return Err(TableError::OddLength(raw.len()));
        }
        let max_raw = raw.iter().copied().max().unwrap_or(0);
        Ok(Self { raw, max_raw })
    }

    /// The underlying raw entries.
    #[must_use]
    pub fn raw(&self) -> &'a [u16] {
        self.raw
    }

    /// Number of raw entries (always even).
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of exchanges the table describes.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.raw.len() / 2
    }

    /// Checked counterpart of [`bit_rev_16`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] without touching `buf` if
    /// any normalized index falls outside it.
    pub fn apply_16<T>(&self, buf: &mut [T]) -> Result<(), TableError> {
        self.check_bounds((self.max_raw >> 1) as usize, buf.len())?;
        bit_rev_16(buf, self.raw, self.raw.len());
        Ok(())
    }

    /// Checked counterpart of [`bit_rev_32`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] without touching `buf` if
    /// any normalized index falls outside it.
    pub fn apply_32<T>(&self, buf: &mut [T]) -> Result<(), TableError> {
        // Highest touched element is the imaginary half of the last sample.
        self.check_bounds(2 * self.max_raw as usize + 1, buf.len())?;
        bit_rev_32(buf, self.raw, self.raw.len());
        Ok(())
    }

    /// Checked counterpart of [`bit_rev_64`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] without touching `buf` if
    /// any normalized index falls outside it.
    pub fn apply_64<T>(&self, buf: &mut [T]) -> Result<(), TableError> {
        self.check_bounds((self.max_raw >> 2) as usize + 1, buf.len())?;
        bit_rev_64(buf, self.raw, self.raw.len());
        Ok(())
    }

    fn check_bounds(&self, max_index: usize, buf_len: usize) -> Result<(), TableError> {
        if !self.raw.is_empty() && max_index >= buf_len {
            return Err(TableError::IndexOutOfRange {
                index: max_index,
                len: buf_len,
            });
        }
        Ok(())
    }
}
