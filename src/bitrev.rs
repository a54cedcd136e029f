//! Table-driven in-place bit reversal for the three element widths.
//!
//! All three entry points walk the same kind of exchange table: an
//! even-length sequence of `u16` raw values, consumed two at a time, where
//! each pair names two positions to swap. The raw values are pre-scaled by
//! the table generator under a single convention, so each width recovers a
//! usable index with its own normalization shift:
//!
//! | entry point    | shift | one table pair swaps                      |
//! |----------------|-------|-------------------------------------------|
//! | [`bit_rev_16`] | 1     | scalars `buf[a]`, `buf[b]`                |
//! | [`bit_rev_32`] | 0     | samples `buf[2a..=2a+1]`, `buf[2b..=2b+1]`|
//! | [`bit_rev_64`] | 2     | samples `buf[a..=a+1]`, `buf[b..=b+1]`    |
//!
//! The permutation is an involution, so running the same call twice
//! restores the original buffer. Fixed points of the permutation never
//! appear in a well-formed table; there is nothing to swap for them.
//!
//! These functions do no validation beyond cheap length asserts; they are
//! the hot path an FFT calls once per transform. For untrusted tables or
//! buffers, go through [`BitRevTable`](crate::BitRevTable), which checks
//! the index range up front and fails with an error instead of panicking
//! mid-permutation.

/// Walks `table` two entries at a time and performs one exchange per pair.
///
/// `shift` and `scale` turn a raw table value into the element index of the
/// first element of a group; `paired` additionally swaps the element right
/// after it (the imaginary component of a complex sample). The callers pass
/// constants, so each instantiation folds down to its own tight loop.
#[inline(always)]
fn swap_from_table<T>(buf: &mut [T], table: &[u16], shift: u32, scale: usize, paired: bool) {
    for pair in table.chunks_exact(2) {
        let a = ((pair[0] >> shift) as usize) * scale;
        let b = ((pair[1] >> shift) as usize) * scale;

        buf.swap(a, b);
        if paired {
            buf.swap(a + 1, b + 1);
        }
    }
}

/// In-place bit reversal for a buffer of 16-bit scalar elements.
///
/// Each table pair `(raw_a, raw_b)` swaps `buf[raw_a >> 1]` and
/// `buf[raw_b >> 1]`. Unlike the 32/64-bit variants there is no
/// real/imaginary pairing; one pair means one exchange.
///
/// Only the first `bit_rev_len` table entries are consumed, so a caller
/// holding a larger table can pass a shorter length; `bit_rev_len == 0` is
/// a guaranteed no-op.
///
/// # Panics
///
/// Panics if `bit_rev_len` is odd or exceeds `table.len()`, or if a
/// normalized index falls outside `buf`.
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl+gfni",
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
))]
pub fn bit_rev_16<T>(buf: &mut [T], table: &[u16], bit_rev_len: usize) {
    assert!(bit_rev_len <= table.len());
    assert_eq!(bit_rev_len % 2, 0);
    debug_assert_eq!(std::mem::size_of::<T>(), 2);

    swap_from_table(buf, &table[..bit_rev_len], 1, 1, false);
}

/// In-place bit reversal for a buffer of 32-bit elements holding
/// interleaved complex samples.
///
/// A raw table value is already a sample index (normalization shift 0).
/// Each table pair swaps the real components `buf[2a]`/`buf[2b]` and the
/// imaginary components `buf[2a + 1]`/`buf[2b + 1]`, i.e. one logical
/// complex-sample exchange realized as two element exchanges.
///
/// Only the first `bit_rev_len` table entries are consumed;
/// `bit_rev_len == 0` is a guaranteed no-op.
///
/// # Panics
///
/// Panics if `bit_rev_len` is odd or exceeds `table.len()`, or if a
/// normalized index falls outside `buf`.
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl+gfni",
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
))]
pub fn bit_rev_32<T>(buf: &mut [T], table: &[u16], bit_rev_len: usize) {
    assert!(bit_rev_len <= table.len());
    assert_eq!(bit_rev_len % 2, 0);
    debug_assert_eq!(std::mem::size_of::<T>(), 4);

    swap_from_table(buf, &table[..bit_rev_len], 0, 2, true);
}

/// In-place bit reversal for a buffer of 64-bit elements holding
/// interleaved complex samples.
///
/// A raw table value normalizes to the element index of a sample's real
/// component via `raw >> 2`. Each table pair swaps `buf[a]`/`buf[b]` and
/// `buf[a + 1]`/`buf[b + 1]`, the same sample exchange [`bit_rev_32`]
/// performs, just under the wider element's table convention.
///
/// Only the first `bit_rev_len` table entries are consumed;
/// `bit_rev_len == 0` is a guaranteed no-op.
///
/// # Panics
///
/// Panics if `bit_rev_len` is odd or exceeds `table.len()`, or if a
/// normalized index falls outside `buf`.
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl+gfni",
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
))]
pub fn bit_rev_64<T>(buf: &mut [T], table: &[u16], bit_rev_len: usize) {
    assert!(bit_rev_len <= table.len());
    assert_eq!(bit_rev_len % 2, 0);
    debug_assert_eq!(std::mem::size_of::<T>(), 8);

    swap_from_table(buf, &table[..bit_rev_len], 2, 1, true);
}

/// In-place bit reversal for a buffer of [`Complex`] samples.
///
/// Casts the interleaved complex slice to its flat component buffer and
/// dispatches on the component width: [`bit_rev_32`] for `Complex<f32>`,
/// [`bit_rev_64`] for `Complex<f64>`. The table follows the matching
/// width's convention.
///
/// # Panics
///
/// Panics under the same conditions as the width-specific functions.
#[cfg(feature = "complex-nums")]
pub fn bit_rev_complex<T: num_traits::Float + bytemuck::Pod>(
    signal: &mut [num_complex::Complex<T>],
    table: &[u16],
    bit_rev_len: usize,
) {
    use bytemuck::cast_slice_mut;

    match std::mem::size_of::<T>() {
        4 => bit_rev_32(cast_slice_mut::<_, T>(signal), table, bit_rev_len),
        8 => bit_rev_64(cast_slice_mut::<_, T>(signal), table, bit_rev_len),
        width => unimplemented!("no bit reversal table convention for {width}-byte components"),
    }
}

#[cfg(test)]
mod tests {
    use utilities::{
        bit_reverse_permutation, gen_bit_rev_table_16, gen_bit_rev_table_32, gen_bit_rev_table_64,
        gen_random_buffer, reverse_bits,
    };

    use super::*;

    /// Expected ordering for the N = 8 scenario: swaps (1, 4) and (3, 6),
    /// fixed points 0, 2, 5, 7 untouched.
    const REVERSED_8: [usize; 8] = [0, 4, 2, 6, 1, 5, 3, 7];

    #[test]
    fn scalar16_n8() {
        let mut buf: Vec<u16> = (0..8).collect();
        // Raw values are element indices pre-scaled by 2.
        let table = [2, 8, 6, 12];

        bit_rev_16(&mut buf, &table, table.len());

        let expected: Vec<u16> = REVERSED_8.iter().map(|&i| i as u16).collect();
        assert_eq!(buf, expected);
    }

    #[test]
    fn complex32_n8() {
        // Sample k holds (re, im) = (k, k + 0.5).
        let mut buf: Vec<f32> = (0..8).flat_map(|k| [k as f32, k as f32 + 0.5]).collect();
        // Raw values are sample indices, no pre-scaling.
        let table = [1, 4, 3, 6];

        bit_rev_32(&mut buf, &table, table.len());

        let expected: Vec<f32> = REVERSED_8
            .iter()
            .flat_map(|&k| [k as f32, k as f32 + 0.5])
            .collect();
        assert_eq!(buf, expected);
    }

    #[test]
    fn complex64_n8() {
        let mut buf: Vec<f64> = (0..8).flat_map(|k| [k as f64, k as f64 + 0.5]).collect();
        // Raw values are element indices of the real component, pre-scaled by 4.
        let table = [8, 32, 24, 48];

        bit_rev_64(&mut buf, &table, table.len());

        let expected: Vec<f64> = REVERSED_8
            .iter()
            .flat_map(|&k| [k as f64, k as f64 + 0.5])
            .collect();
        assert_eq!(buf, expected);
    }

    #[test]
    fn scalar16_matches_reference_permutation() {
        for log_n in 1..12 {
            let big_n = 1 << log_n;
            let original: Vec<u16> = gen_random_buffer(big_n);
            let mut buf = original.clone();

            let table = gen_bit_rev_table_16(log_n);
            bit_rev_16(&mut buf, &table, table.len());

            assert_eq!(buf, bit_reverse_permutation(&original));
        }
    }

    #[test]
    fn complex32_matches_reference_permutation() {
        for log_n in 1..12 {
            let big_n = 1 << log_n;
            let original: Vec<f32> = gen_random_buffer(2 * big_n);
            let mut buf = original.clone();

            let table = gen_bit_rev_table_32(log_n);
            bit_rev_32(&mut buf, &table, table.len());

            // Post-apply sample k must equal pre-apply sample reverse_bits(k).
            for k in 0..big_n {
                let r = reverse_bits(k, log_n);
                assert_eq!(buf[2 * k], original[2 * r]);
                assert_eq!(buf[2 * k + 1], original[2 * r + 1]);
            }
        }
    }

    #[test]
    fn complex64_matches_reference_permutation() {
        for log_n in 1..12 {
            let big_n = 1 << log_n;
            let original: Vec<f64> = gen_random_buffer(2 * big_n);
            let mut buf = original.clone();

            let table = gen_bit_rev_table_64(log_n);
            bit_rev_64(&mut buf, &table, table.len());

            for k in 0..big_n {
                let r = reverse_bits(k, log_n);
                assert_eq!(buf[2 * k], original[2 * r]);
                assert_eq!(buf[2 * k + 1], original[2 * r + 1]);
            }
        }
    }

    #[test]
    fn involution_restores_original() {
        for log_n in 1..12 {
            let big_n = 1 << log_n;

            let original: Vec<u16> = gen_random_buffer(big_n);
            let mut buf = original.clone();
            let table = gen_bit_rev_table_16(log_n);
            bit_rev_16(&mut buf, &table, table.len());
            bit_rev_16(&mut buf, &table, table.len());
            assert_eq!(buf, original);

            let original: Vec<f32> = gen_random_buffer(2 * big_n);
            let mut buf = original.clone();
            let table = gen_bit_rev_table_32(log_n);
            bit_rev_32(&mut buf, &table, table.len());
            bit_rev_32(&mut buf, &table, table.len());
            assert_eq!(buf, original);

            let original: Vec<f64> = gen_random_buffer(2 * big_n);
            let mut buf = original.clone();
            let table = gen_bit_rev_table_64(log_n);
            bit_rev_64(&mut buf, &table, table.len());
            bit_rev_64(&mut buf, &table, table.len());
            assert_eq!(buf, original);
        }
    }

    #[test]
    fn permutation_preserves_multiset() {
        for log_n in 1..12 {
            let big_n = 1 << log_n;
            let original: Vec<u16> = gen_random_buffer(big_n);
            let mut buf = original.clone();

            let table = gen_bit_rev_table_16(log_n);
            bit_rev_16(&mut buf, &table, table.len());

            let mut before = original;
            let mut after = buf;
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn zero_len_is_a_noop() {
        let table = gen_bit_rev_table_16(4);

        let original: Vec<u16> = gen_random_buffer(16);
        let mut buf = original.clone();
        bit_rev_16(&mut buf, &table, 0);
        assert_eq!(buf, original);

        let original: Vec<f32> = gen_random_buffer(32);
        let mut buf = original.clone();
        bit_rev_32(&mut buf, &gen_bit_rev_table_32(4), 0);
        assert_eq!(buf, original);

        let original: Vec<f64> = gen_random_buffer(32);
        let mut buf = original.clone();
        bit_rev_64(&mut buf, &gen_bit_rev_table_64(4), 0);
        assert_eq!(buf, original);
    }

    #[test]
    fn tables_never_encode_self_swaps() {
        for log_n in 1..13 {
            for pair in gen_bit_rev_table_16(log_n).chunks_exact(2) {
                assert_ne!(pair[0] >> 1, pair[1] >> 1);
            }
            for pair in gen_bit_rev_table_32(log_n).chunks_exact(2) {
                assert_ne!(pair[0], pair[1]);
            }
            for pair in gen_bit_rev_table_64(log_n).chunks_exact(2) {
                assert_ne!(pair[0] >> 2, pair[1] >> 2);
            }
        }
    }

    #[test]
    #[should_panic]
    fn odd_len_panics() {
        let mut buf: Vec<u16> = (0..8).collect();
        bit_rev_16(&mut buf, &[2, 8, 6], 3);
    }

    #[cfg(feature = "complex-nums")]
    #[test]
    fn complex_entry_point_matches_flat() {
        use num_complex::Complex;

        for log_n in 1..10 {
            let big_n = 1 << log_n;

            let res: Vec<f32> = gen_random_buffer(big_n);
            let ims: Vec<f32> = gen_random_buffer(big_n);
            let original: Vec<Complex<f32>> = res
                .iter()
                .zip(ims.iter())
                .map(|(&re, &im)| Complex::new(re, im))
                .collect();
            let mut signal = original.clone();

            let table = gen_bit_rev_table_32(log_n);
            bit_rev_complex(&mut signal, &table, table.len());

            let expected = bit_reverse_permutation(&original);
            assert_eq!(signal, expected);

            let original: Vec<Complex<f64>> = res
                .iter()
                .zip(ims.iter())
                .map(|(&re, &im)| Complex::new(f64::from(re), f64::from(im)))
                .collect();
            let mut signal = original.clone();

            let table = gen_bit_rev_table_64(log_n);
            bit_rev_complex(&mut signal, &table, table.len());

            let expected = bit_reverse_permutation(&original);
            assert_eq!(signal, expected);
        }
    }
}
