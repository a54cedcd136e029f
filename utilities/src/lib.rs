//! Test and bench scaffolding: reference table builders, an out-of-place
//! reference permutation, and random buffer generation.
//!
//! The builders here are oracles only. The library itself consumes tables,
//! it never produces them.

use rand::{distributions::Standard, prelude::*};

/// Reverses the low `log_n` bits of `x`.
#[must_use]
pub fn reverse_bits(x: usize, log_n: usize) -> usize {
    if log_n == 0 {
        return x;
    }
    x.reverse_bits() >> (usize::BITS as usize - log_n)
}

/// Emits each transposition of the bit-reversal permutation for a
/// `log_n`-bit address space exactly once, with both raw values pre-scaled
/// by `pre_shift`. Fixed points are skipped; swapping an element with
/// itself is a no-op the table has no reason to encode.
fn gen_bit_rev_table(log_n: usize, pre_shift: u32) -> Vec<u16> {
    let big_n = 1 << log_n;
    let mut table = Vec::new();

    for k in 0..big_n {
        let r = reverse_bits(k, log_n);
        if k < r {
            table.push((k as u16) << pre_shift);
            table.push((r as u16) << pre_shift);
        }
    }

    table
}

/// Table for a buffer of `1 << log_n` 16-bit scalars: raw value is the
/// element index times 2, so the consumer's `>> 1` recovers it.
#[must_use]
pub fn gen_bit_rev_table_16(log_n: usize) -> Vec<u16> {
    gen_bit_rev_table(log_n, 1)
}

/// Table for `1 << log_n` complex samples of 32-bit components: raw value
/// is the sample index itself (shift 0 on the consumer side).
#[must_use]
pub fn gen_bit_rev_table_32(log_n: usize) -> Vec<u16> {
    gen_bit_rev_table(log_n, 0)
}

/// Table for `1 << log_n` complex samples of 64-bit components: raw value
/// is the real component's element index (`2k`) times 4, so the consumer's
/// `>> 2` lands back on the element index.
#[must_use]
pub fn gen_bit_rev_table_64(log_n: usize) -> Vec<u16> {
    gen_bit_rev_table(log_n, 3)
}

/// Obviously correct out-of-place bit reversal, used to check every
/// in-place path.
#[must_use]
pub fn bit_reverse_permutation<T: Copy>(x: &[T]) -> Vec<T> {
    let log_n = x.len().ilog2() as usize;
    (0..x.len()).map(|i| x[reverse_bits(i, log_n)]).collect()
}

/// Fills a fresh buffer of length `len` with random values.
#[must_use]
pub fn gen_random_buffer<T>(len: usize) -> Vec<T>
where
    Standard: Distribution<T>,
{
    let mut rng = thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}
