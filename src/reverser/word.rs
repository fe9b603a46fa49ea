// src/reverser/word.rs
use byteorder::{ByteOrder, NativeEndian};

/// Width of the bulk transfer unit, matching `u64::swap_bytes`.
pub const WORD_SIZE: usize = std::mem::size_of::<u64>();

#[inline(always)]
fn load_swapped(word: &[u8]) -> u64 {
    NativeEndian::read_u64(word).swap_bytes()
}

/// Write the reversal of `src` into `dst[..src.len()]`.
///
/// Destination word `i` receives the byte-swapped source word that ends
/// `i * WORD_SIZE` bytes before the end of `src`. The leading
/// `src.len() % WORD_SIZE` source bytes land, reversed, at the end of the
/// destination range.
///
/// Callers guarantee `dst.len() >= src.len()`.
#[inline]
pub(crate) fn copy_reversed(dst: &mut [u8], src: &[u8]) {
    let dst = &mut dst[..src.len()];

    let mut out = dst.chunks_exact_mut(WORD_SIZE);
    let mut words = src.rchunks_exact(WORD_SIZE);
    for (d, s) in (&mut out).zip(&mut words) {
        NativeEndian::write_u64(d, load_swapped(s));
    }

    let head = words.remainder();
    for (d, s) in out.into_remainder().iter_mut().zip(head.iter().rev()) {
        *d = *s;
    }
}

/// Reverse `buf` without a second buffer.
///
/// Front and back words are exchanged pairwise, each byte-swapped on the
/// way. The middle region left over (fewer than `2 * WORD_SIZE` bytes) is
/// reversed by exchanging symmetric byte pairs.
#[inline]
pub(crate) fn swap_reversed(buf: &mut [u8]) {
    let pairs = buf.len() / (2 * WORD_SIZE);
    let edge = pairs * WORD_SIZE;

    let (front, rest) = buf.split_at_mut(edge);
    let mid_len = rest.len() - edge;
    let (middle, back) = rest.split_at_mut(mid_len);

    for (f, b) in front
        .chunks_exact_mut(WORD_SIZE)
        .zip(back.rchunks_exact_mut(WORD_SIZE))
    {
        let lo = load_swapped(f);
        let hi = load_swapped(b);
        NativeEndian::write_u64(f, hi);
        NativeEndian::write_u64(b, lo);
    }

    middle.reverse();
}
