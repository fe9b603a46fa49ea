// src/reverser/buffer.rs
use bytes::{Bytes, BytesMut};
use super::word::{copy_reversed, swap_reversed};
use crate::log::trace;

/// Append the byte reversal of `src` to `dst`
///
/// Existing contents of `dst` are kept; the reversed bytes follow them.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use byterev::put_reversed;
///
/// let mut out = BytesMut::from(&b"head:"[..]);
/// put_reversed(&mut out, b"abc");
/// assert_eq!(&out[..], b"head:cba");
/// ```
pub fn put_reversed(dst: &mut BytesMut, src: &[u8]) {
    if src.is_empty() {
        return;
    }
    trace!(len = src.len(), offset = dst.len(), "appending reversed bytes");

    let start = dst.len();
    dst.resize(start + src.len(), 0);
    copy_reversed(&mut dst[start..], src);
}

/// Allocate a new buffer holding the byte reversal of `src`
///
/// ```
/// use byterev::reversed;
///
/// assert_eq!(&reversed(&[1, 2, 3])[..], &[3, 2, 1]);
/// ```
pub fn reversed(src: &[u8]) -> Bytes {
    let mut out = BytesMut::with_capacity(src.len());
    put_reversed(&mut out, src);
    out.freeze()
}

/// In-place byte reversal for owned and borrowed byte buffers
pub trait ReverseExt {
    /// Reverse the byte order of the whole buffer in place
    fn reverse_bytes(&mut self);
}

impl ReverseExt for [u8] {
    #[inline]
    fn reverse_bytes(&mut self) {
        swap_reversed(self);
    }
}

impl ReverseExt for BytesMut {
    #[inline]
    fn reverse_bytes(&mut self) {
        swap_reversed(&mut self[..]);
    }
}

impl ReverseExt for Vec<u8> {
    #[inline]
    fn reverse_bytes(&mut self) {
        swap_reversed(self.as_mut_slice());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_reversed_preserves_existing() {
        let mut out = BytesMut::with_capacity(4);
        out.extend_from_slice(&[0xFF, 0xFE]);
        put_reversed(&mut out, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(
            &out[..],
            &[0xFF, 0xFE, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn test_put_reversed_empty() {
        let mut out = BytesMut::from(&b"xy"[..]);
        put_reversed(&mut out, &[]);
        assert_eq!(&out[..], b"xy");
    }

    #[test]
    fn test_reversed_is_involution() {
        let input = b"wtfwtfwtfwtfwtfwtfwtf";
        let once = reversed(input);
        assert_ne!(&once[..], &input[..]);
        let twice = reversed(&once);
        assert_eq!(&twice[..], &input[..]);
    }

    #[test]
    fn test_reverse_ext() {
        let mut v: Vec<u8> = (0..20).collect();
        v.reverse_bytes();
        assert_eq!(v, (0..20).rev().collect::<Vec<u8>>());

        let mut b = BytesMut::from(&b"abcdefghij"[..]);
        b.reverse_bytes();
        assert_eq!(&b[..], b"jihgfedcba");

        let mut arr = [0xAAu8, 0xBB];
        arr[..].reverse_bytes();
        assert_eq!(arr, [0xBB, 0xAA]);
    }
}
