// src/reverser/byte_reverser.rs
use super::word::{copy_reversed, swap_reversed};
use crate::error::{ReverseError, Result};
use crate::log::debug;

/// Reverses the byte order of contiguous buffers.
///
/// Whole 8-byte words are moved with a hardware byte swap; the 0-7 bytes
/// that don't fill a word are handled one at a time. No entry point
/// allocates, locks, or touches state outside the buffers it is given, so
/// all of them may run concurrently on disjoint buffers.
///
/// # Example
///
/// ```
/// use byterev::ByteReverser;
///
/// let src = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09];
/// let mut dst = [0u8; 9];
/// ByteReverser::reverse_copy(&mut dst, &src);
/// assert_eq!(dst, [0x09, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
///
/// let mut buf = [0xAAu8, 0xBB];
/// ByteReverser::reverse_in_place(&mut buf);
/// assert_eq!(buf, [0xBB, 0xAA]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteReverser;

impl ByteReverser {
    /// Write the byte reversal of `src` into the first `src.len()` bytes of `dst`
    ///
    /// Afterwards `dst[i] == src[src.len() - 1 - i]` for every `i` below
    /// `src.len()`. Bytes of `dst` past that point are left as they were.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `src`.
    #[inline]
    pub fn reverse_copy(dst: &mut [u8], src: &[u8]) {
        assert!(
            dst.len() >= src.len(),
            "reverse_copy: destination holds {} bytes, source has {}",
            dst.len(),
            src.len()
        );
        copy_reversed(dst, src);
    }

    /// Reverse the byte order of `buf` in place
    ///
    /// To reverse only a prefix, pass `&mut buf[..len]`.
    #[inline]
    pub fn reverse_in_place(buf: &mut [u8]) {
        swap_reversed(buf);
    }

    /// Checked form of [`reverse_copy`](Self::reverse_copy) over an explicit length
    ///
    /// Reverses `src[..len]` into `dst[..len]`. Nothing is written when an
    /// error is returned.
    ///
    /// # Errors
    ///
    /// * [`ReverseError::SourceTooShort`] if `len > src.len()`
    /// * [`ReverseError::DestinationTooSmall`] if `len > dst.len()`
    pub fn try_reverse_copy(dst: &mut [u8], src: &[u8], len: usize) -> Result<()> {
        if len > src.len() {
            debug!(len, available = src.len(), "rejected reverse_copy: short source");
            return Err(ReverseError::SourceTooShort {
                required: len,
                available: src.len(),
            });
        }
        if len > dst.len() {
            debug!(len, capacity = dst.len(), "rejected reverse_copy: small destination");
            return Err(ReverseError::DestinationTooSmall {
                required: len,
                capacity: dst.len(),
            });
        }

        copy_reversed(dst, &src[..len]);
        Ok(())
    }

    /// Checked form of [`reverse_in_place`](Self::reverse_in_place) over an explicit length
    ///
    /// Reverses `buf[..len]`; the rest of `buf` is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ReverseError::LengthOutOfBounds`] if `len > buf.len()`.
    pub fn try_reverse_in_place(buf: &mut [u8], len: usize) -> Result<()> {
        if len > buf.len() {
            debug!(len, capacity = buf.len(), "rejected reverse_in_place: length out of bounds");
            return Err(ReverseError::LengthOutOfBounds {
                length: len,
                capacity: buf.len(),
            });
        }

        swap_reversed(&mut buf[..len]);
        Ok(())
    }

    /// Pointer form of [`reverse_copy`](Self::reverse_copy)
    ///
    /// When `len == 0` no memory is read or written and the pointers may be
    /// null or dangling.
    ///
    /// # Safety
    ///
    /// For `len > 0`:
    ///
    /// * `src` must be valid for reads of `len` bytes
    /// * `dst` must be valid for writes of `len` bytes
    /// * the two regions must not overlap
    ///
    /// Overlap is checked with `debug_assert!` in debug builds only.
    pub unsafe fn reverse_copy_raw(dst: *mut u8, src: *const u8, len: usize) {
        if len == 0 {
            return;
        }
        debug_assert!(!dst.is_null() && !src.is_null());
        debug_assert!(
            {
                let d = dst as usize;
                let s = src as usize;
                d.checked_add(len).map_or(false, |end| end <= s)
                    || s.checked_add(len).map_or(false, |end| end <= d)
            },
            "reverse_copy_raw: source and destination overlap"
        );

        let src = std::slice::from_raw_parts(src, len);
        let dst = std::slice::from_raw_parts_mut(dst, len);
        copy_reversed(dst, src);
    }

    /// Pointer form of [`reverse_in_place`](Self::reverse_in_place)
    ///
    /// When `len == 0` no memory is accessed and `buf` may be null.
    ///
    /// # Safety
    ///
    /// For `len > 0`, `buf` must be valid for reads and writes of `len` bytes
    /// and not aliased by any live reference for the duration of the call.
    pub unsafe fn reverse_in_place_raw(buf: *mut u8, len: usize) {
        if len == 0 {
            return;
        }
        debug_assert!(!buf.is_null());

        swap_reversed(std::slice::from_raw_parts_mut(buf, len));
    }
}
