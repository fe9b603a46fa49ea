// src/lib.rs
//! # byterev
//!
//! Fast byte order reversal for endianness conversion.
//!
//! Buffers are reversed a machine word at a time: every full 8-byte word is
//! moved with a hardware byte swap, and the 0-7 bytes that remain are
//! reversed individually.
//!
//! ## Features
//!
//! - **Word-at-a-time**: bulk phase uses `u64::swap_bytes`
//! - **Copy or in place**: the in-place form needs no scratch buffer
//! - **Allocation-free**: core operations never allocate, lock, or do I/O
//! - **`bytes` integration**: append reversed data to a `BytesMut`
//! - **Typed endianness conversion** for any `bytemuck::Pod` slice
//!
//! ## Quick Start
//!
//! ```rust
//! use byterev::*;
//!
//! let src = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09];
//! let mut dst = [0u8; 9];
//! reverse_copy(&mut dst, &src);
//! assert_eq!(dst, [0x09, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
//!
//! let mut buf = [0xAAu8, 0xBB];
//! reverse_in_place(&mut buf);
//! assert_eq!(buf, [0xBB, 0xAA]);
//! ```
//!
//! ### Checked lengths
//!
//! ```rust
//! use byterev::*;
//!
//! fn main() -> Result<()> {
//!     let mut frame = *b"olleh!";
//!     ByteReverser::try_reverse_in_place(&mut frame, 5)?;
//!     assert_eq!(&frame, b"hello!");
//!
//!     let err = ByteReverser::try_reverse_in_place(&mut frame, 7).unwrap_err();
//!     assert!(matches!(err, ReverseError::LengthOutOfBounds { .. }));
//!     Ok(())
//! }
//! ```
//!
//! ## Cargo features
//!
//! - `tracing` - emit `tracing` events from the checked entry points and
//!   buffer adapters

// Modules
pub mod error;
pub mod reverser;

mod log;
mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{ReverseError, Result};

pub use reverser::{
    ByteReverser,
    ReverseExt,
    put_reversed,
    reversed,
    WORD_SIZE,
};

pub use utils::{
    Endianness,
    swap_endianness,
    convert_endianness,
    to_big_endian,
    from_big_endian,
    to_little_endian,
    from_little_endian,
};

/// Write the byte reversal of `src` into `dst[..src.len()]`
///
/// See [`ByteReverser::reverse_copy`].
///
/// # Panics
///
/// Panics if `dst` is shorter than `src`.
#[inline]
pub fn reverse_copy(dst: &mut [u8], src: &[u8]) {
    ByteReverser::reverse_copy(dst, src);
}

/// Reverse the byte order of `buf` in place
///
/// See [`ByteReverser::reverse_in_place`].
#[inline]
pub fn reverse_in_place(buf: &mut [u8]) {
    ByteReverser::reverse_in_place(buf);
}

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use byterev::prelude::*;
    //! ```

    pub use crate::error::{ReverseError, Result};
    pub use crate::reverser::{ByteReverser, ReverseExt};
    pub use crate::utils::Endianness;
    pub use crate::{reverse_copy, reverse_in_place};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
