// src/reverser/mod.rs
//! Byte order reversal
//!
//! This module provides the reversal primitive and its adapters:
//!
//! - [`ByteReverser`] - copy and in-place reversal over slices or raw pointers
//! - [`put_reversed`] / [`reversed`] - reversal into `bytes` buffers
//! - [`ReverseExt`] - `reverse_bytes()` on byte containers
//!
//! Both forms share one algorithm: whole 8-byte words are byte-swapped with
//! `u64::swap_bytes` while their order is flipped, and the bytes that don't
//! fill a word are reversed one at a time.
//!
//! # Examples
//!
//! ```
//! use byterev::reverser::ByteReverser;
//!
//! let src: Vec<u8> = (1..=17).collect();
//! let mut dst = vec![0u8; 17];
//! ByteReverser::reverse_copy(&mut dst, &src);
//!
//! let mut buf = src.clone();
//! ByteReverser::reverse_in_place(&mut buf);
//! assert_eq!(buf, dst);
//!
//! ByteReverser::reverse_in_place(&mut buf);
//! assert_eq!(buf, src);
//! ```

mod buffer;
mod byte_reverser;
mod word;

pub use buffer::{put_reversed, reversed, ReverseExt};
pub use byte_reverser::ByteReverser;
pub use word::WORD_SIZE;
