// src/utils/endian.rs
use bytemuck::Pod;
use crate::reverser::ByteReverser;

/// Byte order of multi-byte values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte order of the compilation target
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endianness = Endianness::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endianness = Endianness::Big;

    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

/// Reverse the bytes of every element of `data`
///
/// Single-byte element types are left alone.
///
/// ```
/// use byterev::swap_endianness;
///
/// let mut values = [0x0102_0304u32, 0xAABB_CCDD];
/// swap_endianness(&mut values);
/// assert_eq!(values, [0x0403_0201, 0xDDCC_BBAA]);
/// ```
pub fn swap_endianness<T: Pod>(data: &mut [T]) {
    let size = std::mem::size_of::<T>();
    if size <= 1 {
        return;
    }

    let raw: &mut [u8] = bytemuck::cast_slice_mut(data);
    for chunk in raw.chunks_exact_mut(size) {
        ByteReverser::reverse_in_place(chunk);
    }
}

/// Convert `data` from byte order `from` to byte order `to` in place
pub fn convert_endianness<T: Pod>(data: &mut [T], from: Endianness, to: Endianness) {
    if from != to {
        swap_endianness(data);
    }
}

/// Convert native values to big-endian representation in place
pub fn to_big_endian<T: Pod>(data: &mut [T]) {
    convert_endianness(data, Endianness::NATIVE, Endianness::Big);
}

/// Convert big-endian values to native representation in place
pub fn from_big_endian<T: Pod>(data: &mut [T]) {
    convert_endianness(data, Endianness::Big, Endianness::NATIVE);
}

/// Convert native values to little-endian representation in place
pub fn to_little_endian<T: Pod>(data: &mut [T]) {
    convert_endianness(data, Endianness::NATIVE, Endianness::Little);
}

/// Convert little-endian values to native representation in place
pub fn from_little_endian<T: Pod>(data: &mut [T]) {
    convert_endianness(data, Endianness::Little, Endianness::NATIVE);
}
