// tests/endian_tests.rs
use byterev::*;

#[test]
fn test_swap_endianness_integers() {
    let mut words = [0x0102u16, 0xA0B0];
    swap_endianness(&mut words);
    assert_eq!(words, [0x0201, 0xB0A0]);

    let mut quads = [0x0102_0304_0506_0708u64, 0x1122_3344_5566_7788];
    swap_endianness(&mut quads);
    assert_eq!(quads, [0x0807_0605_0403_0201, 0x8877_6655_4433_2211]);
}

#[test]
fn test_swap_endianness_floats() {
    let original = [3.14159f64, -2.71828, 0.0, f64::MAX];
    let mut values = original;
    swap_endianness(&mut values);
    for (swapped, orig) in values.iter().zip(original.iter()) {
        assert_eq!(swapped.to_bits(), orig.to_bits().swap_bytes());
    }

    swap_endianness(&mut values);
    assert_eq!(values, original);
}

#[test]
fn test_big_endian_roundtrip() {
    let original: Vec<i64> = (0..100).map(|i| i * 1_000_003 - 50).collect();
    let mut values = original.clone();

    to_big_endian(&mut values);
    for (converted, orig) in values.iter().zip(original.iter()) {
        assert_eq!(converted.to_ne_bytes(), orig.to_be_bytes());
    }

    from_big_endian(&mut values);
    assert_eq!(values, original);
}

#[test]
fn test_little_endian_roundtrip() {
    let original = [1u32, 0xDEAD_BEEF, u32::MAX];
    let mut values = original;

    to_little_endian(&mut values);
    for (converted, orig) in values.iter().zip(original.iter()) {
        assert_eq!(converted.to_ne_bytes(), orig.to_le_bytes());
    }

    from_little_endian(&mut values);
    assert_eq!(values, original);
}

#[test]
fn test_convert_between_orders() {
    let mut values = [0x1234_5678u32];
    convert_endianness(&mut values, Endianness::Little, Endianness::Big);
    assert_eq!(values, [0x7856_3412]);

    convert_endianness(&mut values, Endianness::Little, Endianness::Little);
    assert_eq!(values, [0x7856_3412]);
}
