//! Unit tests for payload conversion.
use super::*;
use alloc::vec;

#[test]
/// Byte slices and vectors are copied unchanged.
fn test_bytes_pass_through() {
    let source: &[u8] = &[0x00, 0x7F, 0xFF];
    assert_eq!(source.into_payload().unwrap(), vec![0x00, 0x7F, 0xFF]);
    assert_eq!(vec![1u8, 2, 3].into_payload().unwrap(), vec![1, 2, 3]);
}

#[test]
/// Wider integers are accepted as long as each element fits in a byte.
fn test_integer_sequences() {
    assert_eq!([1i32, 2, 255].into_payload().unwrap(), vec![1, 2, 255]);
    assert_eq!(vec![0u64, 16].into_payload().unwrap(), vec![0, 16]);
    assert_eq!("AB".bytes().into_payload().unwrap(), vec![0x41, 0x42]);
}

#[test]
/// The first element out of range is reported with its value, type, and index.
fn test_out_of_range_element() {
    let err = [1i32, 256, -1].into_payload().unwrap_err();
    assert_eq!(
        err,
        ConversionError {
            value: 256,
            type_name: "i32",
            index: 1,
        }
    );
}

#[test]
/// Negative values are rejected too.
fn test_negative_element() {
    let values: &[i16] = &[3, -4];
    let err = values.into_payload().unwrap_err();
    assert_eq!(err.value, -4);
    assert_eq!(err.index, 1);
    assert!(err.type_name.ends_with("i16"));
}

#[test]
/// Empty input produces an empty payload.
fn test_empty_sequence() {
    let empty: [u8; 0] = [];
    assert!(empty.into_payload().unwrap().is_empty());
}
