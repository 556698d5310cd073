//! Unit tests for identity and value equality of frames.
use super::*;
use crate::core::Channel;

fn sample() -> Frame {
    Frame::builder()
        .timestamp(12.5)
        .id(0x18FF_50E5)
        .channel("can0")
        .data([0xDE, 0xAD, 0xBE, 0xEF])
        .build()
        .expect("sample frame must build")
}

#[test]
/// A frame equals itself, whatever the options.
fn test_reflexive() {
    let frame = sample();
    assert!(frame.equals(&frame, &EqualityOptions::default()));

    let mut nan = sample();
    nan.timestamp = f64::NAN;
    // identity wins even though NaN never matches by value
    assert!(nan.equals(&nan, &EqualityOptions::default()));
}

#[test]
/// Distinct but identical frames: equal by value, different by identity.
fn test_value_vs_identity() {
    let a = sample();
    let b = sample();
    assert!(!a.is_same(&b));
    assert!(a.is_same(&a));
    assert!(a.equals(&b, &EqualityOptions::default()));
    assert!(b.equals(&a, &EqualityOptions::default()));
}

#[test]
/// Timestamps match within the configured delta.
fn test_timestamp_tolerance() {
    let a = sample();
    let mut b = sample();
    b.timestamp = a.timestamp + 2.0e-6;

    assert!(!a.equals(&b, &EqualityOptions::default()));
    assert!(a.equals(&b, &EqualityOptions::default().with_timestamp_delta(1.0e-5)));

    b.timestamp = 1_000.0;
    assert!(a.equals(&b, &EqualityOptions::default().ignore_timestamp()));
}

#[test]
/// Channel and direction can be excluded from the comparison.
fn test_channel_and_direction_exclusions() {
    let a = sample();
    let mut b = sample();
    b.channel = Some(Channel::Index(1));
    b.is_rx = false;

    assert!(!a.equals(&b, &EqualityOptions::default()));
    assert!(!a.equals(&b, &EqualityOptions::default().ignore_channel()));
    assert!(!a.equals(&b, &EqualityOptions::default().ignore_direction()));
    assert!(a.equals(
        &b,
        &EqualityOptions::default()
            .ignore_channel()
            .ignore_direction()
    ));
}

#[test]
/// Every other field is compared exactly.
fn test_strict_fields() {
    let base = sample();
    let options = EqualityOptions::default();

    let variants = [
        Frame { id: 0x18FF_50E6, ..base.clone() },
        Frame { is_extended_id: false, ..base.clone() },
        Frame { dlc: 3, ..base.clone() },
        Frame { data: alloc::vec![0xDE, 0xAD, 0xBE, 0xEE], ..base.clone() },
        Frame { is_remote_frame: true, ..base.clone() },
        Frame { is_error_frame: true, ..base.clone() },
        Frame { is_fd: true, ..base.clone() },
        Frame { bitrate_switch: true, ..base.clone() },
        Frame { error_state_indicator: true, ..base.clone() },
    ];

    for variant in &variants {
        assert!(!base.equals(variant, &options), "{variant:?}");
    }
}
