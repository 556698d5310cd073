//! End-to-end behavior of CAN frames: construction, validation, value
//! equality, and copies, as seen by code converting between log formats.

mod helpers;

use canlin_frames::{
    Channel, CopyMemo, EqualityOptions, Frame, FrameError, ValidationError,
};
use helpers::logged_frame;

#[test]
/// Payload given as integers: DLC follows its length.
fn test_frame_from_integer_payload() {
    let frame = Frame::builder().id(0x123).data([1, 2, 3]).build().unwrap();
    assert_eq!(frame.dlc, 3);
    assert_eq!(frame.data, vec![1, 2, 3]);
}

#[test]
/// Extended identifier at 2^29 is out of range once validated.
fn test_extended_id_out_of_range() {
    let relaxed = Frame::builder().id(0x2000_0000).extended(true).build();
    assert!(relaxed.is_ok(), "construction alone never validates");

    let err = Frame::builder()
        .id(0x2000_0000)
        .extended(true)
        .check(true)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FrameError::Validation(ValidationError::ExtendedIdOutOfRange { id: 0x2000_0000 })
    );
    assert!(err.to_string().contains("extended id out of range"));
}

#[test]
/// Standard identifiers stop at 2^11.
fn test_standard_id_bounds() {
    let ok = Frame::builder().id(0x7FF).extended(false).check(true).build();
    assert!(ok.is_ok());

    let err = Frame::builder().id(0x800).extended(false).check(true).build();
    assert!(matches!(
        err,
        Err(FrameError::Validation(ValidationError::StandardIdOutOfRange { id: 0x800 }))
    ));
}

#[test]
/// Validated frames keep DLC and payload consistent.
fn test_validated_frames_are_consistent() {
    let frames = [
        Frame::builder().id(0x10).data([0u8; 8]).check(true).build().unwrap(),
        Frame::builder().id(0x10).fd(true).data([0u8; 64]).check(true).build().unwrap(),
        Frame::builder().id(0x10).remote(true).dlc(8).data([1, 2]).check(true).build().unwrap(),
    ];
    for frame in &frames {
        if frame.is_remote_frame {
            assert!(frame.data.is_empty());
        } else {
            assert_eq!(frame.dlc, frame.data.len());
        }
    }

    let classic_too_long = Frame::builder().id(0x10).data([0u8; 9]).check(true).build();
    assert!(matches!(
        classic_too_long,
        Err(FrameError::Validation(ValidationError::ClassicDlcTooLarge { dlc: 9 }))
    ));
}

#[test]
/// Timestamps two microseconds apart: unequal by default, equal with a wider delta.
fn test_timestamp_delta() {
    let a = logged_frame(10.0);
    let b = logged_frame(10.0 + 2.0e-6);

    assert!(!a.equals(&b, &EqualityOptions::default()));
    assert!(a.equals(&b, &EqualityOptions::default().with_timestamp_delta(1.0e-5)));
    assert!(b.equals(&a, &EqualityOptions::default().ignore_timestamp()));
}

#[test]
/// Identity differs from value equality.
fn test_identity_is_default_comparison() {
    let a = logged_frame(1.0);
    let b = logged_frame(1.0);
    assert!(!a.is_same(&b));
    assert!(a.equals(&b, &EqualityOptions::default()));
    assert!(a.equals(&a, &EqualityOptions::default()));
}

#[test]
/// Frames replayed on another interface in the other direction.
fn test_replayed_frame_comparison() {
    let received = logged_frame(5.0);
    let mut replayed = received.clone();
    replayed.channel = Some(Channel::Name("vcan0".into()));
    replayed.is_rx = false;

    let relaxed = EqualityOptions::default()
        .ignore_channel()
        .ignore_direction();
    assert!(!received.equals(&replayed, &EqualityOptions::default()));
    assert!(received.equals(&replayed, &relaxed));
}

#[test]
/// Deep copies of a batch share one copy of a common channel token.
fn test_batch_deep_copy() {
    let token = Channel::shared(Channel::Name("gateway-0".into()));
    let batch: Vec<Frame> = (0..4)
        .map(|i| {
            Frame::builder()
                .timestamp(i as f64)
                .id(0x100 + i)
                .channel(token.clone())
                .build()
                .unwrap()
        })
        .collect();

    let mut memo = CopyMemo::new();
    let copies: Vec<Frame> = batch.iter().map(|frame| frame.deep_copy(&mut memo)).collect();
    assert_eq!(memo.len(), 1);

    for (original, copy) in batch.iter().zip(&copies) {
        assert!(!original.is_same(copy));
        assert!(original.equals(copy, &EqualityOptions::default()));
    }
}

#[test]
/// Payload bytes round-trip through a plain buffer.
fn test_payload_round_trip() {
    let frame = logged_frame(0.0);
    let wire: Vec<u8> = Vec::from(&frame);
    let back = Frame::builder().id(frame.id).channel("can0").data(wire).build().unwrap();
    assert!(frame.equals(&back, &EqualityOptions::default()));
}

#[test]
/// Summary line of a logged frame.
fn test_summary_line() {
    let line = logged_frame(0.5).to_string();
    assert!(line.starts_with("Timestamp:        0.500000    ID: 0cf00400    X Rx"));
    assert!(line.contains("DL:  8    f0 ff 7d 7d 00 00 f0 ff"));
    assert!(line.ends_with("Channel: can0"));
}
