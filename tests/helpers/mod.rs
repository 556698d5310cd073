/// Frame fixtures shared by the integration tests.
use canlin_frames::{Frame, TimingInfo};

#[allow(dead_code)]
/// Classic data frame received on `can0`, as a bus monitor would log it.
pub fn logged_frame(timestamp: f64) -> Frame {
    Frame::builder()
        .timestamp(timestamp)
        .id(0x0CF0_0400)
        .channel("can0")
        .data([0xF0, 0xFF, 0x7D, 0x7D, 0x00, 0x00, 0xF0, 0xFF])
        .check(true)
        .build()
        .expect("logged frame must be valid")
}

#[allow(dead_code)]
/// Native-endian timing record as a LIN driver fills it.
pub fn driver_timing(bitrate: u32, check_sum: u8) -> TimingInfo {
    let mut bytes = Vec::new();
    for word in [42u32, 750, 6_000, bitrate] {
        bytes.extend_from_slice(&word.to_ne_bytes());
    }
    bytes.extend_from_slice(&[check_sum, 0x64, 0, 0]);
    for word in 0u32..12 {
        bytes.extend_from_slice(&(word * 100).to_ne_bytes());
    }
    TimingInfo::from_driver_bytes(&bytes).expect("driver buffer has the native size")
}
