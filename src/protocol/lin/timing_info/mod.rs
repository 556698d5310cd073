//! Physical-layer timing of a received LIN frame, as reported by the
//! interface driver.
//!
//! The record mirrors the driver's native C structure field for field,
//! including the unused 16-bit slot after `id_par`, so drivers can fill it in
//! place. Layout and absence of implicit padding are checked at compile time.
//!
//! Timing precision can be coarser than one microsecond: at low bitrates the
//! lowest bits may always read zero. Ranges below come from the LIN
//! specification; interfaces accept frames slightly out of bounds.
use crate::error::TimingInfoError;
use core::hash::{Hash, Hasher};
use core::mem::{offset_of, size_of};
use zerocopy::{FromBytes, FromZeros, Immutable, IntoBytes, KnownLayout};

/// Size of the native record in bytes.
pub const TIMING_INFO_SIZE: usize = 68;

//==================================================================================TIMING_INFO
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Driver timing telemetry of one LIN frame. Read-only for application code.
///
/// Equality and hashing skip the unused 16-bit slot, whatever the driver
/// left in it.
pub struct TimingInfo {
    timestamp: u32,
    synch_break_length: u32,
    frame_length: u32,
    bitrate: u32,
    check_sum: u8,
    id_par: u8,
    // Unused by the driver, keeps `synch_edge_time` at offset 20.
    #[allow(dead_code)]
    alignment: u16,
    synch_edge_time: [u32; 4],
    byte_time: [u32; 8],
}

const _: () = {
    assert!(size_of::<TimingInfo>() == TIMING_INFO_SIZE);
    assert!(offset_of!(TimingInfo, timestamp) == 0);
    assert!(offset_of!(TimingInfo, synch_break_length) == 4);
    assert!(offset_of!(TimingInfo, frame_length) == 8);
    assert!(offset_of!(TimingInfo, bitrate) == 12);
    assert!(offset_of!(TimingInfo, check_sum) == 16);
    assert!(offset_of!(TimingInfo, id_par) == 17);
    assert!(offset_of!(TimingInfo, alignment) == 18);
    assert!(offset_of!(TimingInfo, synch_edge_time) == 20);
    assert!(offset_of!(TimingInfo, byte_time) == 36);
};

impl PartialEq for TimingInfo {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp
            && self.synch_break_length == other.synch_break_length
            && self.frame_length == other.frame_length
            && self.bitrate == other.bitrate
            && self.check_sum == other.check_sum
            && self.id_par == other.id_par
            && self.synch_edge_time == other.synch_edge_time
            && self.byte_time == other.byte_time
    }
}

impl Eq for TimingInfo {}

impl Hash for TimingInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.timestamp.hash(state);
        self.synch_break_length.hash(state);
        self.frame_length.hash(state);
        self.bitrate.hash(state);
        self.check_sum.hash(state);
        self.id_par.hash(state);
        self.synch_edge_time.hash(state);
        self.byte_time.hash(state);
    }
}

impl TimingInfo {
    /// All-zero record, to be handed to a driver as an output buffer.
    pub fn zeroed() -> Self {
        Self::new_zeroed()
    }

    /// Read a record from a native-endian driver buffer.
    pub fn from_driver_bytes(bytes: &[u8]) -> Result<Self, TimingInfoError> {
        Self::read_from_bytes(bytes).map_err(|_| TimingInfoError::Size {
            expected: TIMING_INFO_SIZE,
            found: bytes.len(),
        })
    }

    /// The record exactly as the driver lays it out.
    pub fn as_driver_bytes(&self) -> &[u8] {
        self.as_bytes()
    }

    /// Mutable view for the driver boundary to fill in place.
    pub fn as_driver_bytes_mut(&mut self) -> &mut [u8] {
        self.as_mut_bytes()
    }

    /// Milliseconds, falling edge of the synch break, on the CAN timer.
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// Synch break length in microseconds. [650 .. 13000], [400 .. 8000]
    /// for a wakeup signal.
    pub fn synch_break_length(&self) -> u32 {
        self.synch_break_length
    }

    /// Microseconds from the synch break to the end of the checksum.
    /// [2200 .. 173600]
    pub fn frame_length(&self) -> u32 {
        self.frame_length
    }

    /// Bits per second. [1000 .. 20000]
    pub fn bitrate(&self) -> u32 {
        self.bitrate
    }

    /// Checksum as read from the bus. May disagree with the payload when
    /// the frame carries `CSUM_ERROR`.
    pub fn check_sum(&self) -> u8 {
        self.check_sum
    }

    /// Identifier with parity bits as read from the bus. May be invalid
    /// when the frame carries `PARITY_ERROR`.
    pub fn id_par(&self) -> u8 {
        self.id_par
    }

    /// Falling edges of the synch byte, microseconds after the start bit.
    /// Not reported by every device.
    pub fn synch_edge_time(&self) -> &[u32; 4] {
        &self.synch_edge_time
    }

    /// Start time of each data byte in microseconds. Not reported by every
    /// device.
    pub fn byte_time(&self) -> &[u32; 8] {
        &self.byte_time
    }
}
