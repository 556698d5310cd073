//! LIN frames: quantized payload lengths, protocol flags, and the timing
//! telemetry delivered by LIN interface drivers.
pub mod flags;
pub mod message;
pub mod timing_info;

/// Payload lengths a LIN frame may announce, in increasing order.
///
/// Up to eight bytes every length is exact; beyond that the length is
/// rounded up to the next step.
pub const LIN_DLC_LADDER: [usize; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 12, 16, 20, 24, 32, 48, 64];

/// End of the exact part of the ladder, and largest explicit DLC that pads the payload.
pub const LIN_EXACT_DLC_MAX: usize = 8;

/// Largest length of the ladder.
pub const LIN_MAX_DLC: usize = 64;
