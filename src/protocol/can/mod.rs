//! CAN 2.0 and CAN FD frames: value type, construction, validation,
//! value equality, and textual rendering.
//!
//! ## Limits
//!
//! Identifier spaces and payload limits checked by the validator.

pub mod equality;
pub mod format;
pub mod frame;
pub mod validator;

/// Exclusive upper bound of 11-bit (standard) identifiers.
pub const STANDARD_ID_LIMIT: u32 = 0x800;

/// Exclusive upper bound of 29-bit (extended) identifiers.
pub const EXTENDED_ID_LIMIT: u32 = 0x2000_0000;

/// Largest payload of a classic CAN frame (bytes).
pub const CAN_MAX_DLC: usize = 8;

/// Largest payload of a CAN FD frame (bytes).
pub const CANFD_MAX_DLC: usize = 64;

/// Default tolerance of [`Frame::equals`](frame::Frame::equals) on timestamps (seconds).
///
/// Covers the rounding picked up by timestamps that went through a log format.
pub const DEFAULT_TIMESTAMP_DELTA: f64 = 1.0e-6;
