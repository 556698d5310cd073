//! `canlin-frames` library: bus-level frame value types for CAN / CAN FD and
//! LIN in a `no_std` environment. The crate exposes the frame types, their
//! validation rules and value-equality semantics, and the driver-compatible
//! LIN timing record. Bus I/O is left to the caller.
#![no_std]
extern crate alloc;
//==================================================================================
/// Channel handles and deep-copy bookkeeping shared by every frame kind.
pub mod core;
/// Conversion, validation, and positional-access errors.
pub mod error;
/// Payload conversion from caller-supplied sequences.
pub mod infra;
/// CAN and LIN frame types.
pub mod protocol;
//==================================================================================
pub use crate::core::{Channel, CopyMemo};
pub use crate::error::{ConversionError, FieldError, FrameError, TimingInfoError, ValidationError};
pub use crate::protocol::can::{equality::EqualityOptions, frame::Frame, frame::FrameBuilder};
pub use crate::protocol::lin::{
    flags::MessageFlags, message::CompactFrame, timing_info::TimingInfo,
};
