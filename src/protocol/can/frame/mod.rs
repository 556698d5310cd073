//! In-memory representation of a CAN 2.0 / CAN FD frame.
//!
//! Construction never enforces cross-field rules: relaxed frames are useful
//! when converting between log formats or fuzzing a bus. Call
//! [`Frame::validate`] or build with [`FrameBuilder::check`] when correctness
//! matters.
//!
//! Frames have no `PartialEq`. Two frames are "the same" only by identity
//! ([`Frame::is_same`]); value comparison is the explicit
//! [`Frame::equals`].
use crate::core::{Channel, CopyMemo};
use crate::error::{ConversionError, FrameError, ValidationError};
use crate::infra::codec::payload::IntoPayload;
use crate::protocol::can::{validator, CANFD_MAX_DLC, CAN_MAX_DLC};
use alloc::vec::Vec;
use embedded_can::{ExtendedId, Frame as HalFrame, Id, StandardId};

//==================================================================================FRAME
#[derive(Clone)]
/// CAN or CAN FD frame as seen on, or destined for, a bus.
pub struct Frame {
    /// Reception or creation time in seconds.
    pub timestamp: f64,
    /// Arbitration identifier, 11 or 29 bits depending on `is_extended_id`.
    pub id: u32,
    /// Selects the 29-bit identifier space.
    pub is_extended_id: bool,
    /// Remote transmission request.
    pub is_remote_frame: bool,
    /// Error frame reported by the controller.
    pub is_error_frame: bool,
    /// Interface the frame belongs to, if known.
    pub channel: Option<Channel>,
    /// Data length code. Equals the payload length on well-formed data frames.
    pub dlc: usize,
    /// Payload bytes. Always empty on remote frames built through the builder.
    pub data: Vec<u8>,
    /// Flexible data-rate framing.
    pub is_fd: bool,
    /// `true` when received, `false` when meant for transmission.
    pub is_rx: bool,
    /// CAN FD: data phase sent at the secondary bitrate.
    pub bitrate_switch: bool,
    /// CAN FD: transmitter was error passive.
    pub error_state_indicator: bool,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            timestamp: 0.0,
            id: 0,
            is_extended_id: true,
            is_remote_frame: false,
            is_error_frame: false,
            channel: None,
            dlc: 0,
            data: Vec::new(),
            is_fd: false,
            is_rx: true,
            bitrate_switch: false,
            error_state_indicator: false,
        }
    }
}

impl Frame {
    /// Start building a frame from the defaults
    /// (extended id, received, zero timestamp, empty payload).
    pub fn builder() -> FrameBuilder {
        FrameBuilder::new()
    }

    /// Check every well-formedness rule, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validator::validate(self)
    }

    /// Identity comparison: `true` only when both references point at the
    /// same frame.
    #[inline]
    pub fn is_same(&self, other: &Frame) -> bool {
        core::ptr::eq(self, other)
    }

    /// Payload as a read-only byte slice, ready for transmission encoding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Frame length as announced by the DLC (also meaningful for remote frames).
    #[inline]
    pub fn len(&self) -> usize {
        self.dlc
    }

    /// `true` when the DLC announces no payload.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dlc == 0
    }

    /// Identifier as an `embedded-can` id, `None` when it does not fit the
    /// selected identifier space.
    pub fn arbitration_id(&self) -> Option<Id> {
        if self.is_extended_id {
            ExtendedId::new(self.id).map(Id::Extended)
        } else {
            u16::try_from(self.id)
                .ok()
                .and_then(StandardId::new)
                .map(Id::Standard)
        }
    }

    /// Recursive copy. Shared channel tokens already duplicated through
    /// `memo` are reused instead of duplicated again.
    pub fn deep_copy(&self, memo: &mut CopyMemo) -> Frame {
        let mut copy = self.clone();
        copy.channel = self.channel.as_ref().map(|channel| channel.deep_copy(memo));
        copy
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<&Frame> for Vec<u8> {
    fn from(frame: &Frame) -> Self {
        frame.data.clone()
    }
}

//==================================================================================EMBEDDED_CAN
impl HalFrame for Frame {
    /// Data frame; payloads longer than eight bytes produce a CAN FD frame.
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > CANFD_MAX_DLC {
            return None;
        }
        let (id, is_extended_id) = split_id(id.into());
        Some(Frame {
            id,
            is_extended_id,
            dlc: data.len(),
            data: data.to_vec(),
            is_fd: data.len() > CAN_MAX_DLC,
            ..Frame::default()
        })
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc > CAN_MAX_DLC {
            return None;
        }
        let (id, is_extended_id) = split_id(id.into());
        Some(Frame {
            id,
            is_extended_id,
            is_remote_frame: true,
            dlc,
            ..Frame::default()
        })
    }

    fn is_extended(&self) -> bool {
        self.is_extended_id
    }

    fn is_remote_frame(&self) -> bool {
        self.is_remote_frame
    }

    /// Relaxed frames may hold an out-of-range id: the extra bits are masked.
    fn id(&self) -> Id {
        if self.is_extended_id {
            let raw = self.id & ExtendedId::MAX.as_raw();
            Id::Extended(ExtendedId::new(raw).unwrap_or(ExtendedId::ZERO))
        } else {
            let raw = (self.id & u32::from(StandardId::MAX.as_raw())) as u16;
            Id::Standard(StandardId::new(raw).unwrap_or(StandardId::ZERO))
        }
    }

    fn dlc(&self) -> usize {
        self.dlc
    }

    fn data(&self) -> &[u8] {
        &self.data
    }
}

fn split_id(id: Id) -> (u32, bool) {
    match id {
        Id::Standard(id) => (u32::from(id.as_raw()), false),
        Id::Extended(id) => (id.as_raw(), true),
    }
}

//==================================================================================FRAME_BUILDER
#[derive(Debug)]
/// Fluent builder with every field optional.
///
/// Payload conversion errors are kept until [`FrameBuilder::build`], which
/// reports them together with validation failures.
pub struct FrameBuilder {
    frame: Frame,
    data: Option<Result<Vec<u8>, ConversionError>>,
    dlc: Option<usize>,
    check: bool,
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuilder {
    /// Builder seeded with [`Frame::default`].
    pub fn new() -> Self {
        Self {
            frame: Frame::default(),
            data: None,
            dlc: None,
            check: false,
        }
    }

    /// Timestamp in seconds.
    pub fn timestamp(mut self, timestamp: f64) -> Self {
        self.frame.timestamp = timestamp;
        self
    }

    /// Arbitration identifier.
    pub fn id(mut self, id: u32) -> Self {
        self.frame.id = id;
        self
    }

    /// 29-bit (`true`, default) or 11-bit identifier space.
    pub fn extended(mut self, is_extended_id: bool) -> Self {
        self.frame.is_extended_id = is_extended_id;
        self
    }

    /// Remote frame. Forces an empty payload.
    pub fn remote(mut self, is_remote_frame: bool) -> Self {
        self.frame.is_remote_frame = is_remote_frame;
        self
    }

    /// Error frame.
    pub fn error(mut self, is_error_frame: bool) -> Self {
        self.frame.is_error_frame = is_error_frame;
        self
    }

    /// Interface the frame belongs to.
    pub fn channel(mut self, channel: impl Into<Channel>) -> Self {
        self.frame.channel = Some(channel.into());
        self
    }

    /// Explicit DLC. Defaults to the payload length.
    pub fn dlc(mut self, dlc: usize) -> Self {
        self.dlc = Some(dlc);
        self
    }

    /// Payload from any sequence of byte-convertible values.
    pub fn data(mut self, data: impl IntoPayload) -> Self {
        self.data = Some(data.into_payload());
        self
    }

    /// CAN FD framing.
    pub fn fd(mut self, is_fd: bool) -> Self {
        self.frame.is_fd = is_fd;
        self
    }

    /// Direction: `true` (default) for received frames.
    pub fn rx(mut self, is_rx: bool) -> Self {
        self.frame.is_rx = is_rx;
        self
    }

    /// CAN FD bitrate switch flag.
    pub fn bitrate_switch(mut self, bitrate_switch: bool) -> Self {
        self.frame.bitrate_switch = bitrate_switch;
        self
    }

    /// CAN FD error state indicator flag.
    pub fn error_state_indicator(mut self, error_state_indicator: bool) -> Self {
        self.frame.error_state_indicator = error_state_indicator;
        self
    }

    /// Validate the frame during [`build`](Self::build).
    pub fn check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Assemble the frame.
    ///
    /// Remote frames drop the supplied payload without converting it. Fails
    /// with [`FrameError::Conversion`] for an unconvertible payload, and with
    /// [`FrameError::Validation`] only when [`check`](Self::check) was set.
    pub fn build(self) -> Result<Frame, FrameError> {
        let mut frame = self.frame;

        frame.data = match self.data {
            Some(data) if !frame.is_remote_frame => data?,
            _ => Vec::new(),
        };
        frame.dlc = self.dlc.unwrap_or(frame.data.len());

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "built frame id={=u32:#x} dlc={=usize} check={=bool}",
            frame.id,
            frame.dlc,
            self.check
        );

        if self.check {
            frame.validate()?;
        }
        Ok(frame)
    }
}
