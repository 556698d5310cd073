//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (payload conversion, frame
//! validation, positional access on LIN frames).
use thiserror_no_std::Error;

//==================================================================================CONVERSION_ERROR
#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// A payload element could not be represented as a byte.
#[error("Couldn't create frame payload from {value} ({type_name}) at index {index}: not a byte")]
pub struct ConversionError {
    /// Offending value, widened so every integer source type fits.
    pub value: i128,
    /// Rust type of the offending element.
    pub type_name: &'static str,
    /// Position of the element inside the supplied sequence.
    pub index: usize,
}

//==================================================================================VALIDATION_ERROR
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Rule violated by a CAN frame, reported in evaluation order.
pub enum ValidationError {
    /// Timestamps count seconds since an epoch and cannot go backwards past it.
    #[error("the timestamp may not be negative: {timestamp}")]
    NegativeTimestamp { timestamp: f64 },
    /// Timestamp is +inf or -inf.
    #[error("the timestamp may not be infinite")]
    InfiniteTimestamp,
    /// Timestamp is NaN.
    #[error("the timestamp may not be NaN")]
    NanTimestamp,
    /// Remote and error flags are both set.
    #[error("a frame cannot be a remote and an error frame at the same time")]
    RemoteAndError,
    /// CAN FD has no remote frames.
    #[error("CAN FD does not support remote frames")]
    RemoteFd,
    /// 29-bit identifier space exceeded.
    #[error("extended id out of range: {id:#x} must be less than 2^29")]
    ExtendedIdOutOfRange { id: u32 },
    /// 11-bit identifier space exceeded.
    #[error("standard id out of range: {id:#x} must be less than 2^11")]
    StandardIdOutOfRange { id: u32 },
    /// CAN FD payloads stop at 64 bytes.
    #[error("DLC was {dlc} but it should be <= 64 for CAN FD frames")]
    FdDlcTooLarge { dlc: usize },
    /// Classic CAN payloads stop at 8 bytes.
    #[error("DLC was {dlc} but it should be <= 8 for classic CAN frames")]
    ClassicDlcTooLarge { dlc: usize },
    /// A remote frame carries payload bytes.
    #[error("remote frames may not carry any data ({len} bytes found)")]
    RemoteWithData { len: usize },
    /// Data frame whose DLC disagrees with its payload.
    #[error("the DLC ({dlc}) and the length of the data ({len}) must match up for non remote frames")]
    DlcMismatch { dlc: usize, len: usize },
    /// Bitrate switch flag set on a classic frame.
    #[error("bitrate switch is only allowed for CAN FD frames")]
    BitrateSwitchWithoutFd,
    /// Error state indicator set on a classic frame.
    #[error("error state indicator is only allowed for CAN FD frames")]
    ErrorStateIndicatorWithoutFd,
}

//==================================================================================FRAME_ERROR
#[derive(Error, Debug, Clone, PartialEq)]
/// Errors returned by `FrameBuilder::build`.
pub enum FrameError {
    /// Payload could not be converted into bytes.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// Validation was requested and a rule failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

//==================================================================================FIELD_ERROR
#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Failures of positional access on a LIN frame.
pub enum FieldError {
    /// Index past the last declared field.
    #[error("field index {index} out of range (LIN frames have {count} fields)")]
    IndexOutOfRange { index: usize, count: usize },
    /// Value kind does not match the field at this index.
    #[error("field {index} is `{expected}`, got a value for `{found}`")]
    KindMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

//==================================================================================TIMING_INFO_ERROR
#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Driver buffer that cannot hold a LIN timing record.
pub enum TimingInfoError {
    /// Buffer length differs from the native record size.
    #[error("timing record must be {expected} bytes, got {found}")]
    Size { expected: usize, found: usize },
}
