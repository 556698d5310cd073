//! Well-formedness rules of a CAN frame.
//!
//! Rules are evaluated in a fixed order and the first violation wins:
//! 1. timestamp: not negative, not infinite, not NaN
//! 2. frame kind: remote excludes error, remote excludes CAN FD
//! 3. identifier: below 2^29 (extended) or 2^11 (standard)
//! 4. DLC: at most 64 (CAN FD) or 8 (classic)
//! 5. payload: empty on remote frames, `dlc` bytes long otherwise
//! 6. CAN FD only flags: bitrate switch, error state indicator
//!
//! Negative identifiers and DLCs are ruled out by the unsigned field types.
use crate::error::ValidationError;
use crate::protocol::can::frame::Frame;
use crate::protocol::can::{CANFD_MAX_DLC, CAN_MAX_DLC, EXTENDED_ID_LIMIT, STANDARD_ID_LIMIT};

/// Check `frame` against every rule, returning the first violation.
pub fn validate(frame: &Frame) -> Result<(), ValidationError> {
    let result = check_timestamp(frame.timestamp)
        .and_then(|()| check_kind(frame))
        .and_then(|()| check_id(frame))
        .and_then(|()| check_dlc(frame))
        .and_then(|()| check_payload(frame))
        .and_then(|()| check_fd_flags(frame));

    #[cfg(feature = "defmt")]
    if let Err(ref err) = result {
        defmt::debug!("frame {=u32:#x} rejected: {}", frame.id, err);
    }

    result
}

fn check_timestamp(timestamp: f64) -> Result<(), ValidationError> {
    if timestamp < 0.0 {
        return Err(ValidationError::NegativeTimestamp { timestamp });
    }
    if timestamp.is_infinite() {
        return Err(ValidationError::InfiniteTimestamp);
    }
    if timestamp.is_nan() {
        return Err(ValidationError::NanTimestamp);
    }
    Ok(())
}

fn check_kind(frame: &Frame) -> Result<(), ValidationError> {
    if frame.is_remote_frame {
        if frame.is_error_frame {
            return Err(ValidationError::RemoteAndError);
        }
        if frame.is_fd {
            return Err(ValidationError::RemoteFd);
        }
    }
    Ok(())
}

fn check_id(frame: &Frame) -> Result<(), ValidationError> {
    match (frame.is_extended_id, frame.id) {
        (true, id) if id >= EXTENDED_ID_LIMIT => Err(ValidationError::ExtendedIdOutOfRange { id }),
        (false, id) if id >= STANDARD_ID_LIMIT => Err(ValidationError::StandardIdOutOfRange { id }),
        _ => Ok(()),
    }
}

fn check_dlc(frame: &Frame) -> Result<(), ValidationError> {
    let dlc = frame.dlc;
    if frame.is_fd {
        if dlc > CANFD_MAX_DLC {
            return Err(ValidationError::FdDlcTooLarge { dlc });
        }
    } else if dlc > CAN_MAX_DLC {
        return Err(ValidationError::ClassicDlcTooLarge { dlc });
    }
    Ok(())
}

fn check_payload(frame: &Frame) -> Result<(), ValidationError> {
    let len = frame.data.len();
    if frame.is_remote_frame {
        if len != 0 {
            return Err(ValidationError::RemoteWithData { len });
        }
    } else if frame.dlc != len {
        return Err(ValidationError::DlcMismatch { dlc: frame.dlc, len });
    }
    Ok(())
}

fn check_fd_flags(frame: &Frame) -> Result<(), ValidationError> {
    if !frame.is_fd {
        if frame.bitrate_switch {
            return Err(ValidationError::BitrateSwitchWithoutFd);
        }
        if frame.error_state_indicator {
            return Err(ValidationError::ErrorStateIndicatorWithoutFd);
        }
    }
    Ok(())
}
