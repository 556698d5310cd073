//! Value equality of CAN frames.
//!
//! Frames compare by identity by default. [`Frame::equals`] is the opt-in
//! structural comparison, with a timestamp tolerance and optional channel
//! and direction exclusions configured through [`EqualityOptions`].
use crate::protocol::can::frame::Frame;
use crate::protocol::can::DEFAULT_TIMESTAMP_DELTA;

//==================================================================================EQUALITY_OPTIONS
#[derive(Debug, Clone, Copy, PartialEq)]
/// What [`Frame::equals`] takes into account.
pub struct EqualityOptions {
    /// Largest timestamp difference (seconds) still considered equal,
    /// `None` to ignore timestamps.
    pub timestamp_delta: Option<f64>,
    /// Compare the channels.
    pub check_channel: bool,
    /// Compare the directions (Rx/Tx).
    pub check_direction: bool,
}

impl Default for EqualityOptions {
    fn default() -> Self {
        Self {
            timestamp_delta: Some(DEFAULT_TIMESTAMP_DELTA),
            check_channel: true,
            check_direction: true,
        }
    }
}

impl EqualityOptions {
    /// Replace the timestamp tolerance.
    pub fn with_timestamp_delta(mut self, delta: f64) -> Self {
        self.timestamp_delta = Some(delta);
        self
    }

    /// Do not compare timestamps at all.
    pub fn ignore_timestamp(mut self) -> Self {
        self.timestamp_delta = None;
        self
    }

    /// Do not compare channels.
    pub fn ignore_channel(mut self) -> Self {
        self.check_channel = false;
        self
    }

    /// Do not compare directions.
    pub fn ignore_direction(mut self) -> Self {
        self.check_direction = false;
        self
    }
}

//==================================================================================EQUALS
impl Frame {
    /// Compare this frame with `other` by value.
    ///
    /// Identity short-circuits to `true`. Otherwise the identifier, its space,
    /// DLC, payload, remote/error/FD flags, bitrate switch, and error state
    /// indicator must match exactly; channel, direction, and timestamp are
    /// compared as configured by `options`.
    pub fn equals(&self, other: &Frame, options: &EqualityOptions) -> bool {
        if self.is_same(other) {
            return true;
        }

        let timestamps_match = match options.timestamp_delta {
            None => true,
            Some(delta) => abs_diff(self.timestamp, other.timestamp) <= delta,
        };

        timestamps_match
            && (!options.check_direction || self.is_rx == other.is_rx)
            && self.id == other.id
            && self.is_extended_id == other.is_extended_id
            && self.dlc == other.dlc
            && self.data == other.data
            && self.is_remote_frame == other.is_remote_frame
            && self.is_error_frame == other.is_error_frame
            && (!options.check_channel || self.channel == other.channel)
            && self.is_fd == other.is_fd
            && self.bitrate_switch == other.bitrate_switch
            && self.error_state_indicator == other.error_state_indicator
    }
}

// NaN propagates, so a NaN timestamp never matches.
fn abs_diff(a: f64, b: f64) -> f64 {
    if a > b {
        a - b
    } else {
        b - a
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
