//! Text rendering of CAN frames.
//!
//! * `Display`: fixed-column summary line, handy for bus monitors.
//! * `Debug`: builder expression that rebuilds the frame.
use crate::core::Channel;
use crate::protocol::can::frame::Frame;
use alloc::{format, string::String, vec::Vec};
use core::fmt;

/// Column separator of the summary line.
const FIELD_SEPARATOR: &str = "    ";
/// Width of the identifier column.
const ID_COLUMN_WIDTH: usize = 12;
/// Width of the hex payload column (eight bytes).
const DATA_COLUMN_WIDTH: usize = 24;

//==================================================================================DISPLAY
impl fmt::Display for Frame {
    /// Example:
    /// `Timestamp:        0.000000    ID: 00000123    X Rx                DL:  3    01 02 03`
    ///
    /// Width, fill, and alignment apply to the whole line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<String> = Vec::with_capacity(7);

        fields.push(format!("Timestamp: {:>15.6}", self.timestamp));

        let id = if self.is_extended_id {
            format!("ID: {:08x}", self.id)
        } else {
            format!("ID: {:04x}", self.id)
        };
        fields.push(format!("{id:>ID_COLUMN_WIDTH$}"));

        fields.push(flag_summary(self));
        fields.push(format!("DL: {:2}", self.dlc));

        let shown = self.dlc.min(self.data.len());
        let hex = self.data[..shown]
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect::<Vec<_>>()
            .join(" ");
        fields.push(format!("{hex:<DATA_COLUMN_WIDTH$}"));

        if !self.data.is_empty() && self.data.iter().all(u8::is_ascii_alphanumeric) {
            fields.push(format!("'{}'", String::from_utf8_lossy(&self.data)));
        }

        if let Some(label) = self.channel.as_ref().and_then(Channel::label) {
            fields.push(format!("Channel: {label}"));
        }

        f.pad(fields.join(FIELD_SEPARATOR).trim())
    }
}

/// One token per flag, blank when unset, so columns stay aligned.
fn flag_summary(frame: &Frame) -> String {
    let tokens = [
        if frame.is_extended_id { "X" } else { "S" },
        if frame.is_rx { "Rx" } else { "Tx" },
        if frame.is_error_frame { "E" } else { " " },
        if frame.is_remote_frame { "R" } else { " " },
        if frame.is_fd { "F" } else { " " },
        if frame.bitrate_switch { "BS" } else { "  " },
        if frame.error_state_indicator { "EI" } else { "  " },
    ];
    tokens.join(" ")
}

//==================================================================================DEBUG
impl fmt::Debug for Frame {
    /// Flags left at their defaults (received, not remote, not error,
    /// classic) are omitted; the id is always hexadecimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame::builder().timestamp({:?}).id({:#x}).extended({})",
            self.timestamp, self.id, self.is_extended_id
        )?;

        if !self.is_rx {
            f.write_str(".rx(false)")?;
        }
        if self.is_remote_frame {
            f.write_str(".remote(true)")?;
        }
        if self.is_error_frame {
            f.write_str(".error(true)")?;
        }
        if let Some(channel) = &self.channel {
            f.write_str(".channel(")?;
            write_channel_expr(f, channel, false)?;
            f.write_str(")")?;
        }

        let data = self
            .data
            .iter()
            .map(|byte| format!("{byte:#04x}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, ".dlc({}).data([{data}])", self.dlc)?;

        if self.is_fd {
            write!(
                f,
                ".fd(true).bitrate_switch({}).error_state_indicator({})",
                self.bitrate_switch, self.error_state_indicator
            )?;
        }
        Ok(())
    }
}

/// Channel as an argument of `FrameBuilder::channel`. Indexes and names use
/// their `Into<Channel>` shorthand at the top level only.
fn write_channel_expr(f: &mut fmt::Formatter<'_>, channel: &Channel, nested: bool) -> fmt::Result {
    match channel {
        Channel::Index(index) if nested => write!(f, "Channel::Index({index})"),
        Channel::Index(index) if i32::try_from(*index).is_ok() => write!(f, "{index}"),
        Channel::Index(index) => write!(f, "{index}_i64"),
        Channel::Name(name) if nested => write!(f, "Channel::Name({name:?}.into())"),
        Channel::Name(name) => write!(f, "{name:?}"),
        Channel::Device(bytes) => {
            let bytes = bytes
                .iter()
                .map(|byte| format!("{byte:#04x}"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "Channel::Device(vec![{bytes}])")
        }
        Channel::Shared(inner) => {
            f.write_str("Channel::shared(")?;
            write_channel_expr(f, inner, true)?;
            f.write_str(")")
        }
    }
}
