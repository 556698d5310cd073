//! LIN frame value type.
//!
//! Payload lengths are quantized: without an explicit DLC the length is
//! rounded up along [`LIN_DLC_LADDER`] and the payload zero-padded to match.
//! Fields are also reachable by position, in the order
//! `(id, data, dlc, flags, crc, info, timestamp)`.
use crate::error::{ConversionError, FieldError};
use crate::infra::codec::payload::IntoPayload;
use crate::protocol::lin::flags::MessageFlags;
use crate::protocol::lin::timing_info::TimingInfo;
use crate::protocol::lin::{LIN_DLC_LADDER, LIN_EXACT_DLC_MAX, LIN_MAX_DLC};
use alloc::vec::Vec;

/// Names of the positional fields, in order.
pub const FIELD_NAMES: [&str; 7] = ["id", "data", "dlc", "flags", "crc", "info", "timestamp"];

/// Smallest ladder length that holds `len` bytes; 64 past the last step.
pub fn quantize_dlc(len: usize) -> usize {
    LIN_DLC_LADDER
        .iter()
        .copied()
        .find(|&step| step >= len)
        .unwrap_or(LIN_MAX_DLC)
}

//==================================================================================COMPACT_FRAME
#[derive(Debug, Clone)]
/// LIN frame with optional checksum, timestamp, and driver timing record.
///
/// Equality compares every field except `timestamp`.
pub struct CompactFrame {
    /// Frame identifier.
    pub id: u32,
    /// Payload, zero-padded to `dlc` on construction.
    pub data: Vec<u8>,
    /// Quantized data length code.
    pub dlc: usize,
    /// Driver flags.
    pub flags: MessageFlags,
    /// Checksum read from the bus.
    pub crc: Option<u32>,
    /// Driver timing telemetry.
    pub info: Option<TimingInfo>,
    /// Reception time in seconds.
    pub timestamp: Option<f64>,
}

impl PartialEq for CompactFrame {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.data == other.data
            && self.dlc == other.dlc
            && self.flags == other.flags
            && self.crc == other.crc
            && self.info == other.info
    }
}

impl Eq for CompactFrame {}

impl CompactFrame {
    /// Frame with a ladder-derived DLC and no optional fields.
    pub fn new(id: u32, data: impl IntoPayload) -> Result<Self, ConversionError> {
        Self::builder(id, data).build()
    }

    /// Start a builder for the optional fields.
    pub fn builder(id: u32, data: impl IntoPayload) -> CompactFrameBuilder {
        CompactFrameBuilder {
            id,
            data: data.into_payload(),
            dlc: None,
            flags: MessageFlags::empty(),
            crc: None,
            info: None,
            timestamp: None,
        }
    }

    /// Checksum did not match the payload.
    pub fn has_checksum_error(&self) -> bool {
        self.flags.contains(MessageFlags::CSUM_ERROR)
    }

    /// Identifier parity error.
    pub fn has_parity_error(&self) -> bool {
        self.flags.contains(MessageFlags::PARITY_ERROR)
    }

    /// Field at `index` in declared order.
    pub fn field(&self, index: usize) -> Option<FieldRef<'_>> {
        let field = match index {
            0 => FieldRef::Id(self.id),
            1 => FieldRef::Data(&self.data),
            2 => FieldRef::Dlc(self.dlc),
            3 => FieldRef::Flags(self.flags),
            4 => FieldRef::Crc(self.crc),
            5 => FieldRef::Info(self.info.as_ref()),
            6 => FieldRef::Timestamp(self.timestamp),
            _ => return None,
        };
        Some(field)
    }

    /// Replace the field at `index`. The value must be of that field's kind.
    ///
    /// No padding happens here: assigning a payload leaves `dlc` untouched.
    pub fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), FieldError> {
        let expected = *FIELD_NAMES.get(index).ok_or(FieldError::IndexOutOfRange {
            index,
            count: FIELD_NAMES.len(),
        })?;

        match (index, value) {
            (0, FieldValue::Id(id)) => self.id = id,
            (1, FieldValue::Data(data)) => self.data = data,
            (2, FieldValue::Dlc(dlc)) => self.dlc = dlc,
            (3, FieldValue::Flags(flags)) => self.flags = flags,
            (4, FieldValue::Crc(crc)) => self.crc = crc,
            (5, FieldValue::Info(info)) => self.info = info,
            (6, FieldValue::Timestamp(timestamp)) => self.timestamp = timestamp,
            (_, value) => {
                return Err(FieldError::KindMismatch {
                    index,
                    expected,
                    found: value.name(),
                })
            }
        }
        Ok(())
    }

    /// Iterate over the fields in declared order.
    pub fn fields(&self) -> Fields<'_> {
        Fields {
            frame: self,
            index: 0,
        }
    }

    /// Split into `(id, data, dlc, flags, crc, info, timestamp)`.
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        u32,
        Vec<u8>,
        usize,
        MessageFlags,
        Option<u32>,
        Option<TimingInfo>,
        Option<f64>,
    ) {
        (
            self.id,
            self.data,
            self.dlc,
            self.flags,
            self.crc,
            self.info,
            self.timestamp,
        )
    }
}

//==================================================================================BUILDER
#[derive(Debug)]
/// Optional fields of a [`CompactFrame`].
pub struct CompactFrameBuilder {
    id: u32,
    data: Result<Vec<u8>, ConversionError>,
    dlc: Option<usize>,
    flags: MessageFlags,
    crc: Option<u32>,
    info: Option<TimingInfo>,
    timestamp: Option<f64>,
}

impl CompactFrameBuilder {
    /// Explicit DLC. At most eight pads the payload to that length; larger
    /// values leave the payload untouched.
    pub fn dlc(mut self, dlc: usize) -> Self {
        self.dlc = Some(dlc);
        self
    }

    /// Driver flags.
    pub fn flags(mut self, flags: MessageFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Checksum read from the bus.
    pub fn crc(mut self, crc: u32) -> Self {
        self.crc = Some(crc);
        self
    }

    /// Attach the driver timing record.
    pub fn info(mut self, info: TimingInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Reception time in seconds.
    pub fn timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Assemble the frame, padding the payload as the DLC requires.
    pub fn build(self) -> Result<CompactFrame, ConversionError> {
        let mut data = self.data?;

        let dlc = self.dlc.unwrap_or_else(|| quantize_dlc(data.len()));
        // Explicit DLCs above 8 keep the payload as supplied.
        if (self.dlc.is_none() || dlc <= LIN_EXACT_DLC_MAX) && dlc > data.len() {
            #[cfg(feature = "defmt")]
            defmt::trace!("padding LIN payload {=usize} -> {=usize}", data.len(), dlc);
            data.resize(dlc, 0);
        }

        Ok(CompactFrame {
            id: self.id,
            data,
            dlc,
            flags: self.flags,
            crc: self.crc,
            info: self.info,
            timestamp: self.timestamp,
        })
    }
}

//==================================================================================POSITIONAL
#[derive(Debug, Clone, Copy, PartialEq)]
/// Borrowed view of one positional field.
pub enum FieldRef<'a> {
    Id(u32),
    Data(&'a [u8]),
    Dlc(usize),
    Flags(MessageFlags),
    Crc(Option<u32>),
    Info(Option<&'a TimingInfo>),
    Timestamp(Option<f64>),
}

#[derive(Debug, Clone, PartialEq)]
/// Owned value for [`CompactFrame::set_field`].
pub enum FieldValue {
    Id(u32),
    Data(Vec<u8>),
    Dlc(usize),
    Flags(MessageFlags),
    Crc(Option<u32>),
    Info(Option<TimingInfo>),
    Timestamp(Option<f64>),
}

impl FieldValue {
    /// Name of the field this value belongs to.
    pub fn name(&self) -> &'static str {
        let index = match self {
            FieldValue::Id(_) => 0,
            FieldValue::Data(_) => 1,
            FieldValue::Dlc(_) => 2,
            FieldValue::Flags(_) => 3,
            FieldValue::Crc(_) => 4,
            FieldValue::Info(_) => 5,
            FieldValue::Timestamp(_) => 6,
        };
        FIELD_NAMES[index]
    }
}

/// Iterator over the fields of a [`CompactFrame`].
pub struct Fields<'a> {
    frame: &'a CompactFrame,
    index: usize,
}

impl<'a> Iterator for Fields<'a> {
    type Item = FieldRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frame;
        let field = frame.field(self.index)?;
        self.index += 1;
        Some(field)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = FIELD_NAMES.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fields<'_> {}

impl<'a> IntoIterator for &'a CompactFrame {
    type Item = FieldRef<'a>;
    type IntoIter = Fields<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields()
    }
}
