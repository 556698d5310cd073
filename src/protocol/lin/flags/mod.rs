//! Flags reported by LIN drivers alongside each frame.
use bitflags::bitflags;

bitflags! {
    /// Bit values match the Kvaser LIN driver message flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MessageFlags: u32 {
        /// Frame was transmitted by this interface.
        const TX = 1;
        /// Frame was received by this interface.
        const RX = 2;
        /// Wake up frame.
        const WAKEUP_FRAME = 4;
        /// Header only, no response data.
        const NODATA = 8;
        /// Checksum did not match the payload.
        const CSUM_ERROR = 16;
        /// Identifier parity error.
        const PARITY_ERROR = 32;
        /// Synch field error.
        const SYNCH_ERROR = 64;
        /// Bit error while transmitting.
        const BIT_ERROR = 128;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MessageFlags {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "MessageFlags({=u32:#x})", self.bits())
    }
}
