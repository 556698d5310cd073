//! Bus frame value types: CAN / CAN FD frames and LIN frames with their
//! driver timing telemetry.
pub mod can;
pub mod lin;
