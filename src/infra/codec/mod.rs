//! Conversions between caller data and frame buffers.
pub mod payload;
