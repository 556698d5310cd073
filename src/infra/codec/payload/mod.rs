//! Conversion of caller-supplied sequences into owned frame payloads.
//!
//! Both frame kinds accept any ordered sequence of byte-convertible values:
//! byte slices and vectors, arrays of integers of any width, iterators over
//! string bytes, etc. Every element is range-checked; the first element that
//! does not fit in a byte is reported with its value, type, and position.
use crate::error::ConversionError;
use alloc::vec::Vec;

//==================================================================================PAYLOAD_BYTE
/// Scalar that may be narrowed into a single payload byte.
pub trait PayloadByte: Copy {
    /// The byte value, or `None` when outside `0..=255`.
    fn to_byte(self) -> Option<u8>;
    /// The value widened losslessly, used to report conversion failures.
    fn widen(self) -> i128;
}

macro_rules! impl_payload_byte {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PayloadByte for $ty {
                #[inline]
                fn to_byte(self) -> Option<u8> {
                    u8::try_from(self).ok()
                }

                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_payload_byte!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<T: PayloadByte> PayloadByte for &T {
    #[inline]
    fn to_byte(self) -> Option<u8> {
        (*self).to_byte()
    }

    #[inline]
    fn widen(self) -> i128 {
        (*self).widen()
    }
}

//==================================================================================INTO_PAYLOAD
/// Anything that can become an owned payload buffer.
pub trait IntoPayload {
    /// Copy the sequence into a fresh buffer, rejecting out-of-range elements.
    fn into_payload(self) -> Result<Vec<u8>, ConversionError>;
}

impl<I> IntoPayload for I
where
    I: IntoIterator,
    I::Item: PayloadByte,
{
    fn into_payload(self) -> Result<Vec<u8>, ConversionError> {
        self.into_iter()
            .enumerate()
            .map(|(index, element)| {
                element.to_byte().ok_or_else(|| ConversionError {
                    value: element.widen(),
                    type_name: core::any::type_name::<I::Item>(),
                    index,
                })
            })
            .collect()
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
