//! UUID wire codec.
//!
//! The wire representation of a [`Uuid`] is exactly [`WIRE_UUID_LEN`]
//! bytes, laid out in the conventional UUID field order.
//!
//! | Field                 | Length (bytes) |
//! |-----------------------|----------------|
//! | `time_low`            | 4              |
//! | `time_mid`            | 2              |
//! | `time_hi_and_version` | 2              |
//! | `clock_seq`           | 2              |
//! | `node`                | 6              |
//!
//! Each field is in big-endian byte order and fields are concatenated
//! without separators. This is the same byte order that the textual
//! form of a UUID uses, so `550e8400-e29b-41d4-a716-446655440000`
//! serializes to the bytes `55 0e 84 00 e2 9b 41 d4 a7 16 44 66 55 44
//! 00 00`.
//!
//! The codec does not interpret the version or variant bits. All
//! 2^128 byte patterns, including all-zero and all-`0xFF`, are valid
//! wire representations.

use bytes::Bytes;

use uuid::Uuid;

use std::convert::TryFrom;

use crate::error::UuidWireError;

/// Length in bytes of the wire representation of a UUID.
pub const WIRE_UUID_LEN: usize = 16;

/// Encode a UUID into its wire representation.
///
/// The returned value is a fresh copy of the UUID bytes, independent
/// of `value`, and is always exactly [`WIRE_UUID_LEN`] bytes.
pub fn encode(value: &Uuid) -> Bytes {
    Bytes::copy_from_slice(value.as_bytes())
}

/// Decode a wire representation into a UUID.
///
/// Returns an error of [`UuidWireError::InvalidLength`] when `bytes`
/// is not exactly [`WIRE_UUID_LEN`] bytes. Byte content is otherwise
/// unconstrained.
pub fn decode(bytes: &[u8]) -> Result<Uuid, UuidWireError> {
    <[u8; WIRE_UUID_LEN]>::try_from(bytes)
        .map(Uuid::from_bytes)
        .map_err(|_| UuidWireError::InvalidLength(bytes.len()))
}

/// Return the nil (all-zero) UUID.
///
/// In a schema driven serialization context, this is the implicit
/// value of a UUID field that is absent from the enclosing message.
pub fn default_value() -> Uuid {
    Uuid::nil()
}
