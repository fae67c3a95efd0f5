//! Provides [`UuidWireError`] type.

use thiserror::Error;

/// Error that can occur when decoding a wire representation.
///
/// Decoding is the only fallible operation in this crate. Encoding a
/// value of type [`Uuid`] always succeeds.
///
/// [`Uuid`]: uuid::Uuid
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UuidWireError {
    /// The wire representation was not exactly [`WIRE_UUID_LEN`]
    /// bytes.
    ///
    /// Carries the length of the rejected input. The input is never
    /// truncated or padded to fit. Recovery, such as substituting
    /// [`default_value`], is a policy decision that is left to the
    /// caller.
    ///
    /// [`WIRE_UUID_LEN`]: crate::wire::WIRE_UUID_LEN
    /// [`default_value`]: crate::wire::default_value
    #[error("invalid wire representation length: expected 16 bytes, found {0}")]
    InvalidLength(usize),
}
