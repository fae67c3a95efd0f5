//! Version 1 wire field types.

use bytes::Bytes;

use std::convert::TryFrom;

use crate::error::UuidWireError;
use crate::wire;

/// UUID wire field message.
///
/// Hand maintained mirror of the `uuid_wire.field.v1.Uuid` Protobuf
/// message defined in `proto/uuid_wire/field/v1/uuid.proto`.
///
/// The `value` field must carry exactly [`WIRE_UUID_LEN`] bytes in
/// the layout described in the [`wire`] module documentation. The
/// Protobuf default for this message (an empty `value`) is *not* a
/// valid UUID. When the enclosing message omits a field of this type,
/// substitute [`default_value`] instead of converting the default
/// message.
///
/// [`WIRE_UUID_LEN`]: crate::wire::WIRE_UUID_LEN
/// [`wire`]: crate::wire
/// [`default_value`]: crate::wire::default_value
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Uuid {
    /// Wire representation of the UUID.
    #[prost(bytes = "bytes", tag = "1")]
    pub value: Bytes,
}

impl From<uuid::Uuid> for Uuid {
    fn from(value: uuid::Uuid) -> Uuid {
        Uuid {
            value: wire::encode(&value),
        }
    }
}

impl TryFrom<Uuid> for uuid::Uuid {
    type Error = UuidWireError;

    fn try_from(value: Uuid) -> Result<uuid::Uuid, UuidWireError> {
        wire::decode(&value.value)
    }
}

impl TryFrom<&Uuid> for uuid::Uuid {
    type Error = UuidWireError;

    fn try_from(value: &Uuid) -> Result<uuid::Uuid, UuidWireError> {
        wire::decode(&value.value)
    }
}
