#![warn(
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unreachable_pub
)]

//! Fixed-size UUID wire field codec
//!
//! This crate provides a codec for carrying a 128-bit UUID inside a
//! schema driven serialization format, such as a Protobuf message.
//!
//! The wire representation of a UUID is exactly 16 bytes. The bytes
//! are laid out in the conventional UUID field order, with each field
//! in big-endian byte order and no separators between fields. See the
//! [`wire`] module documentation for the exact layout.
//!
//! The [`wire`] module provides the codec itself, operating on caller
//! owned byte spans. The [`field::v1`] module provides a Protobuf
//! message wrapping the wire representation, together with
//! conversions to and from [`Uuid`].
//!
//! Framing is the responsibility of the enclosing message. The codec
//! assumes the caller has already isolated the 16 byte span, and it
//! neither reads nor writes any tag or length prefix.
//!
//! [`Uuid`]: uuid::Uuid

pub mod error;
pub mod field;
pub mod wire;

pub use crate::error::UuidWireError;
