//! # Error Types
//!
//! Failure taxonomy for packet decoding.
//!
//! Encoding never fails: given well-typed fields it always produces bytes.
//! Decoding is all-or-nothing — any structural violation in the input buffer
//! is reported as one specific [`DecodeError`] variant and no partial packet
//! is ever returned. Recovery policy (drop the packet, tear down the session,
//! log and continue) belongs to the session/transport layers, not here.
//!
//! All errors implement `std::error::Error` for interoperability.

use crate::core::packet::MessageType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by [`Packet::decode`](crate::core::packet::Packet::decode).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeError {
    /// Buffer shorter than the header or the variant's fixed payload.
    #[error("packet too short: need {needed} bytes, got {got}")]
    TooShort { needed: usize, got: usize },

    /// A fixed-size packet (SYN, FIN) carried bytes past its payload.
    #[error("{extra} trailing byte(s) after {ty} packet")]
    TrailingData { ty: MessageType, extra: usize },

    /// The type byte matches none of the known variants.
    #[error("unknown message type: {0:#04x}")]
    UnknownMessageType(u8),

    /// The type byte is STRAIGHTUP, whose payload format is unspecified.
    #[error("STRAIGHTUP packets are not implemented")]
    NotImplemented,
}

/// Type alias for Results using DecodeError
pub type Result<T> = std::result::Result<T, DecodeError>;
