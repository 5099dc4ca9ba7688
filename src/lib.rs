//! # Tunnel Protocol
//!
//! Wire-format core for the control packets of a session-oriented tunneling
//! protocol.
//!
//! This crate owns exactly one concern: the binary layout of control packets.
//! [`core::packet::Packet`] is the typed unit; encoding builds ready-to-send
//! byte buffers from typed fields, decoding parses a complete inbound buffer
//! into a validated packet or a specific [`error::DecodeError`]. Everything
//! around it — transport delivery, session bookkeeping, encryption — lives in
//! collaborating layers.
//!
//! Every operation is a pure function over its own inputs: no I/O, no shared
//! state, nothing async. Calls are safe from any number of threads without
//! synchronization.
//!
//! ## Example
//! ```rust
//! use tunnel_protocol::{encode_msg, DecodeError, Packet};
//!
//! let wire = encode_msg(0x1234, 0xABCD, 1, 2, b"hi");
//! let packet = Packet::decode(&wire)?;
//! assert_eq!(packet.session_id(), 0xABCD);
//!
//! // Malformed input is a typed, all-or-nothing failure.
//! assert!(matches!(
//!     Packet::decode(&[0x03, 0, 0, 0, 0]),
//!     Err(DecodeError::UnknownMessageType(0x03))
//! ));
//! # Ok::<(), DecodeError>(())
//! ```

pub mod core;
pub mod error;

pub use crate::core::packet::{
    encode_fin, encode_msg, encode_syn, MessageType, Packet, FIN_HEADER_SIZE, HEADER_SIZE,
    MSG_HEADER_SIZE, SYN_HEADER_SIZE,
};
pub use crate::error::{DecodeError, Result};
