//! # Core Protocol Components
//!
//! Low-level packet handling and binary wire format.
//!
//! This module is the foundation of the protocol: it defines how a control
//! packet is laid out on the wire, how typed fields are encoded into bytes,
//! and how inbound bytes are parsed back into a validated [`packet::Packet`].
//!
//! ## Wire Format
//! ```text
//! [Type(1)] [PacketId(2)] [SessionId(2)] [Variant payload(N)]
//! ```
//! All multi-byte integers are big-endian (network byte order).
//!
//! ## Validation
//! - Fixed-size variants (SYN, FIN) reject trailing bytes
//! - Unknown and reserved type bytes are hard errors
//! - Decoding is all-or-nothing; no partial packets

pub mod packet;
