//! # Control Packets
//!
//! Binary codec for the protocol's control packets.
//!
//! A packet is a 5-byte header (type byte, packet id, session id) followed
//! by a variant-specific payload. [`Packet`] is a tagged union with one
//! constructor per message type, so a field can never be read on the wrong
//! variant. [`Packet::decode`] validates structure exactly: SYN and FIN must
//! consume their fixed payload with nothing left over, while MSG takes every
//! remaining byte as opaque data.
//!
//! The transport layer hands `decode` one complete, already-delimited buffer
//! per packet; framing is its job, not this codec's. The MSG data length is
//! deliberately implicit (no length prefix exists on the wire), so exact
//! framing upstream is part of the contract.

use crate::error::{DecodeError, Result};
use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Fixed header: 1-byte type + 2-byte packet id + 2-byte session id.
pub const HEADER_SIZE: usize = 5;

/// Total size of a SYN packet: header + seq + options.
pub const SYN_HEADER_SIZE: usize = HEADER_SIZE + 4;

/// Size of a MSG packet before its data: header + seq + ack.
pub const MSG_HEADER_SIZE: usize = HEADER_SIZE + 4;

/// Total size of a FIN packet: header only.
pub const FIN_HEADER_SIZE: usize = HEADER_SIZE;

/// Wire-level message type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MessageType {
    /// Session initiation
    Syn = 0x00,
    /// Data carrier
    Msg = 0x01,
    /// Session termination
    Fin = 0x02,
    /// Reserved, payload format unspecified
    Straightup = 0xFF,
}

impl MessageType {
    /// Get the type identifier byte for the wire header
    pub fn wire_byte(self) -> u8 {
        self as u8
    }

    /// Detect message type from the header's type byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(MessageType::Syn),
            0x01 => Some(MessageType::Msg),
            0x02 => Some(MessageType::Fin),
            0xFF => Some(MessageType::Straightup),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            MessageType::Syn => "SYN",
            MessageType::Msg => "MSG",
            MessageType::Fin => "FIN",
            MessageType::Straightup => "STRAIGHTUP",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded (or to-be-encoded) control packet.
///
/// The variant determines exhaustively which payload fields exist. There is
/// no `Straightup` variant: that type is a recognized wire tag but cannot be
/// constructed or encoded, and decoding it fails with
/// [`DecodeError::NotImplemented`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Packet {
    /// Session initiation: initial sequence number and option flags.
    Syn {
        packet_id: u16,
        session_id: u16,
        seq: u16,
        options: u16,
    },
    /// Data carrier: sequence/acknowledgment numbers and an opaque payload.
    Msg {
        packet_id: u16,
        session_id: u16,
        seq: u16,
        ack: u16,
        data: Vec<u8>,
    },
    /// Session termination: header only.
    Fin { packet_id: u16, session_id: u16 },
}

impl Packet {
    /// Parse one complete, transport-delimited buffer into a packet.
    ///
    /// All-or-nothing: any structural violation returns a [`DecodeError`]
    /// and no partial packet. The input buffer is never mutated.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            debug!(got = bytes.len(), "buffer shorter than packet header");
            return Err(DecodeError::TooShort {
                needed: HEADER_SIZE,
                got: bytes.len(),
            });
        }

        let mut buf = bytes;
        let type_byte = buf.get_u8();
        let packet_id = buf.get_u16();
        let session_id = buf.get_u16();

        let ty = MessageType::from_byte(type_byte)
            .ok_or(DecodeError::UnknownMessageType(type_byte))?;

        let packet = match ty {
            MessageType::Syn => {
                if buf.remaining() < 4 {
                    return Err(DecodeError::TooShort {
                        needed: SYN_HEADER_SIZE,
                        got: bytes.len(),
                    });
                }
                let seq = buf.get_u16();
                let options = buf.get_u16();
                if buf.has_remaining() {
                    return Err(DecodeError::TrailingData {
                        ty,
                        extra: buf.remaining(),
                    });
                }
                Packet::Syn {
                    packet_id,
                    session_id,
                    seq,
                    options,
                }
            }
            MessageType::Msg => {
                if buf.remaining() < 4 {
                    return Err(DecodeError::TooShort {
                        needed: MSG_HEADER_SIZE,
                        got: bytes.len(),
                    });
                }
                let seq = buf.get_u16();
                let ack = buf.get_u16();
                // Everything left is the payload; length is implied by the
                // transport framing, not encoded in the packet.
                Packet::Msg {
                    packet_id,
                    session_id,
                    seq,
                    ack,
                    data: buf.to_vec(),
                }
            }
            MessageType::Fin => {
                if buf.has_remaining() {
                    return Err(DecodeError::TrailingData {
                        ty,
                        extra: buf.remaining(),
                    });
                }
                Packet::Fin {
                    packet_id,
                    session_id,
                }
            }
            MessageType::Straightup => return Err(DecodeError::NotImplemented),
        };

        trace!(packet = %packet, "decoded packet");
        Ok(packet)
    }

    /// Serialize this packet to ready-to-transmit wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            Packet::Syn {
                packet_id,
                session_id,
                seq,
                options,
            } => encode_syn(packet_id, session_id, seq, Some(options)),
            Packet::Msg {
                packet_id,
                session_id,
                seq,
                ack,
                ref data,
            } => encode_msg(packet_id, session_id, seq, ack, data),
            Packet::Fin {
                packet_id,
                session_id,
            } => encode_fin(packet_id, session_id),
        }
    }

    /// Wire tag for this packet's variant.
    pub fn message_type(&self) -> MessageType {
        match self {
            Packet::Syn { .. } => MessageType::Syn,
            Packet::Msg { .. } => MessageType::Msg,
            Packet::Fin { .. } => MessageType::Fin,
        }
    }

    /// Transport-level packet identifier, present on every variant.
    pub fn packet_id(&self) -> u16 {
        match *self {
            Packet::Syn { packet_id, .. }
            | Packet::Msg { packet_id, .. }
            | Packet::Fin { packet_id, .. } => packet_id,
        }
    }

    /// Logical session this packet belongs to, present on every variant.
    pub fn session_id(&self) -> u16 {
        match *self {
            Packet::Syn { session_id, .. }
            | Packet::Msg { session_id, .. }
            | Packet::Fin { session_id, .. } => session_id,
        }
    }
}

/// Single-line diagnostic rendering for logs; fields in hexadecimal.
/// Purely cosmetic, no bearing on wire correctness.
impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packet::Syn {
                packet_id,
                session_id,
                seq,
                options,
            } => write!(
                f,
                "[[SYN]] :: packet_id = {packet_id:04x}, session = {session_id:04x}, \
                 seq = {seq:04x}, options = {options:04x}"
            ),
            Packet::Msg {
                packet_id,
                session_id,
                seq,
                ack,
                data,
            } => write!(
                f,
                "[[MSG]] :: packet_id = {packet_id:04x}, session = {session_id:04x}, \
                 seq = {seq:04x}, ack = {ack:04x}, data = \"{}\"",
                data.escape_ascii()
            ),
            Packet::Fin {
                packet_id,
                session_id,
            } => write!(
                f,
                "[[FIN]] :: packet_id = {packet_id:04x}, session = {session_id:04x}"
            ),
        }
    }
}

/// Shared 5-byte prefix for every variant encoder. Never a complete packet
/// on its own, so it stays private.
fn encode_header(ty: MessageType, packet_id: u16, session_id: u16) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE);
    bytes.put_u8(ty.wire_byte());
    bytes.put_u16(packet_id);
    bytes.put_u16(session_id);
    bytes
}

/// Build a SYN packet: header + seq + options, 9 bytes.
///
/// `options` defaults to 0 when absent.
pub fn encode_syn(packet_id: u16, session_id: u16, seq: u16, options: Option<u16>) -> Vec<u8> {
    let mut bytes = encode_header(MessageType::Syn, packet_id, session_id);
    bytes.reserve(SYN_HEADER_SIZE - HEADER_SIZE);
    bytes.put_u16(seq);
    bytes.put_u16(options.unwrap_or(0));
    bytes
}

/// Build a MSG packet: header + seq + ack + data, 9 + data.len() bytes.
///
/// `data` is copied verbatim with no length prefix, no escaping, no
/// terminator; the receiver infers its length from the transport framing.
pub fn encode_msg(packet_id: u16, session_id: u16, seq: u16, ack: u16, data: &[u8]) -> Vec<u8> {
    let mut bytes = encode_header(MessageType::Msg, packet_id, session_id);
    bytes.reserve(MSG_HEADER_SIZE - HEADER_SIZE + data.len());
    bytes.put_u16(seq);
    bytes.put_u16(ack);
    bytes.extend_from_slice(data);
    bytes
}

/// Build a FIN packet: header only, 5 bytes.
pub fn encode_fin(packet_id: u16, session_id: u16) -> Vec<u8> {
    encode_header(MessageType::Fin, packet_id, session_id)
}
