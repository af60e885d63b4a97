use super::opcode::{Opcode, ResponseCode};
use crate::errors::WireError;

/// Size of the fixed DNS header on the wire.
pub const HEADER_LEN: usize = 12;

const QR_BIT: u8 = 0x80;
const AA_BIT: u8 = 0x04;
const TC_BIT: u8 = 0x02;
const RD_BIT: u8 = 0x01;
const RA_BIT: u8 = 0x80;

/// The 12-byte message header (RFC 1035 §4.1.1).
///
/// Byte 2 carries `QR | OPCODE(4) | AA | TC | RD` from the most significant bit
/// down; byte 3 carries `RA | Z(3) | RCODE(4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    pub opcode: Opcode,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub rcode: ResponseCode,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Decodes the header from the first 12 bytes of `buf`. Trailing bytes are ignored.
    pub fn decode(buf: &[u8]) -> Result<Self, WireError> {
        if buf.len() < HEADER_LEN {
            return Err(WireError::TruncatedInput {
                section: "header",
                needed: HEADER_LEN,
                actual: buf.len(),
            });
        }

        let flags_hi = buf[2];
        let flags_lo = buf[3];

        Ok(Self {
            id: u16::from_be_bytes([buf[0], buf[1]]),
            qr: flags_hi & QR_BIT != 0,
            opcode: Opcode::from_u8((flags_hi >> 3) & 0x0F),
            aa: flags_hi & AA_BIT != 0,
            tc: flags_hi & TC_BIT != 0,
            rd: flags_hi & RD_BIT != 0,
            ra: flags_lo & RA_BIT != 0,
            z: (flags_lo >> 4) & 0x07,
            rcode: ResponseCode::from_u8(flags_lo & 0x0F),
            qdcount: u16::from_be_bytes([buf[4], buf[5]]),
            ancount: u16::from_be_bytes([buf[6], buf[7]]),
            nscount: u16::from_be_bytes([buf[8], buf[9]]),
            arcount: u16::from_be_bytes([buf[10], buf[11]]),
        })
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];

        buf[0..2].copy_from_slice(&self.id.to_be_bytes());

        let mut flags_hi = (self.opcode.to_u8() & 0x0F) << 3;
        if self.qr {
            flags_hi |= QR_BIT;
        }
        if self.aa {
            flags_hi |= AA_BIT;
        }
        if self.tc {
            flags_hi |= TC_BIT;
        }
        if self.rd {
            flags_hi |= RD_BIT;
        }
        buf[2] = flags_hi;

        let mut flags_lo = ((self.z & 0x07) << 4) | (self.rcode.to_u8() & 0x0F);
        if self.ra {
            flags_lo |= RA_BIT;
        }
        buf[3] = flags_lo;

        buf[4..6].copy_from_slice(&self.qdcount.to_be_bytes());
        buf[6..8].copy_from_slice(&self.ancount.to_be_bytes());
        buf[8..10].copy_from_slice(&self.nscount.to_be_bytes());
        buf[10..12].copy_from_slice(&self.arcount.to_be_bytes());

        buf
    }

    /// The 16-bit flags word as it appears in bytes 2-3.
    pub fn flags(&self) -> u16 {
        let encoded = self.encode();
        u16::from_be_bytes([encoded[2], encoded[3]])
    }
}
