use super::header::HEADER_LEN;
use super::name::DomainName;
use crate::errors::WireError;

/// Smallest datagram that can hold a question: the header plus one length byte.
pub const MIN_QUESTION_PACKET_LEN: usize = HEADER_LEN + 1;

/// A single entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: DomainName, qtype: u16, qclass: u16) -> Self {
        Self {
            name,
            qtype,
            qclass,
        }
    }

    /// Decodes the first question of a datagram, which starts right after the header.
    pub fn decode(packet: &[u8]) -> Result<Self, WireError> {
        if packet.len() < MIN_QUESTION_PACKET_LEN {
            return Err(WireError::TruncatedInput {
                section: "question",
                needed: MIN_QUESTION_PACKET_LEN,
                actual: packet.len(),
            });
        }

        Self::decode_at(packet, HEADER_LEN).map(|(question, _)| question)
    }

    /// Decodes a question starting at `offset` and returns it with the offset
    /// of the first byte after its class field.
    pub fn decode_at(packet: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let Some(&first_len) = packet.get(offset) else {
            return Err(WireError::TruncatedInput {
                section: "question",
                needed: offset.saturating_add(1),
                actual: packet.len(),
            });
        };
        if first_len == 0 {
            return Err(WireError::EmptyDomain);
        }

        let (name, pos) = DomainName::read(packet, offset)?;

        if pos + 4 > packet.len() {
            return Err(WireError::MalformedQuestion(format!(
                "type and class need 4 bytes after the name, {} available",
                packet.len() - pos
            )));
        }

        let qtype = u16::from_be_bytes([packet[pos], packet[pos + 1]]);
        let qclass = u16::from_be_bytes([packet[pos + 2], packet[pos + 3]]);

        Ok((Self::new(name, qtype, qclass), pos + 4))
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.wire_len());
        self.encode_into(&mut buf);
        buf
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.name.as_bytes());
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
    }

    pub fn wire_len(&self) -> usize {
        self.name.wire_len() + 4
    }
}
