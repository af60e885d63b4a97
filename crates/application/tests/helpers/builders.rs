#![allow(dead_code)]

/// Raw query datagram: header with the given ID and QR bit, one question.
pub fn build_query(id: u16, qr: bool, domain: &str, qtype: u16) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes());
    buf.push(if qr { 0x81 } else { 0x01 });
    buf.push(0x00);
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&question_bytes(domain, qtype));
    buf
}

pub fn question_bytes(domain: &str, qtype: u16) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in domain.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00);
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x01]);
    buf
}
