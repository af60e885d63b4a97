mod helpers;

use helpers::QueryBuilder;
use stub_dns_domain::{Header, Opcode, ResponseCode, WireError, HEADER_LEN};

#[test]
fn test_decode_id_is_big_endian() {
    let buf = QueryBuilder::new().id(1234).header_bytes();
    let header = Header::decode(&buf).unwrap();
    assert_eq!(header.id, 1234);
    assert_eq!(&buf[0..2], &[0x04, 0xD2]);
}

#[test]
fn test_decode_qr_bit_sets_byte_two_bit_seven_on_encode() {
    let buf = QueryBuilder::new().id(1234).flags(0x80, 0x00).header_bytes();
    let header = Header::decode(&buf).unwrap();

    assert!(header.qr);
    let encoded = header.encode();
    assert_eq!(encoded[2] & 0x80, 0x80);
    assert_eq!(u16::from_be_bytes([encoded[0], encoded[1]]), 1234);
}

#[test]
fn test_decode_query_has_qr_clear() {
    let buf = QueryBuilder::new().flags(0x01, 0x00).header_bytes();
    let header = Header::decode(&buf).unwrap();
    assert!(!header.qr);
    assert!(header.rd);
}

#[test]
fn test_decode_extracts_every_flag_field() {
    // QR=1 OPCODE=2 AA=1 TC=0 RD=1 | RA=1 Z=5 RCODE=3
    let buf = QueryBuilder::new()
        .flags(0b1_0010_1_0_1, 0b1_101_0011)
        .counts(1, 2, 3, 4)
        .header_bytes();
    let header = Header::decode(&buf).unwrap();

    assert!(header.qr);
    assert_eq!(header.opcode, Opcode::Status);
    assert!(header.aa);
    assert!(!header.tc);
    assert!(header.rd);
    assert!(header.ra);
    assert_eq!(header.z, 5);
    assert_eq!(header.rcode, ResponseCode::NxDomain);
    assert_eq!(header.qdcount, 1);
    assert_eq!(header.ancount, 2);
    assert_eq!(header.nscount, 3);
    assert_eq!(header.arcount, 4);
}

#[test]
fn test_decode_then_encode_preserves_all_bytes() {
    let buf = QueryBuilder::new()
        .id(0xBEEF)
        .flags(0b0_0101_0_1_0, 0b0_010_0101)
        .counts(1, 0, 7, 1)
        .header_bytes();
    let header = Header::decode(&buf).unwrap();
    assert_eq!(header.encode().to_vec(), buf);
}

#[test]
fn test_decode_ignores_bytes_after_header() {
    let packet = QueryBuilder::new().id(7).build();
    assert!(packet.len() > HEADER_LEN);
    let header = Header::decode(&packet).unwrap();
    assert_eq!(header.id, 7);
}

#[test]
fn test_decode_short_packet_is_truncated() {
    let buf = [0x04, 0xD2, 0x80, 0x00, 0x00];
    let result = Header::decode(&buf);
    assert_eq!(
        result,
        Err(WireError::TruncatedInput {
            section: "header",
            needed: 12,
            actual: 5,
        })
    );
}

#[test]
fn test_decode_empty_packet_is_truncated() {
    assert!(matches!(
        Header::decode(&[]),
        Err(WireError::TruncatedInput { actual: 0, .. })
    ));
}

#[test]
fn test_encode_is_always_twelve_bytes() {
    let header = Header::default();
    assert_eq!(header.encode().len(), HEADER_LEN);
    assert_eq!(header.encode(), [0u8; 12]);
}

#[test]
fn test_encode_masks_out_of_range_fields() {
    let header = Header {
        z: 0xFF,
        opcode: Opcode::Other(0xFF),
        rcode: ResponseCode::Other(0xFF),
        ..Header::default()
    };
    let encoded = header.encode();
    assert_eq!(encoded[2], 0b0_1111_0_0_0);
    assert_eq!(encoded[3], 0b0_111_1111);
}

#[test]
fn test_flags_word_matches_bytes_two_and_three() {
    let header = Header {
        qr: true,
        rd: true,
        ra: true,
        ..Header::default()
    };
    assert_eq!(header.flags(), 0x8180);
}

#[test]
fn test_opcode_and_rcode_round_trip_through_u8() {
    for value in 0..16u8 {
        assert_eq!(Opcode::from_u8(value).to_u8(), value);
        assert_eq!(ResponseCode::from_u8(value).to_u8(), value);
    }
    assert_eq!(Opcode::Query.to_string(), "QUERY");
    assert_eq!(ResponseCode::Other(9).to_string(), "RCODE9");
}
