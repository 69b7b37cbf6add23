use cinder_dns_domain::wire::name::{decode_name, encode_name};
use cinder_dns_domain::wire::MAX_POINTER_HOPS;
use cinder_dns_domain::WireError;

#[test]
fn test_pointer_decodes_same_as_inlined_labels() {
    // "mail.example.com" written twice: once inline, once as
    // "mail" + pointer to the "example.com" suffix.
    let mut inline = Vec::new();
    encode_name("mail.example.com", &mut inline).unwrap();

    let mut compressed = Vec::new();
    encode_name("example.com", &mut compressed).unwrap(); // suffix at offset 0
    let pointer_start = compressed.len();
    compressed.extend_from_slice(b"\x04mail\xC0\x00");

    let (inline_name, _) = decode_name(&inline, 0).unwrap();
    let (compressed_name, end) = decode_name(&compressed, pointer_start).unwrap();
    assert_eq!(compressed_name, inline_name);
    assert_eq!(end, compressed.len());
}

#[test]
fn test_pointer_chain_within_hop_budget() {
    // a.b.c where each suffix is reached through one more pointer.
    let mut buf = Vec::new();
    encode_name("c", &mut buf).unwrap(); // offset 0
    let b_offset = buf.len();
    buf.extend_from_slice(b"\x01b\xC0\x00");
    let a_offset = buf.len();
    buf.extend_from_slice(b"\x01a");
    buf.push(0xC0);
    buf.push(b_offset as u8);

    let (name, end) = decode_name(&buf, a_offset).unwrap();
    assert_eq!(name, "a.b.c");
    assert_eq!(end, buf.len());
}

#[test]
fn test_forward_pointer_is_malformed() {
    let buf = b"\xC0\x05\x00\x00\x00\x03abc\x00";
    assert!(matches!(
        decode_name(buf, 0),
        Err(WireError::BadPointer { at: 0, target: 5 })
    ));
}

#[test]
fn test_self_pointer_is_malformed() {
    let buf = b"\x00\x00\x00\x00\xC0\x04";
    assert!(matches!(
        decode_name(buf, 4),
        Err(WireError::BadPointer { at: 4, target: 4 })
    ));
}

#[test]
fn test_pointer_chain_over_hop_budget_is_malformed() {
    // A ladder of pointers, each targeting the previous one. Every hop
    // moves strictly backwards, so only the hop budget can stop it.
    let mut buf = Vec::new();
    encode_name("a", &mut buf).unwrap(); // 3 bytes at offset 0
    for hop in 0..=MAX_POINTER_HOPS {
        let target = if hop == 0 { 0 } else { 3 + 2 * (hop - 1) };
        buf.push(0xC0);
        buf.push(target as u8);
    }
    let last_pointer = buf.len() - 2;

    assert_eq!(
        decode_name(&buf, last_pointer),
        Err(WireError::PointerLoop {
            max_hops: MAX_POINTER_HOPS
        })
    );
}

#[test]
fn test_truncated_pointer_is_malformed() {
    // Pointer high byte present, low byte missing.
    let buf = b"\x00\xC0";
    assert!(matches!(
        decode_name(buf, 1),
        Err(WireError::UnexpectedEnd { .. })
    ));
}

#[test]
fn test_name_over_255_bytes_is_malformed() {
    let mut buf = Vec::new();
    for _ in 0..5 {
        buf.push(63);
        buf.extend_from_slice(&[b'x'; 63]);
    }
    buf.push(0);
    assert_eq!(decode_name(&buf, 0), Err(WireError::NameTooLong));
}

#[test]
fn test_extended_label_type_is_malformed() {
    // 0b01 label type (EDNS extended labels), unused here.
    let buf = b"\x40abc\x00";
    assert!(matches!(
        decode_name(buf, 0),
        Err(WireError::UnsupportedLabelType { offset: 0, .. })
    ));
}
