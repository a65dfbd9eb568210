use crate::*;
use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

#[test]
fn ucs2buf_new() {
    assert_eq!(Ucs2Buf::new().units, Vec::<u16>::new());
    assert!(Ucs2Buf::with_capacity(4).capacity() >= 4);
}

#[test]
fn ucs2buf_from_str() {
    assert_eq!(Ucs2Buf::from("").units, Vec::<u16>::new());
    assert_eq!(Ucs2Buf::from("aé €").units, [0x61, 0xE9, 0x20, 0x20AC]);
    assert_eq!(Ucs2Buf::from("a💩").units, [0x61, UNREPRESENTABLE]);
}

#[test]
fn ucs2buf_from_units() {
    assert_eq!(Ucs2Buf::from(vec![1u16, 2]).units, [1, 2]);
    assert_eq!(Ucs2Buf::from(&[3u16, 4][..]).units, [3, 4]);
    assert_eq!(Vec::from(Ucs2Buf::from(vec![5u16])), [5]);
}

#[test]
fn ucs2buf_from_be_bytes() {
    assert_eq!(Ucs2Buf::from_be_bytes(b"").unwrap().units, Vec::<u16>::new());
    assert_eq!(
        Ucs2Buf::from_be_bytes(b"\x00\x41\x20\xAC").unwrap().units,
        [0x41, 0x20AC]
    );
    assert_eq!(
        Ucs2Buf::from_be_bytes(b"\x00\x41\x20"),
        Err(Error::OddLength { len: 3 })
    );
}

#[test]
fn ucs2buf_be_bytes_round_trip() {
    let string = Ucs2Buf::from("Grüße, 世界");
    let bytes: Vec<u8> = string.to_be_bytes().collect();
    assert_eq!(Ucs2Buf::from_be_bytes(&bytes).unwrap(), string);
}

#[test]
fn ucs2buf_push() {
    let mut string = Ucs2Buf::new();
    string.push(0x61);
    string.push(0x20AC);
    assert_eq!(string.units, [0x61, 0x20AC]);
}

#[test]
fn ucs2buf_push_ucs2() {
    let mut string = Ucs2Buf::from("ab");
    string.push_ucs2(Ucs2::new(&[0x63u16, 0x64]));
    assert_eq!(string.units, [0x61, 0x62, 0x63, 0x64]);
    string.push_ucs2(Ucs2::new(&[0u16; 0]));
    assert_eq!(string.len(), 4);
}

#[test]
fn ucs2buf_push_utf8() {
    let mut string = Ucs2Buf::from("a");
    string.push_utf8("é".as_bytes());
    string.push_utf8(b"\x80b\0c");
    assert_eq!(string.units, [0x61, 0xE9, INVALID, 0x62]);
}

#[test]
fn ucs2buf_copy_prefix() {
    let string = Ucs2Buf::from("hello");
    let copy = string.prefix(3).to_owned();
    assert_eq!(copy.units, [0x68, 0x65, 0x6C]);
    assert_eq!(string.prefix(9).to_owned(), string);
}

#[test]
fn ucs2buf_truncate_and_clear() {
    let mut string = Ucs2Buf::from("hello");
    string.truncate(2);
    assert_eq!(string.units, [0x68, 0x65]);
    string.truncate(10);
    assert_eq!(string.len(), 2);
    string.clear();
    assert!(string.is_empty());
}

#[test]
fn ucs2buf_precompose() {
    let mut string = Ucs2Buf::from("A\u{300}e\u{301}x");
    string.precompose();
    assert_eq!(string.units, [0xC0, 0xE9, 0x78]);

    let mut string = Ucs2Buf::from(vec![0x41u16, 0x30A, 0x301]);
    string.precompose();
    assert_eq!(string.units, [0xC5, 0x301]);

    let mut string = Ucs2Buf::new();
    string.precompose();
    assert!(string.is_empty());
}

#[test]
fn ucs2buf_precompose_matches_iterator() {
    let units = vec![0x304Bu16, 0x3099, 0x61, 0x41, 0x41, 0x300, 0x30DB, 0x309A, 0x300];
    let expected: Vec<u16> = Ucs2::new(&units[..]).precomposed().collect();
    let mut string = Ucs2Buf::from(units);
    string.precompose();
    assert_eq!(string.units, expected);
    assert_eq!(expected, [0x304C, 0x61, 0x41, 0xC0, 0x30DD, 0x300]);
}

#[test]
fn ucs2buf_collect() {
    let string: Ucs2Buf = [0x61u16, 0x62].iter().copied().collect();
    assert_eq!(string.units, [0x61, 0x62]);

    let parts = [Ucs2::new(&[0x61u16]), Ucs2::new(&[0x62u16, 0x63])];
    let string: Ucs2Buf = parts.iter().copied().collect();
    assert_eq!(string.units, [0x61, 0x62, 0x63]);

    let mut string = Ucs2Buf::new();
    string.extend(&[0x64u16, 0x65]);
    assert_eq!(string.units, [0x64, 0x65]);
}

#[test]
fn ucs2buf_box_round_trip() {
    let string = Ucs2Buf::from("boxed");
    let boxed = string.clone().into_box();
    assert_eq!(&*boxed, string.as_ucs2());
    assert_eq!(Ucs2Buf::from_box(boxed), string);
}

#[test]
fn ucs2buf_deref_mut() {
    let mut string = Ucs2Buf::from("abc");
    string.units_mut()[1] = 0x42;
    assert_eq!(string.units, [0x61, 0x42, 0x63]);
}

#[test]
fn ucs2buf_eq_slice() {
    let string = Ucs2Buf::from("ab");
    assert_eq!(string, [0x61, 0x62]);
    assert!(string == *Ucs2::new(&[0x61u16, 0x62]));
}

#[test]
fn ucs2buf_fmt() {
    let string = Ucs2Buf::from("aé\n");
    assert_eq!(format!("{:?}", string), "u\"aé\\n\"");
    assert_eq!(string.to_string(), "aé\n");
}

#[test]
fn decode_encode_pipeline() {
    let decoded = decode_utf8("Cafe\u{301} a\u{300} la carte".as_bytes()).unwrap();
    assert_eq!(decoded.len(), 17);

    let mut composed = decoded.clone();
    composed.precompose();
    assert_eq!(composed.len(), 15);

    let bytes = encode_utf8(&composed).unwrap();
    assert_eq!(bytes, "Café à la carte".as_bytes());
}
