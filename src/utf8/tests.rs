use super::*;
use alloc::vec;
use alloc::vec::Vec;

fn decode(bytes: &[u8]) -> Vec<u16> {
    decode_utf8(bytes).unwrap().into_units()
}

fn encode(units: &[u16]) -> Vec<u8> {
    encode_utf8(Ucs2::new(units)).unwrap()
}

#[test]
fn char_length_by_lead_byte() {
    assert_eq!(char_length(b"a", 0), 1);
    assert_eq!(char_length("é".as_bytes(), 0), 2);
    assert_eq!(char_length("€".as_bytes(), 0), 3);
    assert_eq!(char_length("😀".as_bytes(), 0), 4);
}

#[test]
fn char_length_stops() {
    assert_eq!(char_length(b"", 0), 0);
    assert_eq!(char_length(b"\0", 0), 0);
    assert_eq!(char_length(b"a", 1), 0);
    assert_eq!(char_length(b"\x80", 0), 0);
    assert_eq!(char_length(b"\xBF", 0), 0);
}

#[test]
fn char_length_clamps_long_leads() {
    assert_eq!(char_length(b"\xF8", 0), 4);
    assert_eq!(char_length(b"\xFC", 0), 4);
    assert_eq!(char_length(b"\xFF", 0), 4);
}

#[test]
fn char_length_at_offset() {
    let s = "aé€".as_bytes();
    assert_eq!(char_length(s, 0), 1);
    assert_eq!(char_length(s, 1), 2);
    assert_eq!(char_length(s, 2), 0);
    assert_eq!(char_length(s, 3), 3);
}

#[test]
fn char_count_ascii() {
    assert_eq!(char_count(b""), 0);
    assert_eq!(char_count(b"hello"), 5);
}

#[test]
fn char_count_multibyte() {
    assert_eq!(char_count("aé€😀".as_bytes()), 4);
}

#[test]
fn char_count_stops_at_terminator() {
    assert_eq!(char_count(b"ab\0cd"), 2);
    assert_eq!(char_count(b"\0"), 0);
}

#[test]
fn char_count_stops_at_stray_continuation() {
    assert_eq!(char_count(b"a\x80b"), 1);
    assert_eq!(char_count(b"\x80"), 0);
}

#[test]
fn char_count_truncated_sequence() {
    assert_eq!(char_count(b"\xE2\x82"), 1);
    assert_eq!(char_count(b"a\xF0"), 2);
}

#[test]
fn char_count_truncated_at_terminator() {
    assert_eq!(char_count(b"\xC3\0ABCD"), 1);
    assert_eq!(char_count(b"\xE2\0AB"), 1);
    assert_eq!(char_count(b"\xE2\x82\0\xACAB"), 1);
    assert_eq!(char_count(b"a\xF0\x9F\0bcd"), 2);
    assert_eq!(char_count(b"\xC3\0ABCD"), decode(b"\xC3\0ABCD").len());
    assert_eq!(char_count(b"\xE2\0AB"), decode(b"\xE2\0AB").len());
}

#[test]
fn decode_empty() {
    assert!(decode(b"").is_empty());
    assert!(decode(b"\0").is_empty());
    assert!(decode(b"\0abc").is_empty());
}

#[test]
fn decode_ascii() {
    for b in 1..=0x7Fu8 {
        assert_eq!(decode(&[b, 0]), [b as u16]);
    }
    assert_eq!(decode(b"hello"), [0x68, 0x65, 0x6C, 0x6C, 0x6F]);
}

#[test]
fn decode_multibyte() {
    assert_eq!(decode("é".as_bytes()), [0xE9]);
    assert_eq!(decode("€".as_bytes()), [0x20AC]);
    assert_eq!(decode("aé 香蕉".as_bytes()), [0x61, 0xE9, 0x20, 0x9999, 0x8549]);
    assert_eq!(decode("\u{FFFF}".as_bytes()), [0xFFFF]);
}

#[test]
fn decode_surrogate_units() {
    assert_eq!(decode(b"\xED\xA0\x80"), [0xD800]);
    assert_eq!(decode(b"\xED\xBF\xBF"), [0xDFFF]);
}

#[test]
fn decode_unrepresentable() {
    assert_eq!(decode("a😀b".as_bytes()), [0x61, UNREPRESENTABLE, 0x62]);
    assert_eq!(decode(b"\xFFabcd"), [UNREPRESENTABLE, 0x64]);
}

#[test]
fn decode_legacy_long_sequences() {
    // Five and six byte forms consume four bytes; the rest are stray.
    assert_eq!(
        decode(b"\xF8\x88\x80\x80\x80"),
        [UNREPRESENTABLE, INVALID]
    );
    assert_eq!(
        decode(b"\xFC\x80\x80\x80\x80\x80"),
        [UNREPRESENTABLE, INVALID, INVALID]
    );
    assert_eq!(char_count(b"\xFC\x80\x80\x80\x80\x80"), 1);
}

#[test]
fn decode_overlong() {
    assert_eq!(decode(b"\xC0\x80"), [INVALID]);
    assert_eq!(decode(b"\xC1\xBF"), [INVALID]);
    assert_eq!(decode(b"\xE0\x80\xAF"), [INVALID]);
    assert_eq!(decode(b"\xE0\x9F\xBF"), [INVALID]);
    assert_eq!(decode(b"\xE0\xA0\x80"), [0x800]);
}

#[test]
fn decode_bad_continuation_consumes_sequence() {
    assert_eq!(decode(b"\xC3\x41B"), [INVALID, 0x42]);
    assert_eq!(decode(b"\xE2\x82\x41B"), [INVALID, 0x42]);
    assert_eq!(decode(b"\xE2\x41\xACB"), [INVALID, 0x42]);
}

#[test]
fn decode_stray_continuation() {
    assert_eq!(decode(b"\x80a"), [INVALID, 0x61]);
    assert_eq!(decode(b"a\xBF\xBFb"), [0x61, INVALID, INVALID, 0x62]);
}

#[test]
fn decode_truncated() {
    assert_eq!(decode(b"\xE2\x82"), [INVALID]);
    assert_eq!(decode(b"a\xC3"), [0x61, INVALID]);
    assert_eq!(decode(b"\xE2\x82\0\xAC"), [INVALID]);
    assert_eq!(decode(b"\xF0\x9F"), [UNREPRESENTABLE]);
}

#[test]
fn decoder_sizing_matches_output() {
    let inputs: [&[u8]; 5] = [
        b"",
        b"plain",
        "aé€😀".as_bytes(),
        b"\x80\x80\xC3",
        b"\xFF\xFE\xE2\x82",
    ];
    for input in inputs {
        let decoder = DecodeUtf8::new(input);
        assert_eq!(decoder.remaining_units(), decoder.count());
    }
}

#[test]
fn until_nul_cuts_at_first_zero() {
    assert_eq!(until_nul(b""), b"");
    assert_eq!(until_nul(b"abc"), b"abc");
    assert_eq!(until_nul(b"ab\0c\0"), b"ab");
    assert_eq!(until_nul(b"\0abc"), b"");
}

#[test]
fn decoder_as_slice() {
    let mut decoder = DecodeUtf8::new("éa\0b".as_bytes());
    assert_eq!(decoder.as_slice(), "éa".as_bytes());
    assert_eq!(decoder.next(), Some(0xE9));
    assert_eq!(decoder.as_slice(), b"a");
    assert_eq!(decoder.next(), Some(0x61));
    assert_eq!(decoder.next(), None);
    assert_eq!(decoder.next(), None);
}

#[test]
fn encode_ascii() {
    for b in 1..=0x7Fu8 {
        assert_eq!(encode(&[b as u16, 0]), [b]);
    }
}

#[test]
fn encode_multibyte() {
    assert_eq!(encode(&[0xE9]), "é".as_bytes());
    assert_eq!(encode(&[0x7FF]), b"\xDF\xBF");
    assert_eq!(encode(&[0x800]), b"\xE0\xA0\x80");
    assert_eq!(encode(&[0x20AC]), "€".as_bytes());
    assert_eq!(encode(&[0xFFFF]), b"\xEF\xBF\xBF");
    assert_eq!(encode(&[0xD800]), b"\xED\xA0\x80");
}

#[test]
fn encode_stops_at_zero_unit() {
    assert_eq!(encode(&[]), b"");
    assert_eq!(encode(&[0]), b"");
    assert_eq!(encode(&[0x61, 0, 0x62]), b"a");
}

#[test]
fn encode_iterator_size_hint() {
    let units = Ucs2::new(&[0x61u16, 0xE9, 0x20AC]);
    let mut bytes = units.encode_utf8();
    assert_eq!(bytes.size_hint(), (3, Some(9)));
    bytes.next();
    bytes.next();
    assert_eq!(bytes.size_hint(), (2, Some(4)));
    assert_eq!(bytes.collect::<Vec<_>>(), vec![0xA9, 0xE2, 0x82, 0xAC]);
}

#[test]
fn round_trip_two_byte_range() {
    for v in 0x80..0x800u16 {
        assert_eq!(decode(&encode(&[v])), [v], "U+{:04X}", v);
    }
}

#[test]
fn round_trip_three_byte_range() {
    for v in 0x800..=0xFFFFu16 {
        assert_eq!(decode(&encode(&[v])), [v], "U+{:04X}", v);
    }
}

#[test]
fn encode_unit_lengths() {
    let mut buf = [0; 3];
    assert_eq!(encode_unit(0x7F, &mut buf), [0x7F]);
    assert_eq!(encode_unit(0x80, &mut buf), [0xC2, 0x80]);
    assert_eq!(encode_unit(0xFFFF, &mut buf), [0xEF, 0xBF, 0xBF]);
}
